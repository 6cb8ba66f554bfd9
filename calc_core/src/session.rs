//! # Force Session
//!
//! The `Session` is the caller-owned, ordered force collection a front-end
//! works with between calculations. It holds no global state: every call
//! takes the session explicitly.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::force::Force;
//! use calc_core::session::Session;
//!
//! let mut session = Session::new();
//! session.add(Force::polar("", 100.0, 120.0));
//! session.add(Force::polar("Cable", 80.0, 30.0));
//!
//! assert_eq!(session.forces()[0].name, "F1");
//! assert_eq!(session.forces()[1].name, "Cable");
//!
//! let resultant = session.resultant().unwrap();
//! assert!((resultant.magnitude - 128.0625).abs() < 1e-3);
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::dynamics::{resolve, BodyInput, DynamicsRecord};
use crate::errors::{CalcError, CalcResult};
use crate::force::Force;
use crate::resultant::{aggregate, ResultantRecord};

/// Ordered collection of completed forces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    forces: Vec<Force>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Session::default()
    }

    /// Label the next added force gets when it has no name (`F1`, `F2`, ...)
    pub fn next_label(&self) -> String {
        format!("F{}", self.forces.len() + 1)
    }

    /// Complete a force and append it.
    ///
    /// A blank name is replaced by [`Session::next_label`]. Returns the
    /// index the force was stored at.
    pub fn add(&mut self, mut force: Force) -> usize {
        let trimmed = force.name.trim();
        force.name = if trimmed.is_empty() {
            self.next_label()
        } else {
            trimmed.to_string()
        };
        force.complete();

        info!("added force '{}' ({} diagnostics)", force.name, force.diagnostics.len());
        self.forces.push(force);
        self.forces.len() - 1
    }

    /// Remove the force at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> CalcResult<Force> {
        if index >= self.forces.len() {
            return Err(CalcError::invalid_input(
                "index",
                index.to_string(),
                format!("Session holds {} forces", self.forces.len()),
            ));
        }
        let force = self.forces.remove(index);
        info!("removed force '{}'", force.name);
        Ok(force)
    }

    /// Discard every force
    pub fn reset(&mut self) {
        info!("session reset ({} forces discarded)", self.forces.len());
        self.forces.clear();
    }

    /// Forces in insertion order
    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    /// Mutable access for in-place completion
    pub fn forces_mut(&mut self) -> &mut [Force] {
        &mut self.forces
    }

    /// Number of forces held
    pub fn len(&self) -> usize {
        self.forces.len()
    }

    /// True when no force has been added
    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    /// Resultant of every force in the session
    pub fn resultant(&mut self) -> Option<ResultantRecord> {
        aggregate(&mut self.forces)
    }

    /// Dynamics of `body` under every force in the session
    pub fn resolve(&mut self, body: &BodyInput) -> DynamicsRecord {
        resolve(body, &mut self.forces)
    }
}

impl From<Vec<Force>> for Session {
    fn from(forces: Vec<Force>) -> Self {
        let mut session = Session::new();
        for force in forces {
            session.add(force);
        }
        session
    }
}
