//! # Scenarios
//!
//! A `Scenario` bundles a force list with optional body parameters so a
//! whole problem can be handed over as one JSON document and solved in one
//! call.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "forces": [
//!     { "name": "F1", "magnitude": 100.0, "angle": 120.0 },
//!     { "fx": 30.0, "fy": -10.0, "height": 2.0, "mass": 5.0 }
//!   ],
//!   "body": { "mass": 60.0, "desired_acceleration": 0.5 }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::scenario::Scenario;
//!
//! let scenario = Scenario::from_json(r#"{ "body": { "mass": 60.0, "desired_acceleration": 0.5 } }"#)?;
//! let report = scenario.solve();
//!
//! assert!(report.resultant.is_none());
//! let dynamics = report.dynamics.unwrap();
//! assert!((dynamics.missing_force_magnitude.unwrap() - 30.0).abs() < 1e-9);
//! # Ok::<(), calc_core::CalcError>(())
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dynamics::{BodyInput, DynamicsRecord};
use crate::errors::{CalcError, CalcResult};
use crate::force::Force;
use crate::plot::VectorPlot;
use crate::resultant::ResultantRecord;
use crate::session::Session;

/// A force system plus optional body parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Forces in the order given
    #[serde(default)]
    pub forces: Vec<Force>,

    /// Body to analyse under the forces
    #[serde(default)]
    pub body: Option<BodyInput>,
}

/// Everything computed for a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Completed forces, with their diagnostics
    pub forces: Vec<Force>,

    /// System resultant, `None` when no force has components
    pub resultant: Option<ResultantRecord>,

    /// Body dynamics, `None` when no body (or a blank one) was given
    pub dynamics: Option<DynamicsRecord>,

    /// Diagram data, `None` when there is nothing to draw
    pub plot: Option<VectorPlot>,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario file.
    pub fn from_file(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        debug!("read scenario from {}", path.display());
        Scenario::from_json(&text)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Complete the forces and compute the resultant, dynamics and plot.
    ///
    /// Forces with a blank name are labelled `F1`, `F2`, ... by position.
    pub fn solve(&self) -> Report {
        let mut session = Session::from(self.forces.clone());

        let resultant = session.resultant();
        let dynamics = self
            .body
            .clone()
            .map(BodyInput::normalized)
            .filter(|body| !body.is_blank())
            .map(|body| session.resolve(&body));
        let plot = VectorPlot::build(session.forces(), resultant.as_ref());

        Report {
            forces: session.forces().to_vec(),
            resultant,
            dynamics,
            plot,
        }
    }
}
