//! # Missing-Data Diagnostics
//!
//! Completion never fails. When a force lacks the data a derivation needs,
//! the derivation is skipped and a [`Diagnostic`] is recorded instead, so the
//! presentation layer can tell the user what to add.

use serde::{Deserialize, Serialize};

/// A derivation that could not run on a force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// Neither (fx, fy) nor (magnitude, angle) was given
    NeedComponentsOrPolar,
    /// Neither mass nor weight was given
    NeedMassOrWeight,
    /// Mass is zero, so a = F/m is undefined
    ZeroMassForAcceleration,
    /// Mass is known but neither magnitude nor acceleration is
    NeedMagnitudeOrAcceleration,
    /// Magnitude or acceleration is known but mass is not
    NeedMassToRelateForceAndAcceleration,
    /// A distance was given without a magnitude
    NeedMagnitudeForWork,
}

impl Diagnostic {
    /// Human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Diagnostic::NeedComponentsOrPolar => "need (fx and fy) or (magnitude and angle)",
            Diagnostic::NeedMassOrWeight => "need mass or weight",
            Diagnostic::ZeroMassForAcceleration => "mass cannot be zero for acceleration",
            Diagnostic::NeedMagnitudeOrAcceleration => "need magnitude or acceleration",
            Diagnostic::NeedMassToRelateForceAndAcceleration => "need mass to relate F and a",
            Diagnostic::NeedMagnitudeForWork => "need magnitude to compute work",
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
