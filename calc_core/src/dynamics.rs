//! # Body Dynamics
//!
//! Classifies what a set of applied forces does to a single rigid body and
//! computes the corresponding result.
//!
//! ## Stages
//!
//! Resolution runs two stages in sequence; both may populate the record.
//!
//! - **Stage A** picks the base case: a crane (cable tension against the
//!   body's weight), applied forces on a body with mass, or indeterminate.
//! - **Stage B** runs when a desired acceleration is given on a body with
//!   positive mass. It finds the missing force that brings the applied sum to
//!   `m·a` along +x and relabels the record as a missing-force case, leaving
//!   Stage A's resultant and acceleration in place.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::dynamics::{resolve, BodyInput, DynamicsKind};
//! use calc_core::force::Force;
//!
//! let body = BodyInput {
//!     mass: Some(60.0),
//!     desired_acceleration: Some(0.5),
//!     ..BodyInput::default()
//! };
//! let mut forces: Vec<Force> = Vec::new();
//!
//! let record = resolve(&body, &mut forces);
//! assert_eq!(record.kind, DynamicsKind::MissingForce);
//! assert!((record.missing_force_magnitude.unwrap() - 30.0).abs() < 1e-9);
//! assert_eq!(record.missing_force_angle, Some(0.0));
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::force::Force;
use crate::resultant::{component_sums, moment_total, work_total};
use crate::units::{resultant_polar, weight_of, Degrees, Radians};

/// Largest gap between the x- and y-axis solutions still treated as one
/// consistent magnitude (N)
pub const ANGLE_CONSISTENCY_TOLERANCE: f64 = 1e-6;

/// Known scalars of the body being analysed.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mass": 57.0,
///   "cable_tension": 500.0
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyInput {
    /// Mass in kilograms
    #[serde(default)]
    pub mass: Option<f64>,

    /// Weight in newtons
    #[serde(default)]
    pub weight: Option<f64>,

    /// Target acceleration along +x (m/s²)
    #[serde(default)]
    pub desired_acceleration: Option<f64>,

    /// Vertical cable tension (N)
    #[serde(default)]
    pub cable_tension: Option<f64>,

    /// Direction imposed on the missing force (degrees)
    #[serde(default)]
    pub missing_force_angle: Option<f64>,
}

impl BodyInput {
    /// Create a body from its mass, deriving its weight.
    pub fn with_mass(mass_kg: f64) -> Self {
        BodyInput {
            mass: Some(mass_kg),
            ..BodyInput::default()
        }
        .normalized()
    }

    /// Fill the weight from the mass when only the mass is known.
    ///
    /// A zero mass leaves the weight unset.
    pub fn normalized(mut self) -> Self {
        if self.weight.is_none() {
            self.weight = self.mass.filter(|m| *m != 0.0).map(weight_of);
        }
        self
    }

    /// True when no body scalar has a usable (present and non-zero) value.
    pub fn is_blank(&self) -> bool {
        [
            self.mass,
            self.weight,
            self.desired_acceleration,
            self.cable_tension,
            self.missing_force_angle,
        ]
        .iter()
        .all(|v| v.map_or(true, |x| x == 0.0))
    }

    fn positive_mass(&self) -> Option<f64> {
        self.mass.filter(|m| *m > 0.0)
    }
}

/// Scenario a body was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicsKind {
    /// No mass to relate force and acceleration
    Indeterminate,
    /// Cable tension against the body's weight
    Crane,
    /// Applied forces accelerating a body with mass
    AppliedForces,
    /// A force is missing to reach the desired acceleration
    MissingForce,
}

impl DynamicsKind {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DynamicsKind::Indeterminate => "Indeterminate",
            DynamicsKind::Crane => "Crane (cable tension)",
            DynamicsKind::AppliedForces => "Applied forces",
            DynamicsKind::MissingForce => "Missing force",
        }
    }
}

impl std::fmt::Display for DynamicsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Results of a dynamics resolution.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "missing_force",
///   "magnitude": 0.0,
///   "angle": 0.0,
///   "fx": 0.0,
///   "fy": 0.0,
///   "moment_total": 0.0,
///   "work_total": 0.0,
///   "acceleration": 0.0,
///   "missing_force_magnitude": 30.0,
///   "missing_force_angle": 0.0,
///   "angle_inconsistent": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicsRecord {
    /// Scenario classification
    #[serde(rename = "type")]
    pub kind: DynamicsKind,

    /// Resultant magnitude (N)
    pub magnitude: f64,

    /// Resultant direction (degrees), 0 when the magnitude is 0
    pub angle: f64,

    /// Resultant x component (N)
    pub fx: f64,

    /// Resultant y component (N)
    pub fy: f64,

    /// Σ fy·height over the applied forces (N·m)
    pub moment_total: f64,

    /// Σ work over the applied forces (J)
    pub work_total: f64,

    /// Resultant magnitude over mass (m/s²)
    pub acceleration: Option<f64>,

    /// Magnitude of the force still needed (N)
    pub missing_force_magnitude: Option<f64>,

    /// Direction of the force still needed (degrees)
    pub missing_force_angle: Option<f64>,

    /// The imposed direction cannot produce the required correction exactly
    pub angle_inconsistent: bool,
}

/// Missing force solved in Stage B
#[derive(Debug, Clone, Copy, PartialEq)]
struct MissingForce {
    magnitude: f64,
    angle: f64,
    angle_inconsistent: bool,
}

/// Classify the body and compute its dynamics.
///
/// Every force in `forces` is completed in place; nothing else is mutated.
pub fn resolve(body: &BodyInput, forces: &mut [Force]) -> DynamicsRecord {
    for force in forces.iter_mut() {
        force.complete();
    }

    let (sum_fx, sum_fy) = component_sums(forces);
    let (applied_magnitude, applied_angle) = resultant_polar(sum_fx, sum_fy);

    let mut record = DynamicsRecord {
        kind: DynamicsKind::Indeterminate,
        magnitude: applied_magnitude,
        angle: applied_angle.0,
        fx: sum_fx,
        fy: sum_fy,
        moment_total: moment_total(forces),
        work_total: work_total(forces),
        acceleration: None,
        missing_force_magnitude: None,
        missing_force_angle: None,
        angle_inconsistent: false,
    };

    // Stage A
    match (body.cable_tension, body.mass) {
        (Some(tension), Some(mass)) => {
            let fx_total = sum_fx;
            let fy_total = tension - weight_of(mass) + sum_fy;
            let (magnitude, angle) = resultant_polar(fx_total, fy_total);
            record.kind = DynamicsKind::Crane;
            record.fx = fx_total;
            record.fy = fy_total;
            record.magnitude = magnitude;
            record.angle = angle.0;
            record.acceleration = body.positive_mass().map(|m| magnitude / m);
        }
        _ => {
            if let Some(mass) = body.positive_mass() {
                record.kind = DynamicsKind::AppliedForces;
                record.acceleration = Some(applied_magnitude / mass);
            }
        }
    }
    debug!("stage A classified body as {:?}", record.kind);

    // Stage B
    if let (Some(desired), Some(mass)) = (body.desired_acceleration, body.positive_mass()) {
        let fx_required = mass * desired - sum_fx;
        let fy_required = 0.0 - sum_fy;

        let missing = match body.missing_force_angle {
            Some(angle) => missing_force_along(fx_required, fy_required, angle),
            None => {
                let (magnitude, angle) = resultant_polar(fx_required, fy_required);
                MissingForce {
                    magnitude,
                    angle: angle.0,
                    angle_inconsistent: false,
                }
            }
        };

        if missing.angle_inconsistent {
            warn!(
                "required correction ({:.6}, {:.6}) N is not along {}°; using its projection",
                fx_required, fy_required, missing.angle
            );
        }

        record.kind = DynamicsKind::MissingForce;
        record.missing_force_magnitude = Some(missing.magnitude);
        record.missing_force_angle = Some(missing.angle);
        record.angle_inconsistent = missing.angle_inconsistent;
        debug!("stage B missing force {:.6} N at {}°", missing.magnitude, missing.angle);
    }

    record
}

/// Magnitude of a force along `angle_deg` supplying `(fx_required, fy_required)`.
///
/// Each axis gives its own solution; a zero trig term leaves that axis
/// without one. When both exist and disagree, the correction's scalar
/// projection onto the direction is used and the inconsistency is flagged.
fn missing_force_along(fx_required: f64, fy_required: f64, angle_deg: f64) -> MissingForce {
    let rad: Radians = Degrees(angle_deg).into();
    let (sin_a, cos_a) = rad.0.sin_cos();

    let from_x = (cos_a != 0.0).then(|| fx_required / cos_a);
    let from_y = (sin_a != 0.0).then(|| fy_required / sin_a);

    let (magnitude, angle_inconsistent) = match (from_x, from_y) {
        (Some(mx), Some(my)) if (mx - my).abs() <= ANGLE_CONSISTENCY_TOLERANCE => (mx, false),
        (Some(_), Some(_)) => (fx_required * cos_a + fy_required * sin_a, true),
        (Some(mx), None) => (mx, false),
        (None, Some(my)) => (my, false),
        (None, None) => (0.0, false),
    };

    MissingForce {
        magnitude,
        angle: angle_deg,
        angle_inconsistent,
    }
}
