//! # Force Completion
//!
//! A [`Force`] is a partially specified 2-D force. [`Force::complete`] derives
//! whatever can be derived from what was given and records a
//! [`Diagnostic`] for every derivation that had to be skipped.
//!
//! ## Derivation Order
//!
//! 1. Components ⇄ polar form (components win when both are given)
//! 2. Mass ⇄ weight (W = m·g)
//! 3. Newton's second law on this force alone (F = m·a)
//! 4. Work, assuming the force is collinear with the displacement (W = F·d)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::force::Force;
//!
//! let mut force = Force::polar("F1", 100.0, 120.0).with_mass(10.0);
//! force.complete();
//!
//! assert!((force.fx.unwrap() + 50.0).abs() < 1e-9);
//! assert!((force.weight.unwrap() - 98.1).abs() < 1e-9);
//! assert!((force.acceleration.unwrap() - 10.0).abs() < 1e-9);
//! assert!(force.diagnostics.is_empty());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::units::{mass_of, to_components, to_polar, weight_of, Degrees};

/// Name given to a force built without one
pub const DEFAULT_FORCE_NAME: &str = "F";

/// A planar force with optional secondary quantities.
///
/// Every field except `name` and `height` is optional; completion fills in
/// whatever the supplied fields determine.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "F1",
///   "magnitude": 100.0,
///   "angle": 120.0,
///   "height": 2.0,
///   "mass": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// User label (e.g., "F1", "Cable"); left blank when omitted so a
    /// session can number it
    #[serde(default)]
    pub name: String,

    /// Magnitude |F| in newtons
    #[serde(default)]
    pub magnitude: Option<f64>,

    /// Direction in degrees, counter-clockwise from +x
    #[serde(default)]
    pub angle: Option<f64>,

    /// Horizontal component in newtons
    #[serde(default)]
    pub fx: Option<f64>,

    /// Vertical component in newtons
    #[serde(default)]
    pub fy: Option<f64>,

    /// Moment arm about the origin in metres
    #[serde(default)]
    pub height: f64,

    /// Mass in kilograms
    #[serde(default)]
    pub mass: Option<f64>,

    /// Weight in newtons
    #[serde(default)]
    pub weight: Option<f64>,

    /// Acceleration in m/s²
    #[serde(default)]
    pub acceleration: Option<f64>,

    /// Displacement along the force, in metres
    #[serde(default)]
    pub distance: Option<f64>,

    /// Work W = F·d in joules (derived)
    #[serde(default)]
    pub work: Option<f64>,

    /// Derivations skipped on the last completion pass
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for Force {
    fn default() -> Self {
        Force::new(DEFAULT_FORCE_NAME)
    }
}

impl Force {
    /// Create a force with nothing but a name.
    pub fn new(name: impl Into<String>) -> Self {
        Force {
            name: name.into(),
            magnitude: None,
            angle: None,
            fx: None,
            fy: None,
            height: 0.0,
            mass: None,
            weight: None,
            acceleration: None,
            distance: None,
            work: None,
            diagnostics: Vec::new(),
        }
    }

    /// Create a force from its magnitude (N) and direction (degrees).
    pub fn polar(name: impl Into<String>, magnitude: f64, angle_deg: f64) -> Self {
        Force {
            magnitude: Some(magnitude),
            angle: Some(angle_deg),
            ..Force::new(name)
        }
    }

    /// Create a force from its components (N).
    pub fn components(name: impl Into<String>, fx: f64, fy: f64) -> Self {
        Force {
            fx: Some(fx),
            fy: Some(fy),
            ..Force::new(name)
        }
    }

    /// Set the moment arm (builder pattern)
    pub fn with_height(mut self, height_m: f64) -> Self {
        self.height = height_m;
        self
    }

    /// Set the mass (builder pattern)
    pub fn with_mass(mut self, mass_kg: f64) -> Self {
        self.mass = Some(mass_kg);
        self
    }

    /// Set the weight (builder pattern)
    pub fn with_weight(mut self, weight_n: f64) -> Self {
        self.weight = Some(weight_n);
        self
    }

    /// Set the acceleration (builder pattern)
    pub fn with_acceleration(mut self, acceleration: f64) -> Self {
        self.acceleration = Some(acceleration);
        self
    }

    /// Set the displacement used for work (builder pattern)
    pub fn with_distance(mut self, distance_m: f64) -> Self {
        self.distance = Some(distance_m);
        self
    }

    /// Derive every attribute the supplied fields determine.
    ///
    /// Diagnostics are rebuilt from scratch on each call. Running it again
    /// with unchanged inputs reproduces the same values.
    pub fn complete(&mut self) -> &mut Self {
        self.diagnostics.clear();

        self.complete_direction();
        self.complete_mass_weight();
        self.complete_second_law();
        self.complete_work();

        debug!(
            "completed force '{}': |F|={:?} θ={:?} fx={:?} fy={:?} ({} diagnostics)",
            self.name,
            self.magnitude,
            self.angle,
            self.fx,
            self.fy,
            self.diagnostics.len()
        );
        self
    }

    fn complete_direction(&mut self) {
        match (self.fx, self.fy, self.magnitude, self.angle) {
            (Some(fx), Some(fy), _, _) => {
                let (magnitude, angle) = to_polar(fx, fy);
                self.magnitude = Some(magnitude);
                self.angle = Some(angle.0);
            }
            (_, _, Some(magnitude), Some(angle)) => self.set_components(magnitude, angle),
            _ => self.diagnostics.push(Diagnostic::NeedComponentsOrPolar),
        }
    }

    fn complete_mass_weight(&mut self) {
        match (self.mass, self.weight) {
            (Some(mass), None) => self.weight = Some(weight_of(mass)),
            (None, Some(weight)) => self.mass = Some(mass_of(weight)),
            (None, None) => self.diagnostics.push(Diagnostic::NeedMassOrWeight),
            (Some(_), Some(_)) => {}
        }
    }

    fn complete_second_law(&mut self) {
        match (self.mass, self.magnitude, self.acceleration) {
            (Some(mass), Some(magnitude), None) => {
                if mass == 0.0 {
                    self.diagnostics.push(Diagnostic::ZeroMassForAcceleration);
                } else {
                    self.acceleration = Some(magnitude / mass);
                }
            }
            (Some(mass), None, Some(acceleration)) => {
                let magnitude = mass * acceleration;
                self.magnitude = Some(magnitude);
                if let Some(angle) = self.angle {
                    if self.fx.is_none() || self.fy.is_none() {
                        self.set_components(magnitude, angle);
                    }
                }
            }
            (Some(_), None, None) => self.diagnostics.push(Diagnostic::NeedMagnitudeOrAcceleration),
            (None, Some(_), _) | (None, _, Some(_)) => {
                self.diagnostics.push(Diagnostic::NeedMassToRelateForceAndAcceleration)
            }
            _ => {}
        }
    }

    fn complete_work(&mut self) {
        match (self.distance, self.magnitude) {
            (Some(distance), Some(magnitude)) => self.work = Some(magnitude * distance),
            (Some(_), None) => self.diagnostics.push(Diagnostic::NeedMagnitudeForWork),
            _ => {}
        }
    }

    fn set_components(&mut self, magnitude: f64, angle_deg: f64) {
        let (fx, fy) = to_components(magnitude, Degrees(angle_deg));
        self.fx = Some(fx);
        self.fy = Some(fy);
    }

    /// Simplified moment about the origin: `fy · height`.
    ///
    /// Only the vertical component contributes; `fx` has no arm. Completion
    /// runs first if `fy` has not been derived yet.
    pub fn moment(&mut self) -> f64 {
        if self.fy.is_none() {
            self.complete();
        }
        self.fy.unwrap_or(0.0) * self.height
    }

    /// True when both components are known
    pub fn has_components(&self) -> bool {
        self.fx.is_some() && self.fy.is_some()
    }

    /// Human-readable messages for the last completion pass
    pub fn missing_data_messages(&self) -> Vec<&'static str> {
        self.diagnostics.iter().map(Diagnostic::message).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polar_to_components() {
        let mut force = Force::polar("F1", 100.0, 120.0);
        force.complete();
        assert_abs_diff_eq!(force.fx.unwrap(), -50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(force.fy.unwrap(), 86.602_540_378_443_86, epsilon = 1e-9);
    }

    #[test]
    fn test_round_trip_through_components() {
        for &(magnitude, angle) in &[(100.0, 120.0), (80.0, 30.0), (12.5, -45.0), (3.0, 270.0)] {
            let mut force = Force::polar("F", magnitude, angle);
            force.complete();

            let mut back = Force::components("F", force.fx.unwrap(), force.fy.unwrap());
            back.complete();

            assert_abs_diff_eq!(back.magnitude.unwrap(), magnitude, epsilon = 1e-9);
            let delta = (back.angle.unwrap() - angle).rem_euclid(360.0);
            assert!(delta < 1e-9 || (360.0 - delta) < 1e-9, "angle {} came back as {}", angle, back.angle.unwrap());
        }
    }

    #[test]
    fn test_components_override_polar() {
        let mut force = Force::components("F", 3.0, 4.0);
        force.magnitude = Some(99.0);
        force.angle = Some(10.0);
        force.complete();
        assert_abs_diff_eq!(force.magnitude.unwrap(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(force.angle.unwrap(), 53.130_102_354_155_98, epsilon = 1e-9);
    }

    #[test]
    fn test_mass_weight_consistency() {
        let mut by_mass = Force::new("m").with_mass(10.0);
        by_mass.complete();
        assert_abs_diff_eq!(by_mass.weight.unwrap(), 98.1, epsilon = 1e-9);

        let mut by_weight = Force::new("w").with_weight(98.1);
        by_weight.complete();
        assert_abs_diff_eq!(by_weight.mass.unwrap(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_supplied_mass_and_weight_are_authoritative() {
        let mut force = Force::new("F").with_mass(1.0).with_weight(50.0);
        force.complete();
        assert_eq!(force.mass, Some(1.0));
        assert_eq!(force.weight, Some(50.0));
    }

    #[test]
    fn test_acceleration_from_magnitude() {
        let mut force = Force::components("F", 30.0, 40.0).with_mass(5.0);
        force.complete();
        assert_abs_diff_eq!(force.acceleration.unwrap(), 10.0, epsilon = 1e-12);
        assert!(force.diagnostics.is_empty());
    }

    #[test]
    fn test_zero_mass_is_flagged() {
        let mut force = Force::polar("F", 10.0, 0.0).with_mass(0.0);
        force.complete();
        assert_eq!(force.acceleration, None);
        assert_eq!(force.diagnostics, vec![Diagnostic::ZeroMassForAcceleration]);
    }

    #[test]
    fn test_magnitude_from_mass_and_acceleration() {
        let mut force = Force::new("F").with_mass(2.0).with_acceleration(3.0);
        force.angle = Some(90.0);
        force.complete();

        assert_abs_diff_eq!(force.magnitude.unwrap(), 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(force.fx.unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(force.fy.unwrap(), 6.0, epsilon = 1e-12);
        // direction rule ran before the magnitude existed
        assert_eq!(force.diagnostics, vec![Diagnostic::NeedComponentsOrPolar]);
    }

    #[test]
    fn test_second_law_diagnostics() {
        let mut mass_only = Force::new("F").with_mass(2.0);
        mass_only.complete();
        assert_eq!(
            mass_only.diagnostics,
            vec![Diagnostic::NeedComponentsOrPolar, Diagnostic::NeedMagnitudeOrAcceleration]
        );

        let mut no_mass = Force::polar("F", 10.0, 0.0);
        no_mass.complete();
        assert_eq!(
            no_mass.diagnostics,
            vec![Diagnostic::NeedMassOrWeight, Diagnostic::NeedMassToRelateForceAndAcceleration]
        );

        let mut accel_only = Force::new("F").with_acceleration(1.0);
        accel_only.complete();
        assert!(accel_only
            .diagnostics
            .contains(&Diagnostic::NeedMassToRelateForceAndAcceleration));
    }

    #[test]
    fn test_work() {
        let mut force = Force::polar("F", 20.0, 0.0).with_distance(3.0);
        force.complete();
        assert_abs_diff_eq!(force.work.unwrap(), 60.0, epsilon = 1e-12);

        let mut no_magnitude = Force::new("F").with_distance(3.0);
        no_magnitude.complete();
        assert_eq!(no_magnitude.work, None);
        assert!(no_magnitude.diagnostics.contains(&Diagnostic::NeedMagnitudeForWork));
    }

    #[test]
    fn test_empty_force_messages() {
        let mut force = Force::default();
        force.complete();
        assert_eq!(
            force.missing_data_messages(),
            vec!["need (fx and fy) or (magnitude and angle)", "need mass or weight"]
        );
    }

    #[test]
    fn test_idempotence() {
        let mut force = Force::polar("F", 100.0, 120.0)
            .with_mass(4.0)
            .with_distance(2.0)
            .with_height(1.5);
        force.complete();
        let first = force.clone();
        force.complete();

        // second pass re-derives polar form from the components
        assert_abs_diff_eq!(force.magnitude.unwrap(), first.magnitude.unwrap(), epsilon = 1e-9);
        assert_abs_diff_eq!(force.angle.unwrap(), first.angle.unwrap(), epsilon = 1e-9);
        assert_eq!(force.fx, first.fx);
        assert_eq!(force.fy, first.fy);
        assert_eq!(force.acceleration, first.acceleration);
        assert_eq!(force.diagnostics, first.diagnostics);

        let second = force.clone();
        force.complete();
        assert_eq!(force, second);
    }

    #[test]
    fn test_idempotence_after_magnitude_derivation() {
        let mut force = Force::new("F").with_mass(2.0).with_acceleration(3.0);
        force.angle = Some(45.0);
        force.complete();
        force.complete();
        let second = force.clone();
        force.complete();
        assert_eq!(force, second);
        assert!(force.diagnostics.is_empty());
    }

    #[test]
    fn test_diagnostics_not_accumulated() {
        let mut force = Force::default();
        force.complete();
        force.complete();
        assert_eq!(force.diagnostics.len(), 2);
    }

    #[test]
    fn test_moment() {
        let mut force = Force::components("F", 10.0, 5.0).with_height(2.0);
        assert_abs_diff_eq!(force.moment(), 10.0, epsilon = 1e-12);

        let mut lazy = Force::polar("F", 10.0, 90.0).with_height(3.0);
        assert_abs_diff_eq!(lazy.moment(), 30.0, epsilon = 1e-9);
        assert!(lazy.fy.is_some());

        let mut undefined = Force::new("F").with_height(3.0);
        assert_eq!(undefined.moment(), 0.0);
    }

    #[test]
    fn test_deserialize_partial_json() {
        let force: Force = serde_json::from_str(r#"{ "fx": 3.0, "fy": 4.0 }"#).unwrap();
        assert_eq!(force.name, "");
        assert_eq!(Force::default().name, DEFAULT_FORCE_NAME);
        assert_eq!(force.height, 0.0);
        assert_eq!(force.magnitude, None);
        assert!(force.diagnostics.is_empty());
    }
}
