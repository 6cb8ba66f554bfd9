//! # Resultant Aggregation
//!
//! Sums a set of forces into a single resultant vector, together with the
//! total simplified moment, mass, weight and work of the set.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::force::Force;
//! use calc_core::resultant::aggregate;
//!
//! let mut forces = vec![
//!     Force::polar("F1", 100.0, 120.0),
//!     Force::polar("F2", 80.0, 30.0),
//! ];
//!
//! let resultant = aggregate(&mut forces).expect("forces have components");
//! assert!((resultant.magnitude - 128.0625).abs() < 1e-3);
//! assert!((resultant.angle - 81.34).abs() < 0.01);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::force::Force;
use crate::units::resultant_polar;

/// Results of summing a force system.
///
/// ## JSON Example
///
/// ```json
/// {
///   "magnitude": 128.06,
///   "angle": 81.34,
///   "fx": 19.28,
///   "fy": 126.60,
///   "moment_total": 0.0,
///   "mass_total": 0.0,
///   "weight_total": 0.0,
///   "work_total": 0.0,
///   "acceleration_result": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultantRecord {
    /// Resultant magnitude |R| (N)
    pub magnitude: f64,

    /// Resultant direction (degrees), 0 when |R| = 0
    pub angle: f64,

    /// Σ fx (N)
    pub fx: f64,

    /// Σ fy (N)
    pub fy: f64,

    /// Σ fy·height (N·m)
    pub moment_total: f64,

    /// Σ mass, unset counted as 0 (kg)
    pub mass_total: f64,

    /// Σ weight, unset counted as 0 (N)
    pub weight_total: f64,

    /// Σ work, unset counted as 0 (J)
    pub work_total: f64,

    /// |R| / Σ mass when the total mass is positive (m/s²)
    pub acceleration_result: Option<f64>,
}

/// Vector sum of the defined components of `forces`
pub(crate) fn component_sums(forces: &[Force]) -> (f64, f64) {
    let sum_fx = forces.iter().filter_map(|f| f.fx).sum();
    let sum_fy = forces.iter().filter_map(|f| f.fy).sum();
    (sum_fx, sum_fy)
}

/// Σ moment over `forces`
pub(crate) fn moment_total(forces: &mut [Force]) -> f64 {
    forces.iter_mut().map(Force::moment).sum()
}

/// Σ work over `forces`, unset counted as 0
pub(crate) fn work_total(forces: &[Force]) -> f64 {
    forces.iter().filter_map(|f| f.work).sum()
}

/// Complete every force and sum the system.
///
/// Returns `None` when no force has a defined component, which includes an
/// empty slice.
pub fn aggregate(forces: &mut [Force]) -> Option<ResultantRecord> {
    for force in forces.iter_mut() {
        force.complete();
    }

    let any_fx = forces.iter().any(|f| f.fx.is_some());
    let any_fy = forces.iter().any(|f| f.fy.is_some());
    if !any_fx && !any_fy {
        debug!("no components among {} forces; nothing to aggregate", forces.len());
        return None;
    }

    let (sum_fx, sum_fy) = component_sums(forces);
    let (magnitude, angle) = resultant_polar(sum_fx, sum_fy);

    let mass_total: f64 = forces.iter().filter_map(|f| f.mass).sum();
    let weight_total: f64 = forces.iter().filter_map(|f| f.weight).sum();

    let acceleration_result = if mass_total > 0.0 {
        Some(magnitude / mass_total)
    } else {
        None
    };

    Some(ResultantRecord {
        magnitude,
        angle: angle.0,
        fx: sum_fx,
        fy: sum_fy,
        moment_total: moment_total(forces),
        mass_total,
        weight_total,
        work_total: work_total(forces),
        acceleration_result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_two_force_resultant() {
        let mut forces = vec![Force::polar("F1", 100.0, 120.0), Force::polar("F2", 80.0, 30.0)];
        let result = aggregate(&mut forces).unwrap();

        assert_abs_diff_eq!(result.fx, 19.282, epsilon = 1e-3);
        assert_abs_diff_eq!(result.fy, 126.603, epsilon = 1e-3);
        assert_abs_diff_eq!(result.magnitude, 128.0625, epsilon = 1e-3);
        assert_abs_diff_eq!(result.angle, 81.34, epsilon = 1e-2);
        assert_eq!(result.acceleration_result, None);
    }

    #[test]
    fn test_empty_input() {
        let mut forces: Vec<Force> = Vec::new();
        assert!(aggregate(&mut forces).is_none());
    }

    #[test]
    fn test_no_components_anywhere() {
        let mut forces = vec![Force::new("A").with_mass(3.0), Force::new("B")];
        assert!(aggregate(&mut forces).is_none());
        // completion still ran
        assert_abs_diff_eq!(forces[0].weight.unwrap(), 29.43, epsilon = 1e-9);
    }

    #[test]
    fn test_undefined_forces_are_skipped() {
        let mut forces = vec![Force::components("A", 3.0, 4.0), Force::new("B").with_mass(2.0)];
        let result = aggregate(&mut forces).unwrap();
        assert_abs_diff_eq!(result.magnitude, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.mass_total, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.acceleration_result.unwrap(), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_totals() {
        let mut forces = vec![
            Force::components("A", 10.0, 20.0).with_height(2.0).with_mass(1.0).with_distance(1.0),
            Force::components("B", -10.0, 5.0).with_height(-1.0).with_weight(19.62),
        ];
        let result = aggregate(&mut forces).unwrap();

        assert_abs_diff_eq!(result.fx, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.fy, 25.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.angle, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.moment_total, 35.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.mass_total, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.weight_total, 29.43, epsilon = 1e-9);
        assert_abs_diff_eq!(result.work_total, 500f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_balanced_system_has_zero_angle() {
        let mut forces = vec![Force::components("A", -5.0, 0.0), Force::components("B", 5.0, 0.0)];
        let result = aggregate(&mut forces).unwrap();
        assert_eq!(result.magnitude, 0.0);
        assert_eq!(result.angle, 0.0);
    }
}
