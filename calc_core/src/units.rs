//! # Unit Types
//!
//! SI constants and angle wrappers used throughout the engine.
//!
//! All quantities are SI: newtons (N), kilograms (kg), metres (m),
//! metres per second squared (m/s²), joules (J) and newton-metres (N·m).
//! Angles are exchanged in degrees, measured counter-clockwise from +x;
//! radians only appear inside the trigonometry.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Degrees, Radians, to_components};
//!
//! let right: Radians = Degrees(90.0).into();
//! assert!((right.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let (fx, fy) = to_components(10.0, Degrees(0.0));
//! assert_eq!((fx, fy), (10.0, 0.0));
//! ```

use serde::{Deserialize, Serialize};

/// Gravitational acceleration used for every mass/weight conversion (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Mass / Weight
// ============================================================================

/// Weight (N) of a mass (kg) under standard gravity
pub fn weight_of(mass_kg: f64) -> f64 {
    mass_kg * STANDARD_GRAVITY
}

/// Mass (kg) that weighs `weight_n` newtons under standard gravity
pub fn mass_of(weight_n: f64) -> f64 {
    weight_n / STANDARD_GRAVITY
}

// ============================================================================
// Polar / Cartesian
// ============================================================================

/// Split a magnitude and direction into `(fx, fy)`.
pub fn to_components(magnitude: f64, angle: Degrees) -> (f64, f64) {
    let rad: Radians = angle.into();
    (magnitude * rad.0.cos(), magnitude * rad.0.sin())
}

/// Magnitude and direction of `(fx, fy)`.
///
/// The direction is `atan2` in degrees, always, including the zero vector.
pub fn to_polar(fx: f64, fy: f64) -> (f64, Degrees) {
    (fx.hypot(fy), Radians(fy.atan2(fx)).into())
}

/// Magnitude and direction of a summed vector, with the direction pinned to
/// 0° when the magnitude is exactly zero.
pub fn resultant_polar(fx: f64, fy: f64) -> (f64, Degrees) {
    let (magnitude, angle) = to_polar(fx, fy);
    if magnitude != 0.0 {
        (magnitude, angle)
    } else {
        (magnitude, Degrees(0.0))
    }
}
