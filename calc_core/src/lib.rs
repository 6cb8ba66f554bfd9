//! # calc_core - Vector Mechanics Calculation Engine
//!
//! `calc_core` completes partially specified planar forces, sums them into a
//! resultant, and classifies what they do to a single rigid body. All inputs
//! and outputs are JSON-serializable so any front-end can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over caller-owned records
//! - **Never fails on physics**: Missing data becomes diagnostics or `None`
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **No formatting**: Numbers in, numbers out; rendering is the caller's job
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::dynamics::{resolve, BodyInput};
//! use calc_core::force::Force;
//! use calc_core::resultant::aggregate;
//!
//! let mut forces = vec![
//!     Force::polar("F1", 100.0, 120.0),
//!     Force::components("F2", 69.28, 40.0),
//! ];
//!
//! let resultant = aggregate(&mut forces).unwrap();
//! let dynamics = resolve(&BodyInput::with_mass(25.0), &mut forces);
//!
//! println!("|R| = {} N, a = {:?} m/s²", resultant.magnitude, dynamics.acceleration);
//! ```
//!
//! ## Modules
//!
//! - [`force`] - Force record and completion
//! - [`resultant`] - Resultant of a force system
//! - [`dynamics`] - Body dynamics classification and missing force
//! - [`session`] - Ordered, caller-owned force collection
//! - [`scenario`] - JSON scenario input and combined report
//! - [`plot`] - Renderer-agnostic vector diagram data
//! - [`diagnostics`] - Missing-data messages
//! - [`units`] - SI constants and angle helpers
//! - [`errors`] - Structured error types

pub mod diagnostics;
pub mod dynamics;
pub mod errors;
pub mod force;
pub mod plot;
pub mod resultant;
pub mod scenario;
pub mod session;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use diagnostics::Diagnostic;
pub use dynamics::{resolve, BodyInput, DynamicsKind, DynamicsRecord};
pub use errors::{CalcError, CalcResult};
pub use force::Force;
pub use resultant::{aggregate, ResultantRecord};
pub use scenario::{Report, Scenario};
pub use session::Session;
