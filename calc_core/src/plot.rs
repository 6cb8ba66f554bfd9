//! # Vector Diagram Data
//!
//! Renderer-agnostic data for drawing a force system: one arrow per force
//! from the origin, the resultant arrow, and square axis bounds that fit
//! all of them with a margin. Front-ends turn this into whatever drawing
//! they support.

use serde::{Deserialize, Serialize};

use crate::force::Force;
use crate::resultant::ResultantRecord;

/// Fraction added around the largest component when sizing the axes
pub const AXIS_MARGIN: f64 = 1.2;

/// Smallest half-extent of the axes (N)
pub const MIN_EXTENT: f64 = 1.0;

/// One arrow drawn from the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    /// Label drawn at the tip
    pub label: String,
    /// Tip x (N)
    pub fx: f64,
    /// Tip y (N)
    pub fy: f64,
    /// |F| (N)
    pub magnitude: f64,
    /// Direction (degrees)
    pub angle: f64,
    pub mass: Option<f64>,
    pub weight: Option<f64>,
    pub acceleration: Option<f64>,
    pub work: Option<f64>,
}

/// Everything needed to draw the force system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorPlot {
    /// Individual forces with both components known
    pub forces: Vec<Arrow>,
    /// System resultant, if one was computed
    pub resultant: Option<Arrow>,
    /// Half-width of the square plot area; axes span `[-extent, extent]`
    pub extent: f64,
}

impl VectorPlot {
    /// Build plot data, or `None` when there is nothing to draw.
    pub fn build(forces: &[Force], resultant: Option<&ResultantRecord>) -> Option<Self> {
        let arrows: Vec<Arrow> = forces
            .iter()
            .filter_map(|f| {
                let (fx, fy) = (f.fx?, f.fy?);
                Some(Arrow {
                    label: f.name.clone(),
                    fx,
                    fy,
                    magnitude: f.magnitude.unwrap_or_else(|| fx.hypot(fy)),
                    angle: f.angle.unwrap_or_else(|| fy.atan2(fx).to_degrees()),
                    mass: f.mass,
                    weight: f.weight,
                    acceleration: f.acceleration,
                    work: f.work,
                })
            })
            .collect();

        if arrows.is_empty() && resultant.is_none() {
            return None;
        }

        // zero totals are left off the resultant's label
        let resultant = resultant.map(|r| Arrow {
            label: "Resultant".to_string(),
            fx: r.fx,
            fy: r.fy,
            magnitude: r.magnitude,
            angle: r.angle,
            mass: Some(r.mass_total).filter(|m| *m != 0.0),
            weight: Some(r.weight_total).filter(|w| *w != 0.0),
            acceleration: r.acceleration_result,
            work: Some(r.work_total).filter(|w| *w != 0.0),
        });

        // a lone fx or fy still widens the axes even without an arrow
        let largest = forces
            .iter()
            .flat_map(|f| [f.fx, f.fy])
            .flatten()
            .chain(resultant.iter().flat_map(|r| [r.fx, r.fy]))
            .map(f64::abs)
            .fold(MIN_EXTENT, f64::max);

        Some(VectorPlot {
            forces: arrows,
            resultant,
            extent: AXIS_MARGIN * largest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resultant::aggregate;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nothing_to_draw() {
        let forces = vec![Force::new("A")];
        assert!(VectorPlot::build(&forces, None).is_none());
    }

    #[test]
    fn test_extent_covers_largest_component() {
        let mut forces = vec![Force::components("A", 3.0, -40.0), Force::components("B", 10.0, 0.0)];
        let resultant = aggregate(&mut forces);
        let plot = VectorPlot::build(&forces, resultant.as_ref()).unwrap();

        assert_eq!(plot.forces.len(), 2);
        assert_abs_diff_eq!(plot.extent, 48.0, epsilon = 1e-12);

        let r = plot.resultant.unwrap();
        assert_eq!(r.label, "Resultant");
        assert_abs_diff_eq!(r.fx, 13.0, epsilon = 1e-12);
        assert_eq!(r.mass, None);
    }

    #[test]
    fn test_extent_counts_lone_components() {
        let mut partial = Force::new("half");
        partial.fy = Some(-50.0);
        let forces = vec![Force::components("A", 3.0, 4.0), partial];

        let plot = VectorPlot::build(&forces, None).unwrap();
        assert_eq!(plot.forces.len(), 1);
        assert_abs_diff_eq!(plot.extent, 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_minimum_extent() {
        let mut forces = vec![Force::components("tiny", 0.1, 0.2)];
        forces[0].complete();
        let plot = VectorPlot::build(&forces, None).unwrap();
        assert_abs_diff_eq!(plot.extent, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_arrow_annotations() {
        let mut forces = vec![Force::polar("A", 10.0, 0.0).with_mass(2.0).with_distance(3.0)];
        let resultant = aggregate(&mut forces);
        let plot = VectorPlot::build(&forces, resultant.as_ref()).unwrap();

        let arrow = &plot.forces[0];
        assert_eq!(arrow.mass, Some(2.0));
        assert_eq!(arrow.acceleration, Some(5.0));
        assert_eq!(arrow.work, Some(30.0));
        assert_eq!(plot.resultant.unwrap().mass, Some(2.0));
    }
}
