//! Fixed-decimal text rendering of engine records.

use std::fmt::Write;

use calc_core::dynamics::DynamicsRecord;
use calc_core::force::Force;
use calc_core::resultant::ResultantRecord;

/// Formats numbers with a fixed number of decimals.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub precision: usize,
}

impl Renderer {
    pub fn new(precision: usize) -> Self {
        Renderer { precision }
    }

    fn num(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    fn opt(&self, value: Option<f64>, unit: &str) -> String {
        match value {
            Some(v) => format!("{} {}", self.num(v), unit),
            None => "(undefined)".to_string(),
        }
    }

    /// Detail block for one force, including what it still needs.
    pub fn force(&self, index: usize, force: &Force) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Force {}: {}", index + 1, force.name);
        let _ = writeln!(out, "  |F|: {}", self.opt(force.magnitude, "N"));
        let _ = writeln!(out, "  θ:   {}", self.opt(force.angle, "°"));
        if let (Some(fx), Some(fy)) = (force.fx, force.fy) {
            let _ = writeln!(out, "  Components: Fx = {} N, Fy = {} N", self.num(fx), self.num(fy));
        }
        let optional = [
            ("m", force.mass, "kg"),
            ("P", force.weight, "N"),
            ("a", force.acceleration, "m/s²"),
            ("W", force.work, "J"),
        ];
        for (symbol, value, unit) in optional {
            if let Some(v) = value {
                let _ = writeln!(out, "  {}:   {} {}", symbol, self.num(v), unit);
            }
        }
        if !force.diagnostics.is_empty() {
            let _ = writeln!(out, "  Still needed:");
            for diag in &force.diagnostics {
                let _ = writeln!(out, "    - {}", diag);
            }
        }
        out
    }

    /// Summary of the force system.
    pub fn resultant(&self, result: Option<&ResultantRecord>) -> String {
        let Some(r) = result else {
            return "Resultant could not be computed. Give at least one force (Fx and Fy) or (magnitude and angle).\n"
                .to_string();
        };

        let mut out = String::new();
        let _ = writeln!(out, "Resultant |F|:    {} N", self.num(r.magnitude));
        let _ = writeln!(out, "Direction θ:      {}°", self.num(r.angle));
        let _ = writeln!(out, "Components:       Fx = {} N, Fy = {} N", self.num(r.fx), self.num(r.fy));
        let _ = writeln!(out, "Total moment:     {} N·m (simplified)", self.num(r.moment_total));
        // zero totals mean nothing was supplied
        if r.mass_total != 0.0 {
            let _ = writeln!(out, "Total mass:       {} kg", self.num(r.mass_total));
        }
        if r.weight_total != 0.0 {
            let _ = writeln!(out, "Total weight:     {} N", self.num(r.weight_total));
        }
        if r.work_total != 0.0 {
            let _ = writeln!(out, "Total work:       {} J", self.num(r.work_total));
        }
        if let Some(a) = r.acceleration_result {
            let _ = writeln!(out, "Acceleration:     {} m/s²", self.num(a));
        }
        out
    }

    /// Summary of a dynamics resolution.
    pub fn dynamics(&self, record: &DynamicsRecord) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Case:             {}", record.kind);
        let _ = writeln!(out, "Resultant |F|:    {} N", self.num(record.magnitude));
        let _ = writeln!(out, "Direction θ:      {}°", self.num(record.angle));
        let _ = writeln!(out, "Components:       Fx = {} N, Fy = {} N", self.num(record.fx), self.num(record.fy));
        let _ = writeln!(out, "Total moment:     {} N·m", self.num(record.moment_total));
        let _ = writeln!(out, "Total work:       {} J", self.num(record.work_total));
        let _ = writeln!(out, "Acceleration:     {}", self.opt(record.acceleration, "m/s²"));
        if let Some(m) = record.missing_force_magnitude {
            let _ = writeln!(out, "Missing force:    {} N", self.num(m));
        }
        if let Some(a) = record.missing_force_angle {
            let _ = writeln!(out, "Missing force θ:  {}°", self.num(a));
        }
        if record.angle_inconsistent {
            let _ = writeln!(
                out,
                "Warning: the given angle cannot produce the required force exactly; the projected magnitude is shown."
            );
        }
        out
    }
}
