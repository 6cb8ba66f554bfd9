//! Text-to-number handling for user input.
//!
//! The engine only ever sees numbers or absent fields. Blank or malformed
//! text is treated as absent, never as zero.

use std::io::{self, BufRead, Write};

use calc_core::dynamics::BodyInput;
use calc_core::force::Force;

/// Parse an optional number: empty, whitespace or malformed text is `None`.
pub fn parse_optional(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Prompt for an optional number.
    pub fn number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        Ok(self.line(prompt)?.as_deref().and_then(parse_optional))
    }

    /// Ask for every force field. A blank name is left for the session to fill.
    pub fn force(&mut self, default_name: &str) -> io::Result<Force> {
        let name = self.line(&format!("Name [{}]: ", default_name))?.unwrap_or_default();

        let mut force = Force::new(name);
        force.magnitude = self.number("Magnitude (N): ")?;
        force.angle = self.number("Angle (°): ")?;
        force.fx = self.number("Component Fx (N): ")?;
        force.fy = self.number("Component Fy (N): ")?;
        force.height = self.number("Height for moment (m): ")?.unwrap_or(0.0);
        force.mass = self.number("Mass (kg) [optional]: ")?;
        force.weight = self.number("Weight (N) [optional]: ")?;
        force.acceleration = self.number("Acceleration (m/s²) [optional]: ")?;
        force.distance = self.number("Distance (m, for work): ")?;
        Ok(force)
    }

    /// Ask for every body field.
    pub fn body(&mut self) -> io::Result<BodyInput> {
        Ok(BodyInput {
            mass: self.number("Body mass (kg): ")?,
            weight: self.number("Body weight (N): ")?,
            desired_acceleration: self.number("Desired acceleration (m/s²): ")?,
            cable_tension: self.number("Cable tension (N): ")?,
            missing_force_angle: self.number("Missing force angle (°): ")?,
        })
    }

    /// Write a line of output
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Consume the prompter, returning the writer
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}
