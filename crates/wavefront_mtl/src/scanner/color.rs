//! Color command interpretation
//!
//! `Ka`, `Kd`, `Ks` and `Tf` accept three color models:
//!
//! - `Kd r g b`: plain RGB
//! - `Kd xyz x y z`: CIEXYZ
//! - `Kd spectral file.rfl [factor]`: spectral curve
//!
//! Only plain RGB triples are converted. Everything else is classified and
//! then skipped by the dispatcher.

use super::command::Command;
use super::numeric::parse_float;
use crate::color::MtlColor;
use crate::error::ScanError;

/// Color model of the most recently processed color command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorForm {
    /// Exactly three numeric components
    Rgb,
    /// CIEXYZ form (`xyz` prefix)
    Xyz,
    /// Spectral curve form (`spectral` prefix)
    Spectral,
    /// Any other parameter count
    #[default]
    Unsupported,
}

/// Scratch state for color commands, reused across lines
#[derive(Debug, Default)]
pub struct ColorAccumulator {
    form: ColorForm,
    color: MtlColor,
}

impl ColorAccumulator {
    /// Create an accumulator with no processed command
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the parameters of a color command and, for plain RGB,
    /// convert the three components
    ///
    /// # Errors
    /// Returns [`ScanError::Corrupt`] when an RGB component is not a number.
    pub fn process(&mut self, command: &Command) -> Result<(), ScanError> {
        self.form = ColorForm::Unsupported;
        self.form = match command.param(0) {
            Some("xyz") => ColorForm::Xyz,
            Some("spectral") => ColorForm::Spectral,
            _ if command.param_count() == 3 => {
                let line = command.line_number();
                let mut components = [0.0_f32; 3];
                for (index, component) in components.iter_mut().enumerate() {
                    let text = command.param(index).unwrap_or_default();
                    *component = parse_float(text, line)?;
                }
                self.color = MtlColor::from(components);
                ColorForm::Rgb
            }
            _ => ColorForm::Unsupported,
        };
        Ok(())
    }

    /// Color model of the last processed command
    pub const fn form(&self) -> ColorForm {
        self.form
    }

    /// Whether the last processed command was a plain RGB triple
    pub fn is_rgb(&self) -> bool {
        self.form == ColorForm::Rgb
    }

    /// The converted color, meaningful only when [`Self::is_rgb`] holds
    pub const fn color(&self) -> MtlColor {
        self.color
    }

    /// Red component of the last RGB triple
    pub const fn r(&self) -> f32 {
        self.color.r
    }

    /// Green component of the last RGB triple
    pub const fn g(&self) -> f32 {
        self.color.g
    }

    /// Blue component of the last RGB triple
    pub const fn b(&self) -> f32 {
        self.color.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn process(line: &str) -> (ColorAccumulator, Result<(), ScanError>) {
        let mut command = Command::new();
        command.tokenize(line);
        let mut accumulator = ColorAccumulator::new();
        let result = accumulator.process(&command);
        (accumulator, result)
    }

    #[test]
    fn test_three_components_are_rgb() {
        let (color, result) = process("Kd 0.8 0.1 0.2");
        assert!(result.is_ok());
        assert!(color.is_rgb());
        assert_relative_eq!(color.r(), 0.8);
        assert_relative_eq!(color.g(), 0.1);
        assert_relative_eq!(color.b(), 0.2);
    }

    #[test]
    fn test_other_counts_are_not_rgb() {
        for line in ["Kd", "Kd 0.5", "Kd 0.5 0.5", "Kd 0.1 0.2 0.3 0.4"] {
            let (color, result) = process(line);
            assert!(result.is_ok(), "{line}");
            assert!(!color.is_rgb(), "{line}");
            assert_eq!(color.form(), ColorForm::Unsupported);
        }
    }

    #[test]
    fn test_xyz_and_spectral_forms_are_classified() {
        let (color, _) = process("Ka xyz 0.1 0.2 0.3");
        assert_eq!(color.form(), ColorForm::Xyz);

        let (color, _) = process("Ks spectral metal.rfl 1.0");
        assert_eq!(color.form(), ColorForm::Spectral);
        assert!(!color.is_rgb());
    }

    #[test]
    fn test_malformed_component_is_corrupt() {
        let (color, result) = process("Kd 0.5 green 0.5");
        let err = result.unwrap_err();
        assert!(err.is_corrupt());
        assert!(err.to_string().contains("green"));
        assert!(!color.is_rgb());
    }

    #[test]
    fn test_state_resets_between_commands() {
        let mut command = Command::new();
        let mut accumulator = ColorAccumulator::new();

        command.tokenize("Kd 1 1 1");
        accumulator.process(&command).unwrap();
        assert!(accumulator.is_rgb());

        command.tokenize("Kd 1 1");
        accumulator.process(&command).unwrap();
        assert!(!accumulator.is_rgb());
    }
}
