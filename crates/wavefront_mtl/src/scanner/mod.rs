//! MTL scanner
//!
//! Reads an MTL source line by line and reports recognized commands to an
//! [`MtlHandler`]. The scan is a single forward pass: it ends when the input
//! is exhausted or at the first error, whichever comes first.
//!
//! ```
//! use wavefront_mtl::{EventCollector, MtlEvent, MtlScanner};
//!
//! let mut events = EventCollector::new();
//! MtlScanner::new()
//!     .scan_str("newmtl Brick\nmap_Kd -s 2 2 1 brick.png", &mut events)
//!     .unwrap();
//!
//! assert_eq!(events.events()[0], MtlEvent::Material("Brick".into()));
//! assert_eq!(events.events()[1], MtlEvent::DiffuseTexture("brick.png".into()));
//! ```

pub mod color;
pub mod command;
pub mod events;
pub mod handler;
pub mod numeric;

pub use color::{ColorAccumulator, ColorForm};
pub use command::Command;
pub use events::{EventCollector, MtlEvent};
pub use handler::MtlHandler;
pub use numeric::NumericToken;

use std::io::BufRead;

use log::{debug, trace};

use crate::color::MtlColor;
use crate::config::ScannerConfig;
use crate::error::ScanError;

const COMMAND_MATERIAL: &str = "newmtl";
const COMMAND_AMBIENT_COLOR: &str = "Ka";
const COMMAND_DIFFUSE_COLOR: &str = "Kd";
const COMMAND_SPECULAR_COLOR: &str = "Ks";
const COMMAND_TRANSMISSION_COLOR: &str = "Tf";
const COMMAND_DISSOLVE: &str = "d";
const COMMAND_SHARPNESS: &str = "sharpness";
const COMMAND_ILLUMINATION: &str = "illum";
const COMMAND_SPECULAR_EXPONENT: &str = "Ns";
const COMMAND_AMBIENT_TEXTURE: &str = "map_Ka";
const COMMAND_DIFFUSE_TEXTURE: &str = "map_Kd";
const COMMAND_SPECULAR_TEXTURE: &str = "map_Ks";
const COMMAND_SPECULAR_EXPONENT_TEXTURE: &str = "map_Ns";
const COMMAND_DISSOLVE_TEXTURE: &str = "map_d";
const COMMAND_BUMP_TEXTURE: &str = "bump";
const COMMAND_REFLECTION_TEXTURE: &str = "refl";

/// Scanner state for the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// No error raised
    #[default]
    Ready,
    /// The run stopped at an error
    Failed,
}

/// Line-driven MTL dispatcher
///
/// The scratch [`Command`] and [`ColorAccumulator`] are reused for every
/// line, so one scanner must not be shared between concurrent scans.
#[derive(Debug, Default)]
pub struct MtlScanner {
    command: Command,
    color: ColorAccumulator,
    config: ScannerConfig,
    state: ScanState,
}

impl MtlScanner {
    /// Create a scanner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with the given configuration
    pub fn with_config(config: ScannerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Configuration in use
    pub const fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// State of the most recent run
    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// Scan `reader` to the end, reporting events to `handler`
    ///
    /// # Errors
    /// Returns the first corrupt-input or I/O error as [`ScanError`]
    /// converted into `H::Error`, or the first error raised by `handler`
    /// unchanged.
    pub fn scan<R, H>(&mut self, mut reader: R, handler: &mut H) -> Result<(), H::Error>
    where
        R: BufRead,
        H: MtlHandler,
    {
        self.command.reset();
        self.state = ScanState::Ready;

        let result = self.run(&mut reader, handler);
        if result.is_err() {
            self.state = ScanState::Failed;
        }
        result
    }

    /// Scan an in-memory MTL document
    ///
    /// # Errors
    /// Same as [`MtlScanner::scan`].
    pub fn scan_str<H: MtlHandler>(&mut self, text: &str, handler: &mut H) -> Result<(), H::Error> {
        self.scan(text.as_bytes(), handler)
    }

    fn run<R, H>(&mut self, reader: &mut R, handler: &mut H) -> Result<(), H::Error>
    where
        R: BufRead,
        H: MtlHandler,
    {
        while self.command.read(reader).map_err(ScanError::from)? {
            self.dispatch(handler)?;
        }
        debug!("MTL scan finished after {} line(s)", self.command.line_number());
        Ok(())
    }

    fn dispatch<H: MtlHandler>(&mut self, handler: &mut H) -> Result<(), H::Error> {
        let Self {
            command,
            color,
            config,
            ..
        } = self;

        if command.is_empty() {
            return Ok(());
        }
        if let Some(text) = command.comment() {
            return handler.on_comment(text);
        }
        if config.trace_commands {
            trace!("line {}: {}", command.line_number(), command.keyword());
        }

        match command.keyword() {
            COMMAND_MATERIAL => {
                let name = required_param(command, "Missing material name.")?;
                handler.on_material(name)
            }
            COMMAND_AMBIENT_COLOR => match rgb_color(command, color, config)? {
                Some(c) => handler.on_ambient_color_rgb(c.r, c.g, c.b),
                None => Ok(()),
            },
            COMMAND_DIFFUSE_COLOR => match rgb_color(command, color, config)? {
                Some(c) => handler.on_diffuse_color_rgb(c.r, c.g, c.b),
                None => Ok(()),
            },
            COMMAND_SPECULAR_COLOR => match rgb_color(command, color, config)? {
                Some(c) => handler.on_specular_color_rgb(c.r, c.g, c.b),
                None => Ok(()),
            },
            COMMAND_TRANSMISSION_COLOR => match rgb_color(command, color, config)? {
                Some(c) => handler.on_transmission_color_rgb(c.r, c.g, c.b),
                None => Ok(()),
            },
            COMMAND_DISSOLVE => {
                let factor = required_number(command, "Missing dissolve factor.")?;
                handler.on_dissolve(&factor)
            }
            COMMAND_SHARPNESS => {
                let factor = required_number(command, "Missing sharpness factor.")?;
                handler.on_sharpness(&factor)
            }
            COMMAND_ILLUMINATION => {
                let model = required_number(command, "Missing illumination model.")?;
                handler.on_illumination(&model)
            }
            COMMAND_SPECULAR_EXPONENT => {
                let amount = required_number(command, "Missing specular exponent amount.")?;
                handler.on_specular_exponent(&amount)
            }
            COMMAND_AMBIENT_TEXTURE => {
                let filename = texture_filename(command, "ambient")?;
                handler.on_ambient_texture(filename)
            }
            COMMAND_DIFFUSE_TEXTURE => {
                let filename = texture_filename(command, "diffuse")?;
                handler.on_diffuse_texture(filename)
            }
            COMMAND_SPECULAR_TEXTURE => {
                let filename = texture_filename(command, "specular")?;
                handler.on_specular_texture(filename)
            }
            COMMAND_SPECULAR_EXPONENT_TEXTURE => {
                let filename = texture_filename(command, "specular exponent")?;
                handler.on_specular_exponent_texture(filename)
            }
            COMMAND_DISSOLVE_TEXTURE => {
                let filename = texture_filename(command, "dissolve")?;
                handler.on_dissolve_texture(filename)
            }
            COMMAND_BUMP_TEXTURE => {
                let filename = texture_filename(command, "bump")?;
                handler.on_bump_texture(filename)
            }
            COMMAND_REFLECTION_TEXTURE => {
                let filename = texture_filename(command, "reflection")?;
                handler.on_reflection_texture(filename)
            }
            // Unknown and vendor commands are skipped
            keyword => {
                if config.log_unknown_commands {
                    debug!("line {}: ignoring '{}'", command.line_number(), keyword);
                }
                Ok(())
            }
        }
    }
}

/// Scan `reader` with a fresh scanner
///
/// # Errors
/// Same as [`MtlScanner::scan`].
pub fn scan<R, H>(reader: R, handler: &mut H) -> Result<(), H::Error>
where
    R: BufRead,
    H: MtlHandler,
{
    MtlScanner::new().scan(reader, handler)
}

fn required_param<'a>(command: &'a Command, message: &str) -> Result<&'a str, ScanError> {
    command
        .param(0)
        .ok_or_else(|| ScanError::corrupt(command.line_number(), message))
}

fn required_number<'a>(command: &'a Command, message: &str) -> Result<NumericToken<'a>, ScanError> {
    command
        .last_numeric_param()
        .ok_or_else(|| ScanError::corrupt(command.line_number(), message))
}

// Texture options such as `-o u v` precede the filename, so the filename is
// the last parameter.
fn texture_filename<'a>(command: &'a Command, kind: &str) -> Result<&'a str, ScanError> {
    command.last_param().ok_or_else(|| {
        ScanError::corrupt(
            command.line_number(),
            format!("Missing {kind} texture filename."),
        )
    })
}

fn rgb_color(
    command: &Command,
    color: &mut ColorAccumulator,
    config: &ScannerConfig,
) -> Result<Option<MtlColor>, ScanError> {
    color.process(command)?;
    if color.is_rgb() {
        return Ok(Some(color.color()));
    }
    if config.log_skipped_colors {
        debug!(
            "line {}: skipping {:?} color for '{}'",
            command.line_number(),
            color.form(),
            command.keyword()
        );
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn collect(text: &str) -> Result<Vec<MtlEvent>, ScanError> {
        let mut collector = EventCollector::new();
        MtlScanner::new().scan_str(text, &mut collector)?;
        Ok(collector.into_events())
    }

    fn corrupt_message(text: &str) -> String {
        match collect(text) {
            Err(ScanError::Corrupt { message, .. }) => message,
            other => panic!("expected corrupt input for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_material_declaration() {
        assert_eq!(
            collect("newmtl Brick").unwrap(),
            [MtlEvent::Material("Brick".into())]
        );
    }

    #[test]
    fn test_rgb_colors() {
        let events = collect("Ka 0.1 0.2 0.3\nKd 0.8 0.1 0.2\nKs 1 1 1\nTf 0.5 0.5 0.5").unwrap();
        assert_eq!(
            events,
            [
                MtlEvent::AmbientColor(MtlColor::new(0.1, 0.2, 0.3)),
                MtlEvent::DiffuseColor(MtlColor::new(0.8, 0.1, 0.2)),
                MtlEvent::SpecularColor(MtlColor::new(1.0, 1.0, 1.0)),
                MtlEvent::TransmissionColor(MtlColor::new(0.5, 0.5, 0.5)),
            ]
        );
    }

    #[test]
    fn test_non_rgb_colors_emit_nothing() {
        let events = collect("Kd\nKd 0.5\nKa xyz 0.1 0.2 0.3\nKs spectral metal.rfl 2.0").unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_scalars_use_last_parameter() {
        let events = collect("d -halo 0.6\nsharpness 60\nillum 2\nNs 96.078431").unwrap();
        assert_eq!(events.len(), 4);
        match events[0] {
            MtlEvent::Dissolve(value) => assert_relative_eq!(value, 0.6),
            ref other => panic!("unexpected event {other:?}"),
        }
        match events[1] {
            MtlEvent::Sharpness(value) => assert_relative_eq!(value, 60.0),
            ref other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(events[2], MtlEvent::Illumination(2));
        match events[3] {
            MtlEvent::SpecularExponent(value) => assert_relative_eq!(value, 96.078_431),
            ref other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_textures_use_last_parameter() {
        let events = collect(
            "map_Ka a.png\n\
             map_Kd  wall with space.png extra.png\n\
             map_Ks -o 0 0 0 s.png\n\
             map_Ns ns.png\n\
             map_d -clamp on alpha.png\n\
             bump -bm 0.5 bump.png\n\
             refl -type sphere sky.png",
        )
        .unwrap();
        assert_eq!(
            events,
            [
                MtlEvent::AmbientTexture("a.png".into()),
                MtlEvent::DiffuseTexture("extra.png".into()),
                MtlEvent::SpecularTexture("s.png".into()),
                MtlEvent::SpecularExponentTexture("ns.png".into()),
                MtlEvent::DissolveTexture("alpha.png".into()),
                MtlEvent::BumpTexture("bump.png".into()),
                MtlEvent::ReflectionTexture("sky.png".into()),
            ]
        );
    }

    #[test]
    fn test_comment_and_blank_lines() {
        let events = collect("\n   \n# base material\n\t#newmtl Hidden\n").unwrap();
        assert_eq!(
            events,
            [
                MtlEvent::Comment("base material".into()),
                MtlEvent::Comment("newmtl Hidden".into()),
            ]
        );
    }

    #[test]
    fn test_unknown_commands_are_ignored() {
        let events = collect("Ke 1 0 0\nTr 0.5\nNi 1.45\nnewmtl A\nPr 0.3").unwrap();
        assert_eq!(events, [MtlEvent::Material("A".into())]);
    }

    #[test]
    fn test_missing_parameter_messages() {
        assert_eq!(corrupt_message("newmtl"), "Missing material name.");
        assert_eq!(corrupt_message("d"), "Missing dissolve factor.");
        assert_eq!(corrupt_message("sharpness"), "Missing sharpness factor.");
        assert_eq!(corrupt_message("illum"), "Missing illumination model.");
        assert_eq!(corrupt_message("Ns"), "Missing specular exponent amount.");
        assert_eq!(corrupt_message("map_Ka"), "Missing ambient texture filename.");
        assert_eq!(corrupt_message("map_Kd"), "Missing diffuse texture filename.");
        assert_eq!(corrupt_message("map_Ks"), "Missing specular texture filename.");
        assert_eq!(
            corrupt_message("map_Ns"),
            "Missing specular exponent texture filename."
        );
        assert_eq!(corrupt_message("map_d"), "Missing dissolve texture filename.");
        assert_eq!(corrupt_message("bump"), "Missing bump texture filename.");
        assert_eq!(corrupt_message("refl"), "Missing reflection texture filename.");
    }

    #[test]
    fn test_scan_halts_at_first_error() {
        let mut collector = EventCollector::new();
        let mut scanner = MtlScanner::new();
        let err = scanner
            .scan_str("newmtl A\nd\nnewmtl B", &mut collector)
            .unwrap_err();

        match err {
            ScanError::Corrupt { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(collector.events(), [MtlEvent::Material("A".into())]);
        assert_eq!(scanner.state(), ScanState::Failed);
    }

    #[test]
    fn test_scanner_is_reusable_between_runs() {
        let mut scanner = MtlScanner::new();
        let mut collector = EventCollector::new();
        assert!(scanner.scan_str("d", &mut collector).is_err());
        assert_eq!(scanner.state(), ScanState::Failed);

        scanner.scan_str("newmtl A\nd 1", &mut collector).unwrap();
        assert_eq!(scanner.state(), ScanState::Ready);
        assert_eq!(collector.events().len(), 2);
    }

    #[test]
    fn test_non_finite_and_out_of_range_scalars_are_corrupt() {
        assert!(corrupt_message("d  nan").contains("nan"));
        assert!(corrupt_message("Ns inf").contains("inf"));
        assert!(corrupt_message("Kd 1.0 NaN 0.0").contains("NaN"));
        assert!(corrupt_message("illum 3000000000").contains("3000000000"));
    }

    #[test]
    fn test_malformed_color_component() {
        let message = corrupt_message("Kd 1.0 red 0.0");
        assert!(message.contains("red"), "{message}");
    }
}
