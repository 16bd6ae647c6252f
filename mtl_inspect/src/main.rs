//! MTL inspector
//!
//! Scans a Wavefront `.mtl` file and prints every event the scanner reports.
//!
//! Usage: mtl_inspect [--config scanner.toml] [--quiet-comments] <file.mtl>

use std::fs::File;
use std::io::{BufReader, Write};
use std::process::ExitCode;

use thiserror::Error;
use wavefront_mtl::prelude::*;
use wavefront_mtl::ConfigError;

const USAGE: &str = "usage: mtl_inspect [--config <file.toml|file.ron>] [--quiet-comments] <file.mtl>";

#[derive(Error, Debug)]
enum InspectError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to load config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Scan { path: String, source: ScanError },
}

struct Options {
    path: String,
    config: ScannerConfig,
    show_comments: bool,
}

impl Options {
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, InspectError> {
        let mut path = None;
        let mut config = ScannerConfig::default();
        let mut show_comments = true;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let config_path = args
                        .next()
                        .ok_or_else(|| InspectError::Usage("--config needs a path".to_string()))?;
                    config = ScannerConfig::load_from_file(&config_path)?;
                }
                "--quiet-comments" => show_comments = false,
                "-h" | "--help" => return Err(InspectError::Usage(USAGE.to_string())),
                _ if path.is_none() => path = Some(arg),
                _ => return Err(InspectError::Usage(format!("unexpected argument '{arg}'"))),
            }
        }

        let path = path.ok_or_else(|| InspectError::Usage(USAGE.to_string()))?;
        Ok(Self {
            path,
            config,
            show_comments,
        })
    }
}

/// Prints events as they arrive and keeps a few totals
struct Printer<W: Write> {
    out: W,
    show_comments: bool,
    materials: usize,
    events: usize,
}

impl<W: Write> Printer<W> {
    fn print(&mut self, line: std::fmt::Arguments<'_>) -> Result<(), ScanError> {
        self.events += 1;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn color(&mut self, label: &str, r: f32, g: f32, b: f32) -> Result<(), ScanError> {
        self.print(format_args!("  {label:<20} {r:.6} {g:.6} {b:.6}"))
    }

    fn scalar(&mut self, label: &str, value: &NumericToken<'_>) -> Result<(), ScanError> {
        let value = value.value()?;
        self.print(format_args!("  {label:<20} {value}"))
    }

    fn texture(&mut self, label: &str, filename: &str) -> Result<(), ScanError> {
        self.print(format_args!("  {label:<20} {filename}"))
    }
}

impl<W: Write> MtlHandler for Printer<W> {
    type Error = ScanError;

    fn on_comment(&mut self, text: &str) -> Result<(), ScanError> {
        if self.show_comments {
            self.print(format_args!("# {text}"))?;
        }
        Ok(())
    }

    fn on_material(&mut self, name: &str) -> Result<(), ScanError> {
        self.materials += 1;
        self.print(format_args!("material {name}"))
    }

    fn on_ambient_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), ScanError> {
        self.color("ambient", r, g, b)
    }

    fn on_diffuse_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), ScanError> {
        self.color("diffuse", r, g, b)
    }

    fn on_specular_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), ScanError> {
        self.color("specular", r, g, b)
    }

    fn on_transmission_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), ScanError> {
        self.color("transmission", r, g, b)
    }

    fn on_dissolve(&mut self, factor: &NumericToken<'_>) -> Result<(), ScanError> {
        self.scalar("dissolve", factor)
    }

    fn on_sharpness(&mut self, factor: &NumericToken<'_>) -> Result<(), ScanError> {
        self.scalar("sharpness", factor)
    }

    fn on_illumination(&mut self, model: &NumericToken<'_>) -> Result<(), ScanError> {
        let model = model.int_value()?;
        self.print(format_args!("  {:<20} {model}", "illumination"))
    }

    fn on_specular_exponent(&mut self, amount: &NumericToken<'_>) -> Result<(), ScanError> {
        self.scalar("specular exponent", amount)
    }

    fn on_ambient_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.texture("ambient map", filename)
    }

    fn on_diffuse_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.texture("diffuse map", filename)
    }

    fn on_specular_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.texture("specular map", filename)
    }

    fn on_specular_exponent_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.texture("specular exp. map", filename)
    }

    fn on_dissolve_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.texture("dissolve map", filename)
    }

    fn on_bump_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.texture("bump map", filename)
    }

    fn on_reflection_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.texture("reflection map", filename)
    }
}

fn run(options: Options) -> Result<(), InspectError> {
    let file = File::open(&options.path).map_err(|source| InspectError::Open {
        path: options.path.clone(),
        source,
    })?;

    let stdout = std::io::stdout();
    let mut printer = Printer {
        out: stdout.lock(),
        show_comments: options.show_comments,
        materials: 0,
        events: 0,
    };

    MtlScanner::with_config(options.config)
        .scan(BufReader::new(file), &mut printer)
        .map_err(|source| InspectError::Scan {
            path: options.path.clone(),
            source,
        })?;

    log::info!(
        "{}: {} material(s), {} event(s)",
        options.path,
        printer.materials,
        printer.events
    );
    Ok(())
}

fn main() -> ExitCode {
    wavefront_mtl::foundation::logging::init_with_level("info");

    let result = Options::from_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(InspectError::Usage(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_options_require_path() {
        assert!(matches!(
            Options::from_args(args(&[])),
            Err(InspectError::Usage(_))
        ));
    }

    #[test]
    fn test_options_flags() {
        let options = Options::from_args(args(&["--quiet-comments", "scene.mtl"])).unwrap();
        assert_eq!(options.path, "scene.mtl");
        assert!(!options.show_comments);
        assert_eq!(options.config, ScannerConfig::default());
    }

    #[test]
    fn test_printer_output() {
        let mut printer = Printer {
            out: Vec::new(),
            show_comments: false,
            materials: 0,
            events: 0,
        };
        MtlScanner::new()
            .scan_str("# hidden\nnewmtl Brick\nKd 0.8 0.1 0.2\nillum 2\nmap_Kd -bm 1 b.png", &mut printer)
            .unwrap();

        let text = String::from_utf8(printer.out).unwrap();
        assert!(!text.contains("hidden"));
        assert!(text.contains("material Brick"));
        assert!(text.contains("0.800000 0.100000 0.200000"));
        assert!(text.contains("b.png"));
        assert_eq!(printer.materials, 1);
        assert_eq!(printer.events, 4);
    }
}
