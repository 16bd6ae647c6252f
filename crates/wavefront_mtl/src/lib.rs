//! # Wavefront MTL
//!
//! A streaming scanner for Wavefront `.mtl` material libraries.
//!
//! ## Features
//!
//! - **Line Scanner**: Reads any `BufRead` source one line at a time, reusing its buffers
//! - **Typed Dispatch**: One handler callback per recognized command
//! - **Lazy Numbers**: Scalar parameters are converted only when a handler reads them
//! - **Tolerant Vocabulary**: Unknown commands and non-RGB colors are skipped
//!
//! ## Quick Start
//!
//! ```rust
//! use wavefront_mtl::prelude::*;
//!
//! struct Names(Vec<String>);
//!
//! impl MtlHandler for Names {
//!     type Error = ScanError;
//!
//!     fn on_material(&mut self, name: &str) -> Result<(), ScanError> {
//!         self.0.push(name.to_string());
//!         Ok(())
//!     }
//! }
//!
//! let mut names = Names(Vec::new());
//! MtlScanner::new().scan_str("newmtl Brick\nKd 0.8 0.1 0.2\nnewmtl Glass", &mut names)?;
//! assert_eq!(names.0, ["Brick", "Glass"]);
//! # Ok::<(), ScanError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod color;
pub mod config;
pub mod error;
pub mod foundation;
pub mod scanner;

pub use color::MtlColor;
pub use config::{Config, ConfigError, ConfigFormat, ScannerConfig};
pub use error::ScanError;
pub use scanner::{
    scan, ColorAccumulator, ColorForm, Command, EventCollector, MtlEvent, MtlHandler, MtlScanner,
    NumericToken, ScanState,
};

/// Common imports for scanner users
pub mod prelude {
    pub use crate::{
        scanner::{EventCollector, MtlEvent, MtlHandler, MtlScanner, NumericToken},
        Config, MtlColor, ScanError, ScannerConfig,
    };
}
