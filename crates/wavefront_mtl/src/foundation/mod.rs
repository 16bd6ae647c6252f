//! Foundation module - Shared utilities
//!
//! - Math type aliases used by color conversions
//! - Logging helpers for binaries embedding the scanner

pub mod math;
pub mod logging;
