//! Lazily converted numeric parameters
//!
//! Parameters such as dissolve factors or specular exponents are handed to
//! the handler before they are converted. The text is only parsed once a
//! consumer actually asks for the value, and the result is cached.

use std::cell::OnceCell;
use std::fmt;

use crate::error::ScanError;

/// A numeric parameter backed by its raw text
///
/// Conversion happens on the first call to [`NumericToken::value`] and is
/// memoized for the lifetime of the token. Malformed text is reported as
/// corrupt input at that point, never at tokenization time.
pub struct NumericToken<'a> {
    text: &'a str,
    line: usize,
    cached: OnceCell<f32>,
}

impl<'a> NumericToken<'a> {
    /// Wrap a parameter slice read from the given 1-based line
    pub const fn new(text: &'a str, line: usize) -> Self {
        Self {
            text,
            line,
            cached: OnceCell::new(),
        }
    }

    /// Raw text of the parameter
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Line the parameter was read from
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Whether the value has already been converted
    pub fn is_resolved(&self) -> bool {
        self.cached.get().is_some()
    }

    /// Converted value of the parameter
    ///
    /// # Errors
    /// Returns [`ScanError::Corrupt`] if the text is not a valid float.
    pub fn value(&self) -> Result<f32, ScanError> {
        if let Some(value) = self.cached.get() {
            return Ok(*value);
        }
        let value = parse_float(self.text, self.line)?;
        Ok(*self.cached.get_or_init(|| value))
    }

    /// Converted value as an integer, as used by `illum`
    ///
    /// # Errors
    /// Returns [`ScanError::Corrupt`] if the text is not a valid float, or
    /// the value is fractional or outside the `i32` range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn int_value(&self) -> Result<i32, ScanError> {
        let value = self.value()?;
        // i32::MAX rounds up to 2^31 as f32, so the upper bound is exclusive
        if value.fract() != 0.0 || value < -2_147_483_648.0 || value >= 2_147_483_648.0 {
            return Err(ScanError::corrupt(
                self.line,
                format!("Invalid integer '{}'.", self.text),
            ));
        }
        Ok(value as i32)
    }
}

impl fmt::Debug for NumericToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericToken")
            .field("text", &self.text)
            .field("line", &self.line)
            .field("cached", &self.cached.get())
            .finish()
    }
}

/// Parse a float parameter, reporting failures as corrupt input on `line`
///
/// Only finite values are accepted; `nan`, `inf` and values that overflow
/// `f32` are corrupt input.
pub(crate) fn parse_float(text: &str, line: usize) -> Result<f32, ScanError> {
    match text.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ScanError::corrupt(line, format!("Invalid number '{text}'."))),
    }
}
