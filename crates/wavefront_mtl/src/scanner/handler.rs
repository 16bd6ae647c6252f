//! Handler contract
//!
//! The scanner reports every recognized command through an [`MtlHandler`].
//! Callbacks default to doing nothing, so a handler only implements the
//! events it cares about.

use super::numeric::NumericToken;
use crate::error::ScanError;

/// Receiver of MTL scan events
///
/// Each callback may fail with [`MtlHandler::Error`]. The scanner returns
/// such failures unchanged and stops at the current line. Scanner errors
/// are converted into the handler's error type through `From`.
#[allow(unused_variables)]
pub trait MtlHandler {
    /// Error type returned by callbacks and by the scan as a whole
    type Error: From<ScanError>;

    /// A comment line (`# text`)
    fn on_comment(&mut self, text: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A material declaration (`newmtl name`)
    fn on_material(&mut self, name: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Ambient color as RGB (`Ka r g b`)
    fn on_ambient_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Diffuse color as RGB (`Kd r g b`)
    fn on_diffuse_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Specular color as RGB (`Ks r g b`)
    fn on_specular_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Transmission filter as RGB (`Tf r g b`)
    fn on_transmission_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Dissolve factor (`d`)
    fn on_dissolve(&mut self, factor: &NumericToken<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Reflection sharpness (`sharpness`)
    fn on_sharpness(&mut self, factor: &NumericToken<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Illumination model index (`illum`)
    fn on_illumination(&mut self, model: &NumericToken<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Specular exponent (`Ns`)
    fn on_specular_exponent(&mut self, amount: &NumericToken<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Ambient texture (`map_Ka`)
    fn on_ambient_texture(&mut self, filename: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Diffuse texture (`map_Kd`)
    fn on_diffuse_texture(&mut self, filename: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Specular texture (`map_Ks`)
    fn on_specular_texture(&mut self, filename: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Specular exponent texture (`map_Ns`)
    fn on_specular_exponent_texture(&mut self, filename: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Dissolve texture (`map_d`)
    fn on_dissolve_texture(&mut self, filename: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Bump texture (`bump`)
    fn on_bump_texture(&mut self, filename: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Reflection texture (`refl`)
    fn on_reflection_texture(&mut self, filename: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}
