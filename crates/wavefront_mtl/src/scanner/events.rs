//! Owned event stream
//!
//! [`EventCollector`] turns the callback contract into a list of
//! [`MtlEvent`] values for consumers that prefer a separate loop over the
//! results. Numeric parameters are resolved as they are received, so a
//! malformed number fails the scan at its own line.

use super::handler::MtlHandler;
use super::numeric::NumericToken;
use crate::color::MtlColor;
use crate::error::ScanError;

/// One scan event with owned payload
#[derive(Debug, Clone, PartialEq)]
pub enum MtlEvent {
    /// Comment text
    Comment(String),
    /// Material declaration
    Material(String),
    /// `Ka`
    AmbientColor(MtlColor),
    /// `Kd`
    DiffuseColor(MtlColor),
    /// `Ks`
    SpecularColor(MtlColor),
    /// `Tf`
    TransmissionColor(MtlColor),
    /// `d`
    Dissolve(f32),
    /// `sharpness`
    Sharpness(f32),
    /// `illum`
    Illumination(i32),
    /// `Ns`
    SpecularExponent(f32),
    /// `map_Ka`
    AmbientTexture(String),
    /// `map_Kd`
    DiffuseTexture(String),
    /// `map_Ks`
    SpecularTexture(String),
    /// `map_Ns`
    SpecularExponentTexture(String),
    /// `map_d`
    DissolveTexture(String),
    /// `bump`
    BumpTexture(String),
    /// `refl`
    ReflectionTexture(String),
}

/// Handler that records every event in order
#[derive(Debug, Default)]
pub struct EventCollector {
    events: Vec<MtlEvent>,
}

impl EventCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far
    pub fn events(&self) -> &[MtlEvent] {
        &self.events
    }

    /// Consume the collector and return its events
    pub fn into_events(self) -> Vec<MtlEvent> {
        self.events
    }

    fn push(&mut self, event: MtlEvent) -> Result<(), ScanError> {
        self.events.push(event);
        Ok(())
    }
}

impl MtlHandler for EventCollector {
    type Error = ScanError;

    fn on_comment(&mut self, text: &str) -> Result<(), ScanError> {
        self.push(MtlEvent::Comment(text.to_owned()))
    }

    fn on_material(&mut self, name: &str) -> Result<(), ScanError> {
        self.push(MtlEvent::Material(name.to_owned()))
    }

    fn on_ambient_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), ScanError> {
        self.push(MtlEvent::AmbientColor(MtlColor::new(r, g, b)))
    }

    fn on_diffuse_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), ScanError> {
        self.push(MtlEvent::DiffuseColor(MtlColor::new(r, g, b)))
    }

    fn on_specular_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), ScanError> {
        self.push(MtlEvent::SpecularColor(MtlColor::new(r, g, b)))
    }

    fn on_transmission_color_rgb(&mut self, r: f32, g: f32, b: f32) -> Result<(), ScanError> {
        self.push(MtlEvent::TransmissionColor(MtlColor::new(r, g, b)))
    }

    fn on_dissolve(&mut self, factor: &NumericToken<'_>) -> Result<(), ScanError> {
        self.push(MtlEvent::Dissolve(factor.value()?))
    }

    fn on_sharpness(&mut self, factor: &NumericToken<'_>) -> Result<(), ScanError> {
        self.push(MtlEvent::Sharpness(factor.value()?))
    }

    fn on_illumination(&mut self, model: &NumericToken<'_>) -> Result<(), ScanError> {
        self.push(MtlEvent::Illumination(model.int_value()?))
    }

    fn on_specular_exponent(&mut self, amount: &NumericToken<'_>) -> Result<(), ScanError> {
        self.push(MtlEvent::SpecularExponent(amount.value()?))
    }

    fn on_ambient_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.push(MtlEvent::AmbientTexture(filename.to_owned()))
    }

    fn on_diffuse_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.push(MtlEvent::DiffuseTexture(filename.to_owned()))
    }

    fn on_specular_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.push(MtlEvent::SpecularTexture(filename.to_owned()))
    }

    fn on_specular_exponent_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.push(MtlEvent::SpecularExponentTexture(filename.to_owned()))
    }

    fn on_dissolve_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.push(MtlEvent::DissolveTexture(filename.to_owned()))
    }

    fn on_bump_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.push(MtlEvent::BumpTexture(filename.to_owned()))
    }

    fn on_reflection_texture(&mut self, filename: &str) -> Result<(), ScanError> {
        self.push(MtlEvent::ReflectionTexture(filename.to_owned()))
    }
}
