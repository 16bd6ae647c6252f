//! RGB color value used by material consumers

use std::hash::{Hash, Hasher};

use approx::AbsDiffEq;

use crate::foundation::math::Vec3;

/// Tolerance used when comparing color components
pub const COLOR_EPSILON: f32 = 0.000_001;

/// An RGB color
///
/// Components are conventionally in `[0.0, 1.0]` but this is not enforced.
/// Equality is approximate: two colors are equal when every component
/// differs by less than [`COLOR_EPSILON`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MtlColor {
    /// Amount of red
    pub r: f32,
    /// Amount of green
    pub g: f32,
    /// Amount of blue
    pub b: f32,
}

impl MtlColor {
    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color from its components
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Replace all three components
    pub fn set_to(&mut self, r: f32, g: f32, b: f32) {
        *self = Self::new(r, g, b);
    }

    /// Replace all three components with those of `other`
    pub fn set_to_color(&mut self, other: &Self) {
        *self = *other;
    }
}

impl PartialEq for MtlColor {
    fn eq(&self, other: &Self) -> bool {
        (self.r - other.r).abs() < COLOR_EPSILON
            && (self.g - other.g).abs() < COLOR_EPSILON
            && (self.b - other.b).abs() < COLOR_EPSILON
    }
}

/// Hashes components scaled by 1e6 and truncated, matching the hash of the
/// material model this type mirrors. Colors that compare equal under the
/// approximate `PartialEq` may still hash differently near truncation
/// boundaries, so `MtlColor` is not meant to be used as a hash key.
impl Hash for MtlColor {
    #[allow(clippy::cast_possible_truncation)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut result = (self.r * 1_000_000.0) as i32;
        result = result.wrapping_mul(31).wrapping_add((self.g * 1_000_000.0) as i32);
        result = result.wrapping_mul(31).wrapping_add((self.b * 1_000_000.0) as i32);
        result.hash(state);
    }
}

impl AbsDiffEq for MtlColor {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        COLOR_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl From<[f32; 3]> for MtlColor {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<MtlColor> for [f32; 3] {
    fn from(color: MtlColor) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<Vec3> for MtlColor {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<MtlColor> for Vec3 {
    fn from(color: MtlColor) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}
