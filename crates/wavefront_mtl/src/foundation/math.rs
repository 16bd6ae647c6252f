//! Math types shared with renderer-side consumers

pub use nalgebra::Vector3;

/// 3D vector type, used for RGB triples on the renderer side
pub type Vec3 = Vector3<f32>;
