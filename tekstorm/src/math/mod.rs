//! Vector and color math.
//!
//! All types here are plain `Copy` values: no lifecycle beyond construction,
//! and every named constant is a compile-time `const`.
//!
//! # Coordinate system
//!
//! [`Vector3`] uses a left-handed system: +X right, +Y up, +Z forward.
//!
//! # Precision
//!
//! Components are [`Real`], which is `f32` unless the `f64` feature is enabled.

mod color3;
mod color4;
mod named_colors;
mod ops;
mod vector2;
mod vector3;
mod vector4;

pub use color3::Color3;
pub use color4::Color4;
pub use named_colors::NAMED_COLORS;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Scalar type used by every math component.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// Scalar type used by every math component.
#[cfg(feature = "f64")]
pub type Real = f64;
