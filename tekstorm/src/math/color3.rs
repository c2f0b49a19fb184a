//! RGB color.

use super::{Color4, Real, Vector3, Vector4};
use super::ops::impl_componentwise_ops;

/// An opaque RGB color with components nominally in `[0, 1]`.
///
/// Components are never clamped, so intermediate results of blending math may
/// leave that range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color3 {
    /// Red component.
    pub r: Real,
    /// Green component.
    pub g: Real,
    /// Blue component.
    pub b: Real,
}

impl Color3 {
    /// Create a color from floating point components.
    #[inline]
    pub const fn new(r: Real, g: Real, b: Real) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels, mapping `0..=255` onto `0.0..=1.0`.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as Real / 255.0, g as Real / 255.0, b as Real / 255.0)
    }

    /// Look up a named color such as `"cornflower blue"` or `"DARK_ORANGE"`.
    ///
    /// Transparent entries have no RGB equivalent and are not matched.
    pub fn from_name(name: &str) -> Option<Self> {
        Color4::from_name(name)
            .filter(|color| color.a >= 1.0)
            .map(Color4::rgb)
    }

    /// The components as a vector (`r, g, b` to `x, y, z`).
    #[inline]
    pub const fn to_vector3(self) -> Vector3 {
        Vector3::new(self.r, self.g, self.b)
    }

    /// The components as a vector with `w` set to 1.
    #[inline]
    pub const fn to_vector4(self) -> Vector4 {
        Vector4::new(self.r, self.g, self.b, 1.0)
    }
}

impl From<Vector3> for Color3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[Real; 3]> for Color3 {
    fn from([r, g, b]: [Real; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl_componentwise_ops!(Color3 { r, g, b });
