//! Four-component vector.

use super::{Real, Vector3};
use super::ops::{impl_componentwise_ops, impl_vector};

/// A 4-dimensional vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4 {
    /// The X component.
    pub x: Real,
    /// The Y component.
    pub y: Real,
    /// The Z component.
    pub z: Real,
    /// The W component.
    pub w: Real,
}

impl Vector4 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Unit vector along the X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Unit vector along the Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Unit vector along the W axis.
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    /// Extend a 3-dimensional vector with a W component.
    #[inline]
    pub const fn from_vector3(v: Vector3, w: Real) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// The X, Y and Z components.
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl_vector!(Vector4, 4 { x, y, z, w });
impl_componentwise_ops!(Vector4 { x, y, z, w });
