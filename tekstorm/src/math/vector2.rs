//! Two-component vector.

use super::Real;
use super::ops::{impl_componentwise_ops, impl_vector};

/// A 2-dimensional vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// The X component.
    pub x: Real,
    /// The Y component.
    pub y: Real,
}

impl Vector2 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// Unit vector along the X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// Unit vector along the Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }
}

impl_vector!(Vector2, 2 { x, y });
impl_componentwise_ops!(Vector2 { x, y });
