//! Three-component vector.

use super::Real;
use super::ops::{impl_componentwise_ops, impl_vector};

/// A 3-dimensional vector in a left-handed coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// The X component.
    pub x: Real,
    /// The Y component.
    pub y: Real,
    /// The Z component.
    pub z: Real,
}

impl Vector3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit vector along the X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Unit vector pointing up (+Y).
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector pointing down (-Y).
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// Unit vector pointing left (-X).
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// Unit vector pointing right (+X).
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector pointing forward (+Z).
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// Unit vector pointing backward (-Z).
    pub const BACKWARD: Self = Self::new(0.0, 0.0, -1.0);

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Cross product. In this left-handed system `RIGHT x UP == FORWARD`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl_vector!(Vector3, 3 { x, y, z });
impl_componentwise_ops!(Vector3 { x, y, z });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ops::approx_eq;

    #[test]
    fn test_directions() {
        assert_eq!(Vector3::UP, -Vector3::DOWN);
        assert_eq!(Vector3::RIGHT, -Vector3::LEFT);
        assert_eq!(Vector3::FORWARD, -Vector3::BACKWARD);
        assert_eq!(Vector3::RIGHT.cross(Vector3::UP), Vector3::FORWARD);
    }

    #[test]
    fn test_cross_is_perpendicular() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert!(approx_eq(c.dot(a), 0.0));
        assert!(approx_eq(c.dot(b), 0.0));
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        v.normalize();
        assert!(approx_eq(v.length(), 1.0));
        assert!(approx_eq(v.y, 0.6));

        assert_eq!(Vector3::ZERO.normalized(), Vector3::ZERO);
    }

    #[test]
    fn test_reflect_off_wall() {
        let incoming = Vector3::new(2.0, -1.0, 3.0);
        let reflected = incoming.reflect(Vector3::LEFT);
        assert_eq!(reflected, Vector3::new(-2.0, -1.0, 3.0));
        assert!(approx_eq(reflected.length(), incoming.length()));
    }

    #[test]
    fn test_array_conversions() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let array: [Real; 3] = v.into();
        assert_eq!(array, [1.0, 2.0, 3.0]);
        assert_eq!(Vector3::splat(2.0), Vector3::ONE * 2.0);
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Vector3::ONE;
        v += Vector3::UNIT_Z;
        v *= 3.0;
        assert_eq!(v, Vector3::new(3.0, 3.0, 6.0));
    }
}
