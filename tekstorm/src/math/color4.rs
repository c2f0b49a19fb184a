//! RGBA color.

use super::{Color3, NAMED_COLORS, Real, Vector3, Vector4};
use super::ops::impl_componentwise_ops;

/// An RGBA color with components nominally in `[0, 1]`.
///
/// Alpha is straight (not premultiplied). Components are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color4 {
    /// Red component.
    pub r: Real,
    /// Green component.
    pub g: Real,
    /// Blue component.
    pub b: Real,
    /// Alpha component, 1 is fully opaque.
    pub a: Real,
}

impl Color4 {
    /// Black with zero alpha.
    pub const TRANSPARENT_BLACK: Self = Self::from_rgba8(0, 0, 0, 0);
    /// White with zero alpha.
    pub const TRANSPARENT_WHITE: Self = Self::from_rgba8(255, 255, 255, 0);

    /// Create a color from floating point components.
    #[inline]
    pub const fn new(r: Real, g: Real, b: Real, a: Real) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channels, mapping `0..=255` onto `0.0..=1.0`.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as Real / 255.0,
            g as Real / 255.0,
            b as Real / 255.0,
            a as Real / 255.0,
        )
    }

    /// Look up a named color.
    ///
    /// Matching ignores case, spaces, `_` and `-`, so `"CornflowerBlue"`,
    /// `"cornflower blue"` and `"CORNFLOWER_BLUE"` all resolve to
    /// [`Color4::CORNFLOWER_BLUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tekstorm::math::Color4;
    ///
    /// assert_eq!(Color4::from_name("hot-pink"), Some(Color4::HOT_PINK));
    /// assert_eq!(Color4::from_name("octarine"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| normalize_name(candidate) == wanted)
            .map(|&(_, color)| color)
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: Real) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// The color without its alpha.
    #[inline]
    pub const fn rgb(self) -> Color3 {
        Color3::new(self.r, self.g, self.b)
    }

    /// The RGB components as a vector, dropping alpha.
    #[inline]
    pub const fn to_vector3(self) -> Vector3 {
        Vector3::new(self.r, self.g, self.b)
    }

    /// The components as a vector (`r, g, b, a` to `x, y, z, w`).
    #[inline]
    pub const fn to_vector4(self) -> Vector4 {
        Vector4::new(self.r, self.g, self.b, self.a)
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl From<Color3> for Color4 {
    fn from(color: Color3) -> Self {
        Self::new(color.r, color.g, color.b, 1.0)
    }
}

impl From<Vector4> for Color4 {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<[Real; 4]> for Color4 {
    fn from([r, g, b, a]: [Real; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl_componentwise_ops!(Color4 { r, g, b, a });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8() {
        assert_eq!(Color4::from_rgba8(255, 255, 255, 255), Color4::WHITE);
        assert_eq!(Color4::from_rgba8(0, 0, 0, 0), Color4::TRANSPARENT_BLACK);
        assert_eq!(Color4::TRANSPARENT_WHITE.rgb(), Color3::WHITE);
    }

    #[test]
    fn test_named_constants_are_opaque() {
        assert_eq!(Color4::CORNFLOWER_BLUE.a, 1.0);
        assert_eq!(Color4::CORNFLOWER_BLUE.rgb(), Color3::CORNFLOWER_BLUE);
        assert_eq!(Color4::from(Color3::GOLD), Color4::GOLD);
    }

    #[test]
    fn test_from_name_variants() {
        for name in ["CornflowerBlue", "cornflower blue", "CORNFLOWER_BLUE", "cornflower-blue"] {
            assert_eq!(Color4::from_name(name), Some(Color4::CORNFLOWER_BLUE), "{name}");
        }
        assert_eq!(
            Color4::from_name("transparent white"),
            Some(Color4::TRANSPARENT_WHITE)
        );
        assert_eq!(Color4::from_name(""), None);
    }

    #[test]
    fn test_vector_conversions() {
        let color = Color4::new(0.25, 0.5, 0.75, 0.5);
        assert_eq!(color.to_vector4(), Vector4::new(0.25, 0.5, 0.75, 0.5));
        assert_eq!(color.to_vector3(), Vector3::new(0.25, 0.5, 0.75));
        assert_eq!(Color4::from(color.to_vector4()), color);
        assert_eq!(color.with_alpha(1.0).a, 1.0);
    }

    #[test]
    fn test_blend_ops() {
        let half = Color4::WHITE * 0.5;
        assert_eq!(half, Color4::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(half + half, Color4::WHITE);
        assert_eq!(Color4::WHITE - Color4::WHITE, Color4::TRANSPARENT_BLACK);
        assert_eq!(Color4::WHITE / 2.0, half);
    }
}
