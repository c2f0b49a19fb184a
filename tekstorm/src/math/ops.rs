//! Component-wise operator and helper implementations shared by the vector and
//! color types.

/// Implements `+ - * /` (and their assigning forms) against `Self` and
/// against a scalar, component by component.
macro_rules! impl_componentwise_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl_componentwise_ops!(@op $ty { $($field),+ } Add add AddAssign add_assign +);
        impl_componentwise_ops!(@op $ty { $($field),+ } Sub sub SubAssign sub_assign -);
        impl_componentwise_ops!(@op $ty { $($field),+ } Mul mul MulAssign mul_assign *);
        impl_componentwise_ops!(@op $ty { $($field),+ } Div div DivAssign div_assign /);

        impl core::ops::Mul<$ty> for $crate::math::Real {
            type Output = $ty;

            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }
    };
    (@op $ty:ident { $($field:ident),+ } $Op:ident $op:ident $OpAssign:ident $op_assign:ident $sym:tt) => {
        impl core::ops::$Op for $ty {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self { $($field: self.$field $sym rhs.$field),+ }
            }
        }

        impl core::ops::$Op<$crate::math::Real> for $ty {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: $crate::math::Real) -> Self {
                Self { $($field: self.$field $sym rhs),+ }
            }
        }

        impl core::ops::$OpAssign for $ty {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field $sym rhs.$field;)+
            }
        }

        impl core::ops::$OpAssign<$crate::math::Real> for $ty {
            #[inline]
            fn $op_assign(&mut self, rhs: $crate::math::Real) {
                $(self.$field = self.$field $sym rhs;)+
            }
        }
    };
}

/// Implements the geometric helpers every vector dimension shares, plus array
/// conversions, negation and `Display`.
macro_rules! impl_vector {
    ($ty:ident, $n:literal { $($field:ident),+ }) => {
        impl $ty {
            /// Create a vector with every component set to `value`.
            #[inline]
            pub const fn splat(value: $crate::math::Real) -> Self {
                Self { $($field: value),+ }
            }

            /// The components as an array, in declaration order.
            #[inline]
            pub const fn to_array(self) -> [$crate::math::Real; $n] {
                [$(self.$field),+]
            }

            /// Dot product of two vectors.
            #[inline]
            pub fn dot(self, other: Self) -> $crate::math::Real {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Squared length. Cheaper than [`Self::length`] when only comparing.
            #[inline]
            pub fn length_squared(self) -> $crate::math::Real {
                self.dot(self)
            }

            /// Euclidean length.
            #[inline]
            pub fn length(self) -> $crate::math::Real {
                self.length_squared().sqrt()
            }

            /// Squared distance between two points.
            #[inline]
            pub fn distance_squared(self, other: Self) -> $crate::math::Real {
                (self - other).length_squared()
            }

            /// Distance between two points.
            #[inline]
            pub fn distance(self, other: Self) -> $crate::math::Real {
                (self - other).length()
            }

            /// Unit vector pointing the same way, or zero for a zero vector.
            #[inline]
            pub fn normalized(self) -> Self {
                let length = self.length();
                if length == 0.0 {
                    return Self::splat(0.0);
                }
                self / length
            }

            /// Turn this vector into a unit vector in place.
            #[inline]
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// Reflect this vector off a surface with the given unit `normal`.
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                self - normal * (2.0 * self.dot(normal))
            }
        }

        impl core::ops::Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl From<[$crate::math::Real; $n]> for $ty {
            #[inline]
            fn from([$($field),+]: [$crate::math::Real; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl From<$ty> for [$crate::math::Real; $n] {
            #[inline]
            fn from(value: $ty) -> Self {
                value.to_array()
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let [first, rest @ ..] = self.to_array();
                write!(f, "({}", first)?;
                for component in rest {
                    write!(f, ", {}", component)?;
                }
                write!(f, ")")
            }
        }
    };
}

pub(crate) use {impl_componentwise_ops, impl_vector};

#[cfg(test)]
pub(crate) fn approx_eq(a: crate::math::Real, b: crate::math::Real) -> bool {
    (a - b).abs() <= 1e-5
}
