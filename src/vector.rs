// src/vector.rs

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::error::GeometryError;
use crate::scalar::Scalar;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Homogeneous vector. `w == 1` marks a point, `w == 0` a direction.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;

// Everything that is the same for every dimension: arithmetic, length,
// normalization, distances, slice construction and GPU-upload markers.
macro_rules! vector_common {
    ($name:ident, $dim:expr, $($field:ident),+) => {
        impl<T> $name<T> {
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> $name<T> {
            #[inline]
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            #[inline(always)]
            pub fn dot(&self, other: &Self) -> T {
                T::zero() $(+ self.$field * other.$field)+
            }

            #[inline(always)]
            pub fn length_sqr(&self) -> T {
                self.dot(self)
            }

            #[inline]
            pub fn length(&self) -> T {
                self.length_sqr().sqrt()
            }

            /// Returns a unit-length copy. The length must not be zero.
            pub fn normalized(&self) -> Self {
                let length = self.length();
                debug_assert!(length != T::zero(), "Can't normalize a vector with length 0");
                let inverse = T::one() / length;
                Self { $($field: self.$field * inverse),+ }
            }

            /// Normalizes in place. The length must not be zero.
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// `None` when the length is exactly zero.
            pub fn try_normalized(&self) -> Option<Self> {
                let length = self.length();
                if length == T::zero() {
                    return None;
                }
                let inverse = T::one() / length;
                Some(Self { $($field: self.$field * inverse),+ })
            }

            #[inline]
            pub fn sqr_distance(&self, other: &Self) -> T {
                (*self - *other).length_sqr()
            }

            #[inline]
            pub fn distance(&self, other: &Self) -> T {
                self.sqr_distance(other).sqrt()
            }

            #[inline]
            pub fn component_div(&self, other: &Self) -> Self {
                Self { $($field: self.$field / other.$field),+ }
            }

            #[inline]
            pub fn min(&self, other: &Self) -> Self {
                Self { $($field: self.$field.min(other.$field)),+ }
            }

            #[inline]
            pub fn max(&self, other: &Self) -> Self {
                Self { $($field: self.$field.max(other.$field)),+ }
            }
        }

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: T) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl<T: Scalar> Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, scalar: T) -> Self {
                let inverse = T::one() / scalar;
                Self { $($field: self.$field * inverse),+ }
            }
        }

        impl<T: Scalar> Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, scalar: T) {
                *self = *self * scalar;
            }
        }

        impl<T: Scalar> DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, scalar: T) {
                *self = *self / scalar;
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;
            #[inline]
            fn mul(self, vector: $name<f32>) -> $name<f32> {
                vector * self
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;
            #[inline]
            fn mul(self, vector: $name<f64>) -> $name<f64> {
                vector * self
            }
        }

        impl<T: Copy> TryFrom<&[T]> for $name<T> {
            type Error = GeometryError;

            fn try_from(values: &[T]) -> Result<Self, Self::Error> {
                let array: [T; $dim] =
                    values.try_into().map_err(|_| GeometryError::DimensionMismatch {
                        expected: $dim,
                        actual: values.len(),
                    })?;
                let [$($field),+] = array;
                Ok(Self { $($field),+ })
            }
        }

        impl<T: Copy> From<[T; $dim]> for $name<T> {
            fn from(array: [T; $dim]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl<T: Copy> From<$name<T>> for [T; $dim] {
            fn from(vector: $name<T>) -> Self {
                [$(vector.$field),+]
            }
        }

        unsafe impl<T: Zeroable> Zeroable for $name<T> {}
        unsafe impl<T: Pod> Pod for $name<T> {}
    };
}

vector_common!(Vector2, 2, x, y);
vector_common!(Vector3, 3, x, y, z);
vector_common!(Vector4, 4, x, y, z, w);

macro_rules! vector_presets {
    ($($t:ty),+) => {$(
        impl Vector2<$t> {
            pub const ZERO: Self = Self::new(0.0, 0.0);
            pub const ONE: Self = Self::new(1.0, 1.0);
            pub const UP: Self = Self::new(0.0, 1.0);
            pub const RIGHT: Self = Self::new(1.0, 0.0);
        }

        impl Vector3<$t> {
            pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
            pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
            pub const UP: Self = Self::new(0.0, 1.0, 0.0);
            pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
            pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
        }

        impl Vector4<$t> {
            pub const ZERO_P: Self = Self::new(0.0, 0.0, 0.0, 1.0);
            pub const ONE_P: Self = Self::new(1.0, 1.0, 1.0, 1.0);
            pub const UP_P: Self = Self::new(0.0, 1.0, 0.0, 1.0);
            pub const FORWARD_P: Self = Self::new(0.0, 0.0, 1.0, 1.0);
            pub const RIGHT_P: Self = Self::new(1.0, 0.0, 0.0, 1.0);

            pub const ZERO_V: Self = Self::new(0.0, 0.0, 0.0, 0.0);
            pub const ONE_V: Self = Self::new(1.0, 1.0, 1.0, 0.0);
            pub const UP_V: Self = Self::new(0.0, 1.0, 0.0, 0.0);
            pub const FORWARD_V: Self = Self::new(0.0, 0.0, 1.0, 0.0);
            pub const RIGHT_V: Self = Self::new(1.0, 0.0, 0.0, 0.0);
        }
    )+};
}

vector_presets!(f32, f64);

impl<T: Scalar> Vector2<T> {
    pub fn to_vector3(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, T::zero())
    }

    pub fn to_vector4_point(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, T::zero(), T::one())
    }

    pub fn to_vector4_direction(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, T::zero(), T::zero())
    }
}

impl<T: Scalar> Vector3<T> {
    #[inline(always)]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn to_vector2(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    pub fn to_vector4_point(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, T::one())
    }

    pub fn to_vector4_direction(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, T::zero())
    }
}

impl<T: Scalar> Vector4<T> {
    pub fn to_vector2(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Drops `w` without dividing by it.
    pub fn to_vector3(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn to_vector4_point(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, T::one())
    }

    pub fn to_vector4_direction(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, T::zero())
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl<T: fmt::Display> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x, self.y, self.z, self.w)
    }
}
