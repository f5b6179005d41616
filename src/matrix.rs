// src/matrix.rs
//
// Row-major storage, 1-indexed `(row, column)` access. Vectors are treated as
// rows: `v * M` and `M * v` both compute `out[j] = sum_i v[i] * M(i, j)`, so
// translation lives in row 4 and `A * B` applies A first, then B.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::error::GeometryError;
use crate::scalar::Scalar;
use crate::vector::{Vector3, Vector4};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3x3<T> {
    data: [T; 9],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4x4<T> {
    data: [T; 16],
}

pub type Matrix3x3f = Matrix3x3<f32>;
pub type Matrix4x4f = Matrix4x4<f32>;

macro_rules! matrix_common {
    ($name:ident, $vector:ident, $n:expr) => {
        impl<T: Scalar> $name<T> {
            const SIZE: usize = $n;

            /// The identity matrix.
            pub fn new() -> Self {
                let mut data = [T::zero(); $n * $n];
                for i in 0..Self::SIZE {
                    data[i * Self::SIZE + i] = T::one();
                }
                Self { data }
            }

            pub fn from_rows(rows: [[T; $n]; $n]) -> Self {
                let mut data = [T::zero(); $n * $n];
                for (row_index, row) in rows.iter().enumerate() {
                    data[row_index * Self::SIZE..(row_index + 1) * Self::SIZE].copy_from_slice(row);
                }
                Self { data }
            }

            /// Row-major fill; entries past the end of `values` stay zero.
            /// `values` must not be longer than the matrix.
            pub fn from_slice(values: &[T]) -> Self {
                debug_assert!(
                    values.len() <= Self::SIZE * Self::SIZE,
                    "Initializer list is too long."
                );
                let mut data = [T::zero(); $n * $n];
                let count = values.len().min(data.len());
                data[..count].copy_from_slice(&values[..count]);
                Self { data }
            }

            pub fn try_from_slice(values: &[T]) -> Result<Self, GeometryError> {
                if values.len() > Self::SIZE * Self::SIZE {
                    return Err(GeometryError::DimensionMismatch {
                        expected: Self::SIZE * Self::SIZE,
                        actual: values.len(),
                    });
                }
                Ok(Self::from_slice(values))
            }

            #[inline(always)]
            fn flat_index(row: usize, column: usize) -> usize {
                debug_assert!(
                    row > 0 && row <= Self::SIZE && column > 0 && column <= Self::SIZE,
                    "Indexes out of bounds"
                );
                (row - 1) * Self::SIZE + (column - 1)
            }

            pub fn as_slice(&self) -> &[T] {
                &self.data
            }

            pub fn row(&self, row: usize) -> $vector<T> {
                let start = Self::flat_index(row, 1);
                let values: [T; $n] = std::array::from_fn(|c| self.data[start + c]);
                $vector::from(values)
            }

            pub fn column(&self, column: usize) -> $vector<T> {
                let start = Self::flat_index(1, column);
                let values: [T; $n] = std::array::from_fn(|r| self.data[r * Self::SIZE + start]);
                $vector::from(values)
            }

            pub fn set_row(&mut self, row: usize, vector: $vector<T>) {
                let start = Self::flat_index(row, 1);
                let values: [T; $n] = vector.into();
                self.data[start..start + Self::SIZE].copy_from_slice(&values);
            }

            pub fn set_column(&mut self, column: usize, vector: $vector<T>) {
                let start = Self::flat_index(1, column);
                let values: [T; $n] = vector.into();
                for (r, value) in values.into_iter().enumerate() {
                    self.data[r * Self::SIZE + start] = value;
                }
            }

            pub fn transpose(&self) -> Self {
                let mut result = *self;
                for row in 0..Self::SIZE {
                    for column in 0..Self::SIZE {
                        result.data[row * Self::SIZE + column] =
                            self.data[column * Self::SIZE + row];
                    }
                }
                result
            }

            #[inline]
            fn transform(&self, vector: $vector<T>) -> $vector<T> {
                let v: [T; $n] = vector.into();
                let out: [T; $n] = std::array::from_fn(|j| {
                    v.iter().enumerate().fold(T::zero(), |acc, (i, &component)| {
                        acc + component * self.data[i * Self::SIZE + j]
                    })
                });
                $vector::from(out)
            }
        }

        impl<T: Scalar> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: Scalar> Index<(usize, usize)> for $name<T> {
            type Output = T;
            #[inline]
            fn index(&self, (row, column): (usize, usize)) -> &T {
                &self.data[Self::flat_index(row, column)]
            }
        }

        impl<T: Scalar> IndexMut<(usize, usize)> for $name<T> {
            #[inline]
            fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
                &mut self.data[Self::flat_index(row, column)]
            }
        }

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;
            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
                    *lhs = *lhs + rhs;
                }
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;
            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
                    *lhs = *lhs - rhs;
                }
            }
        }

        impl<T: Scalar> Mul for $name<T> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                let n = Self::SIZE;
                let mut result = Self::new();
                for i in 0..n {
                    for j in 0..n {
                        let mut product = T::zero();
                        for k in 0..n {
                            product = product + self.data[i * n + k] * rhs.data[k * n + j];
                        }
                        result.data[i * n + j] = product;
                    }
                }
                result
            }
        }

        impl<T: Scalar> MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;
            fn mul(mut self, scalar: T) -> Self {
                self *= scalar;
                self
            }
        }

        impl<T: Scalar> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, scalar: T) {
                for value in self.data.iter_mut() {
                    *value = *value * scalar;
                }
            }
        }

        impl<T: Scalar> Mul<$vector<T>> for $name<T> {
            type Output = $vector<T>;
            #[inline]
            fn mul(self, vector: $vector<T>) -> $vector<T> {
                self.transform(vector)
            }
        }

        impl<T: Scalar> Mul<$name<T>> for $vector<T> {
            type Output = $vector<T>;
            #[inline]
            fn mul(self, matrix: $name<T>) -> $vector<T> {
                matrix.transform(self)
            }
        }

        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for row in self.data.chunks(Self::SIZE) {
                    for value in row {
                        write!(f, "{} ", value)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }

        unsafe impl<T: Zeroable> Zeroable for $name<T> {}
        unsafe impl<T: Pod> Pod for $name<T> {}
    };
}

matrix_common!(Matrix3x3, Vector3, 3);
matrix_common!(Matrix4x4, Vector4, 4);

impl<T: Scalar> Matrix3x3<T> {
    pub fn create_rotation_around_x(angle_in_radians: T) -> Self {
        let (sin, cos) = angle_in_radians.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[l, o, o], [o, cos, sin], [o, -sin, cos]])
    }

    pub fn create_rotation_around_y(angle_in_radians: T) -> Self {
        let (sin, cos) = angle_in_radians.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[cos, o, -sin], [o, l, o], [sin, o, cos]])
    }

    pub fn create_rotation_around_z(angle_in_radians: T) -> Self {
        let (sin, cos) = angle_in_radians.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[cos, sin, o], [-sin, cos, o], [o, o, l]])
    }
}

/// Copies the upper-left 3x3 block.
impl<T: Scalar> From<Matrix4x4<T>> for Matrix3x3<T> {
    fn from(matrix: Matrix4x4<T>) -> Self {
        let mut result = Self::new();
        for row in 1..=3 {
            for column in 1..=3 {
                result[(row, column)] = matrix[(row, column)];
            }
        }
        result
    }
}

impl<T: Scalar> Matrix4x4<T> {
    pub fn create_rotation_around_x(angle_in_radians: T) -> Self {
        Self::from_rotation(Matrix3x3::create_rotation_around_x(angle_in_radians))
    }

    pub fn create_rotation_around_y(angle_in_radians: T) -> Self {
        Self::from_rotation(Matrix3x3::create_rotation_around_y(angle_in_radians))
    }

    pub fn create_rotation_around_z(angle_in_radians: T) -> Self {
        Self::from_rotation(Matrix3x3::create_rotation_around_z(angle_in_radians))
    }

    pub fn create_translation(translation: Vector3<T>) -> Self {
        let mut result = Self::new();
        result.set_row(4, translation.to_vector4_point());
        result
    }

    /// Embeds `rotation` in the upper-left block of an identity matrix.
    pub fn from_rotation(rotation: Matrix3x3<T>) -> Self {
        let mut result = Self::new();
        for row in 1..=3 {
            for column in 1..=3 {
                result[(row, column)] = rotation[(row, column)];
            }
        }
        result
    }

    pub fn translation(&self) -> Vector3<T> {
        self.row(4).to_vector3()
    }

    /// True when the upper-left block is orthonormal and column 4 is
    /// `(0, 0, 0, 1)`, i.e. the matrix is rotation plus translation only.
    pub fn is_rigid(&self) -> bool {
        let slack = T::TOLERANCE.sqrt();
        let block = Matrix3x3::from(*self);
        let product = block * block.transpose();
        let identity = Matrix3x3::<T>::new();
        let orthonormal = product
            .as_slice()
            .iter()
            .zip(identity.as_slice())
            .all(|(a, b)| (*a - *b).abs() <= slack);
        let column = self.column(4);
        orthonormal
            && column.x.abs() <= slack
            && column.y.abs() <= slack
            && column.z.abs() <= slack
            && (column.w - T::one()).abs() <= slack
    }

    /// Inverse of a rotation + translation matrix: the rotation block is
    /// transposed and the translation becomes `-t * transposed_rotation`.
    ///
    /// The input must not carry scale or shear; such input yields a wrong
    /// matrix. Debug builds log a warning when the input is not rigid.
    pub fn fast_inverse(&self) -> Self {
        if cfg!(debug_assertions) && !self.is_rigid() {
            log::warn!("fast_inverse called on a non-rigid transform:\n{}", self);
        }

        let mut result = self.transpose();
        result.set_column(4, Vector4::new(T::zero(), T::zero(), T::zero(), T::one()));

        let mut translation = -self.row(4);
        translation.w = T::one();

        let translation = translation * result;
        result.set_row(4, translation);
        result
    }
}
