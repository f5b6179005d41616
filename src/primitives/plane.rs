// src/primitives/plane.rs

use crate::scalar::Scalar;
use crate::vector::Vector3;

/// A plane through `point` with `normal`. The normal need not be unit
/// length; it only orients the half-space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane<T> {
    point: Vector3<T>,
    normal: Vector3<T>,
}

pub type Planef = Plane<f32>;

impl<T: Scalar> Plane<T> {
    pub fn new(point: Vector3<T>, normal: Vector3<T>) -> Self {
        Self { point, normal }
    }

    /// Normal is `(point1 - point0) x (point2 - point0)`.
    pub fn from_points(point0: Vector3<T>, point1: Vector3<T>, point2: Vector3<T>) -> Self {
        Self {
            point: point0,
            normal: (point1 - point0).cross(&(point2 - point0)),
        }
    }

    pub fn init_with_3_points(
        &mut self,
        point0: Vector3<T>,
        point1: Vector3<T>,
        point2: Vector3<T>,
    ) {
        *self = Self::from_points(point0, point1, point2);
    }

    pub fn init_with_point_and_normal(&mut self, point: Vector3<T>, normal: Vector3<T>) {
        self.point = point;
        self.normal = normal;
    }

    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    pub fn point(&self) -> &Vector3<T> {
        &self.point
    }

    /// Plane constant `d` in `normal . p = d`.
    #[inline(always)]
    pub fn d(&self) -> T {
        self.normal.dot(&self.point)
    }

    /// `(position - point) . normal`. Scaled by the normal's length.
    #[inline(always)]
    pub fn signed_distance(&self, position: &Vector3<T>) -> T {
        (*position - self.point).dot(&self.normal)
    }

    /// On the plane, or on the side the normal points away from.
    #[inline(always)]
    pub fn is_inside(&self, position: &Vector3<T>) -> bool {
        self.signed_distance(position) <= T::zero()
    }
}
