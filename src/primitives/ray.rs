// src/primitives/ray.rs

use crate::scalar::Scalar;
use crate::vector::Vector3;

/// Half-line from `origin` along a unit-length `direction`.
///
/// Every constructor normalizes the direction, so the intersection tests can
/// rely on `direction.length() == 1`. Passing a zero-length direction (or two
/// equal points) trips the normalization assertion in debug builds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray<T> {
    origin: Vector3<T>,
    direction: Vector3<T>,
}

pub type Rayf = Ray<f32>;

impl<T: Scalar> Ray<T> {
    pub fn new(origin: Vector3<T>, direction: Vector3<T>) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Ray from `origin` through `point`.
    pub fn from_points(origin: Vector3<T>, point: Vector3<T>) -> Self {
        Self::new(origin, point - origin)
    }

    pub fn init_with_2_points(&mut self, origin: Vector3<T>, point: Vector3<T>) {
        *self = Self::from_points(origin, point);
    }

    pub fn init_with_origin_and_direction(&mut self, origin: Vector3<T>, direction: Vector3<T>) {
        *self = Self::new(origin, direction);
    }

    pub fn origin(&self) -> &Vector3<T> {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3<T> {
        &self.direction
    }

    #[inline(always)]
    pub fn point_at(&self, t: T) -> Vector3<T> {
        self.origin + self.direction * t
    }
}

/// Origin at zero, pointing down +z.
impl<T: Scalar> Default for Ray<T> {
    fn default() -> Self {
        Self {
            origin: Vector3::new(T::zero(), T::zero(), T::zero()),
            direction: Vector3::new(T::zero(), T::zero(), T::one()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3f;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constructors_normalize_direction() {
        let ray = Rayf::new(Vector3f::ZERO, Vector3f::new(0.0, 0.0, 10.0));
        assert_eq!(*ray.direction(), Vector3f::FORWARD);

        let mut ray = Rayf::from_points(Vector3f::ONE, Vector3f::new(4.0, 5.0, 1.0));
        assert_abs_diff_eq!(ray.direction().length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ray.point_at(5.0).x, 4.0, epsilon = 1e-5);
        assert_abs_diff_eq!(ray.point_at(5.0).y, 5.0, epsilon = 1e-5);

        ray.init_with_origin_and_direction(Vector3f::ZERO, Vector3f::new(-3.0, 0.0, 0.0));
        assert_eq!(*ray.direction(), -Vector3f::RIGHT);
        ray.init_with_2_points(Vector3f::ZERO, Vector3f::new(0.0, 2.0, 0.0));
        assert_eq!(*ray.direction(), Vector3f::UP);
    }

    #[test]
    fn default_direction_is_unit() {
        let ray = Ray::<f64>::default();
        assert_eq!(ray.direction().length(), 1.0);
    }
}
