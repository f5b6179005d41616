// src/primitives/line.rs

use crate::scalar::Scalar;
use crate::vector::Vector2;

/// 2D counterpart of [`Plane`](super::Plane): a point and a normal bounding
/// a half-plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line<T> {
    point: Vector2<T>,
    normal: Vector2<T>,
}

pub type Linef = Line<f32>;

impl<T: Scalar> Line<T> {
    /// Line through `point0` towards `point1`. The normal is the direction
    /// turned a quarter to the right, so for counter-clockwise polygon edges
    /// the interior is inside.
    pub fn from_points(point0: Vector2<T>, point1: Vector2<T>) -> Self {
        Self::from_point_and_direction(point0, point1 - point0)
    }

    pub fn from_point_and_direction(point: Vector2<T>, direction: Vector2<T>) -> Self {
        Self {
            point,
            normal: Vector2::new(direction.y, -direction.x),
        }
    }

    pub fn from_point_and_normal(point: Vector2<T>, normal: Vector2<T>) -> Self {
        Self { point, normal }
    }

    pub fn init_with_2_points(&mut self, point0: Vector2<T>, point1: Vector2<T>) {
        *self = Self::from_points(point0, point1);
    }

    pub fn init_with_point_and_direction(&mut self, point: Vector2<T>, direction: Vector2<T>) {
        *self = Self::from_point_and_direction(point, direction);
    }

    pub fn normal(&self) -> &Vector2<T> {
        &self.normal
    }

    pub fn point(&self) -> &Vector2<T> {
        &self.point
    }

    #[inline(always)]
    pub fn signed_distance(&self, position: &Vector2<T>) -> T {
        (*position - self.point).dot(&self.normal)
    }

    #[inline(always)]
    pub fn is_inside(&self, position: &Vector2<T>) -> bool {
        self.signed_distance(position) <= T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector2f;

    #[test]
    fn counter_clockwise_edge_keeps_interior_inside() {
        // Bottom edge of a CCW square, walking +x.
        let line = Linef::from_points(Vector2f::ZERO, Vector2f::RIGHT);
        assert_eq!(*line.normal(), Vector2f::new(0.0, -1.0));
        assert!(line.is_inside(&Vector2f::new(0.5, 0.5)));
        assert!(line.is_inside(&Vector2f::new(0.5, 0.0)));
        assert!(!line.is_inside(&Vector2f::new(0.5, -0.1)));
    }

    #[test]
    fn explicit_normal_is_kept() {
        let mut line = Linef::from_point_and_normal(Vector2f::ONE, Vector2f::UP);
        assert!(line.is_inside(&Vector2f::new(-4.0, 1.0)));
        line.init_with_point_and_direction(Vector2f::ZERO, Vector2f::UP);
        assert_eq!(*line.normal(), Vector2f::RIGHT);
    }
}
