// src/primitives/aabb.rs

use crate::scalar::Scalar;
use crate::vector::Vector3;

/// Axis-aligned box between `min` and `max`. `min <= max` per axis is
/// expected but not checked; an inverted axis contains nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb3<T> {
    min: Vector3<T>,
    max: Vector3<T>,
}

pub type Aabb3f = Aabb3<f32>;

impl<T: Scalar> Aabb3<T> {
    pub fn new(min: Vector3<T>, max: Vector3<T>) -> Self {
        Self { min, max }
    }

    pub fn init_with_min_and_max(&mut self, min: Vector3<T>, max: Vector3<T>) {
        self.min = min;
        self.max = max;
    }

    pub fn min(&self) -> &Vector3<T> {
        &self.min
    }

    pub fn max(&self) -> &Vector3<T> {
        &self.max
    }

    /// Closed on every face.
    #[inline(always)]
    pub fn is_inside(&self, position: &Vector3<T>) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.y >= self.min.y
            && position.y <= self.max.y
            && position.z >= self.min.z
            && position.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3f;

    #[test]
    fn faces_edges_and_corners_are_inside() {
        let aabb = Aabb3f::new(Vector3f::ZERO, Vector3f::ONE);
        assert!(aabb.is_inside(&Vector3f::new(0.5, 0.5, 0.5)));
        assert!(aabb.is_inside(&Vector3f::new(1.0, 0.5, 0.0)));
        assert!(aabb.is_inside(&Vector3f::ONE));
        assert!(!aabb.is_inside(&Vector3f::new(0.5, 1.0001, 0.5)));
        assert!(!aabb.is_inside(&Vector3f::new(-0.0001, 0.5, 0.5)));
    }

    #[test]
    fn inverted_axis_contains_nothing() {
        let mut aabb = Aabb3f::default();
        aabb.init_with_min_and_max(Vector3f::new(1.0, 0.0, 0.0), Vector3f::new(0.0, 1.0, 1.0));
        assert!(!aabb.is_inside(&Vector3f::new(0.5, 0.5, 0.5)));
        assert_eq!(*aabb.min(), Vector3f::new(1.0, 0.0, 0.0));
    }
}
