// src/primitives/sphere.rs

use crate::scalar::{simple_pow, Scalar};
use crate::vector::Vector3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sphere<T> {
    center: Vector3<T>,
    radius: T,
}

pub type Spheref = Sphere<f32>;

impl<T: Scalar> Sphere<T> {
    pub fn new(center: Vector3<T>, radius: T) -> Self {
        debug_assert!(radius >= T::zero(), "Sphere radius must not be negative");
        Self { center, radius }
    }

    pub fn init_with_center_and_radius(&mut self, center: Vector3<T>, radius: T) {
        *self = Self::new(center, radius);
    }

    pub fn center(&self) -> &Vector3<T> {
        &self.center
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    /// Surface counts as inside. Compares squared distances.
    #[inline(always)]
    pub fn is_inside(&self, position: &Vector3<T>) -> bool {
        position.sqr_distance(&self.center) <= simple_pow(self.radius, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3f;

    #[test]
    fn surface_is_inside() {
        let sphere = Spheref::new(Vector3f::new(1.0, 0.0, 0.0), 2.0);
        assert!(sphere.is_inside(&Vector3f::new(3.0, 0.0, 0.0)));
        assert!(sphere.is_inside(&Vector3f::new(1.0, -2.0, 0.0)));
        assert!(sphere.is_inside(&Vector3f::new(1.5, 0.5, 0.5)));
        assert!(!sphere.is_inside(&Vector3f::new(3.01, 0.0, 0.0)));
    }

    #[test]
    fn zero_radius_contains_only_its_center() {
        let mut sphere = Spheref::default();
        sphere.init_with_center_and_radius(Vector3f::ONE, 0.0);
        assert!(sphere.is_inside(&Vector3f::ONE));
        assert!(!sphere.is_inside(&Vector3f::ZERO));
        assert_eq!(sphere.radius(), 0.0);
        assert_eq!(*sphere.center(), Vector3f::ONE);
    }
}
