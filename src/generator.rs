// src/generator.rs

use rand::Rng;

use crate::matrix::Matrix4x4f;
use crate::scalar::PI;
use crate::vector::{Vector2f, Vector3f};
use crate::volume::LineVolumef;

pub struct VolumeGenerator;

impl VolumeGenerator {
    /// Vertices of a random convex polygon in counter-clockwise order:
    /// evenly spaced angles with a small perturbation, on a circle whose
    /// radius is within 20% of `avg_radius`.
    pub fn convex_polygon(
        rng: &mut impl Rng,
        center: Vector2f,
        avg_radius: f32,
        num_vertices: usize,
    ) -> Vec<Vector2f> {
        debug_assert!(num_vertices >= 3, "A polygon needs at least 3 vertices");

        let step = 2.0 * PI / (num_vertices as f32);
        let max_perturbation = PI / (num_vertices as f32) * 0.3;

        let mut angles: Vec<f32> = (0..num_vertices)
            .map(|i| (i as f32) * step + rng.gen_range(-max_perturbation..max_perturbation))
            .collect();

        for i in 1..num_vertices {
            if angles[i] <= angles[i - 1] {
                angles[i] = angles[i - 1] + 0.01;
            }
        }

        // One radius per polygon keeps every vertex on the same circle.
        let radius = rng.gen_range(avg_radius * 0.8..avg_radius * 1.2);

        angles
            .into_iter()
            .map(|angle| center + Vector2f::new(angle.cos(), angle.sin()) * radius)
            .collect()
    }

    pub fn convex_line_volume(
        rng: &mut impl Rng,
        center: Vector2f,
        avg_radius: f32,
        num_vertices: usize,
    ) -> LineVolumef {
        LineVolumef::from_polygon(&Self::convex_polygon(rng, center, avg_radius, num_vertices))
    }

    /// Random rotation (about x, then y, then z) followed by a translation
    /// within `extent` on every axis.
    pub fn rigid_transform(rng: &mut impl Rng, extent: f32) -> Matrix4x4f {
        let rotation = Matrix4x4f::create_rotation_around_x(rng.gen_range(-PI..PI))
            * Matrix4x4f::create_rotation_around_y(rng.gen_range(-PI..PI))
            * Matrix4x4f::create_rotation_around_z(rng.gen_range(-PI..PI));
        let translation = Vector3f::new(
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
        );
        rotation * Matrix4x4f::create_translation(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_polygon_contains_its_center() {
        let mut rng = StdRng::seed_from_u64(7);
        for sides in 3..=12 {
            let center = Vector2f::new(50.0, -20.0);
            let volume = VolumeGenerator::convex_line_volume(&mut rng, center, 80.0, sides);
            assert_eq!(volume.len(), sides);
            assert!(volume.is_inside(&center));
            assert!(!volume.is_inside(&(center + Vector2f::new(200.0, 0.0))));
        }
    }

    #[test]
    fn generated_transforms_are_rigid() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..32 {
            assert!(VolumeGenerator::rigid_transform(&mut rng, 100.0).is_rigid());
        }
    }
}
