// src/volume.rs

use crate::primitives::{Line, Plane};
use crate::scalar::Scalar;
use crate::vector::{Vector2, Vector3};

/// Convex region bounded by planes: a point is inside when every plane
/// reports it inside. An empty volume contains every point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaneVolume<T> {
    planes: Vec<Plane<T>>,
}

pub type PlaneVolumef = PlaneVolume<f32>;

impl<T: Scalar> PlaneVolume<T> {
    pub fn new() -> Self {
        Self { planes: Vec::new() }
    }

    pub fn add_plane(&mut self, plane: Plane<T>) {
        self.planes.push(plane);
    }

    pub fn planes(&self) -> &[Plane<T>] {
        &self.planes
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    #[inline]
    pub fn is_inside(&self, position: &Vector3<T>) -> bool {
        self.planes.iter().all(|plane| plane.is_inside(position))
    }
}

impl<T> From<Vec<Plane<T>>> for PlaneVolume<T> {
    fn from(planes: Vec<Plane<T>>) -> Self {
        Self { planes }
    }
}

impl<T> FromIterator<Plane<T>> for PlaneVolume<T> {
    fn from_iter<I: IntoIterator<Item = Plane<T>>>(iter: I) -> Self {
        Self { planes: iter.into_iter().collect() }
    }
}

/// 2D analogue of [`PlaneVolume`] built from [`Line`] half-planes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineVolume<T> {
    lines: Vec<Line<T>>,
}

pub type LineVolumef = LineVolume<f32>;

impl<T: Scalar> LineVolume<T> {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Closed convex polygon from vertices in counter-clockwise order; one
    /// line per edge, the last vertex wrapping back to the first.
    pub fn from_polygon(vertices: &[Vector2<T>]) -> Self {
        let count = vertices.len();
        (0..count)
            .map(|i| Line::from_points(vertices[i], vertices[(i + 1) % count]))
            .collect()
    }

    pub fn add_line(&mut self, line: Line<T>) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line<T>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn is_inside(&self, position: &Vector2<T>) -> bool {
        self.lines.iter().all(|line| line.is_inside(position))
    }
}

impl<T> From<Vec<Line<T>>> for LineVolume<T> {
    fn from(lines: Vec<Line<T>>) -> Self {
        Self { lines }
    }
}

impl<T> FromIterator<Line<T>> for LineVolume<T> {
    fn from_iter<I: IntoIterator<Item = Line<T>>>(iter: I) -> Self {
        Self { lines: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2f, Vector3f};

    fn unit_square_planes() -> Vec<Plane<f32>> {
        vec![
            Plane::new(Vector3f::ZERO, Vector3f::new(-1.0, 0.0, 0.0)),
            Plane::new(Vector3f::ZERO, Vector3f::new(0.0, -1.0, 0.0)),
            Plane::new(Vector3f::ONE, Vector3f::RIGHT),
            Plane::new(Vector3f::ONE, Vector3f::UP),
        ]
    }

    #[test]
    fn unit_square_prism() {
        let volume = PlaneVolumef::from(unit_square_planes());
        assert_eq!(volume.len(), 4);
        assert!(volume.is_inside(&Vector3f::new(0.5, 0.5, 0.0)));
        assert!(volume.is_inside(&Vector3f::new(1.0, 0.0, 0.0)));
        assert!(!volume.is_inside(&Vector3f::new(2.0, 2.0, 0.0)));
        // No z planes, so the prism is unbounded along z.
        assert!(volume.is_inside(&Vector3f::new(0.5, 0.5, 1000.0)));
    }

    #[test]
    fn empty_volumes_contain_everything() {
        assert!(PlaneVolumef::new().is_inside(&Vector3f::new(1e9, -1e9, 3.0)));
        assert!(LineVolumef::new().is_inside(&Vector2f::new(-1e9, 1e9)));
        assert!(LineVolumef::new().is_empty());
    }

    #[test]
    fn adding_planes_only_shrinks_the_region() {
        let mut volume: PlaneVolumef = unit_square_planes().into_iter().take(2).collect();
        let probe = Vector3f::new(3.0, 3.0, 0.0);
        assert!(volume.is_inside(&probe));
        volume.add_plane(Plane::new(Vector3f::ONE, Vector3f::RIGHT));
        assert!(!volume.is_inside(&probe));
    }

    #[test]
    fn polygon_line_volume() {
        let square = [
            Vector2f::ZERO,
            Vector2f::RIGHT,
            Vector2f::ONE,
            Vector2f::UP,
        ];
        let mut volume = LineVolumef::from_polygon(&square);
        assert_eq!(volume.lines().len(), 4);
        assert!(volume.is_inside(&Vector2f::new(0.5, 0.5)));
        assert!(volume.is_inside(&Vector2f::new(0.0, 1.0)));
        assert!(!volume.is_inside(&Vector2f::new(1.5, 0.5)));

        volume.add_line(Line::from_point_and_normal(
            Vector2f::new(0.25, 0.0),
            Vector2f::new(-1.0, 0.0),
        ));
        assert!(!volume.is_inside(&Vector2f::new(0.1, 0.5)));
    }
}
