// src/collider.rs

use crate::vector::Vector2f;
use crate::volume::LineVolumef;

/// Screen-space rectangle collider used by menus and gameplay.
///
/// `pivot` is the fraction of `size` that `position` sits at: (0, 0) puts
/// the position on the bottom-left corner, (0.5, 0.5) on the center. The
/// y axis points up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AabbCollider {
    position: Vector2f,
    size: Vector2f,
    pivot: Vector2f,
}

impl AabbCollider {
    pub fn new(position: Vector2f, size: Vector2f) -> Self {
        Self::with_pivot(position, size, Vector2f::ZERO)
    }

    pub fn with_pivot(position: Vector2f, size: Vector2f, pivot: Vector2f) -> Self {
        Self { position, size, pivot }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vector2f::new(x, y), Vector2f::new(width, height))
    }

    pub fn position(&self) -> Vector2f {
        self.position
    }

    pub fn size(&self) -> Vector2f {
        self.size
    }

    pub fn pivot(&self) -> Vector2f {
        self.pivot
    }

    pub fn set_position(&mut self, position: Vector2f) {
        self.position = position;
    }

    pub fn set_rect(&mut self, position: Vector2f, size: Vector2f, pivot: Vector2f) {
        *self = Self::with_pivot(position, size, pivot);
    }

    #[inline(always)]
    fn lower_corner(&self) -> Vector2f {
        Vector2f::new(
            self.position.x - self.pivot.x * self.size.x,
            self.position.y - self.pivot.y * self.size.y,
        )
    }

    /// Overlap test; touching edges count as a collision.
    pub fn check_collision(&self, other: &AabbCollider) -> bool {
        let a = self.lower_corner();
        let b = other.lower_corner();
        a.x + self.size.x >= b.x
            && a.x <= b.x + other.size.x
            && a.y + self.size.y >= b.y
            && a.y <= b.y + other.size.y
    }

    pub fn bottom_left(&self) -> Vector2f {
        self.lower_corner()
    }

    pub fn bottom_right(&self) -> Vector2f {
        self.lower_corner() + Vector2f::new(self.size.x, 0.0)
    }

    pub fn top_left(&self) -> Vector2f {
        self.lower_corner() + Vector2f::new(0.0, self.size.y)
    }

    pub fn top_right(&self) -> Vector2f {
        self.lower_corner() + self.size
    }

    /// The four edges as half-planes, for point containment.
    pub fn to_line_volume(&self) -> LineVolumef {
        LineVolumef::from_polygon(&[
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
        ])
    }
}
