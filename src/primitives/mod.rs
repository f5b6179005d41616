// src/primitives/mod.rs

pub mod aabb;
pub mod line;
pub mod plane;
pub mod ray;
pub mod sphere;

pub use aabb::{Aabb3, Aabb3f};
pub use line::{Line, Linef};
pub use plane::{Plane, Planef};
pub use ray::{Ray, Rayf};
pub use sphere::{Sphere, Spheref};
