// src/lib.rs

pub mod collider;
pub mod error;
pub mod generator;
pub mod interop;
pub mod intersection;
pub mod matrix;
pub mod primitives;
pub mod scalar;
pub mod vector;
pub mod volume;

pub use collider::AabbCollider;
pub use error::GeometryError;
pub use generator::VolumeGenerator;
pub use intersection::{
    intersection_aabb_ray, intersection_plane_ray, intersection_plane_ray_into,
    intersection_sphere_ray,
};
pub use matrix::{Matrix3x3, Matrix3x3f, Matrix4x4, Matrix4x4f};
pub use primitives::{Aabb3, Aabb3f, Line, Linef, Plane, Planef, Ray, Rayf, Sphere, Spheref};
pub use scalar::Scalar;
pub use vector::{Vector2, Vector2f, Vector3, Vector3f, Vector4, Vector4f};
pub use volume::{LineVolume, LineVolumef, PlaneVolume, PlaneVolumef};
