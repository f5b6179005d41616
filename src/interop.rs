// src/interop.rs
//
// Conversions to and from glam's f32 types. glam uses column vectors, so our
// row-vector matrix maps onto glam as its transpose: row i here is
// column i there, and both transform a point to the same place.

use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::matrix::{Matrix3x3f, Matrix4x4f};
use crate::vector::{Vector2f, Vector3f, Vector4f};

impl From<Vec2> for Vector2f {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2f> for Vec2 {
    fn from(v: Vector2f) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec3> for Vector3f {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3f> for Vec3 {
    fn from(v: Vector3f) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec4> for Vector4f {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4f> for Vec4 {
    fn from(v: Vector4f) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Mat3> for Matrix3x3f {
    fn from(m: Mat3) -> Self {
        Self::from_slice(&m.to_cols_array())
    }
}

impl From<Matrix3x3f> for Mat3 {
    fn from(m: Matrix3x3f) -> Self {
        let mut cols = [0.0; 9];
        cols.copy_from_slice(m.as_slice());
        Mat3::from_cols_array(&cols)
    }
}

impl From<Mat4> for Matrix4x4f {
    fn from(m: Mat4) -> Self {
        Self::from_slice(&m.to_cols_array())
    }
}

impl From<Matrix4x4f> for Mat4 {
    fn from(m: Matrix4x4f) -> Self {
        let mut cols = [0.0; 16];
        cols.copy_from_slice(m.as_slice());
        Mat4::from_cols_array(&cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn transforms_agree_with_glam() {
        let ours = Matrix4x4f::create_rotation_around_z(0.4)
            * Matrix4x4f::create_translation(Vector3f::new(1.0, -2.0, 3.0));
        let theirs: Mat4 = ours.into();

        let point = Vector3f::new(0.5, 2.0, -1.0);
        let moved_ours = (point.to_vector4_point() * ours).to_vector3();
        let moved_theirs = theirs.transform_point3(point.into());
        assert_abs_diff_eq!(moved_ours.x, moved_theirs.x, epsilon = 1e-5);
        assert_abs_diff_eq!(moved_ours.y, moved_theirs.y, epsilon = 1e-5);
        assert_abs_diff_eq!(moved_ours.z, moved_theirs.z, epsilon = 1e-5);

        assert_eq!(Matrix4x4f::from(theirs), ours);
    }

    #[test]
    fn vectors_round_trip() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(Vector3f::from(Vec3::from(v)), v);
        assert_eq!(Vec2::from(Vector2f::UP), Vec2::Y);
        assert_eq!(Vector4f::from(Vec4::W), Vector4f::ZERO_P);
        let m = Matrix3x3f::create_rotation_around_y(1.0);
        assert_eq!(Matrix3x3f::from(Mat3::from(m)), m);
    }
}
