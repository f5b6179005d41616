// src/intersection.rs

use crate::primitives::{Aabb3, Plane, Ray, Sphere};
use crate::scalar::{simple_pow, Scalar};
use crate::vector::Vector3;

/// Point where the ray's line crosses the plane, or `None`.
///
/// The line is not clipped at the origin: a plane behind the ray still
/// reports a crossing. A ray parallel to the plane has no finite `t` and
/// gives `None`.
pub fn intersection_plane_ray<T: Scalar>(plane: &Plane<T>, ray: &Ray<T>) -> Option<Vector3<T>> {
    let normal = plane.normal();
    let t = (plane.d() - normal.dot(ray.origin())) / normal.dot(ray.direction());
    if !t.is_finite() {
        log::trace!("ray {:?} is parallel to plane {:?}", ray, plane);
        return None;
    }
    let hit_point = ray.point_at(t);

    // Rounding leaves the hit a few ulps either side of the plane, and the
    // error grows with the distance from the plane's point.
    let slack = T::TOLERANCE
        * normal.length()
        * (T::one() + hit_point.length() + plane.point().length());
    if plane.signed_distance(&hit_point) <= slack {
        Some(hit_point)
    } else {
        log::trace!("ray {:?} does not cross plane {:?} (t = {})", ray, plane, t);
        None
    }
}

/// Writes the crossing into `out_point` and returns true; leaves
/// `out_point` untouched otherwise.
pub fn intersection_plane_ray_into<T: Scalar>(
    plane: &Plane<T>,
    ray: &Ray<T>,
    out_point: &mut Vector3<T>,
) -> bool {
    match intersection_plane_ray(plane, ray) {
        Some(hit_point) => {
            *out_point = hit_point;
            true
        }
        None => false,
    }
}

/// Slab test. A ray starting inside, or running along a face, intersects.
pub fn intersection_aabb_ray<T: Scalar>(aabb: &Aabb3<T>, ray: &Ray<T>) -> bool {
    let origin: [T; 3] = (*ray.origin()).into();
    let direction: [T; 3] = (*ray.direction()).into();
    let min: [T; 3] = (*aabb.min()).into();
    let max: [T; 3] = (*aabb.max()).into();

    // Distance to the near face on each axis the origin is outside of;
    // -1 on axes where it is already between the faces.
    let mut inside = true;
    let mut candidate = [-T::one(); 3];
    for axis in 0..3 {
        if origin[axis] < min[axis] {
            candidate[axis] = (min[axis] - origin[axis]) / direction[axis];
            inside = false;
        } else if origin[axis] > max[axis] {
            candidate[axis] = (max[axis] - origin[axis]) / direction[axis];
            inside = false;
        }
    }

    if inside {
        return true;
    }

    // The farthest face is the last one crossed before the ray is within
    // every slab. Ties go to the lowest axis.
    let mut which = 0;
    let mut t = candidate[0];
    for axis in 1..3 {
        if candidate[axis] > t {
            which = axis;
            t = candidate[axis];
        }
    }

    // Negative: the face is behind the origin.
    if t < T::zero() {
        return false;
    }

    (0..3).filter(|&axis| axis != which).all(|axis| {
        let coordinate = origin[axis] + direction[axis] * t;
        coordinate >= min[axis] && coordinate <= max[axis]
    })
}

/// Quadratic test on a unit-direction ray; touching the surface counts.
pub fn intersection_sphere_ray<T: Scalar>(sphere: &Sphere<T>, ray: &Ray<T>) -> bool {
    let offset = *ray.origin() - *sphere.center();
    let b = ray.direction().dot(&offset);
    let c = offset.length_sqr() - simple_pow(sphere.radius(), 2);

    // Outside and pointing away.
    if c > T::zero() && b > T::zero() {
        return false;
    }

    simple_pow(b, 2) - c >= T::zero()
}
