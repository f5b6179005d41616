// src/scalar.rs

use std::fmt::{Debug, Display};

use num_traits::Float;

pub const PI: f32 = std::f32::consts::PI;
pub const DEG_TO_RAD: f32 = PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Numeric element type shared by every vector, matrix and primitive.
///
/// Implemented for `f32` and `f64`. `TOLERANCE` is the slack used when a
/// computed point is expected to sit exactly on a boundary.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    const TOLERANCE: Self;
}

impl Scalar for f32 {
    const TOLERANCE: Self = 1e-5;
}

impl Scalar for f64 {
    const TOLERANCE: Self = 1e-10;
}

/// Repeated multiplication; `power == 0` yields one.
#[inline(always)]
pub fn simple_pow<T: Scalar>(value: T, power: u32) -> T {
    let mut result = T::one();
    for _ in 0..power {
        result = result * value;
    }
    result
}

#[inline]
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max, "Min is bigger than Max");
    min.max(max.min(value))
}

#[inline]
pub fn lerp<T: Scalar>(start: T, end: T, t: T) -> T {
    start + (end - start) * t
}

/// Maps `value` from `[old_min, old_max]` onto `[new_min, new_max]`.
/// A zero-width source range divides by zero.
#[inline]
pub fn remap<T: Scalar>(value: T, old_min: T, old_max: T, new_min: T, new_max: T) -> T {
    ((value - old_min) * (new_max - new_min)) / (old_max - old_min) + new_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_pow_matches_repeated_product() {
        assert_eq!(simple_pow(3.0f32, 0), 1.0);
        assert_eq!(simple_pow(3.0f32, 2), 9.0);
        assert_eq!(simple_pow(-2.0f64, 3), -8.0);
    }

    #[test]
    fn clamp_lerp_remap() {
        assert_eq!(clamp(5.0f32, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0f32, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25f64, 0.0, 1.0), 0.25);
        assert_eq!(lerp(2.0f32, 4.0, 0.5), 3.0);
        assert_eq!(remap(5.0f64, 0.0, 10.0, 100.0, 200.0), 150.0);
    }
}
