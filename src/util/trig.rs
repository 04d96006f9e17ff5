//! Trigonometric functions over [`Rotation`].
//!
//! Every function taking a rotation also accepts an [`Angle`] through `Into<Rotation>`.
use crate::core::prelude::*;

pub const TAU: Rotation = Rotation::from_radians(std::f32::consts::TAU);
pub const PI: Rotation = Rotation::from_radians(std::f32::consts::PI);
pub const PI_OVER_2: Rotation = Rotation::from_radians(std::f32::consts::FRAC_PI_2);

pub fn sine(rotation: impl Into<Rotation>) -> f32 {
    rotation.into().in_radians().sin()
}
pub fn cosine(rotation: impl Into<Rotation>) -> f32 {
    rotation.into().in_radians().cos()
}
pub fn tangent(rotation: impl Into<Rotation>) -> f32 {
    rotation.into().in_radians().tan()
}

/// `value` is clamped into `[-1, 1]` first, so drift just outside the domain does not
/// produce `NaN`.
pub fn arc_sine(value: f32) -> Rotation {
    Rotation::from_radians(value.clamp(-1.0, 1.0).asin())
}
/// See [`arc_sine`] for the clamping.
pub fn arc_cosine(value: f32) -> Rotation {
    Rotation::from_radians(value.clamp(-1.0, 1.0).acos())
}

/// The rotation of the direction `(x, y)` from the positive x-axis, in `(-π, π]`. Zero when
/// both components are zero.
///
/// ```
/// use gg_affine::core::prelude::*;
/// assert!(trig::arc_tangent(0.0, 2.0).almost_eq(trig::PI_OVER_2));
/// assert_eq!(trig::arc_tangent(0.0, 0.0), Rotation::ZERO);
/// ```
pub fn arc_tangent(x: f32, y: f32) -> Rotation {
    if x == 0.0 && y == 0.0 {
        return Rotation::ZERO;
    }
    Rotation::from_radians(y.atan2(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_functions() {
        assert!(arithmetic::is_close_to(sine(PI_OVER_2), 1.0));
        assert!(arithmetic::is_close_to(cosine(PI), -1.0));
        assert!(arithmetic::is_close_to(tangent(Rotation::from_degrees(45.0)), 1.0));
        assert!(arithmetic::is_close_to(sine(Angle::from_degrees(390.0)), 0.5));
        assert!(arithmetic::is_close_to(cosine(TAU), 1.0));
    }

    #[test]
    fn inverse_functions() {
        assert!(arc_sine(1.0).almost_eq(PI_OVER_2));
        assert!(arc_sine(1.0001).almost_eq(PI_OVER_2));
        assert!(arc_cosine(-1.5).almost_eq(PI));
        assert!(arc_cosine(0.5).almost_eq(Rotation::from_degrees(60.0)));
        assert!(arc_tangent(-1.0, 0.0).almost_eq(PI));
        assert!(arc_tangent(1.0, -1.0).almost_eq(Rotation::from_degrees(-45.0)));
    }
}
