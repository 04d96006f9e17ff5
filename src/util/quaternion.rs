//! Unit quaternions for 3D orientation.
//!
//! Euler angles use the YXZ convention: yaw turns about the y-axis, pitch about the x-axis and
//! roll about the z-axis, and `from_euler_angles(yaw, pitch, roll)` equals
//! `create_yaw(yaw) * create_pitch(pitch) * create_roll(roll)`.
use crate::core::prelude::*;
use crate::util::text;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Mul, MulAssign, Neg},
};

/// A rotation in 3D space, stored as a unit quaternion with scalar part `w`.
///
/// Every operation that changes the orientation renormalises the result, so accumulated
/// floating point drift never leaves the unit sphere.
///
/// # Examples
///
/// ```
/// use gg_affine::core::prelude::*;
///
/// let q = Quaternion::create_yaw(Rotation::from_degrees(90.0));
/// assert!((q.euler_angles().yaw.in_degrees() - 90.0).abs() < 1e-3);
///
/// let mut spin = Quaternion::IDENTITY;
/// for _ in 0..1000 {
///     spin.roll(Rotation::from_degrees(7.0));
/// }
/// assert!((spin.len() - 1.0).abs() < EPSILON);
/// ```
#[derive(
    Debug, Copy, Clone, PartialEq, bincode::Encode, bincode::Decode, Serialize, Deserialize,
)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// A rotation as a unit axis and an angle about it, by the right-hand rule.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    bincode::Encode,
    bincode::Decode,
    Serialize,
    Deserialize,
)]
pub struct AxisAngle {
    pub axis: Vector3,
    pub angle: Angle,
}

#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    bincode::Encode,
    bincode::Decode,
    Serialize,
    Deserialize,
)]
pub struct EulerAngles {
    pub yaw: Angle,
    pub pitch: Angle,
    pub roll: Angle,
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Quaternion {
        Quaternion { x, y, z, w }
    }
    #[must_use]
    pub const fn identity() -> Quaternion {
        Quaternion::IDENTITY
    }

    #[must_use]
    pub fn create_yaw(rotation: impl Into<Rotation>) -> Quaternion {
        Quaternion::about_unit_axis(Vector3::unit_y(), rotation.into())
    }
    #[must_use]
    pub fn create_pitch(rotation: impl Into<Rotation>) -> Quaternion {
        Quaternion::about_unit_axis(Vector3::unit_x(), rotation.into())
    }
    #[must_use]
    pub fn create_roll(rotation: impl Into<Rotation>) -> Quaternion {
        Quaternion::about_unit_axis(Vector3::unit_z(), rotation.into())
    }

    /// `axis` is normalised first. The zero axis gives the identity when the angle is zero and
    /// an implementation-defined quaternion otherwise.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, rotation: impl Into<Rotation>) -> Quaternion {
        Quaternion::about_unit_axis(axis.normed(), rotation.into())
    }

    #[must_use]
    pub fn from_euler_angles(
        yaw: impl Into<Rotation>,
        pitch: impl Into<Rotation>,
        roll: impl Into<Rotation>,
    ) -> Quaternion {
        Quaternion::create_yaw(yaw) * Quaternion::create_pitch(pitch) * Quaternion::create_roll(roll)
    }

    fn about_unit_axis(axis: Vector3, rotation: Rotation) -> Quaternion {
        let half = rotation.in_radians() / 2.0;
        let (sin, cos) = half.sin_cos();
        Quaternion::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }
    #[must_use]
    pub fn dot(&self, other: Quaternion) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn normalize(&mut self) {
        *self = self.normed();
    }
    /// Scales to unit length. A zero quaternion becomes the identity.
    #[must_use]
    pub fn normed(&self) -> Quaternion {
        let len = self.len();
        if len == 0.0 {
            return Quaternion::IDENTITY;
        }
        Quaternion::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    #[must_use]
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, self.w)
    }

    fn hamilton_product(&self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }

    /// The angle is in `[0, 2π)`. When the angle is (close to) zero the axis is the zero
    /// vector.
    #[must_use]
    pub fn axis_angle(&self) -> AxisAngle {
        let q = self.normed();
        let w = q.w.clamp(-1.0, 1.0);
        let angle = Angle::from(trig::arc_cosine(w) * 2.0);
        let imaginary = Vector3::new(q.x, q.y, q.z);
        let axis = if imaginary.len() < EPSILON {
            Vector3::zero()
        } else {
            imaginary.normed()
        };
        AxisAngle { axis, angle }
    }

    /// Decomposes into yaw, pitch and roll (YXZ). At pitch ±90° roll is reported as zero and
    /// the whole rotation about the vertical goes into yaw.
    #[must_use]
    pub fn euler_angles(&self) -> EulerAngles {
        let r = self.normed().column_matrix();
        let sin_pitch = -r[1][2];
        if sin_pitch.abs() >= 1.0 - 1e-5 {
            return EulerAngles {
                yaw: Angle::from(trig::arc_tangent(r[0][0], -r[2][0])),
                pitch: Angle::from(trig::PI_OVER_2 * sin_pitch.signum()),
                roll: Angle::ZERO,
            };
        }
        EulerAngles {
            yaw: Angle::from(trig::arc_tangent(r[2][2], r[0][2])),
            pitch: Angle::from(trig::arc_sine(sin_pitch)),
            roll: Angle::from(trig::arc_tangent(r[1][1], r[1][0])),
        }
    }

    /// The rotation matrix acting on column vectors, indexed `[row][column]`.
    pub(crate) fn column_matrix(&self) -> [[f32; 3]; 3] {
        let Quaternion { x, y, z, w } = *self;
        [
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - z * w),
                2.0 * (x * z + y * w),
            ],
            [
                2.0 * (x * y + z * w),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - x * w),
            ],
            [
                2.0 * (x * z - y * w),
                2.0 * (y * z + x * w),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ]
    }

    pub fn invert(&mut self) {
        *self = self.inverted();
    }
    #[must_use]
    pub fn inverted(&self) -> Quaternion {
        self.conjugate().normed()
    }

    /// Turns about the local y-axis.
    pub fn yaw(&mut self, rotation: impl Into<Rotation>) {
        *self = self.yawed(rotation);
    }
    #[must_use]
    pub fn yawed(&self, rotation: impl Into<Rotation>) -> Quaternion {
        *self * Quaternion::create_yaw(rotation)
    }
    /// Turns about the local x-axis.
    pub fn pitch(&mut self, rotation: impl Into<Rotation>) {
        *self = self.pitched(rotation);
    }
    #[must_use]
    pub fn pitched(&self, rotation: impl Into<Rotation>) -> Quaternion {
        *self * Quaternion::create_pitch(rotation)
    }
    /// Turns about the local z-axis.
    pub fn roll(&mut self, rotation: impl Into<Rotation>) {
        *self = self.rolled(rotation);
    }
    #[must_use]
    pub fn rolled(&self, rotation: impl Into<Rotation>) -> Quaternion {
        *self * Quaternion::create_roll(rotation)
    }

    pub fn interpolate(&mut self, to: Quaternion, time: f32) {
        *self = self.interpolated(to, time);
    }
    /// Spherical linear interpolation along the shorter arc. `time` outside `[0, 1]`
    /// extrapolates along the same great circle.
    #[must_use]
    pub fn interpolated(&self, to: Quaternion, time: f32) -> Quaternion {
        let mut to = to;
        let mut cos = self.dot(to);
        if cos < 0.0 {
            to = -to;
            cos = -cos;
        }
        let (from_weight, to_weight) = if cos > SLERP_LINEAR_THRESHOLD {
            (1.0 - time, time)
        } else {
            let theta = cos.min(1.0).acos();
            let sin = theta.sin();
            (((1.0 - time) * theta).sin() / sin, (time * theta).sin() / sin)
        };
        Quaternion::new(
            self.x * from_weight + to.x * to_weight,
            self.y * from_weight + to.y * to_weight,
            self.z * from_weight + to.z * to_weight,
            self.w * from_weight + to.w * to_weight,
        )
        .normed()
    }

    /// Componentwise comparison within [`EPSILON`]. See also
    /// [`is_same_rotation`](Quaternion::is_same_rotation).
    pub fn almost_eq(&self, rhs: Quaternion) -> bool {
        (self.x - rhs.x).abs() < EPSILON
            && (self.y - rhs.y).abs() < EPSILON
            && (self.z - rhs.z).abs() < EPSILON
            && (self.w - rhs.w).abs() < EPSILON
    }
    /// `q` and `-q` describe the same rotation.
    pub fn is_same_rotation(&self, rhs: Quaternion) -> bool {
        self.normed().dot(rhs.normed()).abs() > 1.0 - EPSILON
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Self::Output {
        Quaternion::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Applies `rhs` first, then `self`, when rotating vectors. The product is renormalised.
impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Self::Output {
        self.hamilton_product(rhs).normed()
    }
}
impl MulAssign<Quaternion> for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from(value: [f32; 4]) -> Self {
        Quaternion::new(value[0], value[1], value[2], value[3])
    }
}
impl From<Quaternion> for [f32; 4] {
    fn from(value: Quaternion) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl TextFormat for Quaternion {
    /// `"euler[:angle-format]"` writes yaw, pitch and roll; `"axis[:angle-format]"` writes the
    /// axis followed by the angle; anything else writes the four components.
    fn write_text(&self, out: &mut String, format: &str) {
        if let Some(angle_format) = text::strip_format_keyword(format, "euler") {
            let angles = self.euler_angles();
            out.push_str(
                &[angles.yaw, angles.pitch, angles.roll]
                    .iter()
                    .map(|angle| angle.to_text(angle_format))
                    .join(" "),
            );
        } else if let Some(angle_format) = text::strip_format_keyword(format, "axis") {
            let AxisAngle { axis, angle } = self.axis_angle();
            let (_, float_format) = text::split_unit_format(angle_format);
            axis.write_text(out, float_format);
            out.push(' ');
            angle.write_text(out, angle_format);
        } else {
            out.push_str(
                &[self.x, self.y, self.z, self.w]
                    .iter()
                    .map(|v| text::format_f32(*v, format))
                    .join(" "),
            );
        }
    }

    fn read_text(reader: &mut TextReader<'_>, format: &str) -> Result<Self> {
        if let Some(angle_format) = text::strip_format_keyword(format, "euler") {
            let yaw = Angle::read_text(reader, angle_format)?;
            reader.skip_separator();
            let pitch = Angle::read_text(reader, angle_format)?;
            reader.skip_separator();
            let roll = Angle::read_text(reader, angle_format)?;
            Ok(Quaternion::from_euler_angles(yaw, pitch, roll))
        } else if let Some(angle_format) = text::strip_format_keyword(format, "axis") {
            let axis = Vector3::read_text(reader, "")?;
            reader.skip_separator();
            let angle = Angle::read_text(reader, angle_format)?;
            Ok(Quaternion::from_axis_angle(axis, angle))
        } else {
            let values = reader.read_f32_array::<4>().context(
                "the string could not be read as a Quaternion (expected four floating point \
                 numbers separated by whitespace)",
            )?;
            Ok(values.into())
        }
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

impl FromStr for Quaternion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Quaternion::from_text(s, "")
    }
}

impl BinaryFormat for Quaternion {}
