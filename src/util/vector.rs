use crate::core::prelude::*;
use crate::util::gg_float;
use crate::util::text;

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::str::FromStr;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D free vector: a displacement with magnitude and direction, but no position.
///
/// Rotations are counter-clockwise for positive angles, with `x` to the right and `y` up.
///
/// # Examples
///
/// ```
/// use gg_affine::core::prelude::*;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.len(), 5.0);
/// assert!(v.normed().almost_eq(Vector2::new(0.6, 0.8)));
///
/// let up = Vector2::unit_x().rotated(Angle::from_degrees(90.0));
/// assert!(up.almost_eq(Vector2::unit_y()));
/// ```
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
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }
    #[must_use]
    pub const fn zero() -> Vector2 {
        Vector2 { x: 0.0, y: 0.0 }
    }
    #[must_use]
    pub const fn one() -> Vector2 {
        Vector2 { x: 1.0, y: 1.0 }
    }
    #[must_use]
    pub const fn unit_x() -> Vector2 {
        Vector2 { x: 1.0, y: 0.0 }
    }
    #[must_use]
    pub const fn unit_y() -> Vector2 {
        Vector2 { x: 0.0, y: 1.0 }
    }

    #[must_use]
    pub fn new_normed(x: f32, y: f32) -> Vector2 {
        Vector2::new(x, y).normed()
    }

    /// The unit vector pointing along `angle`, measured counter-clockwise from the x-axis.
    #[must_use]
    pub fn from_direction(angle: Angle) -> Vector2 {
        Vector2::new(angle.cos(), angle.sin())
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
    pub fn dot(&self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }
    /// The z-component of the 3D cross product: positive if `other` is counter-clockwise
    /// from `self`.
    #[must_use]
    pub fn perp_dot(&self, other: Vector2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// The angle this vector makes with the positive x-axis. The zero vector gives zero.
    #[must_use]
    pub fn orientation(&self) -> Angle {
        Angle::from(trig::arc_tangent(self.x, self.y))
    }

    /// This vector rotated a quarter turn counter-clockwise.
    #[must_use]
    pub fn perpendicular(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }
    /// The unit-length [`perpendicular`](Vector2::perpendicular).
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        self.perpendicular().normed()
    }

    pub fn normalize(&mut self) {
        *self = self.normed();
    }
    /// Returns the unit vector in the same direction. The zero vector stays zero.
    #[must_use]
    pub fn normed(&self) -> Vector2 {
        let len = self.len();
        if len == 0.0 {
            return Vector2::zero();
        }
        let rv = *self / len;
        Vector2::new(
            gg_float::force_positive_zero(rv.x),
            gg_float::force_positive_zero(rv.y),
        )
    }

    pub fn reflect(&mut self, normal: Vector2, restitution: f32) {
        *self = self.reflected(normal, restitution);
    }
    /// Reflects off a surface with unit `normal`. A `restitution` of 1 is a perfect bounce, 0
    /// removes the normal component entirely.
    #[must_use]
    pub fn reflected(&self, normal: Vector2, restitution: f32) -> Vector2 {
        *self - normal * self.dot(normal) * (1.0 + restitution)
    }

    pub fn rotate(&mut self, rotation: impl Into<Rotation>) {
        *self = self.rotated(rotation);
    }
    #[must_use]
    pub fn rotated(&self, rotation: impl Into<Rotation>) -> Vector2 {
        let rotation = rotation.into();
        let (sin, cos) = (trig::sine(rotation), trig::cosine(rotation));
        Vector2::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
        )
    }

    pub fn almost_eq(&self, rhs: Vector2) -> bool {
        (*self - rhs).len() < EPSILON
    }
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Vector2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from(value: [f32; 2]) -> Self {
        Vector2::new(value[0], value[1])
    }
}
impl From<Vector2> for [f32; 2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl Add<Vector2> for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl AddAssign<Vector2> for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl Sub<Vector2> for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl SubAssign<Vector2> for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}
impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}
impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Sum<Vector2> for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Self {
        iter.fold(Vector2::zero(), Vector2::add)
    }
}

impl TextFormat for Vector2 {
    fn write_text(&self, out: &mut String, format: &str) {
        text::write_f32_array(out, &[self.x, self.y], format);
    }

    fn read_text(reader: &mut TextReader<'_>, _format: &str) -> Result<Self> {
        let values = reader.read_f32_array::<2>().context(
            "the string could not be read as a Vector2 (expected two floating point numbers \
             separated by whitespace and/or a comma)",
        )?;
        Ok(values.into())
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

impl FromStr for Vector2 {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Vector2::from_text(s, "")
    }
}

impl BinaryFormat for Vector2 {}

/// A 3D free vector.
///
/// Rotations follow the right-hand rule: a positive rotation about an axis turns
/// counter-clockwise when looking down the axis towards the origin.
///
/// ```
/// use gg_affine::core::prelude::*;
///
/// let v = Vector3::unit_x().cross(Vector3::unit_y());
/// assert_eq!(v, Vector3::unit_z());
///
/// let turned = Vector3::unit_x().rotated_about(Vector3::unit_z(), Angle::from_degrees(90.0));
/// assert!(turned.almost_eq(Vector3::unit_y()));
/// ```
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
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }
    #[must_use]
    pub const fn zero() -> Vector3 {
        Vector3::new(0.0, 0.0, 0.0)
    }
    #[must_use]
    pub const fn one() -> Vector3 {
        Vector3::new(1.0, 1.0, 1.0)
    }
    #[must_use]
    pub const fn unit_x() -> Vector3 {
        Vector3::new(1.0, 0.0, 0.0)
    }
    #[must_use]
    pub const fn unit_y() -> Vector3 {
        Vector3::new(0.0, 1.0, 0.0)
    }
    #[must_use]
    pub const fn unit_z() -> Vector3 {
        Vector3::new(0.0, 0.0, 1.0)
    }

    #[must_use]
    pub fn new_normed(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3::new(x, y, z).normed()
    }
    /// The positive x-axis rotated by `rotation`.
    #[must_use]
    pub fn from_direction(rotation: Quaternion) -> Vector3 {
        Vector3::unit_x().rotated(rotation)
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
    pub fn dot(&self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    #[must_use]
    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// The shortest-arc rotation taking the positive x-axis onto this vector's direction.
    ///
    /// The zero vector gives the identity. A vector pointing along the negative x-axis gives a
    /// half turn about the y-axis.
    #[must_use]
    pub fn orientation(&self) -> Quaternion {
        let direction = self.normed();
        let w = 1.0 + direction.x;
        if w < EPSILON {
            return Quaternion::new(0.0, 1.0, 0.0, 0.0);
        }
        let axis = Vector3::unit_x().cross(direction);
        Quaternion::new(axis.x, axis.y, axis.z, w).normed()
    }

    pub fn normalize(&mut self) {
        *self = self.normed();
    }
    /// Returns the unit vector in the same direction. The zero vector stays zero.
    #[must_use]
    pub fn normed(&self) -> Vector3 {
        let len = self.len();
        if len == 0.0 {
            return Vector3::zero();
        }
        let rv = *self / len;
        Vector3::new(
            gg_float::force_positive_zero(rv.x),
            gg_float::force_positive_zero(rv.y),
            gg_float::force_positive_zero(rv.z),
        )
    }

    pub fn reflect(&mut self, normal: Vector3, restitution: f32) {
        *self = self.reflected(normal, restitution);
    }
    #[must_use]
    pub fn reflected(&self, normal: Vector3, restitution: f32) -> Vector3 {
        *self - normal * self.dot(normal) * (1.0 + restitution)
    }

    pub fn rotate(&mut self, rotation: Quaternion) {
        *self = self.rotated(rotation);
    }
    /// Applies `rotation` as `q v q*`.
    #[must_use]
    pub fn rotated(&self, rotation: Quaternion) -> Vector3 {
        let u = Vector3::new(rotation.x, rotation.y, rotation.z);
        let t = 2.0 * u.cross(*self);
        *self + rotation.w * t + u.cross(t)
    }

    pub fn rotate_about(&mut self, axis: Vector3, rotation: impl Into<Rotation>) {
        *self = self.rotated_about(axis, rotation);
    }
    /// Rotates about `axis` (normalised internally) by the right-hand rule.
    #[must_use]
    pub fn rotated_about(&self, axis: Vector3, rotation: impl Into<Rotation>) -> Vector3 {
        let axis = axis.normed();
        let rotation = rotation.into();
        let (sin, cos) = (trig::sine(rotation), trig::cosine(rotation));
        *self * cos + axis.cross(*self) * sin + axis * axis.dot(*self) * (1.0 - cos)
    }

    pub fn almost_eq(&self, rhs: Vector3) -> bool {
        (*self - rhs).len() < EPSILON
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(value: [f32; 3]) -> Self {
        Vector3::new(value[0], value[1], value[2])
    }
}
impl From<Vector3> for [f32; 3] {
    fn from(value: Vector3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl Add<Vector3> for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl AddAssign<Vector3> for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl Sub<Vector3> for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl SubAssign<Vector3> for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Sum<Vector3> for Vector3 {
    fn sum<I: Iterator<Item = Vector3>>(iter: I) -> Self {
        iter.fold(Vector3::zero(), Vector3::add)
    }
}

impl TextFormat for Vector3 {
    fn write_text(&self, out: &mut String, format: &str) {
        text::write_f32_array(out, &[self.x, self.y, self.z], format);
    }

    fn read_text(reader: &mut TextReader<'_>, _format: &str) -> Result<Self> {
        let values = reader.read_f32_array::<3>().context(
            "the string could not be read as a Vector3 (expected three floating point numbers \
             separated by whitespace and/or a comma)",
        )?;
        Ok(values.into())
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

impl FromStr for Vector3 {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Vector3::from_text(s, "")
    }
}

impl BinaryFormat for Vector3 {}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vector3(rng: &mut StdRng) -> Vector3 {
        Vector3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    #[test]
    fn classic_lengths() {
        assert_eq!(Vector2::new(3.0, 4.0).len(), 5.0);
        assert_eq!(Vector2::new(3.0, 4.0).len_squared(), 25.0);
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).len(), 7.0);
        assert_eq!(Vector2::zero().len(), 0.0);
    }

    #[test]
    fn vector2_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(-3.0, 0.5);
        assert_eq!(a + b, Vector2::new(-2.0, 2.5));
        assert_eq!(a - b, Vector2::new(4.0, 1.5));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Vector2::new(0.5, 1.0));
        assert_eq!(a.dot(b), -2.0);
        assert_eq!(Vector2::unit_x().perp_dot(Vector2::unit_y()), 1.0);
        assert_eq!(Vector2::unit_y().perp_dot(Vector2::unit_x()), -1.0);

        let mut c = a;
        c += b;
        c -= b;
        c *= 3.0;
        c /= 3.0;
        assert!(c.almost_eq(a));

        let total: Vector2 = [a, b, a].into_iter().sum();
        assert_eq!(total, Vector2::new(-1.0, 4.5));
        assert!(Vector2::zero().is_zero());
        assert_eq!(<[f32; 2]>::from(a), [1.0, 2.0]);
        assert_eq!(Vector2::from([1.0, 2.0]), a);
    }

    #[test]
    fn vector2_directions() {
        assert_eq!(Vector2::new(1.0, 2.0).perpendicular(), Vector2::new(-2.0, 1.0));
        assert!(Vector2::new(0.0, 5.0).normal().almost_eq(Vector2::new(-1.0, 0.0)));
        assert!(Vector2::new_normed(0.0, -3.0).almost_eq(Vector2::new(0.0, -1.0)));

        assert!(Vector2::new(0.0, 2.0)
            .orientation()
            .almost_eq(Angle::from_degrees(90.0)));
        assert!(Vector2::new(0.0, -2.0)
            .orientation()
            .almost_eq(Angle::from_degrees(270.0)));
        assert_eq!(Vector2::zero().orientation(), Angle::ZERO);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let angle = Angle::from_radians(rng.gen_range(0.0..std::f32::consts::TAU));
            let v = Vector2::from_direction(angle);
            assert!(arithmetic::is_close_to(v.len(), 1.0));
            assert!(v.orientation().almost_eq(angle), "{angle} vs. {}", v.orientation());
        }
    }

    #[test]
    fn vector2_rotation() {
        let v = Vector2::new(2.0, 0.0);
        assert!(v.rotated(Angle::from_degrees(90.0)).almost_eq(Vector2::new(0.0, 2.0)));
        assert!(v.rotated(Rotation::from_degrees(-90.0)).almost_eq(Vector2::new(0.0, -2.0)));
        assert!(v.rotated(Rotation::from_degrees(540.0)).almost_eq(Vector2::new(-2.0, 0.0)));
        let mut w = v;
        w.rotate(Angle::from_degrees(45.0));
        assert!(arithmetic::is_close_to(w.len(), 2.0));
        assert!(w.orientation().almost_eq(Angle::from_degrees(45.0)));
    }

    #[test]
    fn normalisation() {
        let mut v = Vector2::new(-4.0, 0.0);
        v.normalize();
        assert_eq!(v, Vector2::new(-1.0, 0.0));
        assert!(v.y.is_sign_positive());
        assert_eq!(Vector2::zero().normed(), Vector2::zero());
        assert_eq!(Vector3::zero().normed(), Vector3::zero());

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let v = random_vector3(&mut rng);
            if v.len() > EPSILON {
                assert!(arithmetic::is_close_to(v.normed().len(), 1.0));
                assert!(v.normed().cross(v).len() < 1e-3);
            }
        }
    }

    #[test]
    fn reflection() {
        let v = Vector2::new(1.0, -1.0);
        let normal = Vector2::unit_y();
        assert!(v.reflected(normal, 1.0).almost_eq(Vector2::new(1.0, 1.0)));
        assert!(v.reflected(normal, 0.0).almost_eq(Vector2::new(1.0, 0.0)));
        assert!(v.reflected(normal, 0.5).almost_eq(Vector2::new(1.0, 0.5)));

        let mut w = Vector3::new(1.0, 2.0, -3.0);
        w.reflect(Vector3::unit_z(), 1.0);
        assert!(w.almost_eq(Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn vector3_products() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(Vector3::unit_y().cross(Vector3::unit_z()), Vector3::unit_x());
        assert_eq!(Vector3::unit_z().cross(Vector3::unit_x()), Vector3::unit_y());
        let c = a.cross(b);
        assert!(arithmetic::is_close_to(c.dot(a), 0.0));
        assert!(arithmetic::is_close_to(c.dot(b), 0.0));
        assert_eq!(b.cross(a), -c);
    }

    #[test]
    fn vector3_rotations() {
        let q = Quaternion::create_yaw(Rotation::from_degrees(90.0));
        // Yaw turns about +y: x goes to -z.
        assert!(Vector3::unit_x().rotated(q).almost_eq(-Vector3::unit_z()));
        assert!(Vector3::from_direction(q).almost_eq(-Vector3::unit_z()));
        assert!(Vector3::unit_y().rotated(q).almost_eq(Vector3::unit_y()));

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let v = random_vector3(&mut rng);
            let axis = random_vector3(&mut rng);
            let rotation = Rotation::from_radians(rng.gen_range(-6.0..6.0));
            let about = v.rotated_about(axis, rotation);
            let via_quaternion = v.rotated(Quaternion::from_axis_angle(axis, rotation));
            assert!((about - via_quaternion).len() < 1e-3);
            assert!(arithmetic::is_close_to_within(about.len(), v.len(), 1e-3));
        }
    }

    #[test]
    fn vector3_orientation() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let v = random_vector3(&mut rng);
            let q = v.orientation();
            assert!(arithmetic::is_close_to(q.len(), 1.0));
            assert!(Vector3::from_direction(q).almost_eq(v.normed()) || v.len() < EPSILON);
        }
        assert_eq!(Vector3::zero().orientation(), Quaternion::IDENTITY);
        assert!(Vector3::unit_x().orientation().almost_eq(Quaternion::IDENTITY));
        let back = Vector3::new(-2.0, 0.0, 0.0).orientation();
        assert!(Vector3::from_direction(back).almost_eq(-Vector3::unit_x()));
    }

    #[test]
    fn text_round_trip() {
        let v = Vector2::new(1.5, -2.25);
        assert_eq!(v.to_text(""), "1.5, -2.25");
        assert_eq!(Vector2::from_text("1.5, -2.25", "").unwrap(), v);
        assert_eq!(Vector2::from_text("1.5 -2.25", "").unwrap(), v);
        assert_eq!(Vector2::from_text("1.5,-2.25", "").unwrap(), v);
        assert!(Vector2::from_text("1.5", "").is_err());
        assert!(Vector2::from_text("1.5, 2, 3", "").is_err());
        let err = Vector3::from_text("1, 2", "").unwrap_err();
        assert!(format!("{err:#}").contains("three floating point numbers"));

        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let v = random_vector3(&mut rng);
            assert_eq!(v.to_string().parse::<Vector3>().unwrap(), v);
            assert!(Vector3::from_text(&v.to_text(".5"), "").unwrap().almost_eq(v));
        }
    }

    #[test]
    fn binary_round_trip() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            let v = random_vector3(&mut rng);
            let bytes = v.to_bytes().unwrap();
            assert_eq!(bytes.len(), 12);
            let decoded = Vector3::from_bytes(&bytes).unwrap();
            assert_eq!(decoded.x.to_bits(), v.x.to_bits());
            assert_eq!(decoded.y.to_bits(), v.y.to_bits());
            assert_eq!(decoded.z.to_bits(), v.z.to_bits());
        }

        let config = bincode::config::standard();
        let v = Vector2::new(f32::INFINITY, -0.0);
        let encoded = bincode::serde::encode_to_vec(v, config).unwrap();
        let (decoded, _): (Vector2, _) = bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(decoded.x, f32::INFINITY);
        assert!(decoded.y.is_sign_negative());
    }
}
