use crate::core::prelude::*;
use crate::util::text;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};

/// A position in the plane.
///
/// Points only support the affine operations: offsetting by a [`Vector2`], and subtracting
/// another point to get the [`Vector2`] between them. There is deliberately no
/// `Point2 + Point2`; use [`as_offset`](Point2::as_offset) to step outside the affine rules.
///
/// ```
/// use gg_affine::core::prelude::*;
///
/// let start = Point2::new(1.0, 1.0);
/// let end = start + Vector2::new(2.0, 3.0);
/// assert_eq!(end - start, Vector2::new(2.0, 3.0));
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
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Point2 {
        Point2 { x, y }
    }
    #[must_use]
    pub const fn origin() -> Point2 {
        Point2::new(0.0, 0.0)
    }

    /// The vector from the origin to this point.
    #[must_use]
    pub fn as_offset(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn almost_eq(&self, rhs: Point2) -> bool {
        (*self - rhs).len() < EPSILON
    }
}

impl From<[f32; 2]> for Point2 {
    fn from(value: [f32; 2]) -> Self {
        Point2::new(value[0], value[1])
    }
}
impl From<Point2> for [f32; 2] {
    fn from(value: Point2) -> Self {
        [value.x, value.y]
    }
}

impl Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Add<Point2> for Vector2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Self::Output {
        rhs + self
    }
}
impl AddAssign<Vector2> for Point2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl Sub<Vector2> for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl SubAssign<Vector2> for Point2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}

impl Sub<Point2> for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Point2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Point2;

    fn mul(self, rhs: f32) -> Self::Output {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}
impl MulAssign<f32> for Point2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl TextFormat for Point2 {
    fn write_text(&self, out: &mut String, format: &str) {
        text::write_f32_array(out, &[self.x, self.y], format);
    }

    fn read_text(reader: &mut TextReader<'_>, _format: &str) -> Result<Self> {
        let values = reader.read_f32_array::<2>().context(
            "the string could not be read as a Point2 (expected two floating point numbers \
             separated by whitespace and/or a comma)",
        )?;
        Ok(values.into())
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

impl FromStr for Point2 {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Point2::from_text(s, "")
    }
}

impl BinaryFormat for Point2 {}

/// A position in 3D space, with the same affine rules as [`Point2`].
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
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3 { x, y, z }
    }
    #[must_use]
    pub const fn origin() -> Point3 {
        Point3::new(0.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn as_offset(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn almost_eq(&self, rhs: Point3) -> bool {
        (*self - rhs).len() < EPSILON
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(value: [f32; 3]) -> Self {
        Point3::new(value[0], value[1], value[2])
    }
}
impl From<Point3> for [f32; 3] {
    fn from(value: Point3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Self::Output {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Add<Point3> for Vector3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Self::Output {
        rhs + self
    }
}
impl AddAssign<Vector3> for Point3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Vector3) -> Self::Output {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl SubAssign<Vector3> for Point3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl Sub<Point3> for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Point3) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f32) -> Self::Output {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl MulAssign<f32> for Point3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl TextFormat for Point3 {
    fn write_text(&self, out: &mut String, format: &str) {
        text::write_f32_array(out, &[self.x, self.y, self.z], format);
    }

    fn read_text(reader: &mut TextReader<'_>, _format: &str) -> Result<Self> {
        let values = reader.read_f32_array::<3>().context(
            "the string could not be read as a Point3 (expected three floating point numbers \
             separated by whitespace and/or a comma)",
        )?;
        Ok(values.into())
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

impl FromStr for Point3 {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Point3::from_text(s, "")
    }
}

impl BinaryFormat for Point3 {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn affine_laws_hold_exactly() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            // Dyadic values keep every sum and difference exact.
            let mut value = || f32::from(rng.gen_range(-1000_i16..1000)) / 8.0;
            let p = Point3::new(value(), value(), value());
            let q = Point3::new(value(), value(), value());
            let v = Vector3::new(value(), value(), value());
            assert_eq!((p + v) - p, v);
            assert_eq!((p - q) + q, p);
            assert_eq!((p - v) + v, p);

            let p2 = Point2::new(p.x, p.y);
            let q2 = Point2::new(q.x, q.y);
            let v2 = Vector2::new(v.x, v.y);
            assert_eq!((p2 + v2) - p2, v2);
            assert_eq!((p2 - q2) + q2, p2);
            assert_eq!(q2 + (p2 - q2), p2);
        }
    }

    #[test]
    fn assign_operators() {
        let mut p = Point2::new(1.0, 2.0);
        p += Vector2::new(1.0, 1.0);
        assert_eq!(p, Point2::new(2.0, 3.0));
        p -= Vector2::new(2.0, 0.0);
        assert_eq!(p, Point2::new(0.0, 3.0));
        p *= 2.0;
        assert_eq!(p, Point2::new(0.0, 6.0));

        let mut p = Point3::new(1.0, 2.0, 3.0);
        p += Vector3::one();
        p -= Vector3::unit_z();
        assert_eq!(p * 0.5, Point3::new(1.0, 1.5, 1.5));
        p *= 0.0;
        assert_eq!(p, Point3::origin());
    }

    #[test]
    fn offsets() {
        assert_eq!(Point2::new(3.0, -1.0).as_offset(), Vector2::new(3.0, -1.0));
        assert_eq!(
            Point3::new(3.0, -1.0, 2.0).as_offset(),
            Point3::new(3.0, -1.0, 2.0) - Point3::origin()
        );
        assert_eq!(Point2::origin().as_offset().len(), 0.0);
        assert!(Point3::new(1.0, 2.0, 3.0).almost_eq(Point3::new(1.0, 2.0, 3.00001)));
    }

    #[test]
    fn parse_with_and_without_comma() {
        let expected = Point2::new(1.5, -2.25);
        assert_eq!(Point2::from_text("1.5, -2.25", "").unwrap(), expected);
        assert_eq!(Point2::from_text("1.5 -2.25", "").unwrap(), expected);
        assert_eq!("  1.5\t,-2.25 ".parse::<Point2>().unwrap(), expected);
        let err = Point2::from_text("1.5; -2.25", "").unwrap_err();
        assert!(format!("{err:#}").contains("Point2"));

        assert_eq!(
            Point3::from_text("1 2,3", "").unwrap(),
            Point3::new(1.0, 2.0, 3.0)
        );
        assert!(Point3::from_text("1 2", "").is_err());
    }

    #[test]
    fn text_and_binary_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let p = Point3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            assert_eq!(Point3::from_text(&p.to_text(""), "").unwrap(), p);
            assert!(Point3::from_text(&p.to_text(".5"), "").unwrap().almost_eq(p));
            assert_eq!(Point3::from_bytes(&p.to_bytes().unwrap()).unwrap(), p);

            let p2 = Point2::new(p.x, p.z);
            assert_eq!(p2.to_string().parse::<Point2>().unwrap(), p2);
            assert_eq!(Point2::from_bytes(&p2.to_bytes().unwrap()).unwrap(), p2);
        }
    }
}
