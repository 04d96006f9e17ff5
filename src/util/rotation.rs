use crate::core::prelude::*;
use crate::util::text;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// An unbounded, signed amount of turning, stored in radians.
///
/// A [`Rotation`] is a *delta*: it accumulates without ever wrapping around, so two full turns
/// are distinct from zero. Use [`Angle`] for an absolute orientation in `[0, 2π)`.
///
/// # Examples
///
/// ```
/// use gg_affine::core::prelude::*;
///
/// let quarter = Rotation::from_degrees(90.0);
/// let total = quarter * 5.0;
/// assert!((total.in_degrees() - 450.0).abs() < EPSILON);
/// assert!(total > Rotation::from_degrees(360.0));
/// ```
///
/// # Ordering
/// [`Rotation`] is totally ordered. If either side is `NaN`, the comparison falls back to
/// [`total_cmp`](f32::total_cmp) and logs a warning.
#[derive(
    Default, Debug, Copy, Clone, bincode::Encode, bincode::Decode, Serialize, Deserialize,
)]
pub struct Rotation {
    radians: f32,
}

impl Rotation {
    pub const ZERO: Rotation = Rotation { radians: 0.0 };

    #[must_use]
    pub fn from_degrees(degrees: f32) -> Rotation {
        Rotation {
            radians: degrees.to_radians(),
        }
    }
    #[must_use]
    pub const fn from_radians(radians: f32) -> Rotation {
        Rotation { radians }
    }

    #[must_use]
    pub fn in_degrees(&self) -> f32 {
        self.radians.to_degrees()
    }
    #[must_use]
    pub fn in_radians(&self) -> f32 {
        self.radians
    }

    /// Compares the raw radian amounts within [`EPSILON`]. No wraparound is applied, so a full
    /// turn is not close to zero.
    pub fn almost_eq(&self, rhs: Rotation) -> bool {
        arithmetic::is_close_to(self.radians, rhs.radians)
    }
}

impl PartialEq for Rotation {
    fn eq(&self, other: &Self) -> bool {
        self.radians == other.radians
    }
}
impl Eq for Rotation {}

impl PartialOrd<Self> for Rotation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rotation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.radians.partial_cmp(&other.radians).unwrap_or_else(|| {
            warn!("Rotation: partial_cmp() failed: {} vs. {}", self, other);
            self.radians.total_cmp(&other.radians)
        })
    }
}

impl Neg for Rotation {
    type Output = Rotation;

    fn neg(self) -> Self::Output {
        Rotation::from_radians(-self.radians)
    }
}

impl Add<Rotation> for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Self::Output {
        Rotation::from_radians(self.radians + rhs.radians)
    }
}
impl AddAssign<Rotation> for Rotation {
    fn add_assign(&mut self, rhs: Rotation) {
        self.radians += rhs.radians;
    }
}

impl Sub<Rotation> for Rotation {
    type Output = Rotation;

    fn sub(self, rhs: Rotation) -> Self::Output {
        Rotation::from_radians(self.radians - rhs.radians)
    }
}
impl SubAssign<Rotation> for Rotation {
    fn sub_assign(&mut self, rhs: Rotation) {
        self.radians -= rhs.radians;
    }
}

impl Mul<f32> for Rotation {
    type Output = Rotation;

    fn mul(self, rhs: f32) -> Self::Output {
        Rotation::from_radians(self.radians * rhs)
    }
}
impl Mul<Rotation> for f32 {
    type Output = Rotation;

    fn mul(self, rhs: Rotation) -> Self::Output {
        Rotation::from_radians(self * rhs.radians)
    }
}
impl MulAssign<f32> for Rotation {
    fn mul_assign(&mut self, rhs: f32) {
        self.radians *= rhs;
    }
}

impl Div<f32> for Rotation {
    type Output = Rotation;

    fn div(self, rhs: f32) -> Self::Output {
        Rotation::from_radians(self.radians / rhs)
    }
}
impl DivAssign<f32> for Rotation {
    fn div_assign(&mut self, rhs: f32) {
        self.radians /= rhs;
    }
}

impl std::iter::Sum<Rotation> for Rotation {
    fn sum<I: Iterator<Item = Rotation>>(iter: I) -> Self {
        iter.fold(Rotation::ZERO, |acc, r| acc + r)
    }
}

impl TextFormat for Rotation {
    fn write_text(&self, out: &mut String, format: &str) {
        text::write_scalar_with_unit(out, self.radians, format);
    }

    fn read_text(reader: &mut TextReader<'_>, format: &str) -> Result<Self> {
        let radians = text::read_scalar_with_unit(reader, format).context(
            "the string could not be read as a Rotation (expected a floating point number \
             optionally followed by '_degrees' or '_radians')",
        )?;
        Ok(Rotation::from_radians(radians))
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

impl FromStr for Rotation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Rotation::from_text(s, "")
    }
}

impl BinaryFormat for Rotation {}
