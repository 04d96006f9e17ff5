use crate::core::prelude::*;
use crate::util::gg_float;
use crate::util::text;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::f32::consts::TAU;
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// An absolute orientation in the plane, stored in radians and always normalised into
/// `[0, 2π)`.
///
/// Every constructor and every mutation renormalises, so equality and ordering always compare
/// normalised values. Deltas are expressed as [`Rotation`]:
///
/// ```
/// use gg_affine::core::prelude::*;
///
/// let mut heading = Angle::from_degrees(350.0);
/// heading += Rotation::from_degrees(20.0);
/// assert!(heading.almost_eq(Angle::from_degrees(10.0)));
///
/// // Going the other way never leaves [0, 360).
/// heading -= Rotation::from_degrees(30.0);
/// assert!((heading.in_degrees() - 340.0).abs() < 1e-3);
/// ```
#[derive(Default, Debug, Copy, Clone, bincode::Encode, Serialize, Deserialize)]
#[serde(from = "Rotation", into = "Rotation")]
pub struct Angle {
    radians: f32,
}

/// Maps `radians` into `[0, 2π)` by subtracting a truncated whole number of turns.
///
/// The truncated quotient can land exactly on `2π` (or just below zero) through rounding, in
/// which case the Euclidean remainder is used instead. `NaN` passes through.
fn normalize_radians(radians: f32) -> f32 {
    let wrapped = if radians < 0.0 {
        radians + ((-radians / TAU).trunc() + 1.0) * TAU
    } else if radians >= TAU {
        radians - (radians / TAU).trunc() * TAU
    } else {
        radians
    };
    if (0.0..TAU).contains(&wrapped) {
        return gg_float::force_positive_zero(wrapped);
    }
    let fallback = gg_float::force_positive_zero(radians.rem_euclid(TAU));
    if fallback >= TAU { 0.0 } else { fallback }
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    #[must_use]
    pub fn from_degrees(degrees: f32) -> Angle {
        Angle::from_radians(degrees.to_radians())
    }
    #[must_use]
    pub fn from_radians(radians: f32) -> Angle {
        Angle {
            radians: normalize_radians(radians),
        }
    }

    #[must_use]
    pub fn in_degrees(&self) -> f32 {
        self.radians.to_degrees()
    }
    #[must_use]
    pub fn in_radians(&self) -> f32 {
        self.radians
    }

    pub fn sin(&self) -> f32 {
        self.radians.sin()
    }
    pub fn cos(&self) -> f32 {
        self.radians.cos()
    }

    /// Compares two angles within [`EPSILON`], treating values just below `2π` as close to zero.
    pub fn almost_eq(&self, rhs: Angle) -> bool {
        let difference = (self.radians - rhs.radians).abs();
        difference.min(TAU - difference) < EPSILON
    }
}

impl From<Rotation> for Angle {
    fn from(value: Rotation) -> Self {
        Angle::from_radians(value.in_radians())
    }
}

impl From<Angle> for Rotation {
    fn from(value: Angle) -> Self {
        Rotation::from_radians(value.radians)
    }
}

// Decoding goes through `from_radians` so raw bytes cannot produce an unnormalised angle.
impl<Context> bincode::Decode<Context> for Angle {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let radians = <f32 as bincode::Decode<Context>>::decode(decoder)?;
        Ok(Angle::from_radians(radians))
    }
}
impl<'de, Context> bincode::BorrowDecode<'de, Context> for Angle {
    fn borrow_decode<D: bincode::de::BorrowDecoder<'de, Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let radians = <f32 as bincode::BorrowDecode<'de, Context>>::borrow_decode(decoder)?;
        Ok(Angle::from_radians(radians))
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.radians == other.radians
    }
}
impl Eq for Angle {}

impl PartialOrd<Self> for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Angle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.radians.partial_cmp(&other.radians).unwrap_or_else(|| {
            warn!("Angle: partial_cmp() failed: {} vs. {}", self, other);
            self.radians.total_cmp(&other.radians)
        })
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Angle::from_radians(-self.radians)
    }
}

impl Add<Rotation> for Angle {
    type Output = Angle;

    fn add(self, rhs: Rotation) -> Self::Output {
        Angle::from_radians(self.radians + rhs.in_radians())
    }
}
impl AddAssign<Rotation> for Angle {
    fn add_assign(&mut self, rhs: Rotation) {
        *self = *self + rhs;
    }
}

impl Sub<Rotation> for Angle {
    type Output = Angle;

    fn sub(self, rhs: Rotation) -> Self::Output {
        Angle::from_radians(self.radians - rhs.in_radians())
    }
}
impl SubAssign<Rotation> for Angle {
    fn sub_assign(&mut self, rhs: Rotation) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f32) -> Self::Output {
        Angle::from_radians(self.radians * rhs)
    }
}
impl MulAssign<f32> for Angle {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Angle {
    type Output = Angle;

    fn div(self, rhs: f32) -> Self::Output {
        Angle::from_radians(self.radians / rhs)
    }
}
impl DivAssign<f32> for Angle {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl TextFormat for Angle {
    fn write_text(&self, out: &mut String, format: &str) {
        text::write_scalar_with_unit(out, self.radians, format);
    }

    fn read_text(reader: &mut TextReader<'_>, format: &str) -> Result<Self> {
        let radians = text::read_scalar_with_unit(reader, format).context(
            "the string could not be read as an Angle (expected a floating point number \
             optionally followed by '_degrees' or '_radians')",
        )?;
        Ok(Angle::from_radians(radians))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

impl FromStr for Angle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Angle::from_text(s, "")
    }
}

impl BinaryFormat for Angle {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn normalizes_into_range() {
        assert_eq!(Angle::from_radians(0.0).in_radians(), 0.0);
        assert!(Angle::from_radians(-0.0).in_radians().is_sign_positive());
        assert_eq!(Angle::from_radians(TAU).in_radians(), 0.0);
        assert!(Angle::from_radians(-TAU).in_radians() < TAU);
        assert!(arithmetic::is_close_to(
            Angle::from_radians(-FRAC_PI_2).in_radians(),
            3.0 * FRAC_PI_2
        ));
        assert!(arithmetic::is_close_to_within(
            Angle::from_degrees(725.0).in_degrees(),
            5.0,
            1e-3
        ));
        assert!(arithmetic::is_close_to_within(
            Angle::from_degrees(-90.0).in_degrees(),
            270.0,
            1e-3
        ));
        assert!(Angle::from_radians(f32::NAN).in_radians().is_nan());
    }

    #[test]
    fn degrees_match_wrap() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let degrees: f32 = rng.gen_range(-5000.0..5000.0);
            let angle = Angle::from_degrees(degrees);
            assert!((0.0..TAU).contains(&angle.in_radians()), "{degrees} -> {angle}");
            let expected = Angle::from_degrees(arithmetic::wrap(degrees, 0.0, 360.0));
            assert!(angle.almost_eq(expected), "{degrees}: {angle} vs. {expected}");
        }
    }

    #[test]
    fn extreme_inputs_stay_in_range() {
        for radians in [1e10, -1e10, f32::MAX, -f32::MAX, TAU - f32::EPSILON, -f32::EPSILON] {
            let angle = Angle::from_radians(radians);
            let r = angle.in_radians();
            assert!((0.0..TAU).contains(&r) || r.is_nan(), "{radians} -> {r}");
        }
    }

    #[test]
    fn delta_application_is_associative() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..500 {
            let r1 = Rotation::from_radians(rng.gen_range(-20.0..20.0));
            let r2 = Rotation::from_radians(rng.gen_range(-20.0..20.0));
            let stepwise = Angle::ZERO + r1 + r2;
            let combined = Angle::ZERO + (r1 + r2);
            assert!(stepwise.almost_eq(combined), "{r1} {r2}: {stepwise} vs. {combined}");
        }
    }

    #[test]
    fn operators_renormalize() {
        let a = Angle::from_degrees(300.0);
        assert!((a + Rotation::from_degrees(120.0)).almost_eq(Angle::from_degrees(60.0)));
        assert!((a - Rotation::from_degrees(400.0)).almost_eq(Angle::from_degrees(260.0)));
        assert!((-a).almost_eq(Angle::from_degrees(60.0)));
        assert!((a * 2.0).almost_eq(Angle::from_degrees(240.0)));
        assert!((a / 2.0).almost_eq(Angle::from_degrees(150.0)));

        let mut b = a;
        b *= 3.0;
        assert!(b.almost_eq(Angle::from_degrees(180.0)));
        b /= 4.0;
        assert!(b.almost_eq(Angle::from_degrees(45.0)));
    }

    #[test]
    fn wraparound_almost_eq() {
        assert!(Angle::from_radians(TAU - EPSILON / 2.0).almost_eq(Angle::ZERO));
        assert!(Angle::ZERO.almost_eq(Angle::from_radians(TAU - EPSILON / 2.0)));
        assert!(!Angle::from_radians(PI).almost_eq(Angle::ZERO));
    }

    #[test]
    fn conversions() {
        let r = Rotation::from_degrees(450.0);
        let a = Angle::from(r);
        assert!(a.almost_eq(Angle::from_degrees(90.0)));
        let back: Rotation = a.into();
        assert!(back.almost_eq(Rotation::from_degrees(90.0)));
        assert!(arithmetic::is_close_to(Angle::from_degrees(90.0).sin(), 1.0));
        assert!(arithmetic::is_close_to(Angle::from_degrees(180.0).cos(), -1.0));
    }

    #[test]
    fn ordering() {
        let mut angles = vec![
            Angle::from_degrees(-10.0),
            Angle::from_degrees(10.0),
            Angle::from_degrees(180.0),
        ];
        angles.sort();
        assert!(angles[0].almost_eq(Angle::from_degrees(10.0)));
        assert!(angles[2].almost_eq(Angle::from_degrees(350.0)));
    }

    #[test]
    fn text_round_trip() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let a = Angle::from_radians(rng.gen_range(-10.0..10.0));
            assert_eq!(Angle::from_text(&a.to_text(""), "").unwrap(), a);
            for format in ["degrees", "degrees.3", "radians.4", ".5"] {
                let written = a.to_text(format);
                let read = Angle::from_text(&written, format).unwrap();
                assert!(read.almost_eq(a), "{format}: {written} -> {read} vs. {a}");
            }
        }
        assert_eq!(Angle::from_degrees(90.0).to_text("degrees.1"), "90.0_degrees");
        assert!(Angle::from_text("-90_degrees", "")
            .unwrap()
            .almost_eq(Angle::from_degrees(270.0)));
        assert!("ninety".parse::<Angle>().is_err());
    }

    #[test]
    fn binary_round_trip() {
        let a = Angle::from_radians(4.25);
        assert_eq!(Angle::from_bytes(&a.to_bytes().unwrap()).unwrap(), a);
    }

    #[test]
    fn binary_decode_renormalizes() {
        let decoded = Angle::from_bytes(&10.0_f32.to_le_bytes()).unwrap();
        assert!((0.0..TAU).contains(&decoded.in_radians()));
        assert!(decoded.almost_eq(Angle::from_radians(10.0 - TAU)));

        let decoded = Angle::from_bytes(&(-1.0_f32).to_le_bytes()).unwrap();
        assert!(arithmetic::is_close_to(decoded.in_radians(), TAU - 1.0));

        let config = bincode::config::standard();
        let (borrowed, _): (Angle, _) =
            bincode::borrow_decode_from_slice(&7.0_f32.to_le_bytes(), config).unwrap();
        assert!(borrowed.almost_eq(Angle::from_radians(7.0 - TAU)));
    }

    #[test]
    fn serde_renormalizes() {
        let config = bincode::config::standard();
        let bytes = bincode::serde::encode_to_vec(Rotation::from_radians(TAU + 1.0), config)
            .unwrap();
        let (a, _): (Angle, _) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
        assert!(a.almost_eq(Angle::from_radians(1.0)));

        let a = Angle::from_radians(2.5);
        let bytes = bincode::serde::encode_to_vec(a, config).unwrap();
        let (decoded, _): (Angle, _) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(decoded, a);
    }
}
