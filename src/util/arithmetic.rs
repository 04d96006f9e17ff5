//! Tolerant float comparisons, float-to-integer rounding, and range helpers.
//!
//! Every function here is total over its domain, with the exception of [`divide`], which panics
//! on a zero denominator.

use crate::core::config::EPSILON;
use num_traits::Num;

/// Returns `true` if `left` and `right` differ by less than [`EPSILON`].
///
/// # Examples
/// ```
/// use gg_affine::util::arithmetic;
/// assert!(arithmetic::is_close_to(1.0, 1.00005));
/// assert!(!arithmetic::is_close_to(1.0, 1.001));
/// ```
pub fn is_close_to(left: f32, right: f32) -> bool {
    is_close_to_within(left, right, EPSILON)
}
pub fn is_close_to_within(left: f32, right: f32, difference: f32) -> bool {
    (left - right).abs() < difference
}

/// Returns `true` if `left` is smaller than `right` by at least [`EPSILON`].
pub fn is_less_than(left: f32, right: f32) -> bool {
    is_less_than_within(left, right, EPSILON)
}
pub fn is_less_than_within(left: f32, right: f32, difference: f32) -> bool {
    left + difference < right
}

pub fn is_less_than_or_close_to(left: f32, right: f32) -> bool {
    is_less_than_or_close_to_within(left, right, EPSILON)
}
pub fn is_less_than_or_close_to_within(left: f32, right: f32, difference: f32) -> bool {
    is_less_than_within(left, right, difference) || is_close_to_within(left, right, difference)
}

/// Returns `true` if `left` is larger than `right` by at least [`EPSILON`].
pub fn is_greater_than(left: f32, right: f32) -> bool {
    is_greater_than_within(left, right, EPSILON)
}
pub fn is_greater_than_within(left: f32, right: f32, difference: f32) -> bool {
    left - difference > right
}

pub fn is_greater_than_or_close_to(left: f32, right: f32) -> bool {
    is_greater_than_or_close_to_within(left, right, EPSILON)
}
pub fn is_greater_than_or_close_to_within(left: f32, right: f32, difference: f32) -> bool {
    is_greater_than_within(left, right, difference) || is_close_to_within(left, right, difference)
}

/// Rounding of a float type to the narrowest integer type that covers it: `f32` rounds to `i32`
/// and `f64` rounds to `i64`. Out-of-range values saturate.
pub trait IntegerRounding: Copy {
    type Int;

    fn ceiling(self) -> Self::Int;
    fn floor(self) -> Self::Int;
    fn round(self) -> Self::Int;
    fn truncate(self) -> Self::Int;
}

impl IntegerRounding for f32 {
    type Int = i32;

    #[allow(clippy::cast_possible_truncation)]
    fn ceiling(self) -> i32 {
        self.ceil() as i32
    }
    #[allow(clippy::cast_possible_truncation)]
    fn floor(self) -> i32 {
        f32::floor(self) as i32
    }
    #[allow(clippy::cast_possible_truncation)]
    fn round(self) -> i32 {
        f32::round(self) as i32
    }
    #[allow(clippy::cast_possible_truncation)]
    fn truncate(self) -> i32 {
        self.trunc() as i32
    }
}

impl IntegerRounding for f64 {
    type Int = i64;

    #[allow(clippy::cast_possible_truncation)]
    fn ceiling(self) -> i64 {
        self.ceil() as i64
    }
    #[allow(clippy::cast_possible_truncation)]
    fn floor(self) -> i64 {
        f64::floor(self) as i64
    }
    #[allow(clippy::cast_possible_truncation)]
    fn round(self) -> i64 {
        f64::round(self) as i64
    }
    #[allow(clippy::cast_possible_truncation)]
    fn truncate(self) -> i64 {
        self.trunc() as i64
    }
}

pub fn ceiling<T: IntegerRounding>(number: T) -> T::Int {
    number.ceiling()
}
pub fn floor<T: IntegerRounding>(number: T) -> T::Int {
    number.floor()
}
/// Rounds half-way cases away from zero.
pub fn round<T: IntegerRounding>(number: T) -> T::Int {
    number.round()
}
pub fn truncate<T: IntegerRounding>(number: T) -> T::Int {
    number.truncate()
}

pub fn minimum<T: PartialOrd>(left: T, right: T) -> T {
    if left < right { left } else { right }
}

pub fn maximum<T: PartialOrd>(left: T, right: T) -> T {
    if left > right { left } else { right }
}

/// Variadic [`minimum`], reducing left to right.
///
/// # Examples
/// ```
/// use gg_affine::minimum;
/// assert_eq!(minimum!(4, 2, 7, 3), 2);
/// ```
#[macro_export]
macro_rules! minimum {
    ($only:expr) => { $only };
    ($first:expr, $second:expr $(, $rest:expr)*) => {
        $crate::minimum!($crate::util::arithmetic::minimum($first, $second) $(, $rest)*)
    };
}

/// Variadic [`maximum`], reducing left to right.
///
/// # Examples
/// ```
/// use gg_affine::maximum;
/// assert_eq!(maximum!(4.0, 2.0, 7.5), 7.5);
/// ```
#[macro_export]
macro_rules! maximum {
    ($only:expr) => { $only };
    ($first:expr, $second:expr $(, $rest:expr)*) => {
        $crate::maximum!($crate::util::arithmetic::maximum($first, $second) $(, $rest)*)
    };
}

/// Saturates `number` into `[minimum, maximum]`.
pub fn clamp<T: PartialOrd>(number: T, minimum: T, maximum: T) -> T {
    if number < minimum {
        minimum
    } else if number > maximum {
        maximum
    } else {
        number
    }
}

/// Maps `number` into `[minimum, maximum)` by removing a truncated whole number of range widths.
/// A degenerate range (`maximum <= minimum`) yields zero. `NaN` and infinities are returned
/// unchanged.
///
/// # Examples
/// ```
/// use gg_affine::util::arithmetic;
/// assert_eq!(arithmetic::wrap(370.0, 0.0, 360.0), 10.0);
/// assert_eq!(arithmetic::wrap(-1, 0, 4), 3);
/// assert_eq!(arithmetic::wrap(5, 3, 3), 0);
/// ```
pub fn wrap<T: Num + PartialOrd + Copy>(number: T, minimum: T, maximum: T) -> T {
    let difference = maximum - minimum;
    if difference <= T::zero() {
        return T::zero();
    }
    let offset = (number - minimum) % difference;
    // Only NaN is unordered against itself: the input was NaN or infinite.
    if offset.partial_cmp(&offset).is_none() {
        return number;
    }
    let wrapped = if offset < T::zero() {
        offset + difference + minimum
    } else {
        offset + minimum
    };
    // A tiny negative offset can round up onto `maximum`.
    if wrapped >= maximum { minimum } else { wrapped }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Division {
    pub quotient: i32,
    pub remainder: i32,
}

/// Integer division returning both quotient and remainder, truncating towards zero.
///
/// # Panics
/// If `denominator` is zero.
pub fn divide(numerator: i32, denominator: i32) -> Division {
    Division {
        quotient: numerator / denominator,
        remainder: numerator % denominator,
    }
}
