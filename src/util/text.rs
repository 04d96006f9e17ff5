//! Reading and writing the human-readable text form of every value type.
//!
//! Writers take a format hint: `""` writes floats in their shortest round-trip form and `".N"`
//! writes them with `N` decimals. Angle-like types additionally accept a leading `degrees` or
//! `radians` keyword, see [`split_unit_format`].
use crate::core::prelude::*;

/// A cursor over a string being parsed.
///
/// Every `read_*` method skips leading whitespace. On failure the cursor position is
/// unspecified, matching the partial state a failed parse leaves behind.
#[derive(Debug, Clone)]
pub struct TextReader<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> TextReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    pub fn remaining(&self) -> &'a str {
        &self.text[self.position..]
    }
    pub fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.position += rest.len() - rest.trim_start().len();
    }

    /// Skips whitespace and/or a single comma. Returns `false` if nothing was skipped.
    pub fn skip_separator(&mut self) -> bool {
        let start = self.position;
        self.skip_whitespace();
        if self.remaining().starts_with(',') {
            self.position += 1;
            self.skip_whitespace();
        }
        self.position > start
    }

    pub fn starts_with(&self, prefix: &str, ignore_case: bool) -> bool {
        let rest = self.remaining();
        if ignore_case {
            rest.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        } else {
            rest.starts_with(prefix)
        }
    }

    /// Consumes `prefix` if the remaining input starts with it.
    pub fn advance_past(&mut self, prefix: &str, ignore_case: bool) -> bool {
        if self.starts_with(prefix, ignore_case) {
            self.position += prefix.len();
            true
        } else {
            false
        }
    }

    /// Reads one float: optional sign, digits with an optional fraction and exponent, or one of
    /// `inf`, `infinity`, `nan` in any case.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.skip_whitespace();
        let rest = self.remaining();
        let bytes = rest.as_bytes();
        let mut end = 0;
        if matches!(bytes.first(), Some(b'+' | b'-')) {
            end += 1;
        }
        let unsigned = &rest[end..];
        let special = ["infinity", "inf", "nan"].into_iter().find(|word| {
            unsigned
                .get(..word.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(word))
        });
        if let Some(word) = special {
            end += word.len();
        } else {
            let digits_start = end;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            let mut digit_count = end - digits_start;
            if end < bytes.len() && bytes[end] == b'.' {
                end += 1;
                let fraction_start = end;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                digit_count += end - fraction_start;
            }
            if digit_count == 0 {
                bail!(
                    "expected a floating point number at position {}, found {:?}",
                    self.position,
                    rest
                );
            }
            if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
                let mut exponent_end = end + 1;
                if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
                    exponent_end += 1;
                }
                let exponent_digits_start = exponent_end;
                while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
                    exponent_end += 1;
                }
                if exponent_end > exponent_digits_start {
                    end = exponent_end;
                }
            }
        }
        let token = &rest[..end];
        let value = token
            .parse::<f32>()
            .with_context(|| format!("could not parse {token:?} as a floating point number"))?;
        self.position += end;
        Ok(value)
    }

    /// Reads `N` floats separated by whitespace and/or a comma.
    pub fn read_f32_array<const N: usize>(&mut self) -> Result<[f32; N]> {
        let mut values = [0.0; N];
        for (i, value) in values.iter_mut().enumerate() {
            if i > 0 && !self.skip_separator() {
                bail!(
                    "expected whitespace and/or a comma after value {} of {}, found {:?}",
                    i,
                    N,
                    self.remaining()
                );
            }
            *value = self.read_f32()?;
        }
        Ok(values)
    }
}

/// Text form of a value type.
///
/// # Examples
/// ```
/// use gg_affine::core::prelude::*;
///
/// let p = Point2::from_text("1.5, -2.25", "").unwrap();
/// assert_eq!(p, Point2::new(1.5, -2.25));
/// assert_eq!(p.to_text(""), "1.5, -2.25");
/// assert_eq!(p.to_text(".3"), "1.500, -2.250");
/// ```
pub trait TextFormat: Sized {
    fn write_text(&self, out: &mut String, format: &str);
    fn read_text(reader: &mut TextReader<'_>, format: &str) -> Result<Self>;

    fn to_text(&self, format: &str) -> String {
        let mut out = String::new();
        self.write_text(&mut out, format);
        out
    }

    /// Parses the whole of `text`; anything but whitespace after the value is an error.
    fn from_text(text: &str, format: &str) -> Result<Self> {
        let mut reader = TextReader::new(text);
        let value = Self::read_text(&mut reader, format)?;
        reader.skip_whitespace();
        if !reader.is_at_end() {
            bail!("unexpected trailing input: {:?}", reader.remaining());
        }
        Ok(value)
    }
}

impl TextFormat for f32 {
    fn write_text(&self, out: &mut String, format: &str) {
        out.push_str(&format_f32(*self, format));
    }

    fn read_text(reader: &mut TextReader<'_>, _format: &str) -> Result<Self> {
        reader.read_f32()
    }
}

pub fn format_f32(value: f32, format: &str) -> String {
    match format.strip_prefix('.').and_then(|p| p.parse::<usize>().ok()) {
        Some(precision) => format!("{value:.precision$}"),
        None => format!("{value}"),
    }
}

pub fn write_f32_array(out: &mut String, values: &[f32], format: &str) {
    out.push_str(&values.iter().map(|v| format_f32(*v, format)).join(", "));
}

/// If `format` starts with `keyword` (in any case), returns the rest with a leading `:` removed.
pub fn strip_format_keyword<'a>(format: &'a str, keyword: &str) -> Option<&'a str> {
    format
        .get(..keyword.len())
        .filter(|head| head.eq_ignore_ascii_case(keyword))
        .map(|_| format[keyword.len()..].trim_start_matches(':'))
}

/// Splits an angle format into whether it selects degrees, and the float format that follows
/// the keyword.
///
/// ```
/// use gg_affine::util::text::split_unit_format;
/// assert_eq!(split_unit_format("degrees.2"), (true, ".2"));
/// assert_eq!(split_unit_format("Radians"), (false, ""));
/// assert_eq!(split_unit_format(".3"), (false, ".3"));
/// ```
pub fn split_unit_format(format: &str) -> (bool, &str) {
    if let Some(rest) = strip_format_keyword(format, "degrees") {
        (true, rest)
    } else if let Some(rest) = strip_format_keyword(format, "radians") {
        (false, rest)
    } else {
        (false, format)
    }
}

pub fn write_scalar_with_unit(out: &mut String, radians: f32, format: &str) {
    let (degrees, float_format) = split_unit_format(format);
    if degrees {
        out.push_str(&format_f32(radians.to_degrees(), float_format));
        out.push_str("_degrees");
    } else {
        out.push_str(&format_f32(radians, float_format));
        out.push_str("_radians");
    }
}

/// Reads a float with an optional `_degrees`/`_radians` suffix and returns it in radians.
/// Without a suffix the unit selected by `format` applies.
pub fn read_scalar_with_unit(reader: &mut TextReader<'_>, format: &str) -> Result<f32> {
    let value = reader.read_f32()?;
    if reader.advance_past("_degrees", true) {
        Ok(value.to_radians())
    } else if reader.advance_past("_radians", true) || !split_unit_format(format).0 {
        Ok(value)
    } else {
        Ok(value.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_plain_floats() {
        let mut reader = TextReader::new("  1.5 -2.25e1 +.5 3. 1e");
        assert_eq!(reader.read_f32().unwrap(), 1.5);
        assert_eq!(reader.read_f32().unwrap(), -22.5);
        assert_eq!(reader.read_f32().unwrap(), 0.5);
        assert_eq!(reader.read_f32().unwrap(), 3.0);
        assert_eq!(reader.read_f32().unwrap(), 1.0);
        assert_eq!(reader.remaining(), "e");
    }

    #[test]
    fn read_special_floats() {
        let mut reader = TextReader::new("inf -Infinity NaN");
        assert_eq!(reader.read_f32().unwrap(), f32::INFINITY);
        assert_eq!(reader.read_f32().unwrap(), f32::NEG_INFINITY);
        assert!(reader.read_f32().unwrap().is_nan());
        assert!(reader.is_at_end());
    }

    #[test]
    fn read_float_errors() {
        assert!(TextReader::new("").read_f32().is_err());
        assert!(TextReader::new("-").read_f32().is_err());
        assert!(TextReader::new(".").read_f32().is_err());
        assert!(TextReader::new("abc").read_f32().is_err());
    }

    #[test]
    fn separators() {
        let mut reader = TextReader::new("1,2 , 3 4");
        assert_eq!(reader.read_f32_array::<4>().unwrap(), [1.0, 2.0, 3.0, 4.0]);
        assert!(TextReader::new("1 2").read_f32_array::<3>().is_err());
        assert!(TextReader::new("1,,2").read_f32_array::<2>().is_err());
        assert!(TextReader::new("1-2").read_f32_array::<2>().is_err());
    }

    #[test]
    fn prefixes() {
        let mut reader = TextReader::new("_DEGREES rest");
        assert!(reader.starts_with("_degrees", true));
        assert!(!reader.starts_with("_degrees", false));
        assert!(!reader.advance_past("_radians", true));
        assert!(reader.advance_past("_degrees", true));
        assert_eq!(reader.remaining(), " rest");
        assert!(!reader.starts_with("a much longer prefix", true));
    }

    #[test]
    fn float_formats() {
        assert_eq!(format_f32(1.5, ""), "1.5");
        assert_eq!(format_f32(0.1, ""), "0.1");
        assert_eq!(format_f32(2.0, ".3"), "2.000");
        assert_eq!(format_f32(2.0, "nonsense"), "2");
        let mut out = String::new();
        write_f32_array(&mut out, &[1.0, -0.5, 3.25], "");
        assert_eq!(out, "1, -0.5, 3.25");
        assert_eq!(f32::from_text(" 7.25 ", "").unwrap(), 7.25);
        assert!(f32::from_text("7.25 x", "").is_err());
    }

    #[test]
    fn shortest_form_round_trips() {
        for value in [0.1_f32, 1.0 / 3.0, -1e-30, 3.402_823_5e38, f32::MIN_POSITIVE] {
            let text = format_f32(value, "");
            assert_eq!(f32::from_text(&text, "").unwrap().to_bits(), value.to_bits());
        }
    }

    #[test]
    fn scalar_units() {
        let mut out = String::new();
        write_scalar_with_unit(&mut out, std::f32::consts::PI, "degrees.1");
        assert_eq!(out, "180.0_degrees");
        out.clear();
        write_scalar_with_unit(&mut out, 1.5, "");
        assert_eq!(out, "1.5_radians");

        let read = |text: &str, format: &str| {
            read_scalar_with_unit(&mut TextReader::new(text), format).unwrap()
        };
        assert!(arithmetic::is_close_to(read("180_Degrees", ""), std::f32::consts::PI));
        assert_eq!(read("2_radians", "degrees"), 2.0);
        assert!(arithmetic::is_close_to(read("90", "degrees"), std::f32::consts::FRAC_PI_2));
        assert_eq!(read("2", ""), 2.0);
    }
}
