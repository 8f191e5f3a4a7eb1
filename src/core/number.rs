//! Numeral parsing, rendering and smart rounding.
//!
//! Numerals are strings. They are only turned into `f64` at the moment an
//! operation needs arithmetic, and results are turned back into the
//! shortest decimal string that round-trips, using positional notation for
//! decimal exponents in `[-6, 21)` and exponent notation (`1e+21`, `1.5e-7`)
//! outside it.

use regex::Regex;
use std::sync::LazyLock;

/// Fractional digits kept by [`round_smart`].
pub const SMART_ROUNDING_DIGITS: usize = 12;

/// Magnitude from which fixed-point rendering gives up and keeps the value.
const FIXED_POINT_LIMIT: f64 = 1e21;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal literal pattern is valid")
});

/// Parse a numeral, accepting only the decimal-literal grammar.
///
/// `"3."` and `"-0"` parse; `""`, `"-"`, `"."` and `"1e-7."` do not.
/// Overlong digit strings parse to an infinity.
pub fn parse_numeral(text: &str) -> Option<f64> {
    if !DECIMAL_LITERAL.is_match(text) {
        return None;
    }
    text.parse().ok()
}

/// Parse a numeral and keep it only if it is finite.
pub fn parse_finite(text: &str) -> Option<f64> {
    parse_numeral(text).filter(|n| n.is_finite())
}

/// True when `text` is a numeral denoting a finite number.
pub fn is_finite_numeral(text: &str) -> bool {
    parse_finite(text).is_some()
}

/// Drop one trailing decimal point, falling back to `"0"` if nothing is left.
pub fn strip_trailing_dot(text: &str) -> &str {
    match text.strip_suffix('.') {
        Some("") => "0",
        Some(rest) => rest,
        None => text,
    }
}

/// Render a number as the shortest numeral that parses back to it.
///
/// ```rust
/// use calcpad::core::number::to_numeral;
///
/// assert_eq!(to_numeral(0.5), "0.5");
/// assert_eq!(to_numeral(-0.0), "0");
/// assert_eq!(to_numeral(1e21), "1e+21");
/// assert_eq!(to_numeral(0.0000001), "1e-7");
/// ```
pub fn to_numeral(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", to_numeral(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", e.abs())
        }
    }
}

/// Fixed-point rendering with `fraction_digits` decimals.
///
/// Rounds the exact binary value; exact ties go away from zero.
/// Magnitudes of `1e21` and above fall back to [`to_numeral`].
pub fn to_fixed(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() || value.abs() >= FIXED_POINT_LIMIT {
        return to_numeral(value);
    }

    let magnitude = value.abs();
    let mut fixed = format!("{magnitude:.fraction_digits$}");
    if is_tie(magnitude, fraction_digits) {
        let exact = format!("{magnitude:.prec$}", prec = fraction_digits + 1);
        let truncated = exact[..exact.len() - 1].trim_end_matches('.');
        fixed = increment_last_digit(truncated);
    }

    if value < 0.0 {
        format!("-{fixed}")
    } else {
        fixed
    }
}

/// Round to [`SMART_ROUNDING_DIGITS`] decimals and re-parse.
///
/// Removes binary representation noise: `0.1 + 0.2` becomes `0.3`.
pub fn round_smart(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= FIXED_POINT_LIMIT {
        return value;
    }
    to_fixed(value, SMART_ROUNDING_DIGITS)
        .parse()
        .unwrap_or(value)
}

/// True when `magnitude` lies exactly halfway between two
/// `fraction_digits`-decimal neighbours.
fn is_tie(magnitude: f64, fraction_digits: usize) -> bool {
    // A tie has fraction_digits + 1 decimals ending in 5, which is only
    // representable if the value has at most fraction_digits + 1 binary
    // fraction bits; in that case the wider rendering below is exact.
    let scaled = magnitude * 2f64.powi(fraction_digits as i32 + 1);
    if scaled.fract() != 0.0 {
        return false;
    }
    format!("{magnitude:.prec$}", prec = fraction_digits + 1).ends_with('5')
}

/// Add one unit in the last place of a plain decimal string.
fn increment_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
            }
        }
    }
    let mut out = String::from_utf8(bytes).unwrap_or_default();
    if carry {
        out.insert(0, '1');
    }
    out
}
