//! Display formatting for numerals.
//!
//! Formatting is a pure function of the numeral string: the integer part is
//! grouped in thousands, the sign and any in-progress trailing decimal point
//! are kept, and fractional digits are copied verbatim. Strings that are not
//! finite numerals, such as the `Error` and `∞` sentinels, pass through.

use super::number::is_finite_numeral;

/// Separator used by [`format_number`].
pub const DEFAULT_GROUPING_SEPARATOR: char = ',';

/// Format a numeral with the default `,` grouping separator.
///
/// # Example
///
/// ```rust
/// use calcpad::core::format_number;
///
/// assert_eq!(format_number("1234567.89"), "1,234,567.89");
/// assert_eq!(format_number("-1000"), "-1,000");
/// assert_eq!(format_number("3."), "3.");
/// assert_eq!(format_number("Error"), "Error");
/// ```
pub fn format_number(numeral: &str) -> String {
    format_number_with(numeral, DEFAULT_GROUPING_SEPARATOR)
}

/// Format a numeral using `separator` between thousands.
pub fn format_number_with(numeral: &str, separator: char) -> String {
    if !is_finite_numeral(numeral) {
        return numeral.to_string();
    }

    let (int_part, frac_part) = match numeral.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (numeral, None),
    };
    let (sign, magnitude) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let magnitude = if magnitude.is_empty() { "0" } else { magnitude };

    let mut out = String::with_capacity(numeral.len() + numeral.len() / 3 + 1);
    out.push_str(sign);
    group_thousands(magnitude, separator, &mut out);
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Insert `separator` at every non-boundary position followed by a digit run
/// whose length is a positive multiple of three.
///
/// For plain digit strings this is ordinary thousands grouping. Exponent
/// forms like `1e+21` keep their shape because no run there is long enough.
fn group_thousands(text: &str, separator: char, out: &mut String) {
    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_word(chars[i - 1]) == is_word(c) {
            let run = chars[i..].iter().take_while(|c| c.is_ascii_digit()).count();
            if run > 0 && run % 3 == 0 {
                out.push(separator);
            }
        }
        out.push(c);
    }
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
