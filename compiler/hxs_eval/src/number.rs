//! Number literal parsing.

use hxs_ir::NumberSuffix;

use crate::errors::{index_out_of_range, syntax_error, EvalResult};

/// Parse the digits of a number literal under its suffix.
///
/// Plain and `D` literals are decimal floats. `B`, `O` and `H` literals are
/// integers in base 2, 8 and 16: every digit, fractional ones included, must
/// be valid for the base, and the fractional part is then dropped.
pub fn parse_number(digits: &str, suffix: NumberSuffix) -> EvalResult<f64> {
    let parsed = match suffix.radix() {
        Some(radix) => parse_radix(digits, radix),
        None => parse_decimal(digits),
    };
    parsed.ok_or_else(|| syntax_error(format!("invalid number `{digits}`")))
}

fn parse_decimal(digits: &str) -> Option<f64> {
    // `f64::from_str` also accepts `inf` and `nan`; literals always start
    // with a digit, so only digit-led text gets here.
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    digits.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if integer.is_empty() || !fraction.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    integer.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Resolve a possibly negative index against `len`.
///
/// Negative indexes count from the end. The index must be a whole number
/// inside the sequence; with `allow_end`, `len` itself is also accepted (an
/// insertion point).
#[expect(clippy::cast_sign_loss, reason = "the result is checked to be within 0..=len")]
pub(crate) fn normalize_index(index: f64, len: usize, allow_end: bool) -> EvalResult<usize> {
    if !index.is_finite() || index.fract() != 0.0 {
        return Err(index_out_of_range(index));
    }
    let len = len as f64;
    let normalized = if index < 0.0 { len + index } else { index };
    let limit = if allow_end { len } else { len - 1.0 };
    if normalized < 0.0 || normalized > limit {
        return Err(index_out_of_range(index));
    }
    Ok(normalized as usize)
}

/// Resolve a slice bound: negative counts from the end, fractions truncate,
/// and the result is clamped to `0..=len`.
#[expect(clippy::cast_sign_loss, reason = "the result is clamped to 0..=len")]
pub(crate) fn relative_index(index: f64, len: usize) -> usize {
    let len_f = len as f64;
    let index = if index.is_nan() { 0.0 } else { index.trunc() };
    let resolved = if index < 0.0 { (len_f + index).max(0.0) } else { index.min(len_f) };
    resolved as usize
}
