//! Text formatting of real numbers for scene attributes.
//!
//! Values are written as the shortest decimal that round-trips to the same `f64`. Decimal
//! exponents in `[-4, 16)` use positional notation, with a trailing `.0` on integral values;
//! anything else uses scientific notation with a signed, at least two-digit exponent
//! (`1e-05`, `1.5e+16`). This keeps output stable across runs and identical to what the
//! stroke producers emit for the same values.
//!
//! Color channels are source numbers rather than reals: integers are written as integers
//! (`1`, not `1.0`), so colors pass through unchanged.

use serde_json::Number;

use crate::foundation::math::Mat4;

const POSITIONAL_EXP: std::ops::Range<i32> = -4..16;

/// Format one real number.
pub fn format_real(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.25e-7".
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => (true, m),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    if POSITIONAL_EXP.contains(&exp) {
        if exp >= 0 {
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                out.push_str(&digits);
                out.extend(std::iter::repeat_n('0', int_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', (-exp - 1) as usize));
            out.push_str(&digits);
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.unsigned_abs()));
    }
    out
}

/// Format values joined by `sep`.
pub fn format_reals(values: &[f64], sep: &str) -> String {
    values
        .iter()
        .map(|v| format_real(*v))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Row-major matrix literal: 16 comma-separated values, no spaces.
pub fn format_matrix(m: &Mat4) -> String {
    format_reals(&m.to_row_major(), ",")
}

/// Format a source number: integers as written, floats like [`format_real`].
pub fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() => format_real(v),
        _ => n.to_string(),
    }
}

/// Color triple as `r, g, b`.
pub fn format_rgb(rgb: &[Number; 3]) -> String {
    rgb.iter().map(format_number).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/scene/format.rs"]
mod tests;
