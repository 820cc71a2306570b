//! Text formatting shared by every attribute writer.
//!
//! All coordinates go through [`fmt_num`] so that two renders of the same input produce the same
//! bytes regardless of the floating point noise accumulated on the way.

/// Decimal places kept in emitted numbers.
pub const PRECISION: i32 = 2;

/// Round `v` to [`PRECISION`] decimals and print it without trailing zeros.
///
/// `-0` collapses to `0`.
pub fn fmt_num(v: f64) -> String {
    let scale = 10f64.powi(PRECISION);
    let rounded = (v * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

/// Print an integer with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short count for badges: `999`, `1.2k`, `34.5k`, `2M`.
///
/// One decimal, rounded half up, dropped when it is zero.
pub fn to_scale(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let (unit, suffix) = if n < 999_950 {
        (1_000u128, "k")
    } else {
        (1_000_000u128, "M")
    };
    let tenths = (u128::from(n) * 10 + unit / 2) / unit;
    let (whole, frac) = (tenths / 10, tenths % 10);
    if frac == 0 {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{frac}{suffix}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/format.rs"]
mod tests;
