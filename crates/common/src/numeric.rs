//! Floating-point helpers for the real-domain curve

/// Sort ascending and drop exact duplicates (numeric equality, no tolerance).
///
/// `-0.0` and `0.0` compare equal and collapse to one entry.
pub fn sort_unique(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

/// Round `value` to a multiple of `10^exp`, halves rounding up.
///
/// The decimal point is moved through the textual exponent instead of by
/// multiplying, so `round10(1.005, -2)` is `1.01` and not `1.0`.
/// Non-finite input, and any `exp` whose negation overflows, is returned
/// unchanged.
pub fn round10(value: f64, exp: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if exp == 0 {
        return round_half_up(value);
    }

    let shifted = match exp.checked_neg() {
        Some(by) => shift_decimal(value, by),
        None => return value,
    };
    shift_decimal(round_half_up(shifted), exp)
}

#[inline]
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn shift_decimal(value: f64, by: i32) -> f64 {
    let text = format!("{:e}", value);
    let (mantissa, exponent) = match text.split_once('e') {
        Some(parts) => parts,
        None => return value,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(e) => e,
        Err(_) => return value,
    };
    let exponent = match exponent.checked_add(by) {
        Some(e) => e,
        None => return value,
    };
    format!("{}e{}", mantissa, exponent)
        .parse()
        .unwrap_or(value)
}
