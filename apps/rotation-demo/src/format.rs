//! Decimal rounding for slider value labels.

/// Widest precision for which `value * 10^digits` is exact in `f64` for
/// every `f32` input.
const MAX_DIGITS: u32 = 8;

fn rounded_scaled(value: f32, digits: u32) -> (f64, f64) {
    let digits = digits.min(MAX_DIGITS);
    let scale = 10f64.powi(digits as i32);
    // f64::round breaks ties away from zero, which is half-up on magnitude.
    let rounded = (value as f64 * scale).round();
    // Folds -0.0 into 0.0 so small negatives print without a sign.
    (rounded + 0.0, scale)
}

/// Rounds `value` half-up to `digits` fraction digits, deciding ties on the
/// exact binary value of `value`.
pub fn round_to(value: f32, digits: u32) -> f32 {
    if !value.is_finite() {
        return value;
    }
    let (rounded, scale) = rounded_scaled(value, digits);
    (rounded / scale) as f32
}

/// `value` rounded half-up and printed with exactly `digits` fraction digits.
pub fn format_rounded(value: f32, digits: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (rounded, scale) = rounded_scaled(value, digits);
    let digits = digits.min(MAX_DIGITS) as usize;
    format!("{:.*}", digits, rounded / scale)
}
