//! Small numeric helpers shared by the analyzers.
//!
//! Every ratio in the engine goes through these so that a zero denominator
//! yields a defined value instead of NaN or infinity.

/// Round `value` to `decimals` decimal places.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Clamp a score into the `[0, 100]` range.
#[must_use]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Clamp into `[0, 100]` and round to the nearest integer.
#[must_use]
pub fn score_u32(value: f64) -> u32 {
    clamp_score(value).round() as u32
}

/// `numer / denom`, or `0.0` when the denominator is zero.
#[must_use]
pub fn ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}

/// `numer / denom` as a percentage, or `0.0` when the denominator is zero.
#[must_use]
pub fn percent(numer: usize, denom: usize) -> f64 {
    ratio(numer, denom) * 100.0
}

/// Arithmetic mean, `0.0` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation, `0.0` for an empty slice.
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
