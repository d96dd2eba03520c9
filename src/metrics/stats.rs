//! Descriptive statistics over integer samples.
//!
//! All functions use population (not sample) statistics and return 0.0
//! for empty input.

/// Arithmetic mean.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Population variance: mean of squared deviations from the mean.
pub fn population_variance(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values
        .iter()
        .map(|&v| {
            let d = v as f64 - m;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64
}

/// Population standard deviation.
pub fn population_std(values: &[i64]) -> f64 {
    population_variance(values).sqrt()
}

/// `numerator / denominator`, or 0.0 when the denominator is not positive.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
