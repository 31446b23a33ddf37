//! Statistical helper functions for epocha.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Subtracts the mean and divides by the sample standard deviation.
///
/// A constant (or too short) input has no spread; it is only centred so the
/// output stays finite.
pub fn standardize(data: &[f64]) -> Vec<f64> {
    let m = mean(data);
    let s = sd(data);
    let scale = if s > f64::EPSILON { s } else { 1.0 };
    data.iter().map(|&x| (x - m) / scale).collect()
}

/// Kolmogorov–Smirnov distance between the empirical CDF of `sorted` and the
/// uniform CDF on `[lo, hi]`.
///
/// **Expects pre-sorted input** (caller's responsibility). Returns 0.0 for an
/// empty slice or a degenerate range.
pub fn ks_uniform(sorted: &[f64], lo: f64, hi: f64) -> f64 {
    let n = sorted.len();
    if n == 0 || hi <= lo {
        return 0.0;
    }
    let nf = n as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let cdf = ((x - lo) / (hi - lo)).clamp(0.0, 1.0);
            let above = (i + 1) as f64 / nf - cdf;
            let below = cdf - i as f64 / nf;
            above.max(below)
        })
        .fold(0.0, f64::max)
}
