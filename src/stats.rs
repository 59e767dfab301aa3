//! # Stats
//!
//! $$
//! s^2=\frac{1}{n-1}\sum_{i=1}^{n}(x_i-\bar{x})^2
//! $$
//!
//! Scalar sample statistics, explicit windowed accumulators and the
//! linear-interpolation percentile used by the historical VaR estimator.

use std::cmp::Ordering;

/// Arithmetic mean; 0 for an empty slice.
pub fn sample_mean(xs: &[f64]) -> f64 {
  if xs.is_empty() {
    0.0
  } else {
    xs.iter().sum::<f64>() / xs.len() as f64
  }
}

/// Unbiased sample variance (n-1 denominator); 0 below two observations.
pub fn sample_variance(xs: &[f64]) -> f64 {
  if xs.len() < 2 {
    return 0.0;
  }

  let mean = sample_mean(xs);
  let mut acc = 0.0;
  for &x in xs {
    let d = x - mean;
    acc += d * d;
  }
  acc / (xs.len() - 1) as f64
}

/// Unbiased sample standard deviation.
pub fn sample_std(xs: &[f64]) -> f64 {
  sample_variance(xs).sqrt()
}

/// Apply `f` to every trailing window of `window` observations.
///
/// The output has the same length as the input; slots before the window is
/// filled hold NaN so that insufficient history propagates as missing
/// rather than a spurious zero.
pub fn rolling_apply<F>(xs: &[f64], window: usize, f: F) -> Vec<f64>
where
  F: Fn(&[f64]) -> f64,
{
  let mut out = vec![f64::NAN; xs.len()];
  if window == 0 || window > xs.len() {
    return out;
  }

  for i in (window - 1)..xs.len() {
    out[i] = f(&xs[i + 1 - window..=i]);
  }
  out
}

/// Dense rolling sums: one entry per fully-filled window, unfilled prefix
/// dropped. Empty when the input is shorter than the window.
pub fn rolling_sum(xs: &[f64], window: usize) -> Vec<f64> {
  if window == 0 || window > xs.len() {
    return Vec::new();
  }
  xs.windows(window).map(|w| w.iter().sum()).collect()
}

/// Percentile with linear interpolation between order statistics.
///
/// `p` is in percent, clamped to [0, 100]. NaN for an empty slice.
pub fn percentile(xs: &[f64], p: f64) -> f64 {
  if xs.is_empty() {
    return f64::NAN;
  }

  let mut sorted = xs.to_vec();
  sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

  let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
  let lo = rank.floor() as usize;
  let hi = rank.ceil() as usize;
  let frac = rank - lo as f64;

  sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
