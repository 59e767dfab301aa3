//! # Indicators
//!
//! $$
//! \mathrm{RSI}=100-\frac{100}{1+\bar{g}/\bar{l}}
//! $$
//!
//! Simple moving averages and RSI over a single close-price series. Both are
//! explicit windowed accumulators; slots before the window fills are NaN.

use crate::stats::rolling_apply;
use crate::stats::sample_mean;

/// Conventional RSI lookback.
pub const RSI_PERIOD: usize = 14;

/// Simple moving average of the trailing `window` closes.
pub fn sma(closes: &[f64], window: usize) -> Vec<f64> {
  rolling_apply(closes, window, sample_mean)
}

/// RSI over the trailing `period` daily deltas.
///
/// Gains and losses are simple rolling means of the positive and
/// (sign-flipped) negative deltas. A zero average loss saturates the
/// indicator at exactly 100 rather than producing NaN.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
  let mut out = vec![f64::NAN; closes.len()];
  if period == 0 || closes.len() <= period {
    return out;
  }

  let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
  let gains: Vec<f64> = deltas.iter().map(|&d| d.max(0.0)).collect();
  let losses: Vec<f64> = deltas.iter().map(|&d| (-d).max(0.0)).collect();

  for i in period..closes.len() {
    let avg_gain = sample_mean(&gains[i - period..i]);
    let avg_loss = sample_mean(&losses[i - period..i]);

    out[i] = if avg_loss == 0.0 {
      100.0
    } else {
      let rs = avg_gain / avg_loss;
      100.0 - 100.0 / (1.0 + rs)
    };
  }

  out
}
