//! # Realized Volatility
//!
//! $$
//! \sigma_{\text{ann}}=s_{21}\sqrt{252}
//! $$
//!
//! Rolling annualized volatility: sample standard deviation of the trailing
//! window of daily log-returns, scaled by the square root of the trading
//! days per year.

use crate::error::Result;
use crate::error::RiskError;
use crate::stats::rolling_apply;
use crate::stats::sample_std;
use crate::TRADING_DAYS;

/// Conventional realized-volatility lookback in trading days.
pub const VOLATILITY_WINDOW: usize = 21;

/// Rolling annualized volatility of daily log-returns; NaN until the window
/// is filled.
pub fn rolling_volatility(returns: &[f64], window: usize) -> Vec<f64> {
  rolling_apply(returns, window, |w| sample_std(w) * TRADING_DAYS.sqrt())
}

/// Latest annualized volatility estimate over the trailing window.
pub fn current_volatility(returns: &[f64], window: usize) -> Result<f64> {
  if window == 0 {
    return Err(RiskError::InvalidParameter("volatility window must be >= 1"));
  }
  if returns.len() < window {
    return Err(RiskError::InsufficientHistory {
      required: window,
      actual: returns.len(),
    });
  }

  Ok(sample_std(&returns[returns.len() - window..]) * TRADING_DAYS.sqrt())
}
