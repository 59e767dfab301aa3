//! # Errors
//!
//! $$
//! \text{Err}\in\{\text{validation},\ \text{data},\ \text{history}\}
//! $$
//!
//! Library-wide error taxonomy. Input validation fails before any
//! computation starts; data errors are terminal for the request. Numeric
//! degeneracy (zero volatility) is not an error: Sharpe ratios divide to 0
//! and a VaR of exactly 0 is a valid output.

use crate::market::Period;

/// Errors produced by the analytics routines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RiskError {
  /// Ticker list and weight vector disagree in length.
  #[error("ticker list length {tickers} does not match weight vector length {weights}")]
  TickerWeightMismatch { tickers: usize, weights: usize },

  /// Weight vector sums to zero and cannot be normalized.
  #[error("weight vector sums to zero")]
  ZeroWeightSum,

  /// No tickers were selected.
  #[error("empty ticker selection")]
  EmptyTickers,

  /// The market-data provider returned no usable data.
  #[error("no market data for {ticker} over {period}")]
  DataUnavailable { ticker: String, period: Period },

  /// A windowed statistic was requested over too little history.
  #[error("insufficient history: {required} observations required, {actual} available")]
  InsufficientHistory { required: usize, actual: usize },

  /// A caller-supplied parameter is outside its valid range.
  #[error("invalid parameter: {0}")]
  InvalidParameter(&'static str),
}

pub type Result<T> = std::result::Result<T, RiskError>;
