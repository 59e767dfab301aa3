//! # Portfolio
//!
//! $$
//! \sigma_p^2=\mathbf{w}^\top\Sigma\,\mathbf{w}
//! $$
//!
//! Multi-asset return alignment, mean-variance aggregation and the
//! random-sampling efficient-frontier search.

pub mod data;
pub mod frontier;
pub mod performance;

pub use data::align;
pub use data::annualized_covariance;
pub use data::annualized_mean_returns;
pub use data::correlation_matrix;
pub use data::AlignmentPolicy;
pub use data::PortfolioReturns;
pub use frontier::search_frontier;
pub use frontier::EfficientFrontier;
pub use frontier::FrontierConfig;
pub use frontier::FrontierSample;
pub use performance::portfolio_performance;
pub use performance::sharpe_ratio;
pub use performance::PortfolioPerformance;

use crate::error::Result;
use crate::error::RiskError;

/// Reject weight vectors that cannot possibly describe `n_assets` holdings.
///
/// Runs before any computation: length mismatch, empty selection and a zero
/// sum each fail immediately. Negative weights (short positions) pass
/// through unvalidated.
pub fn validate_weights(n_assets: usize, weights: &[f64]) -> Result<()> {
  if n_assets == 0 {
    return Err(RiskError::EmptyTickers);
  }
  if weights.len() != n_assets {
    return Err(RiskError::TickerWeightMismatch {
      tickers: n_assets,
      weights: weights.len(),
    });
  }
  if weights.iter().sum::<f64>() == 0.0 {
    return Err(RiskError::ZeroWeightSum);
  }
  Ok(())
}

/// Scale weights so they sum to 1.
pub fn normalize_weights(weights: &[f64]) -> Result<Vec<f64>> {
  let total: f64 = weights.iter().sum();
  if total == 0.0 {
    return Err(RiskError::ZeroWeightSum);
  }
  Ok(weights.iter().map(|w| w / total).collect())
}
