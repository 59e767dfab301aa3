//! # Portfolio Performance
//!
//! $$
//! \mu_p=\mathbf{w}^\top\mu,\qquad \sigma_p=\sqrt{\mathbf{w}^\top\Sigma\,\mathbf{w}}
//! $$
//!
//! The single mean-variance aggregation routine reused by the VaR
//! estimators and the efficient-frontier search.

use tracing::warn;

use crate::error::Result;
use crate::portfolio::annualized_covariance;
use crate::portfolio::annualized_mean_returns;
use crate::portfolio::validate_weights;
use crate::portfolio::PortfolioReturns;

/// Annualized mean-variance summary of a weighted portfolio.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PortfolioPerformance {
  /// Annualized expected return, any sign.
  pub expected_return: f64,
  /// Annualized volatility, non-negative.
  pub volatility: f64,
}

/// Annualized expected return and volatility for the given weights.
///
/// Weights are assumed to already sum to 1; callers normalize. A singular or
/// near-zero covariance can legitimately produce zero volatility, which is a
/// valid output rather than an error.
pub fn portfolio_performance(
  pr: &PortfolioReturns,
  weights: &[f64],
) -> Result<PortfolioPerformance> {
  validate_weights(pr.n_assets(), weights)?;

  let mu = annualized_mean_returns(pr);
  let cov = annualized_covariance(pr);
  let w = ndarray::Array1::from_vec(weights.to_vec());

  let expected_return = mu.dot(&w);
  let variance = w.dot(&cov.dot(&w));
  // Tiny negative variance can fall out of the quadratic form numerically.
  let volatility = variance.max(0.0).sqrt();

  Ok(PortfolioPerformance {
    expected_return,
    volatility,
  })
}

/// Excess return per unit of volatility; defined as 0 when volatility is 0.
pub fn sharpe_ratio(expected_return: f64, volatility: f64, risk_free: f64) -> f64 {
  if volatility == 0.0 {
    warn!("zero portfolio volatility, sharpe ratio defined as 0");
    0.0
  } else {
    (expected_return - risk_free) / volatility
  }
}
