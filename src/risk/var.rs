//! # Value at Risk
//!
//! $$
//! \mathrm{VaR}=V\cdot\left|q_{1-\alpha}\right|
//! $$
//!
//! Two independent loss-quantile estimators. The parametric (delta-normal)
//! variant assumes normally distributed returns and square-root-of-time
//! horizon scaling. The historical variant takes the empirical quantile of
//! horizon-summed returns: for portfolios the weight vector is applied to
//! the return matrix before the percentile, and for multi-day horizons the
//! rolling sums are formed before the percentile. Both orderings matter and
//! are fixed here.

use statrs::distribution::ContinuousCDF;
use statrs::distribution::Normal;

use crate::error::Result;
use crate::error::RiskError;
use crate::portfolio::portfolio_performance;
use crate::portfolio::PortfolioReturns;
use crate::series::current_volatility;
use crate::series::VOLATILITY_WINDOW;
use crate::stats::percentile;
use crate::stats::rolling_sum;
use crate::TRADING_DAYS;

/// Inverse standard-normal CDF at `confidence`.
pub fn z_score(confidence: f64) -> f64 {
  Normal::new(0.0, 1.0).unwrap().inverse_cdf(confidence)
}

/// VaR figure together with the volatility estimate that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VarEstimate {
  /// Loss magnitude in currency units, non-negative.
  pub loss: f64,
  /// Annualized volatility the estimate was derived from.
  pub annual_volatility: f64,
}

/// Delta-normal VaR from an annualized volatility.
pub fn parametric_var(
  annual_volatility: f64,
  portfolio_value: f64,
  confidence: f64,
  horizon_days: usize,
) -> Result<f64> {
  if horizon_days == 0 {
    return Err(RiskError::InvalidParameter("horizon must be >= 1 day"));
  }

  let daily_volatility = annual_volatility / TRADING_DAYS.sqrt();
  Ok(portfolio_value * daily_volatility * z_score(confidence) * (horizon_days as f64).sqrt())
}

/// Parametric VaR of a single asset from its daily log-returns.
///
/// Volatility is the latest 21-day rolling estimate.
pub fn parametric_var_single(
  returns: &[f64],
  portfolio_value: f64,
  confidence: f64,
  horizon_days: usize,
) -> Result<VarEstimate> {
  let annual_volatility = current_volatility(returns, VOLATILITY_WINDOW)?;
  Ok(VarEstimate {
    loss: parametric_var(annual_volatility, portfolio_value, confidence, horizon_days)?,
    annual_volatility,
  })
}

/// Parametric VaR of a weighted portfolio via the mean-variance aggregator.
pub fn parametric_var_portfolio(
  pr: &PortfolioReturns,
  weights: &[f64],
  portfolio_value: f64,
  confidence: f64,
  horizon_days: usize,
) -> Result<VarEstimate> {
  let perf = portfolio_performance(pr, weights)?;
  Ok(VarEstimate {
    loss: parametric_var(perf.volatility, portfolio_value, confidence, horizon_days)?,
    annual_volatility: perf.volatility,
  })
}

/// Historical-simulation VaR of a daily log-return series.
///
/// For a multi-day horizon each observation is a rolling sum of
/// `horizon_days` consecutive daily returns, formed before the percentile.
pub fn historical_var(
  returns: &[f64],
  portfolio_value: f64,
  confidence: f64,
  horizon_days: usize,
) -> Result<f64> {
  if horizon_days == 0 {
    return Err(RiskError::InvalidParameter("horizon must be >= 1 day"));
  }

  let period_returns: Vec<f64> = if horizon_days == 1 {
    returns.to_vec()
  } else {
    rolling_sum(returns, horizon_days)
  };

  if period_returns.is_empty() {
    return Err(RiskError::InsufficientHistory {
      required: horizon_days,
      actual: returns.len(),
    });
  }

  let tail = percentile(&period_returns, (1.0 - confidence) * 100.0);
  Ok(portfolio_value * tail.abs())
}

/// Historical-simulation VaR of a weighted portfolio.
///
/// Weights collapse the return matrix into one series first; weighting the
/// per-asset VaRs afterwards would be statistically wrong.
pub fn historical_var_portfolio(
  pr: &PortfolioReturns,
  weights: &[f64],
  portfolio_value: f64,
  confidence: f64,
  horizon_days: usize,
) -> Result<f64> {
  let weighted = pr.weighted_returns(weights)?;
  historical_var(&weighted.to_vec(), portfolio_value, confidence, horizon_days)
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use chrono::NaiveDate;

  use super::*;
  use crate::portfolio::align;
  use crate::portfolio::AlignmentPolicy;
  use crate::series::returns::ReturnSeries;
  use crate::stats::sample_std;

  fn two_asset_portfolio() -> PortfolioReturns {
    let dates: Vec<NaiveDate> = (1..=4)
      .map(|d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
      .collect();
    let a = ReturnSeries {
      ticker: "A".to_string(),
      dates: dates.clone(),
      values: vec![0.01, -0.01, 0.02, -0.02],
    };
    let b = ReturnSeries {
      ticker: "B".to_string(),
      dates,
      values: vec![0.02, 0.01, -0.01, 0.00],
    };
    align(&[a, b], AlignmentPolicy::InnerJoin).unwrap()
  }

  #[test]
  fn z_score_at_95_percent() {
    assert_relative_eq!(z_score(0.95), 1.6448536269514722, epsilon = 1e-9);
  }

  #[test]
  fn parametric_portfolio_var_wires_the_exact_formula() {
    // Sample covariance computed by hand for the fixed two-asset data.
    let a = [0.01f64, -0.01, 0.02, -0.02];
    let b = [0.02f64, 0.01, -0.01, 0.00];
    let ma = a.iter().sum::<f64>() / 4.0;
    let mb = b.iter().sum::<f64>() / 4.0;

    let mut var_a = 0.0;
    let mut var_b = 0.0;
    let mut cov_ab = 0.0;
    for i in 0..4 {
      var_a += (a[i] - ma) * (a[i] - ma);
      var_b += (b[i] - mb) * (b[i] - mb);
      cov_ab += (a[i] - ma) * (b[i] - mb);
    }
    var_a /= 3.0;
    var_b /= 3.0;
    cov_ab /= 3.0;

    let daily_port_var = 0.25 * var_a + 0.25 * var_b + 0.5 * cov_ab;
    let annual_vol = (daily_port_var * 252.0).sqrt();
    let expected = 100_000.0 * (annual_vol / 252.0f64.sqrt()) * z_score(0.95);

    let pr = two_asset_portfolio();
    let estimate = parametric_var_portfolio(&pr, &[0.5, 0.5], 100_000.0, 0.95, 1).unwrap();

    assert_relative_eq!(estimate.loss, expected, epsilon = 1e-6);
    assert_relative_eq!(estimate.annual_volatility, annual_vol, epsilon = 1e-12);
  }

  #[test]
  fn historical_var_is_monotone_in_confidence() {
    let returns: Vec<f64> = (0..60)
      .map(|i| (((i * 17) % 23) as f64 - 11.0) / 400.0)
      .collect();

    let var_90 = historical_var(&returns, 100_000.0, 0.90, 1).unwrap();
    let var_95 = historical_var(&returns, 100_000.0, 0.95, 1).unwrap();
    let var_99 = historical_var(&returns, 100_000.0, 0.99, 1).unwrap();

    assert!(var_95 >= var_90);
    assert!(var_99 >= var_95);
  }

  #[test]
  fn horizon_sums_are_formed_before_the_percentile() {
    let returns = [-0.05, -0.05, 0.01, 0.02, 0.03];
    // Two-day sums: [-0.10, -0.04, 0.03, 0.05]; the 5th percentile sits in
    // the far-left tail near the -0.10 observation.
    let var = historical_var(&returns, 100_000.0, 0.95, 2).unwrap();

    let sums = [-0.10, -0.04, 0.03, 0.05];
    let expected = 100_000.0 * percentile(&sums, 5.0).abs();
    assert_relative_eq!(var, expected, epsilon = 1e-6);
    // A naive post-percentile scaling of the one-day VaR would be smaller.
    let one_day = historical_var(&returns, 100_000.0, 0.95, 1).unwrap();
    assert!(var > one_day);
  }

  #[test]
  fn single_asset_variant_uses_the_rolling_window() {
    let returns: Vec<f64> = (0..30).map(|i| ((i % 5) as f64 - 2.0) / 100.0).collect();
    let estimate = parametric_var_single(&returns, 50_000.0, 0.99, 1).unwrap();

    let vol = sample_std(&returns[9..30]) * 252.0f64.sqrt();
    assert_relative_eq!(estimate.annual_volatility, vol, epsilon = 1e-12);
    assert!(estimate.loss > 0.0);
  }

  #[test]
  fn single_asset_variant_rejects_short_history() {
    let returns = [0.01; 10];
    assert!(matches!(
      parametric_var_single(&returns, 1000.0, 0.95, 1),
      Err(RiskError::InsufficientHistory { .. })
    ));
  }

  #[test]
  fn portfolio_weighting_precedes_the_percentile() {
    let pr = two_asset_portfolio();
    let var = historical_var_portfolio(&pr, &[0.5, 0.5], 100_000.0, 0.95, 1).unwrap();

    // Weighted series: [0.015, 0.0, 0.005, -0.01].
    let weighted = [0.015, 0.0, 0.005, -0.01];
    let expected = 100_000.0 * percentile(&weighted, 5.0).abs();
    assert_relative_eq!(var, expected, epsilon = 1e-6);
  }

  #[test]
  fn zero_horizon_is_rejected_by_both_estimators() {
    assert!(matches!(
      historical_var(&[0.01, 0.02], 1000.0, 0.95, 0),
      Err(RiskError::InvalidParameter(_))
    ));
    assert!(matches!(
      parametric_var(0.2, 1000.0, 0.95, 0),
      Err(RiskError::InvalidParameter(_))
    ));

    let pr = two_asset_portfolio();
    assert!(matches!(
      parametric_var_portfolio(&pr, &[0.5, 0.5], 1000.0, 0.95, 0),
      Err(RiskError::InvalidParameter(_))
    ));
    let returns: Vec<f64> = (0..30).map(|i| ((i % 5) as f64 - 2.0) / 100.0).collect();
    assert!(matches!(
      parametric_var_single(&returns, 1000.0, 0.95, 0),
      Err(RiskError::InvalidParameter(_))
    ));
  }

  #[test]
  fn var_outputs_are_non_negative() {
    let returns: Vec<f64> = (0..40).map(|i| ((i % 7) as f64 - 3.0) / 200.0).collect();
    assert!(historical_var(&returns, 100_000.0, 0.95, 1).unwrap() >= 0.0);
    assert_eq!(parametric_var(0.0, 100_000.0, 0.95, 1).unwrap(), 0.0);
  }
}
