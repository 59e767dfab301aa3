//! # Portfolio Data
//!
//! $$
//! \Sigma_{ij}=\mathrm{cov}(r_i,r_j)\cdot 252
//! $$
//!
//! Date alignment of per-asset return series and the annualized moment
//! estimates every downstream component reuses. Changing the annualization
//! constant or the covariance estimator here changes VaR and the frontier
//! consistently.

use std::collections::BTreeSet;
use std::collections::HashMap;

use chrono::NaiveDate;
use ndarray::Array1;
use ndarray::Array2;

use crate::error::Result;
use crate::error::RiskError;
use crate::portfolio::validate_weights;
use crate::series::returns::ReturnSeries;
use crate::TRADING_DAYS;

/// Policy for reconciling differing trading calendars across tickers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignmentPolicy {
  /// Keep only dates present in every series.
  #[default]
  InnerJoin,
  /// Union of dates, carrying each series' last observation forward. Dates
  /// before a series' first observation are dropped.
  ForwardFill,
}

/// Aligned multi-asset daily log-returns.
///
/// Rows are trading dates, columns are assets in `tickers` order.
#[derive(Clone, Debug)]
pub struct PortfolioReturns {
  tickers: Vec<String>,
  dates: Vec<NaiveDate>,
  matrix: Array2<f64>,
}

impl PortfolioReturns {
  pub fn tickers(&self) -> &[String] {
    &self.tickers
  }

  pub fn dates(&self) -> &[NaiveDate] {
    &self.dates
  }

  pub fn matrix(&self) -> &Array2<f64> {
    &self.matrix
  }

  pub fn n_assets(&self) -> usize {
    self.tickers.len()
  }

  pub fn n_observations(&self) -> usize {
    self.dates.len()
  }

  /// Return series of one asset by column index.
  pub fn column(&self, asset: usize) -> Array1<f64> {
    self.matrix.column(asset).to_owned()
  }

  /// Collapse the matrix into a single weighted daily return series.
  pub fn weighted_returns(&self, weights: &[f64]) -> Result<Array1<f64>> {
    validate_weights(self.n_assets(), weights)?;
    let w = Array1::from_vec(weights.to_vec());
    Ok(self.matrix.dot(&w))
  }
}

/// Align per-asset return series onto a common date index.
pub fn align(series: &[ReturnSeries], policy: AlignmentPolicy) -> Result<PortfolioReturns> {
  if series.is_empty() {
    return Err(RiskError::EmptyTickers);
  }

  let tickers: Vec<String> = series.iter().map(|s| s.ticker.clone()).collect();
  let by_date: Vec<HashMap<NaiveDate, f64>> = series
    .iter()
    .map(|s| s.dates.iter().copied().zip(s.values.iter().copied()).collect())
    .collect();

  let dates: Vec<NaiveDate> = match policy {
    AlignmentPolicy::InnerJoin => {
      let mut common: BTreeSet<NaiveDate> = series[0].dates.iter().copied().collect();
      for s in &series[1..] {
        let dates: BTreeSet<NaiveDate> = s.dates.iter().copied().collect();
        common = common.intersection(&dates).copied().collect();
      }
      common.into_iter().collect()
    }
    AlignmentPolicy::ForwardFill => series
      .iter()
      .flat_map(|s| s.dates.iter().copied())
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect(),
  };

  let mut rows: Vec<Vec<f64>> = Vec::with_capacity(dates.len());
  let mut kept_dates: Vec<NaiveDate> = Vec::with_capacity(dates.len());
  let mut last_seen: Vec<Option<f64>> = vec![None; series.len()];

  for date in dates {
    for (i, map) in by_date.iter().enumerate() {
      if let Some(&v) = map.get(&date) {
        last_seen[i] = Some(v);
      }
    }

    let row: Option<Vec<f64>> = match policy {
      AlignmentPolicy::InnerJoin => by_date.iter().map(|m| m.get(&date).copied()).collect(),
      AlignmentPolicy::ForwardFill => last_seen.iter().copied().collect(),
    };

    if let Some(row) = row {
      rows.push(row);
      kept_dates.push(date);
    }
  }

  let flat: Vec<f64> = rows.iter().flatten().copied().collect();
  let matrix = Array2::from_shape_vec((kept_dates.len(), series.len()), flat)
    .map_err(|_| RiskError::InvalidParameter("misaligned return series"))?;

  Ok(PortfolioReturns {
    tickers,
    dates: kept_dates,
    matrix,
  })
}

/// Per-asset annualized mean returns (daily mean times 252).
pub fn annualized_mean_returns(pr: &PortfolioReturns) -> Array1<f64> {
  let obs = pr.n_observations();
  let means: Vec<f64> = (0..pr.n_assets())
    .map(|j| {
      if obs == 0 {
        0.0
      } else {
        pr.matrix.column(j).sum() / obs as f64 * TRADING_DAYS
      }
    })
    .collect();
  Array1::from_vec(means)
}

/// Annualized sample covariance matrix (n-1 denominator, times 252).
pub fn annualized_covariance(pr: &PortfolioReturns) -> Array2<f64> {
  let n = pr.n_assets();
  let obs = pr.n_observations();
  let mut cov = Array2::<f64>::zeros((n, n));
  if obs < 2 {
    return cov;
  }

  let means: Vec<f64> = (0..n)
    .map(|j| pr.matrix.column(j).sum() / obs as f64)
    .collect();

  for i in 0..n {
    for j in i..n {
      let mut acc = 0.0;
      for t in 0..obs {
        acc += (pr.matrix[[t, i]] - means[i]) * (pr.matrix[[t, j]] - means[j]);
      }
      let c = acc / (obs - 1) as f64 * TRADING_DAYS;
      cov[[i, j]] = c;
      cov[[j, i]] = c;
    }
  }

  cov
}

/// Pearson correlation matrix of the aligned return series.
pub fn correlation_matrix(pr: &PortfolioReturns) -> Array2<f64> {
  let n = pr.n_assets();
  let cov = annualized_covariance(pr);
  let mut corr = Array2::<f64>::eye(n);

  for i in 0..n {
    for j in (i + 1)..n {
      let denom = (cov[[i, i]] * cov[[j, j]]).sqrt();
      let r = if denom < 1e-15 {
        0.0
      } else {
        (cov[[i, j]] / denom).clamp(-1.0, 1.0)
      };
      corr[[i, j]] = r;
      corr[[j, i]] = r;
    }
  }

  corr
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
  }

  fn series(ticker: &str, obs: &[(u32, f64)]) -> ReturnSeries {
    ReturnSeries {
      ticker: ticker.to_string(),
      dates: obs.iter().map(|&(d, _)| day(d)).collect(),
      values: obs.iter().map(|&(_, v)| v).collect(),
    }
  }

  #[test]
  fn inner_join_keeps_only_common_dates() {
    let a = series("A", &[(1, 0.01), (2, 0.02), (4, 0.03)]);
    let b = series("B", &[(2, -0.01), (3, 0.00), (4, 0.01)]);

    let pr = align(&[a, b], AlignmentPolicy::InnerJoin).unwrap();

    assert_eq!(pr.dates(), &[day(2), day(4)]);
    assert_eq!(pr.matrix().shape(), &[2, 2]);
    assert_relative_eq!(pr.matrix()[[0, 0]], 0.02, epsilon = 1e-12);
    assert_relative_eq!(pr.matrix()[[1, 1]], 0.01, epsilon = 1e-12);
  }

  #[test]
  fn forward_fill_carries_last_observation() {
    let a = series("A", &[(1, 0.01), (3, 0.03)]);
    let b = series("B", &[(1, -0.01), (2, -0.02), (3, -0.03)]);

    let pr = align(&[a, b], AlignmentPolicy::ForwardFill).unwrap();

    assert_eq!(pr.dates(), &[day(1), day(2), day(3)]);
    // A has no observation on day 2; its day-1 value is carried forward.
    assert_relative_eq!(pr.matrix()[[1, 0]], 0.01, epsilon = 1e-12);
    assert_relative_eq!(pr.matrix()[[1, 1]], -0.02, epsilon = 1e-12);
  }

  #[test]
  fn forward_fill_drops_dates_before_first_observation() {
    let a = series("A", &[(2, 0.01), (3, 0.02)]);
    let b = series("B", &[(1, -0.01), (2, -0.02), (3, -0.03)]);

    let pr = align(&[a, b], AlignmentPolicy::ForwardFill).unwrap();
    assert_eq!(pr.dates(), &[day(2), day(3)]);
  }

  #[test]
  fn empty_input_is_rejected() {
    assert_eq!(
      align(&[], AlignmentPolicy::InnerJoin).unwrap_err(),
      RiskError::EmptyTickers
    );
  }

  #[test]
  fn covariance_diagonal_is_annualized_variance() {
    let a = series("A", &[(1, 0.01), (2, -0.01), (3, 0.02), (4, -0.02)]);
    let b = series("B", &[(1, 0.02), (2, 0.01), (3, -0.01), (4, 0.00)]);
    let pr = align(&[a, b], AlignmentPolicy::InnerJoin).unwrap();

    let cov = annualized_covariance(&pr);
    let var_a = crate::stats::sample_variance(&[0.01, -0.01, 0.02, -0.02]) * TRADING_DAYS;
    assert_relative_eq!(cov[[0, 0]], var_a, epsilon = 1e-12);
    assert_relative_eq!(cov[[0, 1]], cov[[1, 0]], epsilon = 1e-12);
  }

  #[test]
  fn correlation_is_unit_diagonal_and_bounded() {
    let a = series("A", &[(1, 0.01), (2, -0.01), (3, 0.02), (4, -0.02)]);
    let b = series("B", &[(1, 0.02), (2, 0.01), (3, -0.01), (4, 0.00)]);
    let pr = align(&[a, b], AlignmentPolicy::InnerJoin).unwrap();

    let corr = correlation_matrix(&pr);
    assert_relative_eq!(corr[[0, 0]], 1.0, epsilon = 1e-12);
    assert!(corr[[0, 1]].abs() <= 1.0);
  }

  #[test]
  fn weighted_returns_validates_length() {
    let a = series("A", &[(1, 0.01), (2, -0.01)]);
    let b = series("B", &[(1, 0.02), (2, 0.01)]);
    let pr = align(&[a, b], AlignmentPolicy::InnerJoin).unwrap();

    assert!(matches!(
      pr.weighted_returns(&[1.0]),
      Err(RiskError::TickerWeightMismatch { .. })
    ));

    let w = pr.weighted_returns(&[0.5, 0.5]).unwrap();
    assert_relative_eq!(w[0], 0.015, epsilon = 1e-12);
  }
}
