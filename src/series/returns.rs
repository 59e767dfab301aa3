//! # Log-Returns
//!
//! $$
//! r_t=\ln\frac{P_t}{P_{t-1}},\qquad \prod_t e^{r_t}=\frac{P_T}{P_0}
//! $$
//!
//! Conversion from close prices to daily log-return series. The first
//! observation has no prior day and is dropped, so a price history of
//! length L yields L-1 returns.

use chrono::NaiveDate;

use crate::market::PriceSeries;

/// Daily log-return series for one ticker.
///
/// `dates[i]` is the trading date the return `values[i]` was realized on.
#[derive(Clone, Debug, Default)]
pub struct ReturnSeries {
  pub ticker: String,
  pub dates: Vec<NaiveDate>,
  pub values: Vec<f64>,
}

impl ReturnSeries {
  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

/// Convert close prices to log-returns. Non-positive prices are skipped.
pub fn log_returns(closes: &[f64]) -> Vec<f64> {
  let mut out = Vec::with_capacity(closes.len().saturating_sub(1));
  for i in 1..closes.len() {
    if closes[i - 1] > 0.0 && closes[i] > 0.0 {
      out.push((closes[i] / closes[i - 1]).ln());
    }
  }
  out
}

/// Dated log-return series for a price history.
pub fn log_return_series(series: &PriceSeries) -> ReturnSeries {
  let mut dates = Vec::with_capacity(series.len().saturating_sub(1));
  let mut values = Vec::with_capacity(series.len().saturating_sub(1));

  for pair in series.bars.windows(2) {
    let (prev, curr) = (&pair[0], &pair[1]);
    if prev.close > 0.0 && curr.close > 0.0 {
      dates.push(curr.date);
      values.push((curr.close / prev.close).ln());
    }
  }

  ReturnSeries {
    ticker: series.ticker.clone(),
    dates,
    values,
  }
}
