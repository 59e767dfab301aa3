//! # Market Data Provider
//!
//! $$
//! \text{fetch}:(\text{ticker},\ \text{period})\to\text{PriceSeries}
//! $$
//!
//! Seam between the analytics and whatever supplies historical prices. A
//! provider that has nothing for a request must fail with
//! [`RiskError::DataUnavailable`]; it never substitutes an empty or zeroed
//! series.

use std::collections::HashMap;

use crate::error::Result;
use crate::error::RiskError;
use crate::market::Period;
use crate::market::PriceSeries;

/// Source of historical daily prices.
pub trait MarketDataProvider {
  /// Fetch the price history for `ticker` over `period`.
  ///
  /// Implementations must return [`RiskError::DataUnavailable`] rather than
  /// an empty series when the ticker or period yields no data.
  fn fetch(&self, ticker: &str, period: Period) -> Result<PriceSeries>;
}

/// Provider backed by preloaded series, keyed by ticker.
///
/// Serves the same history regardless of the requested period; intended for
/// tests and embedding pre-downloaded data.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
  series: HashMap<String, PriceSeries>,
}

impl InMemoryProvider {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a series under its own ticker.
  pub fn insert(&mut self, series: PriceSeries) {
    self.series.insert(series.ticker.clone(), series);
  }
}

impl MarketDataProvider for InMemoryProvider {
  fn fetch(&self, ticker: &str, period: Period) -> Result<PriceSeries> {
    match self.series.get(ticker) {
      Some(series) if !series.is_empty() => Ok(series.clone()),
      _ => Err(RiskError::DataUnavailable {
        ticker: ticker.to_string(),
        period,
      }),
    }
  }
}
