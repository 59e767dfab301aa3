//! # Market Data
//!
//! $$
//! (\text{ticker},\ \text{period})\mapsto\{(d_i, o_i, h_i, l_i, c_i, v_i)\}
//! $$
//!
//! Price history containers, the market-data provider seam and an explicit
//! quote cache. The actual data source (network, disk, fixture) lives behind
//! [`MarketDataProvider`]; the analytics never fetch on their own.

pub mod cache;
pub mod provider;

pub use cache::QuoteCache;
pub use provider::InMemoryProvider;
pub use provider::MarketDataProvider;

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::series::returns::log_return_series;
use crate::series::returns::ReturnSeries;

/// Lookback period accepted by market-data providers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Period {
  OneMonth,
  ThreeMonths,
  SixMonths,
  #[default]
  OneYear,
  TwoYears,
  FiveYears,
  TenYears,
  Max,
}

impl Period {
  /// Every supported period, shortest first.
  pub const ALL: [Period; 8] = [
    Period::OneMonth,
    Period::ThreeMonths,
    Period::SixMonths,
    Period::OneYear,
    Period::TwoYears,
    Period::FiveYears,
    Period::TenYears,
    Period::Max,
  ];

  /// Provider-facing token for this period.
  pub fn as_str(&self) -> &'static str {
    match self {
      Period::OneMonth => "1mo",
      Period::ThreeMonths => "3mo",
      Period::SixMonths => "6mo",
      Period::OneYear => "1y",
      Period::TwoYears => "2y",
      Period::FiveYears => "5y",
      Period::TenYears => "10y",
      Period::Max => "max",
    }
  }
}

impl Display for Period {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Period {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Period::ALL
      .iter()
      .copied()
      .find(|p| p.as_str() == s)
      .ok_or_else(|| format!("unknown period token: {s}"))
  }
}

/// Single daily OHLCV observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceBar {
  pub date: NaiveDate,
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
  pub volume: f64,
}

/// Daily price history for one ticker, ordered by trading date.
#[derive(Clone, Debug, Default)]
pub struct PriceSeries {
  pub ticker: String,
  pub bars: Vec<PriceBar>,
}

impl PriceSeries {
  pub fn new(ticker: impl Into<String>, bars: Vec<PriceBar>) -> Self {
    Self {
      ticker: ticker.into(),
      bars,
    }
  }

  pub fn len(&self) -> usize {
    self.bars.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bars.is_empty()
  }

  /// Closing prices in date order.
  pub fn closes(&self) -> Vec<f64> {
    self.bars.iter().map(|b| b.close).collect()
  }

  /// Trading dates in order.
  pub fn dates(&self) -> Vec<NaiveDate> {
    self.bars.iter().map(|b| b.date).collect()
  }

  /// Daily log-return series derived from closes; one shorter than the bars.
  pub fn log_returns(&self) -> ReturnSeries {
    log_return_series(self)
  }
}
