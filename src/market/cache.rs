//! # Quote Cache
//!
//! $$
//! \text{cache}:(\text{ticker},\ \text{period})\to\text{PriceSeries}_{t<\text{ttl}}
//! $$
//!
//! Explicit cache for fetched price histories, keyed by `(ticker, period)`
//! with a fixed time-to-live. Replaces implicit framework-level memoization:
//! the caller owns the cache object and its invalidation.

use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::market::MarketDataProvider;
use crate::market::Period;
use crate::market::PriceSeries;

struct CacheEntry {
  fetched_at: Instant,
  series: PriceSeries,
}

/// TTL cache for price histories keyed by `(ticker, period)`.
pub struct QuoteCache {
  ttl: Duration,
  entries: HashMap<(String, Period), CacheEntry>,
}

impl QuoteCache {
  /// Create a cache whose entries expire `ttl` after insertion.
  pub fn new(ttl: Duration) -> Self {
    Self {
      ttl,
      entries: HashMap::new(),
    }
  }

  /// Number of cached entries, expired ones included.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Look up a fresh entry; expired entries are treated as absent.
  pub fn get(&self, ticker: &str, period: Period) -> Option<&PriceSeries> {
    self
      .entries
      .get(&(ticker.to_string(), period))
      .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
      .map(|entry| &entry.series)
  }

  /// Insert or replace an entry, resetting its age.
  pub fn insert(&mut self, period: Period, series: PriceSeries) {
    self.entries.insert(
      (series.ticker.clone(), period),
      CacheEntry {
        fetched_at: Instant::now(),
        series,
      },
    );
  }

  /// Drop a single entry regardless of age.
  pub fn invalidate(&mut self, ticker: &str, period: Period) {
    self.entries.remove(&(ticker.to_string(), period));
  }

  /// Drop every entry.
  pub fn clear(&mut self) {
    self.entries.clear();
  }

  /// Serve from cache when fresh, otherwise fetch through `provider` and
  /// cache the result. Provider failures are propagated and nothing stale
  /// is substituted.
  pub fn get_or_fetch(
    &mut self,
    provider: &dyn MarketDataProvider,
    ticker: &str,
    period: Period,
  ) -> Result<PriceSeries> {
    if let Some(series) = self.get(ticker, period) {
      debug!(ticker, %period, "quote cache hit");
      return Ok(series.clone());
    }

    debug!(ticker, %period, "quote cache miss");
    let series = provider.fetch(ticker, period)?;
    self.insert(period, series.clone());
    Ok(series)
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use chrono::NaiveDate;

  use super::*;
  use crate::error::RiskError;
  use crate::market::PriceBar;

  struct CountingProvider {
    calls: Cell<usize>,
  }

  impl MarketDataProvider for CountingProvider {
    fn fetch(&self, ticker: &str, _period: Period) -> Result<PriceSeries> {
      self.calls.set(self.calls.get() + 1);
      Ok(PriceSeries::new(
        ticker,
        vec![PriceBar {
          date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
          open: 1.0,
          high: 1.0,
          low: 1.0,
          close: 1.0,
          volume: 0.0,
        }],
      ))
    }
  }

  #[test]
  fn second_lookup_is_served_from_cache() {
    let provider = CountingProvider {
      calls: Cell::new(0),
    };
    let mut cache = QuoteCache::new(Duration::from_secs(60));

    cache
      .get_or_fetch(&provider, "AAPL", Period::OneYear)
      .unwrap();
    cache
      .get_or_fetch(&provider, "AAPL", Period::OneYear)
      .unwrap();

    assert_eq!(provider.calls.get(), 1);
  }

  #[test]
  fn distinct_periods_are_distinct_keys() {
    let provider = CountingProvider {
      calls: Cell::new(0),
    };
    let mut cache = QuoteCache::new(Duration::from_secs(60));

    cache
      .get_or_fetch(&provider, "AAPL", Period::OneYear)
      .unwrap();
    cache
      .get_or_fetch(&provider, "AAPL", Period::FiveYears)
      .unwrap();

    assert_eq!(provider.calls.get(), 2);
    assert_eq!(cache.len(), 2);
  }

  #[test]
  fn zero_ttl_expires_immediately() {
    let provider = CountingProvider {
      calls: Cell::new(0),
    };
    let mut cache = QuoteCache::new(Duration::ZERO);

    cache
      .get_or_fetch(&provider, "AAPL", Period::OneYear)
      .unwrap();
    cache
      .get_or_fetch(&provider, "AAPL", Period::OneYear)
      .unwrap();

    assert_eq!(provider.calls.get(), 2);
  }

  #[test]
  fn invalidate_forces_refetch() {
    let provider = CountingProvider {
      calls: Cell::new(0),
    };
    let mut cache = QuoteCache::new(Duration::from_secs(60));

    cache
      .get_or_fetch(&provider, "AAPL", Period::OneYear)
      .unwrap();
    cache.invalidate("AAPL", Period::OneYear);
    cache
      .get_or_fetch(&provider, "AAPL", Period::OneYear)
      .unwrap();

    assert_eq!(provider.calls.get(), 2);
  }

  #[test]
  fn provider_failure_is_not_cached() {
    struct FailingProvider;

    impl MarketDataProvider for FailingProvider {
      fn fetch(&self, ticker: &str, period: Period) -> Result<PriceSeries> {
        Err(RiskError::DataUnavailable {
          ticker: ticker.to_string(),
          period,
        })
      }
    }

    let mut cache = QuoteCache::new(Duration::from_secs(60));
    let err = cache.get_or_fetch(&FailingProvider, "AAPL", Period::OneYear);

    assert!(matches!(err, Err(RiskError::DataUnavailable { .. })));
    assert!(cache.is_empty());
  }
}
