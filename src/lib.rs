//! # Portfolio Risk Analytics
//!
//! `portfolio_risk` computes standard portfolio-risk statistics from
//! historical daily price series: annualized realized volatility, parametric
//! and historical Value-at-Risk, Monte Carlo price-path simulation under
//! geometric Brownian motion, and Markowitz efficient-frontier search by
//! random weight sampling.
//!
//! ## Modules
//!
//! | Module        | Description                                                                 |
//! |---------------|-----------------------------------------------------------------------------|
//! | [`market`]    | Price history containers, the market-data provider seam and a quote cache.  |
//! | [`series`]    | Per-asset derived series: log-returns, SMA, RSI, rolling volatility.        |
//! | [`portfolio`] | Return alignment, mean-variance aggregation and efficient-frontier search.  |
//! | [`risk`]      | Parametric and historical VaR estimators and the GBM Monte Carlo simulator. |
//! | [`stats`]     | Sample statistics, windowed accumulators and percentile estimation.         |
//! | [`error`]     | Library-wide error taxonomy.                                                |
//!
//! ## Example Usage
//!
//! ```rust
//! use portfolio_risk::portfolio::{align, AlignmentPolicy, portfolio_performance};
//! use portfolio_risk::series::log_return_series;
//!
//! let returns = vec![
//!   log_return_series(&apple_prices),
//!   log_return_series(&msft_prices),
//! ];
//! let aligned = align(&returns, AlignmentPolicy::InnerJoin)?;
//! let perf = portfolio_performance(&aligned, &[0.5, 0.5])?;
//! println!("{} / {}", perf.expected_return, perf.volatility);
//! ```
//!
//! ## Randomness
//!
//! The Monte Carlo simulator and the frontier search accept an optional
//! `u64` seed. A fixed seed makes the output bit-reproducible; without one
//! each call draws fresh OS entropy and is independent of every other call.

pub mod error;
pub mod market;
pub mod portfolio;
pub mod risk;
pub mod series;
pub mod stats;

pub use error::Result;
pub use error::RiskError;

/// Assumed trading days per year, used by every annualization step.
pub const TRADING_DAYS: f64 = 252.0;
