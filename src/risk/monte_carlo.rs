//! # Monte Carlo GBM
//!
//! $$
//! V_t=V_0\exp\Big(\sum_{k\le t}\big(\mu-\tfrac{\sigma^2}{2}\big)+\sigma z_k\Big)
//! $$
//!
//! Portfolio value-path simulation under geometric Brownian motion. Drift
//! and volatility are estimated once from the weighted historical series and
//! held fixed for the whole run: a constant-parameter lognormal walk with no
//! jumps, fat tails or cross-scenario correlation. That simplification is
//! part of the contract, not something to correct.

use ndarray::Array1;
use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Normal;
use tracing::debug;

use crate::error::Result;
use crate::error::RiskError;
use crate::portfolio::PortfolioReturns;
use crate::stats::percentile;
use crate::stats::sample_mean;
use crate::stats::sample_std;

/// Runtime configuration for the GBM simulator.
#[derive(Clone, Copy, Debug)]
pub struct GbmConfig {
  /// Portfolio value at step 0.
  pub start_value: f64,
  /// Number of simulated time steps T.
  pub horizon_days: usize,
  /// Number of independent scenarios M.
  pub scenarios: usize,
  /// Fixed seed for bit-reproducible grids; fresh entropy when `None`.
  pub seed: Option<u64>,
}

impl Default for GbmConfig {
  fn default() -> Self {
    Self {
      start_value: 100_000.0,
      horizon_days: 252,
      scenarios: 500,
      seed: None,
    }
  }
}

/// M x (T+1) grid of simulated portfolio values; column 0 holds the start
/// value of every scenario.
#[derive(Clone, Debug)]
pub struct SimulationPaths {
  values: Array2<f64>,
}

impl SimulationPaths {
  pub fn values(&self) -> &Array2<f64> {
    &self.values
  }

  pub fn scenarios(&self) -> usize {
    self.values.nrows()
  }

  pub fn steps(&self) -> usize {
    self.values.ncols().saturating_sub(1)
  }

  /// Terminal value of every scenario.
  pub fn final_values(&self) -> Array1<f64> {
    self.values.column(self.values.ncols() - 1).to_owned()
  }

  /// 5th percentile, mean and 95th percentile of the terminal values.
  pub fn summary(&self) -> SimulationSummary {
    let finals = self.final_values().to_vec();
    SimulationSummary {
      worst_case: percentile(&finals, 5.0),
      expected: sample_mean(&finals),
      best_case: percentile(&finals, 95.0),
    }
  }
}

/// Terminal-value summary of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationSummary {
  pub worst_case: f64,
  pub expected: f64,
  pub best_case: f64,
}

/// Simulate GBM value paths from a daily return series.
///
/// Each step draws an independent standard-normal shock z and advances the
/// log-value by `(mu - sigma^2/2) + sigma * z`.
pub fn simulate_gbm(daily_returns: &[f64], config: &GbmConfig) -> Result<SimulationPaths> {
  if config.scenarios == 0 {
    return Err(RiskError::InvalidParameter("scenarios must be >= 1"));
  }
  if config.horizon_days == 0 {
    return Err(RiskError::InvalidParameter("horizon must be >= 1 day"));
  }
  if daily_returns.len() < 2 {
    return Err(RiskError::InsufficientHistory {
      required: 2,
      actual: daily_returns.len(),
    });
  }

  let mu = sample_mean(daily_returns);
  let sigma = sample_std(daily_returns);
  let drift = mu - 0.5 * sigma * sigma;

  debug!(
    mu,
    sigma,
    scenarios = config.scenarios,
    steps = config.horizon_days,
    "running gbm simulation"
  );

  let mut rng = match config.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let shocks = Array2::<f64>::random_using(
    (config.scenarios, config.horizon_days),
    Normal::new(0.0, 1.0).unwrap(),
    &mut rng,
  );

  let mut values = Array2::<f64>::zeros((config.scenarios, config.horizon_days + 1));
  for i in 0..config.scenarios {
    values[[i, 0]] = config.start_value;
    let mut cum_log_return = 0.0;
    for t in 0..config.horizon_days {
      cum_log_return += drift + sigma * shocks[[i, t]];
      values[[i, t + 1]] = config.start_value * cum_log_return.exp();
    }
  }

  Ok(SimulationPaths { values })
}

/// Simulate the weighted portfolio of an aligned return matrix.
pub fn simulate_gbm_portfolio(
  pr: &PortfolioReturns,
  weights: &[f64],
  config: &GbmConfig,
) -> Result<SimulationPaths> {
  let weighted = pr.weighted_returns(weights)?;
  simulate_gbm(&weighted.to_vec(), config)
}
