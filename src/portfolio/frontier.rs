//! # Efficient Frontier
//!
//! $$
//! \mathbf{w}^\*=\arg\max_{\mathbf{w}\in\Delta^{N-1}}\frac{\mu_p-r_f}{\sigma_p}
//! $$
//!
//! Random-sampling approximation of the Markowitz frontier: K uniform draws
//! on the weight simplex, each evaluated through the mean-variance
//! aggregator. Deliberately not a convex optimizer; the full scatter of
//! samples is part of the output and consumers rely on its semantics.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::Result;
use crate::error::RiskError;
use crate::portfolio::portfolio_performance;
use crate::portfolio::sharpe_ratio;
use crate::portfolio::PortfolioReturns;

/// Runtime configuration for [`search_frontier`].
#[derive(Clone, Copy, Debug)]
pub struct FrontierConfig {
  /// Number of random portfolios to sample.
  pub portfolios: usize,
  /// Risk-free rate used in Sharpe computations.
  pub risk_free: f64,
  /// Fixed seed for reproducible sampling; fresh entropy when `None`.
  pub seed: Option<u64>,
}

impl Default for FrontierConfig {
  fn default() -> Self {
    Self {
      portfolios: 1000,
      risk_free: 0.0,
      seed: None,
    }
  }
}

/// One sampled portfolio on the frontier scatter.
#[derive(Clone, Debug)]
pub struct FrontierSample {
  pub weights: Vec<f64>,
  pub expected_return: f64,
  pub volatility: f64,
  pub sharpe: f64,
}

/// Full scatter of sampled portfolios plus the two selected extrema.
#[derive(Clone, Debug)]
pub struct EfficientFrontier {
  samples: Vec<FrontierSample>,
  max_sharpe: usize,
  min_volatility: usize,
}

impl EfficientFrontier {
  /// Every sampled portfolio, in draw order.
  pub fn samples(&self) -> &[FrontierSample] {
    &self.samples
  }

  /// The sample with the highest Sharpe ratio (first-seen on ties).
  pub fn max_sharpe(&self) -> &FrontierSample {
    &self.samples[self.max_sharpe]
  }

  /// The sample with the lowest volatility (first-seen on ties).
  pub fn min_volatility(&self) -> &FrontierSample {
    &self.samples[self.min_volatility]
  }
}

/// Sample `config.portfolios` random weight vectors and track the extrema.
pub fn search_frontier(
  pr: &PortfolioReturns,
  config: &FrontierConfig,
) -> Result<EfficientFrontier> {
  let n = pr.n_assets();
  if n == 0 {
    return Err(RiskError::EmptyTickers);
  }
  if config.portfolios == 0 {
    return Err(RiskError::InvalidParameter("portfolios must be >= 1"));
  }

  let mut rng = match config.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  debug!(
    portfolios = config.portfolios,
    assets = n,
    "sampling random portfolios"
  );

  let mut samples = Vec::with_capacity(config.portfolios);
  let mut max_sharpe = 0usize;
  let mut min_volatility = 0usize;

  for i in 0..config.portfolios {
    let mut weights: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
      for w in &mut weights {
        *w /= total;
      }
    } else {
      weights = vec![1.0 / n as f64; n];
    }

    let perf = portfolio_performance(pr, &weights)?;
    let sharpe = sharpe_ratio(perf.expected_return, perf.volatility, config.risk_free);

    samples.push(FrontierSample {
      weights,
      expected_return: perf.expected_return,
      volatility: perf.volatility,
      sharpe,
    });

    // Strict comparisons keep the first-seen sample on ties.
    if samples[i].sharpe > samples[max_sharpe].sharpe {
      max_sharpe = i;
    }
    if samples[i].volatility < samples[min_volatility].volatility {
      min_volatility = i;
    }
  }

  Ok(EfficientFrontier {
    samples,
    max_sharpe,
    min_volatility,
  })
}
