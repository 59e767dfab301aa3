//! # Risk
//!
//! $$
//! \mathrm{VaR}_{\alpha}=V\cdot\frac{\sigma_{\text{ann}}}{\sqrt{252}}\cdot z_{\alpha}\cdot\sqrt{h}
//! $$
//!
//! Value-at-Risk estimators (parametric and historical, single-asset and
//! portfolio) and the geometric-Brownian-motion Monte Carlo simulator.

pub mod monte_carlo;
pub mod var;

pub use monte_carlo::simulate_gbm;
pub use monte_carlo::simulate_gbm_portfolio;
pub use monte_carlo::GbmConfig;
pub use monte_carlo::SimulationPaths;
pub use monte_carlo::SimulationSummary;
pub use var::historical_var;
pub use var::historical_var_portfolio;
pub use var::parametric_var;
pub use var::parametric_var_portfolio;
pub use var::parametric_var_single;
pub use var::z_score;
pub use var::VarEstimate;
