//! # Derived Series
//!
//! $$
//! r_t=\ln\frac{P_t}{P_{t-1}}
//! $$
//!
//! Per-asset derived columns: log-returns, moving averages, RSI and rolling
//! realized volatility. Window-based statistics report NaN until the window
//! is filled; missing never collapses to zero.

pub mod indicators;
pub mod returns;
pub mod volatility;

pub use indicators::rsi;
pub use indicators::sma;
pub use indicators::RSI_PERIOD;
pub use returns::log_return_series;
pub use returns::log_returns;
pub use returns::ReturnSeries;
pub use volatility::current_volatility;
pub use volatility::rolling_volatility;
pub use volatility::VOLATILITY_WINDOW;
