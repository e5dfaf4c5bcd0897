//! Canonical in-memory representation of one synthetic trading day.
//!
//! A [`DailyRecord`] is produced by
//! [`generate_daily`](crate::generator::daily::generate_daily) and consumed by the
//! calendar grid, the detail panel and the monthly aggregator.

use serde::{Deserialize, Serialize};

/// An OHLCV snapshot plus the derived metrics shown on a calendar cell.
///
/// Fields are drawn independently, so `high >= max(open, close, low)` is not
/// guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Opening price.
    pub open: f64,

    /// Closing price.
    pub close: f64,

    /// Highest price of the day.
    pub high: f64,

    /// Lowest price of the day.
    pub low: f64,

    /// Volume traded (shares/contracts).
    pub volume: f64,

    /// Daily volatility as a fraction, in `[0.01, 0.08]`.
    pub volatility: f64,

    /// Normalized liquidity score, in `[0.5, 1.0]`.
    pub liquidity: f64,

    /// Daily return as a fraction, in `[-0.05, 0.05]`.
    pub performance: f64,
}
