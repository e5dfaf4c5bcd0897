//! Aggregate statistics for one displayed month.

use serde::{Deserialize, Serialize};

/// Highest high and lowest low across a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub high: f64,
    pub low: f64,
}

/// Derived statistics over a non-empty set of [`DailyRecord`](crate::models::daily_record::DailyRecord)s.
///
/// Produced by [`summarize`](crate::aggregate::summarize); never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_days: usize,
    pub total_volume: f64,
    pub avg_volume: f64,
    pub avg_volatility: f64,
    pub avg_performance: f64,
    /// Largest daily performance.
    pub best_day: f64,
    /// Smallest daily performance.
    pub worst_day: f64,
    pub positive_days: usize,
    pub negative_days: usize,
    pub neutral_days: usize,
    pub high_vol_days: usize,
    pub medium_vol_days: usize,
    pub low_vol_days: usize,
    /// Mean closing price.
    pub avg_price: f64,
    pub price_range: PriceRange,
}

impl MonthlySummary {
    /// Percentage of the month's days that `count` represents.
    pub fn share(&self, count: usize) -> f64 {
        count as f64 / self.total_days as f64 * 100.0
    }
}
