//! Classifications shown in the drill-down panel and on calendar cells.
//!
//! All thresholds are on the raw [`DailyRecord`] fields (fractions, not
//! percents).

use serde::{Deserialize, Serialize};

use crate::models::daily_record::DailyRecord;

/// Volatility at or above this is high.
pub const HIGH_VOLATILITY: f64 = 0.05;
/// Volatility at or above this (and below high) is medium.
pub const MEDIUM_VOLATILITY: f64 = 0.03;

/// Band a day's volatility falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLevel {
    Low,
    Medium,
    High,
}

impl VolatilityLevel {
    /// `v >= 0.05` high, `0.03 <= v < 0.05` medium, `v < 0.03` low.
    pub fn classify(volatility: f64) -> Self {
        if volatility >= HIGH_VOLATILITY {
            VolatilityLevel::High
        } else if volatility >= MEDIUM_VOLATILITY {
            VolatilityLevel::Medium
        } else {
            VolatilityLevel::Low
        }
    }
}

/// Arrow drawn next to a day's performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceIndicator {
    Up,
    Flat,
    Down,
}

impl PerformanceIndicator {
    /// Moves within ±1% are flat.
    pub fn classify(performance: f64) -> Self {
        if performance > 0.01 {
            PerformanceIndicator::Up
        } else if performance < -0.01 {
            PerformanceIndicator::Down
        } else {
            PerformanceIndicator::Flat
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeLevel {
    Low,
    Medium,
    High,
}

impl VolumeLevel {
    pub fn classify(volume: f64) -> Self {
        if volume > 5_000_000.0 {
            VolumeLevel::High
        } else if volume > 2_000_000.0 {
            VolumeLevel::Medium
        } else {
            VolumeLevel::Low
        }
    }
}

/// Liquidity expressed as trading risk: deep books are low risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidityRisk {
    Low,
    Medium,
    High,
}

impl LiquidityRisk {
    pub fn classify(liquidity: f64) -> Self {
        if liquidity > 0.7 {
            LiquidityRisk::Low
        } else if liquidity > 0.4 {
            LiquidityRisk::Medium
        } else {
            LiquidityRisk::High
        }
    }
}

/// Volume the volume ratio is measured against.
pub const REFERENCE_VOLUME: f64 = 5_000_000.0;

/// Moving-average proxy: the 20-day MA is drawn as a fixed discount on close.
pub const MA20_FACTOR: f64 = 0.98;

/// Detail-panel metrics for one day.
///
/// The volatility rating uses the same bands as the monthly summary and the
/// calendar cells, so a day at exactly 0.03 rates medium here too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAnalysis {
    pub volatility_level: VolatilityLevel,
    pub performance_indicator: PerformanceIndicator,
    pub volume_level: VolumeLevel,
    pub liquidity_risk: LiquidityRisk,
    /// `(high - low) / close` in percent.
    pub price_range_pct: f64,
    /// Volume relative to [`REFERENCE_VOLUME`].
    pub volume_ratio: f64,
    /// Absolute performance in percent.
    pub momentum_pct: f64,
    /// RSI-style score centred on 50.
    pub technical_score: f64,
    /// 20-day moving average, approximated as `close * 0.98`.
    pub ma20: f64,
    /// `|close - open|`.
    pub price_movement: f64,
}

impl DayAnalysis {
    pub fn from_record(record: &DailyRecord) -> Self {
        Self {
            volatility_level: VolatilityLevel::classify(record.volatility),
            performance_indicator: PerformanceIndicator::classify(record.performance),
            volume_level: VolumeLevel::classify(record.volume),
            liquidity_risk: LiquidityRisk::classify(record.liquidity),
            price_range_pct: (record.high - record.low) / record.close * 100.0,
            volume_ratio: record.volume / REFERENCE_VOLUME,
            momentum_pct: (record.performance * 100.0).abs(),
            technical_score: 50.0 + record.performance * 500.0,
            ma20: record.close * MA20_FACTOR,
            price_movement: (record.close - record.open).abs(),
        }
    }
}
