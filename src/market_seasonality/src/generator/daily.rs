use chrono::NaiveDate;

use crate::models::daily_record::DailyRecord;

/// Inclusive bounds used for each field of a [`DailyRecord`].
pub mod ranges {
    pub const OPEN: (f64, f64) = (45_000.0, 55_000.0);
    pub const CLOSE: (f64, f64) = (45_000.0, 55_000.0);
    pub const HIGH: (f64, f64) = (50_000.0, 60_000.0);
    pub const LOW: (f64, f64) = (40_000.0, 50_000.0);
    pub const VOLUME: (f64, f64) = (1_000_000.0, 10_000_000.0);
    pub const VOLATILITY: (f64, f64) = (0.01, 0.08);
    pub const LIQUIDITY: (f64, f64) = (0.5, 1.0);
    pub const PERFORMANCE: (f64, f64) = (-0.05, 0.05);
}

/// Numeric seed for a date: epoch milliseconds of its UTC midnight.
pub fn date_seed(date: NaiveDate) -> f64 {
    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .timestamp_millis() as f64
}

/// Maps `seed` into `[min, max]`, using `min` as the phase offset.
///
/// Fields sharing a `min` therefore share a value for any given seed.
fn seeded(seed: f64, (min, max): (f64, f64)) -> f64 {
    min + ((seed + min).sin() * 0.5 + 0.5) * (max - min)
}

/// Builds the synthetic record for `date`.
///
/// Same date, same record: there is no hidden state and no RNG involved.
pub fn generate_daily(date: NaiveDate) -> DailyRecord {
    let seed = date_seed(date);
    DailyRecord {
        open: seeded(seed, ranges::OPEN),
        close: seeded(seed, ranges::CLOSE),
        high: seeded(seed, ranges::HIGH),
        low: seeded(seed, ranges::LOW),
        volume: seeded(seed, ranges::VOLUME),
        volatility: seeded(seed, ranges::VOLATILITY),
        liquidity: seeded(seed, ranges::LIQUIDITY),
        performance: seeded(seed, ranges::PERFORMANCE),
    }
}
