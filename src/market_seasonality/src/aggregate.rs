//! Monthly aggregation.
//!
//! [`summarize`] folds any collection of [`DailyRecord`]s into a
//! [`MonthlySummary`]. Only the values matter: pass `month.values()` for a
//! [`MonthData`](crate::models::month::MonthData) or a plain slice iterator.
//!
//! Partitions:
//! - performance: `> 0` positive, `< 0` negative, everything else neutral
//!   (derived as `total - positive - negative`, so no float equality test).
//! - volatility: see [`VolatilityLevel::classify`].

use tracing::debug;

use crate::{
    analysis::VolatilityLevel,
    models::{
        daily_record::DailyRecord,
        summary::{MonthlySummary, PriceRange},
    },
};

#[derive(Default)]
struct Totals {
    days: usize,
    volume: f64,
    volatility: f64,
    performance: f64,
    close: f64,
    positive: usize,
    negative: usize,
    high_vol: usize,
    medium_vol: usize,
    low_vol: usize,
    best: Option<f64>,
    worst: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
}

impl Totals {
    fn add(mut self, day: &DailyRecord) -> Self {
        self.days += 1;
        self.volume += day.volume;
        self.volatility += day.volatility;
        self.performance += day.performance;
        self.close += day.close;

        if day.performance > 0.0 {
            self.positive += 1;
        } else if day.performance < 0.0 {
            self.negative += 1;
        }

        match VolatilityLevel::classify(day.volatility) {
            VolatilityLevel::High => self.high_vol += 1,
            VolatilityLevel::Medium => self.medium_vol += 1,
            VolatilityLevel::Low => self.low_vol += 1,
        }

        self.best = Some(self.best.map_or(day.performance, |b| b.max(day.performance)));
        self.worst = Some(self.worst.map_or(day.performance, |w| w.min(day.performance)));
        self.high = Some(self.high.map_or(day.high, |h| h.max(day.high)));
        self.low = Some(self.low.map_or(day.low, |l| l.min(day.low)));
        self
    }
}

/// Computes the summary statistics over `records`.
///
/// Returns `None` when there are no records; callers render nothing in that
/// case instead of dividing by zero.
pub fn summarize<'a, I>(records: I) -> Option<MonthlySummary>
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    let t = records.into_iter().fold(Totals::default(), Totals::add);
    let (best_day, worst_day, high, low) = match (t.best, t.worst, t.high, t.low) {
        (Some(best), Some(worst), Some(high), Some(low)) => (best, worst, high, low),
        _ => return None,
    };

    let n = t.days as f64;
    let neutral_days = t.days - t.positive - t.negative;
    debug!(
        days = t.days,
        positive = t.positive,
        negative = t.negative,
        neutral = neutral_days,
        high_vol = t.high_vol,
        medium_vol = t.medium_vol,
        low_vol = t.low_vol,
        "summarized month"
    );

    Some(MonthlySummary {
        total_days: t.days,
        total_volume: t.volume,
        avg_volume: t.volume / n,
        avg_volatility: t.volatility / n,
        avg_performance: t.performance / n,
        best_day,
        worst_day,
        positive_days: t.positive,
        negative_days: t.negative,
        neutral_days,
        high_vol_days: t.high_vol,
        medium_vol_days: t.medium_vol,
        low_vol_days: t.low_vol,
        avg_price: t.close / n,
        price_range: PriceRange { high, low },
    })
}
