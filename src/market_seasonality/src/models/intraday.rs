use serde::{Deserialize, Serialize};

/// One sample of the simulated trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntradayPoint {
    /// Wall-clock label, `"HH:00"` for generated hours and `"HH:MM"` for live ticks.
    pub time: String,

    /// Price after this step of the walk.
    pub price: f64,

    /// Volume traded during the step.
    pub volume: f64,

    /// Cumulative change in percent from the first price of the sequence.
    pub change: f64,
}

impl IntradayPoint {
    /// Percent change of `price` relative to `base`.
    pub fn percent_change(price: f64, base: f64) -> f64 {
        (price - base) / base * 100.0
    }
}
