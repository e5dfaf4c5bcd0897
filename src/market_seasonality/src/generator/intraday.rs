use rand::Rng;

use crate::models::intraday::IntradayPoint;

/// Price the simulated trading day opens at.
pub const DEFAULT_START_PRICE: f64 = 48_000.0;

/// Number of hourly points in a generated day.
pub const HOURS_PER_DAY: u32 = 24;

/// Largest absolute hourly move of the walk.
pub const MAX_HOURLY_DELTA: f64 = 500.0;

/// Per-point volume bounds, `[min, max)`.
pub const VOLUME_RANGE: (f64, f64) = (500_000.0, 2_500_000.0);

/// Draws a volume for one point.
pub fn random_volume<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(VOLUME_RANGE.0..VOLUME_RANGE.1)
}

/// Generates a fresh 24-hour walk from `start_price` using the thread RNG.
///
/// Every call yields a different sequence; only its shape is fixed.
pub fn generate_intraday(start_price: f64) -> Vec<IntradayPoint> {
    generate_intraday_with(&mut rand::rng(), start_price)
}

/// Same as [`generate_intraday`] but draws from `rng`.
///
/// Hour `00:00` sits at `start_price` itself; each following hour adds a
/// uniform move in `[-500, 500)`.
pub fn generate_intraday_with<R: Rng + ?Sized>(rng: &mut R, start_price: f64) -> Vec<IntradayPoint> {
    let mut price = start_price;
    (0..HOURS_PER_DAY)
        .map(|hour| {
            if hour > 0 {
                price += rng.random_range(-MAX_HOURLY_DELTA..MAX_HOURLY_DELTA);
            }
            IntradayPoint {
                time: format!("{hour:02}:00"),
                price,
                volume: random_volume(rng),
                change: IntradayPoint::percent_change(price, start_price),
            }
        })
        .collect()
}
