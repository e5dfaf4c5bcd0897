use std::collections::VecDeque;

use rand::Rng;
use serde::Serialize;

use crate::{
    generator::intraday::{generate_intraday, random_volume},
    live::feed::TickSettings,
    models::intraday::IntradayPoint,
};

/// Points retained by default: the generated day plus one live tick.
pub const DEFAULT_CAPACITY: usize = 25;

/// A sliding window over the most recent intraday points.
///
/// Appending past `capacity` evicts from the front, so the window always holds
/// the latest points in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntradayWindow {
    points: VecDeque<IntradayPoint>,
    capacity: usize,
}

impl IntradayWindow {
    /// Seeds the window with a freshly generated day.
    pub fn new(start_price: f64, capacity: usize) -> Self {
        Self::seeded(generate_intraday(start_price), capacity)
    }

    /// Builds a window from existing points, keeping only the newest `capacity`.
    ///
    /// A zero capacity is treated as one.
    pub fn seeded(points: impl IntoIterator<Item = IntradayPoint>, capacity: usize) -> Self {
        let mut window = Self {
            points: VecDeque::new(),
            capacity: capacity.max(1),
        };
        for p in points {
            window.push(p);
        }
        window
    }

    /// Appends `point`, evicting the oldest points beyond capacity.
    pub fn push(&mut self, point: IntradayPoint) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Draws the next point of the walk without appending it.
    ///
    /// The move is uniform in `[-max_tick_delta, max_tick_delta)` from the
    /// latest price and clamped to `[price_floor, price_ceiling]`. `change` is
    /// measured from the first point currently in the window.
    pub fn next_point<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        time: String,
        settings: &TickSettings,
    ) -> IntradayPoint {
        let last = self.latest().map_or(settings.start_price, |p| p.price);
        let base = self.points.front().map_or(settings.start_price, |p| p.price);
        let delta = rng.random_range(-settings.max_tick_delta..settings.max_tick_delta);
        let price = (last + delta).clamp(settings.price_floor, settings.price_ceiling);
        IntradayPoint {
            time,
            price,
            volume: random_volume(rng),
            change: IntradayPoint::percent_change(price, base),
        }
    }

    /// Draws the next point and appends it. Returns the appended point.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        time: String,
        settings: &TickSettings,
    ) -> &IntradayPoint {
        let point = self.next_point(rng, time, settings);
        self.push(point);
        // Capacity is at least one, so the point just pushed is still there.
        &self.points[self.points.len() - 1]
    }

    pub fn latest(&self) -> Option<&IntradayPoint> {
        self.points.back()
    }

    /// Change of the latest point, 0 for an empty window.
    pub fn last_change(&self) -> f64 {
        self.latest().map_or(0.0, |p| p.change)
    }

    /// Highest price in the window ("24h high").
    pub fn high(&self) -> Option<f64> {
        self.points.iter().map(|p| p.price).reduce(f64::max)
    }

    /// Lowest price in the window ("24h low").
    pub fn low(&self) -> Option<f64> {
        self.points.iter().map(|p| p.price).reduce(f64::min)
    }

    /// The newest `n` points, oldest first (the volume panel shows 8).
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &IntradayPoint> {
        self.points.iter().skip(self.points.len().saturating_sub(n))
    }

    pub fn points(&self) -> impl Iterator<Item = &IntradayPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
