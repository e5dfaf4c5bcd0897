//! Periodic refresh of the intraday window.
//!
//! [`LiveFeed::start`] spawns one tokio task that appends a point every
//! refresh period. The latest window is published as an `ArcSwap` snapshot:
//! readers call [`LiveFeed::snapshot`] and never contend with the writer.
//!
//! Lifecycle: the feed is owned by whoever started it. [`LiveFeed::stop`]
//! signals the task and waits for it; dropping the handle aborts the task.
//! Either way no timer outlives the view that created it.

use std::{sync::Arc, time::Duration};

use arc_swap::ArcSwap;
use chrono::Local;
use tokio::{
    sync::{oneshot, watch},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, info, warn};

use crate::{config::SeasonalityConfig, live::window::IntradayWindow};

/// How each refresh moves the price, and how often it happens.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSettings {
    /// Used as the walk's base when the window is empty.
    pub start_price: f64,
    pub max_tick_delta: f64,
    pub price_floor: f64,
    pub price_ceiling: f64,
    pub refresh_interval: Duration,
}

impl Default for TickSettings {
    fn default() -> Self {
        Self::from(&SeasonalityConfig::default())
    }
}

impl From<&SeasonalityConfig> for TickSettings {
    fn from(cfg: &SeasonalityConfig) -> Self {
        Self {
            start_price: cfg.intraday.start_price,
            max_tick_delta: cfg.live.max_tick_delta,
            price_floor: cfg.live.price_floor,
            price_ceiling: cfg.live.price_ceiling,
            refresh_interval: cfg.live.refresh_interval(),
        }
    }
}

/// Handle to a running refresh task.
pub struct LiveFeed {
    snapshot: Arc<ArcSwap<IntradayWindow>>,
    ticks: watch::Receiver<u64>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl LiveFeed {
    /// Starts refreshing `window` on the current tokio runtime.
    ///
    /// The first point is appended one full period after start.
    pub fn start(window: IntradayWindow, settings: TickSettings) -> Self {
        let snapshot = Arc::new(ArcSwap::from_pointee(window.clone()));
        let (ticks_tx, ticks) = watch::channel(0u64);
        let (shutdown, shutdown_rx) = oneshot::channel();

        info!(
            capacity = window.capacity(),
            period_ms = settings.refresh_interval.as_millis() as u64,
            "starting live feed"
        );
        let task = tokio::spawn(run(window, settings, snapshot.clone(), ticks_tx, shutdown_rx));

        Self {
            snapshot,
            ticks,
            shutdown: Some(shutdown),
            task: Some(task),
        }
    }

    /// The window as of the latest refresh.
    pub fn snapshot(&self) -> Arc<IntradayWindow> {
        self.snapshot.load_full()
    }

    /// A receiver whose value is the number of refreshes so far.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.ticks.clone()
    }

    /// Stops the task and waits for it to finish. Returns the final window.
    pub async fn stop(mut self) -> Arc<IntradayWindow> {
        if let Some(tx) = self.shutdown.take() {
            // The task may already be gone; nothing to signal then.
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "live feed task did not finish cleanly");
            }
        }
        info!("live feed stopped");
        self.snapshot()
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run(
    mut window: IntradayWindow,
    settings: TickSettings,
    snapshot: Arc<ArcSwap<IntradayWindow>>,
    ticks: watch::Sender<u64>,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut interval = tokio::time::interval(settings.refresh_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                debug!("live feed received shutdown");
                break;
            }
            _ = interval.tick() => {
                let time = Local::now().format("%H:%M").to_string();
                let point = window.tick(&mut rand::rng(), time, &settings);
                debug!(time = %point.time, price = point.price, change = point.change, "live tick");
                snapshot.store(Arc::new(window.clone()));
                ticks.send_modify(|n| *n += 1);
            }
        }
    }
}
