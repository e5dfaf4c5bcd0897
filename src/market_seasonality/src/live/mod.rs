//! The live intraday chart.
//!
//! - [`window::IntradayWindow`]: the bounded, FIFO-evicting sequence of points.
//! - [`feed::LiveFeed`]: a tokio task appending one point per refresh period,
//!   with an explicit start/stop lifecycle.

pub mod feed;
pub mod window;

pub use feed::{LiveFeed, TickSettings};
pub use window::{DEFAULT_CAPACITY, IntradayWindow};
