//! Synthetic market data for a seasonality calendar.
//!
//! - [`generator`]: deterministic daily records and random intraday walks.
//! - [`aggregate`]: month summaries.
//! - [`calendar`], [`analysis`]: what the grid and the detail panel display.
//! - [`live`]: the periodically refreshed intraday window.
//! - [`io`]: exporting a month to disk.

pub mod aggregate;
pub mod analysis;
pub mod calendar;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod io;
pub mod live;
pub mod models;

pub use aggregate::summarize;
pub use generator::{generate_daily, generate_intraday};
