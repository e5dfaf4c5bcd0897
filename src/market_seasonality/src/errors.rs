use thiserror::Error;

/// The unified error type for the `market_seasonality` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error related to configuration (bad value, unknown option).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A year/month/day combination that does not name a calendar date.
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`SeasonalityConfig`](crate::config::SeasonalityConfig).
    #[error("Failed to parse config")]
    Toml(#[from] toml::de::Error),

    /// JSON (de)serialization failed.
    #[error("JSON operation failed")]
    Json(#[from] serde_json::Error),

    /// Reading a setting from the environment failed.
    #[error("Environment error: {0}")]
    Env(#[from] shared_utils::env::EnvError),
}
