//! Runtime settings: parsing, validation, and loading.
//!
//! Settings live in a small TOML file. Every section and key is optional;
//! anything left out takes its default:
//!
//! ```toml
//! [intraday]
//! start_price = 48000.0
//!
//! [live]
//! refresh_interval_ms = 3000
//! capacity = 25
//! max_tick_delta = 100.0
//! price_floor = 40000.0
//! price_ceiling = 60000.0
//! ```
//!
//! Entrypoints:
//! - Parse + validate from a TOML string: [`load_config_str`]
//! - Parse + validate from a file path: [`load_config_path`]
//! - Resolve from an explicit path, `SEASONALITY_CONFIG`, or defaults, then
//!   apply env overrides: [`load_config`]

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use shared_utils::env::parse_env_var;
use tracing::{debug, info};

use crate::errors::Error;

/// Env var naming the config file when no explicit path is given.
pub const CONFIG_PATH_ENV: &str = "SEASONALITY_CONFIG";
/// Env var overriding `live.refresh_interval_ms`.
pub const REFRESH_MS_ENV: &str = "SEASONALITY_REFRESH_MS";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeasonalityConfig {
    pub intraday: IntradayCfg,
    pub live: LiveCfg,
}

/// Settings for the generated 24-hour walk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntradayCfg {
    /// Price the walk starts from.
    pub start_price: f64,
}

impl Default for IntradayCfg {
    fn default() -> Self {
        Self {
            start_price: crate::generator::DEFAULT_START_PRICE,
        }
    }
}

/// Settings for the periodically refreshed intraday window.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LiveCfg {
    /// Period between two appended points.
    pub refresh_interval_ms: u64,
    /// Points retained before the oldest is evicted.
    pub capacity: usize,
    /// Largest absolute move of one tick.
    pub max_tick_delta: f64,
    /// Ticks never push the price below this.
    pub price_floor: f64,
    /// Ticks never push the price above this.
    pub price_ceiling: f64,
}

impl Default for LiveCfg {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 3_000,
            capacity: crate::live::DEFAULT_CAPACITY,
            max_tick_delta: 100.0,
            price_floor: 40_000.0,
            price_ceiling: 60_000.0,
        }
    }
}

impl LiveCfg {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

impl SeasonalityConfig {
    /// Rejects values the generators cannot work with.
    pub fn validate(&self) -> Result<(), Error> {
        let start = self.intraday.start_price;
        if !start.is_finite() || start <= 0.0 {
            return Err(Error::Config(format!(
                "intraday.start_price must be a positive number, got {start}"
            )));
        }

        let live = &self.live;
        if live.refresh_interval_ms == 0 {
            return Err(Error::Config("live.refresh_interval_ms must be > 0".into()));
        }
        if live.capacity == 0 {
            return Err(Error::Config("live.capacity must be > 0".into()));
        }
        if !live.max_tick_delta.is_finite() || live.max_tick_delta <= 0.0 {
            return Err(Error::Config("live.max_tick_delta must be > 0".into()));
        }
        if !(live.price_floor < live.price_ceiling) {
            return Err(Error::Config(format!(
                "live.price_floor ({}) must be below live.price_ceiling ({})",
                live.price_floor, live.price_ceiling
            )));
        }
        Ok(())
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), Error> {
        if let Some(ms) = parse_env_var::<u64>(REFRESH_MS_ENV)? {
            debug!(ms, "refresh interval overridden from environment");
            self.live.refresh_interval_ms = ms;
        }
        Ok(())
    }
}

/// Parse and validate settings from a TOML string.
pub fn load_config_str(toml_str: &str) -> Result<SeasonalityConfig, Error> {
    let cfg: SeasonalityConfig = toml::from_str(toml_str)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Read a TOML file from disk, parse, and validate it.
pub fn load_config_path(path: impl AsRef<Path>) -> Result<SeasonalityConfig, Error> {
    let text = std::fs::read_to_string(path.as_ref())?;
    load_config_str(&text)
}

/// Resolves the effective settings.
///
/// Order: `path` if given, else the file named by [`CONFIG_PATH_ENV`], else
/// defaults. Env overrides are applied last and the result is re-validated.
pub fn load_config(path: Option<&Path>) -> Result<SeasonalityConfig, Error> {
    let env_path = parse_env_var::<String>(CONFIG_PATH_ENV)?;
    let mut cfg = match path.map(Path::to_path_buf).or(env_path.map(Into::into)) {
        Some(p) => {
            info!(path = %p.display(), "loading config");
            load_config_path(&p)?
        }
        None => {
            debug!("no config file given, using defaults");
            SeasonalityConfig::default()
        }
    };
    cfg.apply_env()?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = load_config_str("").unwrap();
        assert_eq!(cfg, SeasonalityConfig::default());
        assert_eq!(cfg.intraday.start_price, 48_000.0);
        assert_eq!(cfg.live.capacity, 25);
        assert_eq!(cfg.live.refresh_interval(), Duration::from_secs(3));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = load_config_str(
            r#"
            [live]
            capacity = 10
            "#,
        )
        .unwrap();
        assert_eq!(cfg.live.capacity, 10);
        assert_eq!(cfg.live.max_tick_delta, 100.0);
        assert_eq!(cfg.intraday, IntradayCfg::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = load_config_str(
            r#"
            [live]
            capacty = 10
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = load_config_str("[live]\ncapacity = 0\n").unwrap_err();
        assert!(err.to_string().contains("capacity"));

        let err = load_config_str("[live]\nprice_floor = 60000.0\nprice_ceiling = 40000.0\n")
            .unwrap_err();
        assert!(err.to_string().contains("price_floor"));

        let err = load_config_str("[intraday]\nstart_price = -1.0\n").unwrap_err();
        assert!(err.to_string().contains("start_price"));
    }

    #[test]
    #[serial]
    fn explicit_path_wins() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[intraday]\nstart_price = 30000.0").unwrap();

        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.intraday.start_price, 30_000.0);
    }

    #[test]
    #[serial]
    fn env_path_and_override() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[live]\nrefresh_interval_ms = 500").unwrap();

        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, file.path());
            std::env::remove_var(REFRESH_MS_ENV);
        }
        let cfg = load_config(None).unwrap();
        assert_eq!(cfg.live.refresh_interval_ms, 500);

        unsafe { std::env::set_var(REFRESH_MS_ENV, "250") };
        let cfg = load_config(None).unwrap();
        assert_eq!(cfg.live.refresh_interval_ms, 250);

        unsafe {
            std::env::remove_var(CONFIG_PATH_ENV);
            std::env::remove_var(REFRESH_MS_ENV);
        }
        assert_eq!(load_config(None).unwrap(), SeasonalityConfig::default());
    }
}
