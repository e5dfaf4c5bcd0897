use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading settings from the process environment.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The variable is not set (or is not valid unicode).
    #[error("Missing environment variable: {0}")]
    Missing(String),

    /// The variable is set but its value could not be parsed.
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: String, value: String },
}

/// Reads an environment variable, returning a structured error if it's missing.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, EnvError> {
    std::env::var(name).map_err(|_| EnvError::Missing(name.to_string()))
}

/// Reads an optional environment variable.
///
/// An unset or empty variable yields `Ok(None)`; a value that fails to parse
/// as `T` is an [`EnvError::Invalid`].
pub fn parse_env_var<T: FromStr>(name: &str) -> Result<Option<T>, EnvError> {
    let raw = match get_env_var(name) {
        Ok(raw) => raw,
        Err(EnvError::Missing(_)) => return Ok(None),
        Err(e) => return Err(e),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<T>().map(Some).map_err(|_| EnvError::Invalid {
        name: name.to_string(),
        value: raw.clone(),
    })
}
