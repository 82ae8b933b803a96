//! A module for reading the poller configuration from the environment.

use std::env;
use std::time::{Duration, Instant};

use crate::errors::ConfigError;

/// Environment variable holding the endpoint to poll.
pub const SERVICE_URL: &str = "SERVICE_URL";

/// Environment variable holding the poll period in whole seconds.
pub const INTERVAL_SECONDS: &str = "INTERVAL_SECONDS";

/// Poller configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Endpoint the measurements are fetched from.
  pub service_url: String,

  /// Time between two poll cycles.
  pub interval: Duration,
}

impl Config {
  /// Read the configuration from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Read the configuration through `lookup`, which maps a variable name
  /// to its value. Empty values are treated as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let required = |name: &'static str| {
      lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing { name })
    };

    let service_url = required(SERVICE_URL)?;
    let raw_interval = required(INTERVAL_SECONDS)?;

    let seconds: i64 = raw_interval
      .parse()
      .map_err(|source| ConfigError::InvalidInterval {
        value: raw_interval.clone(),
        source,
      })?;

    if seconds <= 0 {
      return Err(ConfigError::NonPositiveInterval { value: seconds });
    }

    let interval = Duration::from_secs(seconds as u64);

    if Instant::now().checked_add(interval).is_none() {
      return Err(ConfigError::IntervalOutOfRange { value: seconds });
    }

    Ok(Self {
      service_url,
      interval,
    })
  }
}
