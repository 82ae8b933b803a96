//! A module describing poller errors.
//!
//! Errors come in two levels: [`ConfigError`] is fatal and stops the
//! process before polling starts, [`CycleError`] is recovered at the
//! poll cycle boundary and only skips the current cycle.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Errors that can occur while reading the startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
  /// A required environment variable is unset or empty.
  #[error("{name} environment variable is required")]
  Missing { name: &'static str },

  /// The poll interval is not an integer.
  #[error("Invalid interval: {source}")]
  InvalidInterval {
    value: String,
    #[source]
    source: ParseIntError,
  },

  /// The poll interval is zero or negative.
  #[error("Invalid interval: {value} must be a positive number of seconds")]
  NonPositiveInterval { value: i64 },

  /// The poll interval is too large for the clock to schedule.
  #[error("Invalid interval: {value} seconds is out of range")]
  IntervalOutOfRange { value: i64 },
}

/// Errors that can occur during a single poll cycle.
#[derive(Error, Debug)]
pub enum CycleError {
  /// The request could not be performed or the body could not be read.
  #[error("{0}")]
  Network(#[from] curl::Error),

  /// A token of the response body is not a number.
  #[error("parsing {token:?}: {source}")]
  Parse {
    token: String,
    #[source]
    source: ParseFloatError,
  },

  /// A token of the response body is a number too large for `f64`.
  #[error("parsing {token:?}: value out of range")]
  OutOfRange { token: String },

  /// The blocking request task was cancelled or panicked.
  #[error("request task failed: {0}")]
  Task(#[from] tokio::task::JoinError),
}
