use std::fmt;

use crate::errors::CycleError;
use crate::poller::Measurements;

/// The result of one poll cycle.
///
/// Every variant hands control back to the poll loop; none of them stops
/// the process.
#[derive(Debug)]
pub enum Outcome {
  /// Measurements were retrieved and averaged.
  Average(f64),

  /// The body was valid but held no measurements.
  NoData,

  /// Measurements could not be fetched or parsed.
  Error(CycleError),
}

impl Outcome {
  /// Log the outcome as a single line.
  pub fn log(&self) {
    match self {
      Outcome::Average(_) => log::info!("{self}"),
      Outcome::NoData => log::warn!("{self}"),
      Outcome::Error(_) => log::error!("{self}"),
    }
  }
}

impl From<Result<Measurements, CycleError>> for Outcome {
  fn from(result: Result<Measurements, CycleError>) -> Self {
    match result {
      Ok(measurements) => measurements
        .average()
        .map_or(Outcome::NoData, Outcome::Average),
      Err(error) => Outcome::Error(error),
    }
  }
}

impl fmt::Display for Outcome {
  /// Averages are rendered with two decimals, rounding the exact binary
  /// value half-to-even.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Outcome::Average(average) => write!(f, "Average measurement: {average:.2}"),
      Outcome::NoData => write!(f, "No valid measurements retrieved"),
      Outcome::Error(error) => write!(f, "Error getting measurements: {error}"),
    }
  }
}
