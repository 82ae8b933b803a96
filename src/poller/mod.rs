//! A module driving the periodic poll of a measurement endpoint.
//!
//! Each tick of the [`Ticker`] runs one poll cycle: fetch the body, parse
//! the measurements, compute their average and log the [`Outcome`]. A
//! cycle runs to completion before the next tick is awaited, so cycles
//! never overlap.
//!
//! # Example
//!
//! ```rust, no_run
//! use std::time::Duration;
//!
//! use limon_poller::poller::{Http, Poller};
//! use limon_poller::ticker::IntervalTicker;
//!
//! async fn poll_forever() {
//!   let poller = Poller::new(
//!     Http::new("http://localhost:8080/measurements"),
//!     IntervalTicker::new(Duration::from_secs(10)),
//!   );
//!
//!   poller.run().await;
//! }
//!
//! # tokio_test::block_on(async {
//! poll_forever().await;
//! # })
//! ```

mod collector;
mod measurements;
mod outcome;

pub use collector::{Fetch, Http};
pub use measurements::Measurements;
pub use outcome::Outcome;

use crate::config::Config;
use crate::ticker::{IntervalTicker, Ticker};

#[doc(hidden)]
#[macro_export]
macro_rules! measure {
  ($block:block) => {{
    let start = std::time::Instant::now();
    let result = { $block };

    (result, start.elapsed())
  }};
}

/// Polls a measurement source on every tick of a ticker.
pub struct Poller<F, T> {
  fetcher: F,
  ticker: T,
}

impl Poller<Http, IntervalTicker> {
  /// Create a poller fetching `config.service_url` every `config.interval`.
  ///
  /// Must be called within a tokio runtime.
  pub fn from_config(config: &Config) -> Self {
    Self::new(
      Http::new(config.service_url.as_str()),
      IntervalTicker::new(config.interval),
    )
  }
}

impl<F: Fetch, T: Ticker> Poller<F, T> {
  pub fn new(fetcher: F, ticker: T) -> Self {
    Self { fetcher, ticker }
  }

  /// Run a single poll cycle without waiting for a tick.
  pub async fn poll_once(&self) -> Outcome {
    let result = self
      .fetcher
      .fetch()
      .await
      .and_then(|body| Measurements::parse(&body));

    Outcome::from(result)
  }

  /// Run one poll cycle per tick until the ticker is exhausted.
  ///
  /// Cycle errors are logged and never stop the loop. Returns the number
  /// of cycles run.
  pub async fn run(mut self) -> usize {
    let mut cycles = 0;

    while self.ticker.tick().await {
      let (outcome, elapsed) = measure!({ self.poll_once().await });

      outcome.log();
      log::debug!("Poll cycle finished in {elapsed:?}");

      cycles += 1;
    }

    cycles
  }
}
