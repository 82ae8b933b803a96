//! A module providing the timer that drives poll cycles.
//!
//! The poll loop only asks a [`Ticker`] to wait for the next tick, so the
//! timer can be swapped out. [`IntervalTicker`] is the production timer
//! backed by [`tokio::time::Interval`].
//!
//! # Missed ticks
//!
//! The first tick fires one period after the ticker is created. When a
//! poll cycle takes longer than the period, the tick that fell due while
//! busy fires once, right after the slow cycle. Any further missed ticks
//! are dropped, and later ticks stay aligned to the original schedule.
//! Ticks are never queued up or fired twice.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use limon_poller::ticker::{IntervalTicker, Ticker};
//!
//! # tokio_test::block_on(async {
//! let mut ticker = IntervalTicker::new(Duration::from_millis(10));
//!
//! assert!(ticker.tick().await);
//! # })
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// A source of ticks for the poll loop.
pub trait Ticker {
  /// Wait for the next tick.
  ///
  /// Returns `false` when the ticker is exhausted and the loop should stop.
  fn tick(&mut self) -> impl Future<Output = bool> + Send;
}

/// A ticker firing on a fixed wall-clock period.
pub struct IntervalTicker {
  interval: Interval,
}

impl IntervalTicker {
  /// Create a ticker whose first tick fires after `period`.
  ///
  /// Must be called within a tokio runtime. `period` must be small enough
  /// to be added to the current instant, as [`Config`](crate::config::Config)
  /// guarantees.
  pub fn new(period: Duration) -> Self {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    Self { interval }
  }

  /// Time between two ticks.
  pub fn period(&self) -> Duration {
    self.interval.period()
  }
}

impl Ticker for IntervalTicker {
  async fn tick(&mut self) -> bool {
    self.interval.tick().await;

    true
  }
}

/// A ticker firing a fixed number of ticks back-to-back, then stopping.
#[cfg(test)]
pub(crate) struct CountedTicker {
  remaining: usize,
}

#[cfg(test)]
impl CountedTicker {
  pub(crate) fn new(ticks: usize) -> Self {
    Self { remaining: ticks }
  }
}

#[cfg(test)]
impl Ticker for CountedTicker {
  async fn tick(&mut self) -> bool {
    if self.remaining == 0 {
      return false;
    }

    self.remaining -= 1;

    true
  }
}
