#![forbid(unsafe_code)]

//! Limon measurement poller.
//!
//! ## Features
//!
//! - **config** – Reads the [Config](config::Config) of the poller from the
//!   `SERVICE_URL` and `INTERVAL_SECONDS` environment variables.
//! - **poller** – Provides the [Poller](poller::Poller), which fetches a body
//!   of whitespace-separated numbers from an endpoint on every tick, averages
//!   them and logs the [Outcome](poller::Outcome) of the cycle.
//! - **ticker** – Provides the [Ticker](ticker::Ticker) trait driving poll
//!   cycles and the fixed-period [IntervalTicker](ticker::IntervalTicker).
//! - **errors** – Fatal [ConfigError](errors::ConfigError) raised at startup
//!   and recoverable [CycleError](errors::CycleError) raised by a poll cycle.

pub mod config;
pub mod errors;
pub mod poller;
pub mod ticker;
