use std::process;

use limon_poller::config::Config;
use limon_poller::poller::Poller;

#[tokio::main(flavor = "current_thread")]
async fn main() {
  env_logger::Builder::new()
    .format_timestamp_millis()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();

  let config = match Config::from_env() {
    Ok(config) => config,
    Err(error) => {
      log::error!("{error}");
      process::exit(1);
    }
  };

  log::debug!(
    "Polling {} every {}s",
    config.service_url,
    config.interval.as_secs()
  );

  Poller::from_config(&config).run().await;
}
