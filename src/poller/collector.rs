use std::future::Future;

use curl::easy::{Easy2, Handler, WriteError};
use tokio::task;

use crate::errors::CycleError;

#[derive(Default)]
struct ResponseBody(Vec<u8>);

impl Handler for ResponseBody {
  fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
    self.0.extend_from_slice(data);

    Ok(data.len())
  }
}

impl ResponseBody {
  pub fn get_body(&self) -> String {
    String::from_utf8_lossy(&self.0).into()
  }
}

/// A source of raw measurement bodies, fetched once per poll cycle.
pub trait Fetch {
  /// Fetch the whole body holding the measurements.
  fn fetch(&self) -> impl Future<Output = Result<String, CycleError>> + Send;
}

/// Fetches measurements with a plain `HTTP GET`.
///
/// The status code is not checked: any readable body is returned.
#[derive(Debug, Clone)]
pub struct Http {
  url: String,
}

impl Http {
  /// Create a collector for `url`.
  pub fn new(url: impl Into<String>) -> Self {
    Self { url: url.into() }
  }

  /// Endpoint the measurements are fetched from.
  pub fn url(&self) -> &str {
    &self.url
  }
}

impl Fetch for Http {
  async fn fetch(&self) -> Result<String, CycleError> {
    let mut request = Easy2::new(ResponseBody::default());
    request.url(&self.url)?;
    request.get(true)?;
    request.follow_location(true)?;

    let response = task::spawn_blocking(move || match request.perform() {
      Ok(()) => Ok(request),
      Err(error) => Err(error),
    })
    .await??;

    Ok(response.get_ref().get_body())
  }
}

/// A URL on a local port nothing listens on.
#[cfg(test)]
pub(crate) fn closed_port_url() -> String {
  let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  format!("http://{addr}/measurements")
}
