use crate::errors::CycleError;

/// Measurements parsed from a single response body.
///
/// Values keep the order they appear in the body, top-to-bottom and
/// left-to-right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements(Vec<f64>);

impl Measurements {
  /// Parse a body made of lines of whitespace-separated numbers.
  ///
  /// Parsing is strict: the first token that is not a number fails the
  /// whole body and no values are returned.
  pub fn parse(body: &str) -> Result<Self, CycleError> {
    body
      .lines()
      .flat_map(str::split_whitespace)
      .map(parse_token)
      .collect::<Result<Vec<_>, _>>()
      .map(Self)
  }

  /// Parsed values.
  pub fn values(&self) -> &[f64] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Arithmetic mean of the values, or `None` if there are none.
  ///
  /// `NaN` and infinite values propagate into the result.
  pub fn average(&self) -> Option<f64> {
    if self.is_empty() {
      return None;
    }

    let sum: f64 = self.0.iter().sum();

    Some(sum / self.len() as f64)
  }
}

/// Parse one token, rejecting finite literals that overflow to infinity.
fn parse_token(token: &str) -> Result<f64, CycleError> {
  let value = token.parse::<f64>().map_err(|source| CycleError::Parse {
    token: token.to_owned(),
    source,
  })?;

  if value.is_infinite() && !is_infinity_literal(token) {
    return Err(CycleError::OutOfRange {
      token: token.to_owned(),
    });
  }

  Ok(value)
}

fn is_infinity_literal(token: &str) -> bool {
  let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);

  unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl From<Vec<f64>> for Measurements {
  fn from(values: Vec<f64>) -> Self {
    Self(values)
  }
}
