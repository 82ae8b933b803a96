use std::process::{Command, Output};

fn run_bin(vars: &[(&str, &str)]) -> Output {
  let mut command = Command::new(env!("CARGO_BIN_EXE_limon-poller"));
  command
    .env_remove("SERVICE_URL")
    .env_remove("INTERVAL_SECONDS")
    .env_remove("RUST_LOG");

  for (name, value) in vars {
    command.env(name, value);
  }

  command.output().expect("failed to execute binary")
}

fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_service_url() {
  let output = run_bin(&[("INTERVAL_SECONDS", "1")]);

  assert!(!output.status.success(), "process exits with an error");
  assert!(
    stderr(&output).contains("SERVICE_URL environment variable is required"),
    "error names the missing variable"
  );
}

#[test]
fn missing_interval() {
  let output = run_bin(&[("SERVICE_URL", "http://127.0.0.1:5555")]);

  assert!(!output.status.success(), "process exits with an error");
  assert!(
    stderr(&output).contains("INTERVAL_SECONDS environment variable is required"),
    "error names the missing variable"
  );
}

#[test]
fn non_integer_interval() {
  let output = run_bin(&[
    ("SERVICE_URL", "http://127.0.0.1:5555"),
    ("INTERVAL_SECONDS", "abc"),
  ]);

  assert_eq!(output.status.code(), Some(1), "process exits with code 1");
  assert!(
    stderr(&output).contains("Invalid interval"),
    "error describes the interval"
  );
  assert!(
    !stderr(&output).contains("measurement"),
    "no poll cycle runs"
  );
}

#[test]
fn interval_too_large() {
  let output = run_bin(&[
    ("SERVICE_URL", "http://127.0.0.1:1"),
    ("INTERVAL_SECONDS", "9223372036854775807"),
  ]);

  assert_eq!(output.status.code(), Some(1), "process exits with code 1");
  assert!(
    stderr(&output).contains("seconds is out of range"),
    "error describes the interval"
  );
}
