//! Walking a parsed Value tree.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_yamlite::{from_value, parse, to_string_pretty, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Job {
    name: String,
    retries: u32,
    timeout: u32,
}

const PIPELINE: &str = "\
# nightly pipeline
defaults: &defaults
  retries: 3
  timeout: 60

jobs:
  - name: build
    <<: *defaults
  - name: test
    <<: *defaults
    timeout: 600
  - name: deploy
    <<: *defaults
    retries: 0

notify: [ops@example.com, dev@example.com]
started: 2024-03-01 02:00:00 +1
script: |
  make build
  make test
";

fn main() -> Result<(), Box<dyn Error>> {
    let value = parse(PIPELINE)?;

    // Access values dynamically
    if let Some(Value::Sequence(jobs)) = value.get("jobs") {
        println!("{} jobs:", jobs.len());
        for job in jobs {
            let name = job.get("name").and_then(Value::as_str).unwrap_or("?");
            let timeout = job.get("timeout").and_then(Value::as_i64).unwrap_or(0);
            println!("  {} (timeout {}s)", name, timeout);
        }
    }

    if let Some(recipients) = value.get("notify").and_then(Value::as_sequence) {
        println!("notify: {} recipients", recipients.len());
    }

    if let Some(started) = value.get("started").and_then(Value::as_timestamp) {
        println!("started at {}", started.to_rfc3339());
    }

    if let Some(script) = value.get("script").and_then(Value::as_str) {
        println!("script has {} lines\n", script.lines().count());
    }

    // Convert part of the tree into typed structs
    let jobs: Vec<Job> = from_value(value.get("jobs").cloned().unwrap_or(Value::Null))?;
    println!("Typed jobs: {:?}\n", jobs);

    // And write it back out
    println!("Jobs as YAML:\n{}", to_string_pretty(&jobs)?);

    Ok(())
}
