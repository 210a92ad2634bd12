//! Building values with the yaml! macro.
//!
//! Run with: cargo run --example macro

use serde_yamlite::{dump, parse, yaml};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let replicas = 3;
    let value = yaml!({
        "name": "web",
        "replicas": replicas,
        "ports": [80, 443],
        "resources": {
            "cpu": 0.5,
            "memory": "512M"
        },
        "tolerations": [],
        "paused": false
    });

    // Block form for the first two levels
    println!("Block form:\n{}", dump(&value, 2, 0));

    // Everything on one line
    println!("Flow form:\n{}\n", value);

    let back = parse(&dump(&value, 2, 0))?;
    assert_eq!(value, back);
    println!("✓ Parsed back to the same tree");

    Ok(())
}
