//! Layout options and a custom tag codec.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_yamlite::{
    to_string, to_string_with_options, DumpOptions, Dumper, ParseOptions, Parser, Result,
    TagCodec, Tagged, Value,
};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    limits: Limits,
}

#[derive(Debug, Serialize)]
struct Limits {
    cpu: f64,
    memory: u32,
    zones: Vec<String>,
}

/// Reads `!env NAME` from a fixed table and writes unknown tags back unchanged.
struct EnvCodec;

impl TagCodec for EnvCodec {
    fn resolve_tag(&self, tag: &str, payload: &str) -> Result<Value> {
        match (tag, payload.trim()) {
            ("!env", "HOME") => Ok(Value::from("/home/app")),
            ("!env", "PORT") => Ok(Value::Int(8080)),
            _ => Ok(Value::Tagged(Tagged::new(tag, payload))),
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0".to_string(),
        debug: true,
        limits: Limits {
            cpu: 2.0,
            memory: 512,
            zones: vec!["eu-west".to_string(), "us-east".to_string()],
        },
    };

    println!("Default (block form for two levels):");
    println!("{}", to_string(&config)?);

    println!("Everything in block form, 4-space indent:");
    let options = DumpOptions::expanded().with_indent(4);
    println!("{}", to_string_with_options(&config, &options)?);

    println!("Top level only:");
    let options = DumpOptions::new().with_inline(1);
    println!("{}", to_string_with_options(&config, &options)?);

    println!("Nested under an existing key:");
    let options = DumpOptions::new().with_base_indent(2);
    println!("config:\n{}", to_string_with_options(&config, &options)?);

    // Custom tags
    let input = "home: !env HOME\nport: !env PORT\ncolor: !rgb ff8800\n";
    let value = Parser::new(input)
        .with_options(ParseOptions::new().with_max_depth(16))
        .with_codec(&EnvCodec)
        .parse()?;
    println!("Resolved tags:");
    print!("{}", Dumper::new(DumpOptions::new()).with_codec(&EnvCodec).dump(&value));

    Ok(())
}
