//! `reportal log <LEVEL> <VALUE>...` – console-style output.

use reportal_core::console::{self, Level};
use serde_json::Value;

/// Reads a CLI argument as JSON when it parses, otherwise as a plain string.
pub(crate) fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Forward to the log file and echo like a console: log to stdout, warn/error to stderr.
pub fn run_log(level: &str, values: &[String]) {
    let args: Vec<Value> = values.iter().map(|v| parse_value(v)).collect();
    match console::emit(level, &args) {
        Some(Level::Log) => println!("{}", console::render(&args)),
        Some(Level::Warn) | Some(Level::Error) => eprintln!("{}", console::render(&args)),
        None => tracing::debug!("ignored console level {:?}", level),
    }
}
