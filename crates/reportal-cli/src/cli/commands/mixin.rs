//! `reportal mixin <TARGET_JSON> <SOURCE_JSON>`

use anyhow::{bail, Context, Result};
use reportal_core::mixin::mixin;
use serde_json::{Map, Value};

fn parse_object(what: &str, raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(raw).with_context(|| format!("{what} is not valid JSON"))? {
        Value::Object(map) => Ok(map),
        _ => bail!("{what} must be a JSON object"),
    }
}

pub fn run_mixin(target: &str, source: &str) -> Result<()> {
    let mut target = parse_object("target", target)?;
    let source = parse_object("source", source)?;
    let merged = mixin(&mut target, &source);
    println!("{}", serde_json::to_string(merged)?);
    Ok(())
}
