//! `reportal query-var`, `deserialize` and `serialize`.

use anyhow::{Context, Result};
use reportal_core::location::Location;
use reportal_core::query::{
    location_deserialize, location_serialize, query_variable, query_variable_from, ParsedLocation,
};

/// Print the looked-up value as JSON (`"value"` or `null`).
pub fn run_query_var(name: &str, query: Option<&str>, ambient: &Option<Location>) -> Result<()> {
    let value = match query {
        Some(q) => query_variable(name, q).map(str::to_string),
        None => query_variable_from(ambient, name),
    };
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

pub fn run_deserialize(url: Option<&str>, ambient: &Option<Location>) -> Result<()> {
    let location = match url {
        Some(u) => Location::parse(u)?,
        None => ambient
            .clone()
            .context("no location: pass a URL, --location, or set REPORTAL_LOCATION")?,
    };
    let parsed = location_deserialize(&location);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

pub fn run_serialize(json: &str) -> Result<()> {
    let parsed: ParsedLocation =
        serde_json::from_str(json).context("expected {\"path\": ..., \"query\": {...}}")?;
    println!("{}", location_serialize(&parsed));
    Ok(())
}
