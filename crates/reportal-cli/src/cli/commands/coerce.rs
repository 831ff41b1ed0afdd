//! `reportal coerce <VALUE>...` – one JSON result per line.

use anyhow::Result;
use reportal_core::numeric::coerce_number;

pub fn run_coerce(values: &[String]) -> Result<()> {
    for v in values {
        println!("{}", serde_json::to_string(&coerce_number(v))?);
    }
    Ok(())
}
