//! `reportal event <NAME>`

use anyhow::Result;
use reportal_core::event::new_event;

pub fn run_event(name: &str) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&new_event(name))?);
    Ok(())
}
