//! `reportal fetch <URL>` – print the body of a 200 response.

use anyhow::{Context, Result};
use reportal_core::config::FetchConfig;
use reportal_core::fetch;

pub async fn run_fetch(url: &str, cfg: &FetchConfig) -> Result<()> {
    let body = fetch::request(url, cfg)
        .await
        .with_context(|| format!("GET {url}"))?;
    print!("{body}");
    Ok(())
}
