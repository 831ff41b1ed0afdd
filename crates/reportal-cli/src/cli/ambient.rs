//! Resolves the ambient location at the process boundary.
//!
//! Order: `--location` flag, then `REPORTAL_LOCATION`, then
//! `default_location` from config.toml.

use anyhow::{Context, Result};
use reportal_core::config::ReportalConfig;
use reportal_core::location::{EnvLocation, Location, LocationSource};

pub fn resolve(flag: Option<&str>, cfg: &ReportalConfig) -> Result<Option<Location>> {
    resolve_with(flag, &EnvLocation::default(), cfg)
}

pub(super) fn resolve_with(
    flag: Option<&str>,
    env: &dyn LocationSource,
    cfg: &ReportalConfig,
) -> Result<Option<Location>> {
    if let Some(url) = flag {
        let loc = Location::parse(url).with_context(|| format!("--location {url}"))?;
        return Ok(Some(loc));
    }
    if let Some(loc) = env.location() {
        return Ok(Some(loc));
    }
    match cfg.default_location.as_deref() {
        Some(url) => {
            let loc = Location::parse(url)
                .with_context(|| format!("default_location in config: {url}"))?;
            Ok(Some(loc))
        }
        None => Ok(None),
    }
}
