//! Location records and the ambient location sources that supply them.
//!
//! The codec in [`crate::query`] never reads host state on its own. Callers
//! pass a [`Location`] explicitly, or resolve one through a [`LocationSource`]
//! at the process boundary (environment variable, config file).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable read by [`EnvLocation::default`].
pub const LOCATION_ENV_VAR: &str = "REPORTAL_LOCATION";

/// The parts of a browser location the codec consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Scheme, host and port, e.g. `https://example.com:8443`.
    pub origin: String,
    /// Path starting with `/`.
    pub pathname: String,
    /// Query including the leading `?`, or empty when there is none.
    pub search: String,
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid location URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("location URL has an opaque origin: {0}")]
    OpaqueOrigin(String),
}

impl Location {
    pub fn new(
        origin: impl Into<String>,
        pathname: impl Into<String>,
        search: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Builds a location from a full URL string. The fragment is dropped.
    ///
    /// An empty query (`https://h/p?`) yields an empty `search`, as browsers do.
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let url = url::Url::parse(input)?;
        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(LocationError::OpaqueOrigin(input.to_string()));
        }
        let search = match url.query() {
            Some(q) if !q.is_empty() => format!("?{q}"),
            _ => String::new(),
        };
        Ok(Self {
            origin: origin.ascii_serialization(),
            pathname: url.path().to_string(),
            search,
        })
    }

    /// The raw query string: `search` without its leading `?`.
    pub fn query_string(&self) -> &str {
        self.search.strip_prefix('?').unwrap_or(&self.search)
    }
}

/// Supplies the ambient location when a caller does not pass one.
pub trait LocationSource {
    fn location(&self) -> Option<Location>;
}

impl LocationSource for Location {
    fn location(&self) -> Option<Location> {
        Some(self.clone())
    }
}

impl LocationSource for Option<Location> {
    fn location(&self) -> Option<Location> {
        self.clone()
    }
}

/// Reads the ambient location URL from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvLocation {
    var: String,
}

impl EnvLocation {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvLocation {
    fn default() -> Self {
        Self::new(LOCATION_ENV_VAR)
    }
}

impl LocationSource for EnvLocation {
    fn location(&self) -> Option<Location> {
        let raw = std::env::var(&self.var).ok()?;
        match Location::parse(raw.trim()) {
            Ok(loc) => Some(loc),
            Err(e) => {
                tracing::warn!("ignoring {}: {}", self.var, e);
                None
            }
        }
    }
}
