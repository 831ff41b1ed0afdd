//! Query string codec.
//!
//! Turns a [`Location`] into a [`ParsedLocation`] (base path plus ordered,
//! lowercase-keyed query map) and back into a URL string. Components are kept
//! raw: nothing is percent-decoded or re-encoded.

mod lookup;

pub use lookup::{query_variable, query_variable_from};

use crate::location::Location;
use indexmap::IndexMap;
use lookup::split_pair;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Query parameters keyed by name, iterated in first-insertion order.
///
/// A value of `None` marks a pair that had no `=`. Re-inserting an existing
/// key replaces its value but keeps its original position.
pub type QueryMap = IndexMap<String, Option<String>>;

/// A location broken into the pieces needed to rebuild its URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLocation {
    /// Origin plus pathname; no query, no fragment.
    pub path: String,
    #[serde(default)]
    pub query: QueryMap,
}

impl ParsedLocation {
    /// Parses `location` into path and query map.
    ///
    /// Keys are lowercased. A key seen twice keeps its first position and
    /// takes the last value. An empty segment (`&&`, a trailing `&`, an empty
    /// search) becomes the empty key with no value.
    pub fn from_location(location: &Location) -> Self {
        let mut query = QueryMap::new();
        for segment in location.query_string().split('&') {
            let (key, value) = split_pair(segment);
            query.insert(key.to_lowercase(), value.map(str::to_string));
        }
        Self {
            path: format!("{}{}", location.origin, location.pathname),
            query,
        }
    }

    /// Rebuilds the URL: `path?k1=v1&k2=v2`. A valueless key is written as `k=`.
    ///
    /// An empty query map still yields a trailing `?`.
    pub fn to_url(&self) -> String {
        let pairs: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={}", v.as_deref().unwrap_or("")))
            .collect();
        format!("{}?{}", self.path, pairs.join("&"))
    }
}

impl fmt::Display for ParsedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

impl From<&Location> for ParsedLocation {
    fn from(location: &Location) -> Self {
        Self::from_location(location)
    }
}

/// Parses `location` into a [`ParsedLocation`]; see [`ParsedLocation::from_location`].
pub fn location_deserialize(location: &Location) -> ParsedLocation {
    ParsedLocation::from_location(location)
}

/// Rebuilds a URL string; see [`ParsedLocation::to_url`].
pub fn location_serialize(parsed: &ParsedLocation) -> String {
    parsed.to_url()
}
