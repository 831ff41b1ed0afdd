//! Single-variable lookup in a raw query string (first match wins).

use crate::location::LocationSource;

/// Splits one `key=value` segment on its first `=`.
///
/// A segment without `=` has no value; that branch is explicit so callers can
/// tell `flag` apart from `flag=`.
pub(crate) fn split_pair(segment: &str) -> (&str, Option<&str>) {
    match segment.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (segment, None),
    }
}

/// Returns the raw value of the first pair in `raw_query` whose key equals
/// `name` ignoring case.
///
/// `raw_query` has no leading `?`. Values are returned exactly as they appear
/// after the first `=`, without percent-decoding.
///
/// Returns `None` when the query is empty, no key matches, or the first
/// matching pair has no `=` (later duplicates are never consulted).
///
/// # Examples
///
/// - `query_variable("key1", "key1=val1&key2=val2")` → `Some("val1")`
/// - `query_variable("A", "a=1&a=2")` → `Some("1")`
pub fn query_variable<'q>(name: &str, raw_query: &'q str) -> Option<&'q str> {
    if raw_query.is_empty() {
        return None;
    }
    let wanted = name.to_lowercase();
    raw_query
        .split('&')
        .map(split_pair)
        .find(|(key, _)| key.to_lowercase() == wanted)
        .and_then(|(_, value)| value)
}

/// Looks `name` up in the query of the ambient location supplied by `source`.
///
/// `None` when the source has no location or its query is empty.
pub fn query_variable_from<S>(source: &S, name: &str) -> Option<String>
where
    S: LocationSource + ?Sized,
{
    let location = source.location()?;
    query_variable(name, location.query_string()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    const QUERY: &str = "key1=val1&key2=val2";

    #[test]
    fn finds_each_key() {
        assert_eq!(query_variable("key1", QUERY), Some("val1"));
        assert_eq!(query_variable("key2", QUERY), Some("val2"));
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(query_variable("key3", QUERY), None);
    }

    #[test]
    fn empty_query_is_none() {
        assert_eq!(query_variable("key1", ""), None);
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(query_variable("KEY1", QUERY), Some("val1"));
        assert_eq!(query_variable("tab", "Tab=Sales"), Some("Sales"));
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(query_variable("a", "a=1&a=2"), Some("1"));
        assert_eq!(query_variable("a", "A=first&a=second"), Some("first"));
    }

    #[test]
    fn value_is_raw_after_first_equals() {
        assert_eq!(query_variable("f", "f=a=b&g=%20x"), Some("a=b"));
        assert_eq!(query_variable("g", "f=a=b&g=%20x"), Some("%20x"));
        assert_eq!(query_variable("e", "e="), Some(""));
    }

    #[test]
    fn valueless_match_stops_the_scan() {
        assert_eq!(query_variable("flag", "flag&flag=1"), None);
        assert_eq!(query_variable("other", "flag&other=2"), Some("2"));
    }

    #[test]
    fn split_pair_branches() {
        assert_eq!(split_pair("a=1"), ("a", Some("1")));
        assert_eq!(split_pair("a"), ("a", None));
        assert_eq!(split_pair("=v"), ("", Some("v")));
    }

    #[test]
    fn ambient_source() {
        let loc = Location::new("https://h", "/r", "?Page=3");
        assert_eq!(query_variable_from(&loc, "page").as_deref(), Some("3"));

        let empty = Location::new("https://h", "/r", "");
        assert_eq!(query_variable_from(&empty, "key3"), None);

        let none: Option<Location> = None;
        assert_eq!(query_variable_from(&none, "page"), None);
    }
}
