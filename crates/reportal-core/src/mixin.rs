//! Shallow property copy between JSON objects.

use serde_json::{Map, Value};

/// Copies every entry of `source` onto `target`, overwriting existing keys.
///
/// The copy is shallow: nested objects are cloned whole, not merged.
pub fn mixin<'t>(
    target: &'t mut Map<String, Value>,
    source: &Map<String, Value>,
) -> &'t mut Map<String, Value> {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
    target
}
