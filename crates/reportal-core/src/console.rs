//! Leveled console output, forwarded to `tracing`.

use serde_json::Value;

/// Console channels a caller may write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
}

impl Level {
    /// Maps a level tag to a channel; unknown tags have none.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "log" => Some(Level::Log),
            "warn" => Some(Level::Warn),
            "error" => Some(Level::Error),
            _ => None,
        }
    }
}

/// Renders values like a console line: strings verbatim, everything else as JSON.
pub fn render(args: &[Value]) -> String {
    args.iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `[["a", "b"]]` and `["a", "b"]` log the same line.
fn expand_single_array(args: &[Value]) -> &[Value] {
    match args {
        [Value::Array(inner)] => inner.as_slice(),
        _ => args,
    }
}

/// Writes `args` to the channel named by `tag`.
///
/// A single array argument is expanded into its elements. Unknown tags are
/// ignored and return `None`.
pub fn emit(tag: &str, args: &[Value]) -> Option<Level> {
    let level = Level::from_tag(tag)?;
    let line = render(expand_single_array(args));
    match level {
        Level::Log => tracing::info!(target: "reportal::console", "{}", line),
        Level::Warn => tracing::warn!(target: "reportal::console", "{}", line),
        Level::Error => tracing::error!(target: "reportal::console", "{}", line),
    }
    Some(level)
}
