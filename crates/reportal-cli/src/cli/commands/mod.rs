//! CLI command handlers, one per file.

mod coerce;
mod event;
mod fetch;
mod location;
mod log;
mod mixin;

pub use coerce::run_coerce;
pub use event::run_event;
pub use fetch::run_fetch;
pub use location::{run_deserialize, run_query_var, run_serialize};
pub use log::run_log;
pub use mixin::run_mixin;
