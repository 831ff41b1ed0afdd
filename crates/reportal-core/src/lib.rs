pub mod config;
pub mod logging;

pub mod console;
pub mod event;
pub mod fetch;
pub mod location;
pub mod mixin;
pub mod numeric;
pub mod query;

