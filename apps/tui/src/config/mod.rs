#[allow(clippy::module_inception)]
mod config;

pub use config::{from_lookup, init_app_config, AppConfig};
