//! Configuration loading for the reveal client.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FlowConfig, ServiceConfig};
