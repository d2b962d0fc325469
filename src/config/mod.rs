//! Application configuration: TOML file, defaults and a shared store.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, DemoConfig, LayoutConfig};
pub(crate) use types::join_url;
