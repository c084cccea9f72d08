//! Configuration loading (TOML files via figment)

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileHistoryConfig, FileProviderConfig, FileReplConfig};
pub use loader::ConfigLoader;
