//! Configuration file parsing for filterpane
//!
//! Supports:
//! - `.filterpane/config.toml` - UI, search and translation settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;
