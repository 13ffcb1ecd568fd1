//! Configuration loading

mod loader;

pub use loader::{config_path, load_config};
