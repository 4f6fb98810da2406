//! Configuration loading for hydra-app.
//!
//! This module loads a single YAML file into a [`Config`], the ordered
//! key-value tree that entry functions receive.
//!
//! # Example
//!
//! ```no_run
//! use hydra_app::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config.yaml").unwrap();
//! print!("{}", loader.config());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::Config;
