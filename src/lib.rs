//! hydra-app: load a YAML configuration and hand it to an entry function.
//!
//! The crate reads one configuration file into a [`config::Config`],
//! passes it to a caller-supplied function through [`app::AppRunner`],
//! and lets that function render it.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
