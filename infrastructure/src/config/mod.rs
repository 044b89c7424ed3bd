//! Configuration loading
//!
//! Raw TOML data types plus the figment-based multi-source loader.

pub mod file_config;
pub mod loader;
