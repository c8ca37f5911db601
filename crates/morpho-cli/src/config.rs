//! Resolves the final conversion settings from built-in defaults, an optional
//! TOML file, command-line flags and `--set KEY=VALUE` overrides, in increasing
//! order of precedence.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
