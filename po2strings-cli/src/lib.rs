//! Command implementations for the `po2strings` binary, exposed for testing.

pub mod batch;
pub mod check;
pub mod config;
pub mod convert;
pub mod logging;
pub mod path_glob;
pub mod validation;

pub use config::{CliConfig, ConversionFlags, load_config};
