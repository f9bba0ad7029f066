//! Configuration module for the revenue report
//!
//! Run settings with built-in defaults, overridden from the command line.

pub mod settings;

pub use settings::{Settings, DEFAULT_INPUT_FILE};
