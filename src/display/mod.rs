//! Display formatting for terminal output
//!
//! Helpers for the text report and the catalog listing.

pub mod catalog;
pub mod report;

pub use catalog::format_catalog;
pub use report::{banner, rule, truncate};
