//! Service layer for the revenue report
//!
//! Loading the processor export and deciding which rows count as revenue.

pub mod filter;
pub mod import;

pub use filter::{EligibilityFilter, Exclusion, FilterStats};
pub use import::{load_transactions, parse_transactions, ColumnMapping};
