//! Export module for the revenue report
//!
//! The monthly actuals record in two renderings:
//! - JSON: machine-readable, via serde
//! - JavaScript: object-literal block for the performance data file

pub mod javascript;
pub mod performance;

pub use javascript::render_performance_js;
pub use performance::{MonthActual, PerformanceExport, RecordStatus, YearActuals};
