//! Clinic Revenue - categorized monthly revenue from Stripe payment exports
//!
//! This library reads a payment-processor transaction export, identifies the
//! clinical service behind each charge, and produces a monthly revenue report
//! plus a nested actuals record for the performance data file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Run settings and defaults
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, products, periods)
//! - `classifier`: Product identification (description rules, price catalog)
//! - `services`: CSV loading and revenue eligibility filtering
//! - `reports`: Monthly, category and product aggregation and the text report
//! - `export`: The performance actuals record (JSON and JavaScript)
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic_revenue::services::load_transactions;
//! use clinic_revenue::reports::analyze;
//!
//! let transactions = load_transactions(Path::new("unified_payments.csv"))?;
//! let analysis = analyze(&transactions);
//! println!("{}", analysis.monthly.total_revenue());
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use classifier::{identify_product, Classification, Classifier, PriceCatalog};
pub use error::{ReportError, ReportResult};
pub use reports::{analyze, Analysis};
