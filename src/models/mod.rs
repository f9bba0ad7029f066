//! Core data models for the revenue report
//!
//! This module contains the data structures that represent the reporting
//! domain: money amounts, export transactions, product descriptors and
//! monthly periods.

pub mod money;
pub mod period;
pub mod product;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use period::MonthPeriod;
pub use product::{ProductCategory, ProductDescriptor, ProductType};
pub use transaction::{PaymentStatus, Transaction};
