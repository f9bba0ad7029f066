//! Transaction model
//!
//! One row of a payment-processor export. Rows are immutable once read.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::MonthPeriod;

/// Payment outcome reported by the processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Charge succeeded
    Paid,
    /// Anything else (failed, refunded, canceled...), raw value kept
    Other(String),
}

impl PaymentStatus {
    /// Interpret a raw status cell; only "paid" (any case) counts as paid
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("paid") {
            Self::Paid
        } else {
            Self::Other(trimmed.to_string())
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// A payment transaction from the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Processor identifier (e.g., "py_3Nx...")
    pub id: String,

    /// Creation timestamp (UTC)
    pub created: NaiveDateTime,

    /// Payment status
    pub status: PaymentStatus,

    /// Charged amount
    pub amount: Money,

    /// Amount refunded so far
    pub amount_refunded: Money,

    /// Free-text description, `None` when the cell was empty
    pub description: Option<String>,
}

impl Transaction {
    /// Create a paid, unrefunded transaction with no description
    pub fn new(id: impl Into<String>, created: NaiveDateTime, amount: Money) -> Self {
        Self {
            id: id.into(),
            created,
            status: PaymentStatus::Paid,
            amount,
            amount_refunded: Money::zero(),
            description: None,
        }
    }

    /// Builder pattern: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder pattern: set the status
    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder pattern: set the refunded amount
    pub fn with_refunded(mut self, amount_refunded: Money) -> Self {
        self.amount_refunded = amount_refunded;
        self
    }

    /// The calendar month this transaction belongs to
    pub fn period(&self) -> MonthPeriod {
        MonthPeriod::from_datetime(self.created)
    }

    pub fn is_refunded(&self) -> bool {
        !self.amount_refunded.is_zero()
    }
}
