//! Revenue eligibility filter
//!
//! Only paid, non-test, unrefunded charges count as revenue. Everything else
//! is dropped silently; the drop counts are kept for logging.

use tracing::info;

use crate::models::{Money, Transaction};

/// Why a transaction was excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    NotPaid,
    TestAmount,
    Refunded,
}

/// Counts of excluded transactions by first failing check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub kept: usize,
    pub not_paid: usize,
    pub test_amount: usize,
    pub refunded: usize,
}

impl FilterStats {
    pub fn excluded(&self) -> usize {
        self.not_paid + self.test_amount + self.refunded
    }
}

/// Keeps revenue-bearing transactions
#[derive(Debug, Clone, Copy)]
pub struct EligibilityFilter {
    test_threshold: Money,
}

impl EligibilityFilter {
    pub fn new(test_threshold: Money) -> Self {
        Self { test_threshold }
    }

    /// The first check a transaction fails, if any
    ///
    /// The checks are independent, so a transaction is eligible exactly when
    /// this returns `None` whatever order they run in.
    pub fn exclusion(&self, txn: &Transaction) -> Option<Exclusion> {
        if !txn.status.is_paid() {
            Some(Exclusion::NotPaid)
        } else if txn.amount <= self.test_threshold {
            Some(Exclusion::TestAmount)
        } else if txn.is_refunded() {
            Some(Exclusion::Refunded)
        } else {
            None
        }
    }

    pub fn is_eligible(&self, txn: &Transaction) -> bool {
        self.exclusion(txn).is_none()
    }

    /// Split out the eligible transactions, preserving input order
    pub fn apply(&self, transactions: &[Transaction]) -> (Vec<Transaction>, FilterStats) {
        let mut stats = FilterStats::default();
        let mut kept = Vec::with_capacity(transactions.len());

        for txn in transactions {
            match self.exclusion(txn) {
                None => {
                    stats.kept += 1;
                    kept.push(txn.clone());
                }
                Some(Exclusion::NotPaid) => stats.not_paid += 1,
                Some(Exclusion::TestAmount) => stats.test_amount += 1,
                Some(Exclusion::Refunded) => stats.refunded += 1,
            }
        }

        info!(
            kept = stats.kept,
            not_paid = stats.not_paid,
            test = stats.test_amount,
            refunded = stats.refunded,
            "filtered transactions"
        );

        (kept, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentStatus;
    use chrono::NaiveDate;

    fn txn(id: &str, pence: i64) -> Transaction {
        let created = NaiveDate::from_ymd_opt(2025, 7, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Transaction::new(id, created, Money::from_pence(pence))
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("paid", 120_000),
            txn("failed", 59_000).with_status(PaymentStatus::Other("Failed".into())),
            txn("test", 50),
            txn("one-pound", 100),
            txn("refunded", 59_000).with_refunded(Money::from_units(590)),
            txn("partial-refund", 199_000).with_refunded(Money::from_units(100)),
            txn("paid-2", 59_000),
        ]
    }

    #[test]
    fn test_apply() {
        let filter = EligibilityFilter::new(Money::from_units(1));
        let (kept, stats) = filter.apply(&sample());

        let ids: Vec<&str> = kept.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["paid", "paid-2"]);
        assert_eq!(
            stats,
            FilterStats {
                kept: 2,
                not_paid: 1,
                test_amount: 2,
                refunded: 2,
            }
        );
        assert_eq!(stats.excluded(), 5);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = EligibilityFilter::new(Money::from_units(1));
        let (once, _) = filter.apply(&sample());
        let (twice, stats) = filter.apply(&once);
        assert_eq!(once, twice);
        assert_eq!(stats.excluded(), 0);
    }

    #[test]
    fn test_failing_several_checks_counted_once() {
        let filter = EligibilityFilter::new(Money::from_units(1));
        let bad = txn("all-bad", 50)
            .with_status(PaymentStatus::Other("Refunded".into()))
            .with_refunded(Money::from_pence(50));
        assert!(!filter.is_eligible(&bad));
        let (_, stats) = filter.apply(&[bad]);
        assert_eq!(stats.excluded(), 1);
    }
}
