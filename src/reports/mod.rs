//! Reports module for the revenue report
//!
//! Filters the export down to revenue-bearing transactions, classifies each
//! one, and aggregates by month, category and product.

pub mod category;
pub mod monthly;
pub mod products;
pub mod revenue;

pub use category::{CategoryRow, CategorySummary};
pub use monthly::{MonthlyBucket, MonthlySummary};
pub use products::{MonthProducts, ProductBreakdown, ProductRow};
pub use revenue::RevenueReport;

use chrono::NaiveDate;
use tracing::info;

use crate::classifier::Classifier;
use crate::export::PerformanceExport;
use crate::models::{Money, MonthPeriod, ProductDescriptor, Transaction};
use crate::services::{EligibilityFilter, FilterStats};

/// A transaction annotated with the product it was identified as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTransaction {
    pub transaction: Transaction,
    pub product: ProductDescriptor,
}

impl ClassifiedTransaction {
    pub fn amount(&self) -> Money {
        self.transaction.amount
    }

    pub fn period(&self) -> MonthPeriod {
        self.transaction.period()
    }
}

/// Everything derived from one export
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Eligible transactions with their products, in input order
    pub filtered: Vec<ClassifiedTransaction>,
    /// What the filter dropped
    pub stats: FilterStats,
    pub monthly: MonthlySummary,
    pub categories: CategorySummary,
    pub products: ProductBreakdown,
    /// Nested record for the performance data file
    pub export: PerformanceExport,
}

impl Analysis {
    /// Filter, classify and aggregate a set of transactions
    pub fn generate(transactions: &[Transaction], classifier: &Classifier) -> Self {
        let filter = EligibilityFilter::new(classifier.test_threshold());
        let (eligible, stats) = filter.apply(transactions);

        let filtered: Vec<ClassifiedTransaction> = eligible
            .into_iter()
            .map(|transaction| {
                let product =
                    classifier.identify(transaction.amount, transaction.description.as_deref());
                ClassifiedTransaction {
                    transaction,
                    product,
                }
            })
            .collect();

        let unknown = filtered.iter().filter(|t| t.product.is_unknown()).count();
        info!(
            classified = filtered.len(),
            unknown, "classified transactions"
        );

        let monthly = MonthlySummary::generate(&filtered);
        let export = PerformanceExport::from_summary(&monthly);

        Self {
            categories: CategorySummary::generate(&filtered),
            products: ProductBreakdown::generate(&filtered),
            filtered,
            stats,
            monthly,
            export,
        }
    }

    pub fn total_revenue(&self) -> Money {
        self.filtered.iter().map(|t| t.amount()).sum()
    }

    /// Earliest and latest transaction dates among the eligible set
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self.filtered.iter().map(|t| t.transaction.created.date());
        let first = dates.clone().min()?;
        let last = dates.max()?;
        Some((first, last))
    }
}

/// Analyze transactions with the standard catalog
pub fn analyze(transactions: &[Transaction]) -> Analysis {
    Analysis::generate(transactions, &Classifier::default())
}
