//! Monthly Summary
//!
//! Revenue, transaction count and product units per calendar month.

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::{Money, MonthPeriod};

use super::ClassifiedTransaction;

/// Aggregates for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// The month
    pub period: MonthPeriod,
    /// Number of transactions
    pub transaction_count: usize,
    /// Summed revenue
    pub revenue: Money,
    /// Units sold per product name
    pub product_counts: BTreeMap<String, usize>,
}

impl MonthlyBucket {
    fn new(period: MonthPeriod) -> Self {
        Self {
            period,
            transaction_count: 0,
            revenue: Money::zero(),
            product_counts: BTreeMap::new(),
        }
    }
}

/// Monthly buckets in chronological order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySummary {
    buckets: Vec<MonthlyBucket>,
}

impl MonthlySummary {
    /// Group classified transactions by calendar month
    pub fn generate(transactions: &[ClassifiedTransaction]) -> Self {
        let mut by_month: BTreeMap<MonthPeriod, MonthlyBucket> = BTreeMap::new();

        for classified in transactions {
            let period = classified.period();
            let bucket = by_month
                .entry(period)
                .or_insert_with(|| MonthlyBucket::new(period));
            bucket.transaction_count += 1;
            bucket.revenue += classified.amount();
            *bucket
                .product_counts
                .entry(classified.product.name.to_string())
                .or_insert(0) += 1;
        }

        Self {
            buckets: by_month.into_values().collect(),
        }
    }

    pub fn buckets(&self) -> &[MonthlyBucket] {
        &self.buckets
    }

    pub fn get(&self, period: MonthPeriod) -> Option<&MonthlyBucket> {
        self.buckets.iter().find(|bucket| bucket.period == period)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total_revenue(&self) -> Money {
        self.buckets.iter().map(|bucket| bucket.revenue).sum()
    }

    pub fn total_transactions(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.transaction_count).sum()
    }

    /// Format the summary table for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<12} | {:>12} | {:>15}\n",
            "Month", "Transactions", "Revenue"
        ));
        output.push_str(&"-".repeat(45));
        output.push('\n');

        for bucket in &self.buckets {
            output.push_str(&format!(
                "{:<12} | {:>12} | {:>15}\n",
                bucket.period.to_string(),
                bucket.transaction_count,
                settings.money(bucket.revenue)
            ));
        }

        output
    }
}
