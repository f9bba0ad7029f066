//! Category Summary
//!
//! All-time revenue per product category.

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::{Money, ProductCategory};

use super::ClassifiedTransaction;

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: ProductCategory,
    pub transaction_count: usize,
    pub revenue: Money,
}

impl CategoryRow {
    /// Average revenue per transaction
    pub fn average(&self) -> Money {
        self.revenue.average(self.transaction_count)
    }
}

/// Category totals, highest revenue first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySummary {
    rows: Vec<CategoryRow>,
}

impl CategorySummary {
    pub fn generate(transactions: &[ClassifiedTransaction]) -> Self {
        let mut totals: BTreeMap<ProductCategory, (Money, usize)> = BTreeMap::new();
        for classified in transactions {
            let entry = totals
                .entry(classified.product.category)
                .or_insert((Money::zero(), 0));
            entry.0 += classified.amount();
            entry.1 += 1;
        }

        let mut rows: Vec<CategoryRow> = totals
            .into_iter()
            .map(|(category, (revenue, transaction_count))| CategoryRow {
                category,
                transaction_count,
                revenue,
            })
            .collect();

        // Stable sort keeps category order among equal revenues
        rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));

        Self { rows }
    }

    pub fn rows(&self) -> &[CategoryRow] {
        &self.rows
    }

    /// Format the category table for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<20} | {:>8} | {:>15} | {:>10}\n",
            "Category", "Count", "Revenue", "Avg"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} | {:>8} | {:>15} | {:>10}\n",
                row.category.as_str(),
                row.transaction_count,
                settings.money(row.revenue),
                settings.money(row.average())
            ));
        }

        output
    }
}
