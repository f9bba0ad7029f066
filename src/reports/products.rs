//! Product Breakdown
//!
//! Units and revenue per product within each month.

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::display::truncate;
use crate::models::{Money, MonthPeriod};

use super::ClassifiedTransaction;

const NAME_WIDTH: usize = 40;

/// One product's sales in a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub name: String,
    pub units: usize,
    pub revenue: Money,
}

/// Products sold in a month, highest revenue first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthProducts {
    pub period: MonthPeriod,
    pub rows: Vec<ProductRow>,
}

/// Per-month product breakdown in chronological order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductBreakdown {
    months: Vec<MonthProducts>,
}

impl ProductBreakdown {
    pub fn generate(transactions: &[ClassifiedTransaction]) -> Self {
        let mut grouped: BTreeMap<MonthPeriod, BTreeMap<&str, (usize, Money)>> = BTreeMap::new();
        for classified in transactions {
            let entry = grouped
                .entry(classified.period())
                .or_default()
                .entry(classified.product.name.as_ref())
                .or_insert((0, Money::zero()));
            entry.0 += 1;
            entry.1 += classified.amount();
        }

        let months = grouped
            .into_iter()
            .map(|(period, products)| {
                let mut rows: Vec<ProductRow> = products
                    .into_iter()
                    .map(|(name, (units, revenue))| ProductRow {
                        name: name.to_string(),
                        units,
                        revenue,
                    })
                    .collect();
                // Names are already ascending; stable sort keeps that for ties
                rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
                MonthProducts { period, rows }
            })
            .collect();

        Self { months }
    }

    pub fn months(&self) -> &[MonthProducts] {
        &self.months
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        for month in &self.months {
            output.push_str(&format!("\n--- {} ---\n", month.period));
            for row in &month.rows {
                output.push_str(&format!(
                    "  {:<40} | {:>4} units | {:>11}\n",
                    truncate(&row.name, NAME_WIDTH),
                    row.units,
                    settings.money(row.revenue)
                ));
            }
        }

        output
    }
}
