//! Performance data export
//!
//! Monthly actuals keyed by year, then by lower-case month name, shaped to
//! drop straight into the hand-maintained performance data file:
//!
//! ```text
//! { "2025": { "july": { "patients": 2, "revenue": 1790.0,
//!                        "status": "actual", "breakdown": { ... } } } }
//! ```

use std::collections::BTreeMap;
use std::io::Write;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::ReportResult;
use crate::models::period::month_name;
use crate::models::Money;
use crate::reports::MonthlySummary;

/// Record status; exports only ever carry actuals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Actual,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actual => "actual",
        }
    }
}

/// One month of actuals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthActual {
    /// Transaction count
    pub patients: usize,
    /// Revenue in currency units, two decimal places
    #[serde(serialize_with = "serialize_units")]
    pub revenue: Money,
    pub status: RecordStatus,
    /// Units per product name
    pub breakdown: BTreeMap<String, usize>,
}

fn serialize_units<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(amount.as_units_f64())
}

/// Months of one year, in calendar order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearActuals {
    months: BTreeMap<u32, MonthActual>,
}

impl YearActuals {
    /// (month name, actuals) in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &MonthActual)> {
        self.months
            .iter()
            .map(|(month, actual)| (month_name(*month), actual))
    }

    pub fn get(&self, name: &str) -> Option<&MonthActual> {
        self.iter()
            .find(|(month, _)| *month == name)
            .map(|(_, actual)| actual)
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

impl Serialize for YearActuals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.months.len()))?;
        for (name, actual) in self.iter() {
            map.serialize_entry(name, actual)?;
        }
        map.end()
    }
}

/// The full export: year → month name → actuals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PerformanceExport {
    years: BTreeMap<i32, YearActuals>,
}

impl PerformanceExport {
    /// Build the export from the monthly buckets
    pub fn from_summary(summary: &MonthlySummary) -> Self {
        let mut years: BTreeMap<i32, YearActuals> = BTreeMap::new();
        for bucket in summary.buckets() {
            years.entry(bucket.period.year).or_default().months.insert(
                bucket.period.month,
                MonthActual {
                    patients: bucket.transaction_count,
                    revenue: bucket.revenue,
                    status: RecordStatus::Actual,
                    breakdown: bucket.product_counts.clone(),
                },
            );
        }
        Self { years }
    }

    /// Years in ascending order
    pub fn years(&self) -> impl Iterator<Item = (i32, &YearActuals)> {
        self.years.iter().map(|(year, actuals)| (*year, actuals))
    }

    pub fn year(&self, year: i32) -> Option<&YearActuals> {
        self.years.get(&year)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Write the export as pretty-printed JSON
    pub fn write_json<W: Write>(&self, writer: &mut W) -> ReportResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::tests::classified;
    use serde_json::json;

    fn export() -> PerformanceExport {
        let transactions = vec![
            classified("a", 2025, 12, 3, 120_000, None),
            classified("b", 2025, 7, 21, 59_000, None),
            classified("c", 2025, 7, 22, 120_000, None),
            classified("d", 2026, 1, 5, 29_500, None),
        ];
        PerformanceExport::from_summary(&MonthlySummary::generate(&transactions))
    }

    #[test]
    fn test_shape() {
        let value = serde_json::to_value(export()).unwrap();
        assert_eq!(
            value["2025"]["july"],
            json!({
                "patients": 2,
                "revenue": 1790.0,
                "status": "actual",
                "breakdown": {
                    "ADHD Assessment Only": 1,
                    "ADHD Complete Care Package": 1
                }
            })
        );
        assert_eq!(value["2026"]["january"]["revenue"], json!(295.0));
    }

    #[test]
    fn test_months_in_calendar_order() {
        let export = export();
        let months: Vec<&str> = export
            .year(2025)
            .unwrap()
            .iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(months, vec!["july", "december"]);

        let mut out = Vec::new();
        export.write_json(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.find("\"july\"").unwrap() < text.find("\"december\"").unwrap());
    }

    #[test]
    fn test_get_by_name() {
        let export = export();
        let december = export.year(2025).unwrap().get("december").unwrap();
        assert_eq!(december.patients, 1);
        assert_eq!(december.revenue, Money::from_units(1200));
        assert!(export.year(2024).is_none());
    }
}
