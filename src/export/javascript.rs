//! JavaScript literal rendering of the performance export
//!
//! Prints one `performance_<year>` property per year, in the object-literal
//! syntax of the downstream data file, so the block can be pasted in as is.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{ReportError, ReportResult};
use crate::models::Money;

use super::performance::{MonthActual, PerformanceExport};

const BREAKDOWN_INDENT: &str = "      ";

/// Render the export as JavaScript object properties
pub fn render_performance_js(export: &PerformanceExport) -> ReportResult<String> {
    let mut output = String::from("// Performance data from Stripe export\n");

    for (year, actuals) in export.years() {
        output.push_str(&format!("\n// {} Actuals\n", year));
        output.push_str(&format!("performance_{}: {{\n", year));
        output.push_str("  actuals: {\n");
        for (month, actual) in actuals.iter() {
            output.push_str(&format!("    {}: {{\n", month));
            output.push_str(&render_month(actual)?);
            output.push_str("    },\n");
        }
        output.push_str("  }\n");
        output.push_str("},\n");
    }

    Ok(output)
}

fn render_month(actual: &MonthActual) -> ReportResult<String> {
    Ok(format!(
        "      patients: {},\n      revenue: {},\n      status: '{}',\n      breakdown: {}\n",
        actual.patients,
        js_amount(actual.revenue),
        actual.status.as_str(),
        render_breakdown(actual)?
    ))
}

/// Plain decimal with two places ("1790.00"), no symbol or separators
fn js_amount(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.units().abs(), amount.pence_part())
}

/// Pretty JSON object, continuation lines indented under `breakdown:`
fn render_breakdown(actual: &MonthActual) -> ReportResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"  "));
    actual.breakdown.serialize(&mut serializer)?;
    let json = String::from_utf8(buf).map_err(|e| ReportError::Export(e.to_string()))?;

    Ok(json
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                line.to_string()
            } else {
                format!("{}{}", BREAKDOWN_INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
