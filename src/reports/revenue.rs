//! Revenue Report
//!
//! The full text report: summary header, monthly table, product breakdown,
//! category summary and the performance data block.

use crate::config::Settings;
use crate::display::banner;
use crate::error::ReportResult;
use crate::export::render_performance_js;

use super::Analysis;

/// Text rendering of an `Analysis`
pub struct RevenueReport<'a> {
    analysis: &'a Analysis,
    settings: &'a Settings,
}

impl<'a> RevenueReport<'a> {
    pub fn new(analysis: &'a Analysis, settings: &'a Settings) -> Self {
        Self { analysis, settings }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> ReportResult<String> {
        let width = self.settings.report_width;
        let mut output = String::new();

        output.push_str(&banner("CLINIC REVENUE ANALYSIS REPORT", width));

        let Some((first, last)) = self.analysis.date_range() else {
            output.push_str("\nNo eligible transactions (paid, non-test, unrefunded) found.\n");
            output.push('\n');
            output.push_str(&banner("ANALYSIS COMPLETE", width));
            return Ok(output);
        };

        output.push_str(&format!(
            "\nData Range: {} to {}\n",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        ));
        output.push_str(&format!(
            "Total Paid Transactions (excl. tests/refunds): {}\n",
            self.analysis.filtered.len()
        ));
        output.push_str(&format!(
            "Total Revenue: {}\n",
            self.settings.money(self.analysis.total_revenue())
        ));

        output.push('\n');
        output.push_str(&banner("MONTHLY SUMMARY", width));
        output.push('\n');
        output.push_str(&self.analysis.monthly.format_terminal(self.settings));

        output.push('\n');
        output.push_str(&banner("PRODUCT BREAKDOWN BY MONTH", width));
        output.push_str(&self.analysis.products.format_terminal(self.settings));

        output.push('\n');
        output.push_str(&banner("CATEGORY SUMMARY (ALL TIME)", width));
        output.push('\n');
        output.push_str(&self.analysis.categories.format_terminal(self.settings));

        output.push('\n');
        output.push_str(&banner("PERFORMANCE DATA EXPORT", width));
        output.push('\n');
        output.push_str(&render_performance_js(&self.analysis.export)?);

        output.push('\n');
        output.push_str(&banner("ANALYSIS COMPLETE", width));

        Ok(output)
    }
}
