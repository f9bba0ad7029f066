//! CSV import service
//!
//! Loads a payment-processor export into `Transaction`s. Columns are located
//! by header name; a missing column or an unparseable cell aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{ReportError, ReportResult};
use crate::models::{Money, PaymentStatus, Transaction};

pub const CREATED_COLUMN: &str = "Created date (UTC)";
pub const STATUS_COLUMN: &str = "Status";
pub const AMOUNT_COLUMN: &str = "Amount";
pub const REFUNDED_COLUMN: &str = "Amount Refunded";
pub const DESCRIPTION_COLUMN: &str = "Description";
pub const ID_COLUMN: &str = "id";

/// Timestamp formats tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Column positions of the fields we read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub created_column: usize,
    pub status_column: usize,
    pub amount_column: usize,
    pub refunded_column: usize,
    pub description_column: usize,
    pub id_column: usize,
}

impl ColumnMapping {
    /// Locate every required column in the header row
    ///
    /// Header names match case-insensitively after trimming; extra columns
    /// are ignored.
    pub fn from_headers(headers: &StringRecord) -> ReportResult<Self> {
        let find = |name: &str| -> ReportResult<usize> {
            headers
                .iter()
                .position(|header| {
                    header
                        .trim_start_matches('\u{feff}')
                        .trim()
                        .eq_ignore_ascii_case(name)
                })
                .ok_or_else(|| ReportError::Schema(format!("missing column '{}'", name)))
        };

        Ok(Self {
            created_column: find(CREATED_COLUMN)?,
            status_column: find(STATUS_COLUMN)?,
            amount_column: find(AMOUNT_COLUMN)?,
            refunded_column: find(REFUNDED_COLUMN)?,
            description_column: find(DESCRIPTION_COLUMN)?,
            id_column: find(ID_COLUMN)?,
        })
    }
}

/// Load all transactions from an export file
pub fn load_transactions(path: &Path) -> ReportResult<Vec<Transaction>> {
    let file = File::open(path).map_err(|e| {
        ReportError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let transactions = parse_transactions(file)?;
    info!(
        path = %path.display(),
        count = transactions.len(),
        "loaded transactions"
    );
    Ok(transactions)
}

/// Parse transactions from any CSV reader with a header row
pub fn parse_transactions<R: Read>(reader: R) -> ReportResult<Vec<Transaction>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let mapping = ColumnMapping::from_headers(reader.headers()?)?;
    debug!(?mapping, "resolved export columns");

    let mut transactions = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        transactions.push(parse_record(&record, idx + 1, &mapping)?);
    }
    Ok(transactions)
}

/// Parse a single CSV record; `row` is the 1-based data row number
fn parse_record(
    record: &StringRecord,
    row: usize,
    mapping: &ColumnMapping,
) -> ReportResult<Transaction> {
    let field = |idx: usize, column: &'static str| cell(record, idx, row, column);

    let created = parse_timestamp(field(mapping.created_column, CREATED_COLUMN)?)
        .map_err(|message| ReportError::parse(row, CREATED_COLUMN, message))?;

    let status = PaymentStatus::parse(field(mapping.status_column, STATUS_COLUMN)?);

    let amount = Money::parse(field(mapping.amount_column, AMOUNT_COLUMN)?)
        .map_err(|e| ReportError::parse(row, AMOUNT_COLUMN, e.to_string()))?;

    // An empty refund cell means nothing was refunded
    let refunded_str = field(mapping.refunded_column, REFUNDED_COLUMN)?;
    let amount_refunded = if refunded_str.is_empty() {
        Money::zero()
    } else {
        Money::parse(refunded_str)
            .map_err(|e| ReportError::parse(row, REFUNDED_COLUMN, e.to_string()))?
    };

    let description = field(mapping.description_column, DESCRIPTION_COLUMN)?;
    let description = (!description.is_empty()).then(|| description.to_string());

    let id = field(mapping.id_column, ID_COLUMN)?.to_string();

    Ok(Transaction {
        id,
        created,
        status,
        amount,
        amount_refunded,
        description,
    })
}

fn cell<'r>(
    record: &'r StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> ReportResult<&'r str> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| ReportError::parse(row, column, "missing value"))
}

/// Parse a creation timestamp using multiple format attempts
///
/// Date-only values are taken as midnight.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    for format in DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(timestamp);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Ok(timestamp.naive_utc());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            if let Some(timestamp) = date.and_hms_opt(0, 0, 0) {
                return Ok(timestamp);
            }
        }
    }

    Err(format!("Could not parse date: '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthPeriod;

    const HEADER: &str = "id,Created date (UTC),Amount,Amount Refunded,Currency,Description,Status\n";

    #[test]
    fn test_parse_transactions() {
        let csv = format!(
            "{}{}{}",
            HEADER,
            "ch_1,2025-07-03 10:15:00,1200.00,0.00,gbp,,Paid\n",
            "ch_2,2025-07-19 16:40:12,\"1,990.00\",0,gbp,Premium ADHD package,Failed\n"
        );

        let transactions = parse_transactions(csv.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 2);

        let first = &transactions[0];
        assert_eq!(first.id, "ch_1");
        assert_eq!(first.amount, Money::from_units(1200));
        assert_eq!(first.description, None);
        assert!(first.status.is_paid());
        assert_eq!(first.period(), MonthPeriod::new(2025, 7));

        let second = &transactions[1];
        assert_eq!(second.amount, Money::from_units(1990));
        assert_eq!(second.description.as_deref(), Some("Premium ADHD package"));
        assert_eq!(second.status, PaymentStatus::Other("Failed".to_string()));
    }

    #[test]
    fn test_headers_match_case_insensitively() {
        let csv = "ID,created date (utc),AMOUNT,amount refunded,description,status\n\
                   ch_9,2025-08-01,590,,ADHD,paid\n";
        let transactions = parse_transactions(csv.as_bytes()).unwrap();
        assert_eq!(transactions[0].amount_refunded, Money::zero());
        assert!(transactions[0].status.is_paid());
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let csv = "id,Created date (UTC),Amount,Description,Status\nch_1,2025-07-03,1,,Paid\n";
        let err = parse_transactions(csv.as_bytes()).unwrap_err();
        assert!(err.is_schema());
        assert!(err.to_string().contains("Amount Refunded"));
    }

    #[test]
    fn test_bad_amount_is_fatal() {
        let csv = format!("{}ch_1,2025-07-03 10:15:00,twelve,0,gbp,,Paid\n", HEADER);
        let err = parse_transactions(csv.as_bytes()).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("row 1"));
        assert!(err.to_string().contains("'Amount'"));
    }

    #[test]
    fn test_malformed_amounts_are_parse_errors() {
        for amount in ["1.x€", "99999999999999999", "10.-5"] {
            let csv = format!("{}ch_1,2025-07-03 10:15:00,{},0,gbp,,Paid\n", HEADER, amount);
            let err = parse_transactions(csv.as_bytes()).unwrap_err();
            assert!(
                matches!(err, ReportError::Parse { row: 1, column: AMOUNT_COLUMN, .. }),
                "{}: {}",
                amount,
                err
            );
        }

        let csv = format!("{}ch_1,2025-07-03 10:15:00,590,5.x€,gbp,,Paid\n", HEADER);
        let err = parse_transactions(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::Parse { column: REFUNDED_COLUMN, .. }));
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let csv = format!("{}ch_1,yesterday,590,0,gbp,,Paid\n", HEADER);
        let err = parse_transactions(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Parse {
                column: CREATED_COLUMN,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 7, 3)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2025-07-03 10:15:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-07-03 10:15").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-07-03T10:15:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-07-03T10:15:00Z").unwrap(), expected);
        assert_eq!(parse_timestamp("03/07/2025 10:15").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2025-07-03").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 3).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert!(parse_timestamp("not a date").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_transactions(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
