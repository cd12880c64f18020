//! CSV export of the current drafts

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::TutorHadiyaSummary;

use super::draft::{Drafts, PaymentDraft, grand_total};
use super::period::Period;
use crate::core::{PortalError, PortalResult};

pub const CSV_HEADERS: [&str; 9] = [
    "Tutor ID",
    "Tutor Name",
    "Assigned Center",
    "Assigned Hadiya Amount",
    "Month",
    "Year",
    "Amount Paid",
    "Payment Status",
    "Date Paid",
];

/// A rendered export, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
    /// Tutor rows written, excluding header and total
    pub rows: usize,
}

impl CsvExport {
    /// Write into `dir`, returning the full path
    pub fn write_to(&self, dir: &Path) -> PortalResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }
}

pub fn file_name(period: Period) -> String {
    format!("hadiya_report_{}_{}.csv", period.month, period.year)
}

fn amount_text(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Payment date for a paid row: the server's date when known, else today
fn date_paid(row: &TutorHadiyaSummary, period: Period, exported_on: NaiveDate) -> String {
    row.record_for(period.month, period.year)
        .and_then(|r| r.date_paid.as_deref())
        .and_then(|d| d.get(..10))
        .map(String::from)
        .unwrap_or_else(|| exported_on.format("%Y-%m-%d").to_string())
}

/// Render one row per tutor plus a trailing grand total row
///
/// Rows reflect the drafts, not server state. A tutor without a draft
/// exports as pending.
pub fn render(
    report: &[TutorHadiyaSummary],
    drafts: &Drafts,
    period: Period,
    exported_on: NaiveDate,
) -> PortalResult<CsvExport> {
    if report.is_empty() {
        return Err(PortalError::NothingToExport);
    }

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADERS)?;

    let month = period.month.to_string();
    let year = period.year.to_string();

    for row in report {
        let paid = drafts
            .get(&row.tutor_id)
            .filter(|d| d.is_paid())
            .map(PaymentDraft::effective_amount);

        let (amount, status, date) = match paid {
            Some(amount) => (
                amount_text(amount),
                "Paid",
                date_paid(row, period, exported_on),
            ),
            None => ("Not Paid".to_string(), "Pending", String::new()),
        };
        let assigned = row
            .assigned_hadiya_amount
            .map(amount_text)
            .unwrap_or_default();

        wtr.write_record([
            row.tutor_id.as_str(),
            row.tutor_name.as_str(),
            row.center_name(),
            assigned.as_str(),
            month.as_str(),
            year.as_str(),
            amount.as_str(),
            status,
            date.as_str(),
        ])?;
    }

    let total = amount_text(grand_total(drafts));
    wtr.write_record(["GRAND TOTAL", "", "", "", "", "", total.as_str(), "TOTAL", ""])?;

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    let contents =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(CsvExport {
        file_name: file_name(period),
        contents,
        rows: report.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::hadiya::draft::{PaymentStatus, build_drafts};
    use shared::models::{Center, CenterRef, HadiyaRecord};

    fn row(id: &str, name: &str, assigned: i64, records: Vec<HadiyaRecord>) -> TutorHadiyaSummary {
        TutorHadiyaSummary {
            tutor_id: id.into(),
            tutor_name: name.into(),
            assigned_center: Some(CenterRef::Populated(Center {
                id: "c1".into(),
                name: "Central".into(),
            })),
            assigned_hadiya_amount: Some(Decimal::from(assigned)),
            hadiya_records: records,
        }
    }

    fn export_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()
    }

    #[test]
    fn test_empty_report_has_nothing_to_export() {
        let period = Period::new(6, 2025).unwrap();
        let result = render(&[], &Drafts::new(), period, export_date());
        assert!(matches!(result, Err(PortalError::NothingToExport)));
    }

    #[test]
    fn test_rows_and_total() {
        let period = Period::new(6, 2025).unwrap();
        let report = vec![
            row(
                "t-1",
                "Aisha",
                2000,
                vec![HadiyaRecord {
                    tutor_id: None,
                    month: 6,
                    year: 2025,
                    amount_paid: Decimal::from(2000),
                    date_paid: Some("2025-06-30T09:00:00.000Z".into()),
                }],
            ),
            row("t-2", "Omar, Jr.", 1500, vec![]),
            row("t-3", "Zaid", 1000, vec![]),
        ];
        let mut drafts = build_drafts(&report, 6, 2025);
        if let Some(d) = drafts.get_mut("t-3") {
            d.set_status(PaymentStatus::Paid, Decimal::from(1000)).unwrap();
        }

        let export = render(&report, &drafts, period, export_date()).unwrap();
        assert_eq!(export.file_name, "hadiya_report_6_2025.csv");
        assert_eq!(export.row_count(), 3);

        let lines: Vec<&str> = export.contents.lines().collect();
        assert_eq!(
            lines[0],
            "Tutor ID,Tutor Name,Assigned Center,Assigned Hadiya Amount,Month,Year,Amount Paid,Payment Status,Date Paid"
        );
        assert_eq!(lines[1], "t-1,Aisha,Central,2000,6,2025,2000,Paid,2025-06-30");
        assert_eq!(lines[2], "t-2,\"Omar, Jr.\",Central,1500,6,2025,Not Paid,Pending,");
        assert_eq!(lines[3], "t-3,Zaid,Central,1000,6,2025,1000,Paid,2025-07-02");
        assert_eq!(lines[4], "GRAND TOTAL,,,,,,3000,TOTAL,");
    }

    #[test]
    fn test_row_count_ignores_embedded_newlines() {
        let period = Period::new(6, 2025).unwrap();
        let report = vec![row("t-9", "Noor\nul Huda", 1000, vec![])];
        let drafts = build_drafts(&report, 6, 2025);

        let export = render(&report, &drafts, period, export_date()).unwrap();
        assert_eq!(export.row_count(), 1);
        assert!(export.contents.contains("\"Noor\nul Huda\""));
    }

    #[test]
    fn test_write_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let export = CsvExport {
            file_name: "hadiya_report_1_2024.csv".into(),
            contents: "a,b\n".into(),
            rows: 0,
        };
        let path = export.write_to(&dir.path().join("out")).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a,b\n");
    }
}
