//! Hadiya Model (tutor honorarium payments)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::center::CenterRef;

/// Payment record, unique per (tutor, month, year) on the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HadiyaRecord {
    /// Tutor reference; omitted when nested under a report row
    #[serde(default, alias = "tutor")]
    pub tutor_id: Option<String>,
    /// 1-based month
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub amount_paid: Decimal,
    /// ISO-8601 timestamp set by the server
    #[serde(default)]
    pub date_paid: Option<String>,
}

impl HadiyaRecord {
    pub fn is_for_period(&self, month: u32, year: i32) -> bool {
        self.month == month && self.year == year
    }
}

/// One report row: a tutor and their payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorHadiyaSummary {
    pub tutor_id: String,
    pub tutor_name: String,
    pub assigned_center: Option<CenterRef>,
    pub assigned_hadiya_amount: Option<Decimal>,
    #[serde(default)]
    pub hadiya_records: Vec<HadiyaRecord>,
}

impl TutorHadiyaSummary {
    /// Assigned amount, zero when unset
    pub fn assigned_amount(&self) -> Decimal {
        self.assigned_hadiya_amount.unwrap_or_default()
    }

    /// Center name for display, `N/A` when unknown
    pub fn center_name(&self) -> &str {
        self.assigned_center
            .as_ref()
            .and_then(|c| c.name())
            .unwrap_or("N/A")
    }

    /// Existing record for the given period
    pub fn record_for(&self, month: u32, year: i32) -> Option<&HadiyaRecord> {
        self.hadiya_records
            .iter()
            .find(|r| r.is_for_period(month, year))
    }
}

/// `GET /api/hadiya/report` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HadiyaReport {
    #[serde(default)]
    pub report: Vec<TutorHadiyaSummary>,
    /// Server-side total; the portal recomputes its own from drafts
    #[serde(default)]
    pub grand_total_paid: Decimal,
}

/// Report filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HadiyaReportQuery {
    pub month: u32,
    pub year: i32,
    pub center_id: Option<String>,
    pub tutor_name: Option<String>,
}

/// `POST /api/hadiya/record` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordHadiyaPayment {
    pub tutor_id: String,
    pub month: u32,
    pub year: i32,
    pub amount_paid: Decimal,
    /// True when a record already exists for the period
    pub update: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_row_defaults() {
        let json = r#"{
            "report": [{
                "tutorId": "t-0001",
                "tutorName": "Bilal",
                "assignedHadiyaAmount": null,
                "hadiyaRecords": [{"month": 3, "year": 2025, "amountPaid": 1200, "datePaid": "2025-03-31T10:00:00.000Z"}]
            }],
            "grandTotalPaid": 1200
        }"#;
        let report: HadiyaReport = serde_json::from_str(json).unwrap();
        let row = &report.report[0];
        assert_eq!(row.assigned_amount(), Decimal::ZERO);
        assert_eq!(row.center_name(), "N/A");
        assert!(row.record_for(3, 2025).is_some());
        assert!(row.record_for(4, 2025).is_none());
        assert_eq!(report.grand_total_paid, Decimal::from(1200));
    }

    #[test]
    fn test_record_payload_wire_names() {
        let payload = RecordHadiyaPayment {
            tutor_id: "t-1".into(),
            month: 6,
            year: 2025,
            amount_paid: Decimal::from(500),
            update: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["tutorId"], "t-1");
        assert_eq!(json["amountPaid"], 500.0);
        assert_eq!(json["update"], true);
    }
}
