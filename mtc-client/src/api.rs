//! Typed backend endpoints
//!
//! Thin wrappers over an [`HttpClient`] transport; each method maps to one
//! backend route.

use shared::models::{
    Center, HadiyaReport, HadiyaReportQuery, NewTutor, RecordHadiyaPayment, TutorRecord,
};

use crate::client::HttpClient;
use crate::error::ClientResult;

/// Build the report path with its query string
///
/// `centerId` is omitted when empty; `tutorName` is trimmed and omitted when
/// blank.
pub fn hadiya_report_path(query: &HadiyaReportQuery) -> String {
    let mut path = format!(
        "/api/hadiya/report?month={}&year={}",
        query.month, query.year
    );
    if let Some(center_id) = query.center_id.as_deref().filter(|c| !c.is_empty()) {
        path.push_str(&format!("&centerId={}", urlencoding::encode(center_id)));
    }
    if let Some(name) = query
        .tutor_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    {
        path.push_str(&format!("&tutorName={}", urlencoding::encode(name)));
    }
    path
}

/// Tuition-center backend API
#[derive(Debug, Clone)]
pub struct MtcApi<C> {
    client: C,
}

impl<C: HttpClient> MtcApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    // ========== Hadiya API ==========

    /// Per-period payment report with each tutor's record history
    pub async fn hadiya_report(&self, query: &HadiyaReportQuery) -> ClientResult<HadiyaReport> {
        self.client.get(&hadiya_report_path(query)).await
    }

    /// Create or update the payment record for one tutor and period
    pub async fn record_hadiya_payment(
        &self,
        payment: &RecordHadiyaPayment,
    ) -> ClientResult<serde_json::Value> {
        self.client.post("/api/hadiya/record", payment).await
    }

    // ========== Center API ==========

    pub async fn list_centers(&self) -> ClientResult<Vec<Center>> {
        self.client.get("/api/centers").await
    }

    // ========== Tutor API ==========

    pub async fn create_tutor(&self, tutor: &NewTutor) -> ClientResult<TutorRecord> {
        self.client.post("/api/tutors", tutor).await
    }

    pub async fn get_tutor(&self, id: &str) -> ClientResult<TutorRecord> {
        self.client
            .get(&format!("/api/tutors/{}", urlencoding::encode(id)))
            .await
    }
}
