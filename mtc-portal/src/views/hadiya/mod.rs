//! Hadiya (honorarium) payment report
//!
//! Fetches the report for a period and filters, keeps per-tutor drafts the
//! admin edits and confirms, saves them in bulk and exports CSV.

pub mod draft;
pub mod export;
pub mod period;

use chrono::NaiveDate;
use futures::future::join_all;
use rust_decimal::Decimal;
use shared::models::{
    Center, HadiyaReport, HadiyaReportQuery, RecordHadiyaPayment, TutorHadiyaSummary,
};

use mtc_client::{HttpClient, MtcApi};

use crate::core::{Notifications, PortalError, PortalResult};
use crate::utils::money::format_amount;

pub use draft::{AmountRejection, Drafts, PaymentDraft, PaymentStatus};
pub use export::CsvExport;
pub use period::Period;

const FETCH_FALLBACK: &str = "Failed to fetch Hadiya report.";

/// Outcome of a bulk save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub succeeded: usize,
    pub failed: usize,
}

pub struct HadiyaReportView<C> {
    api: MtcApi<C>,
    period: Period,
    center_id: Option<String>,
    tutor_name: String,
    report: HadiyaReport,
    drafts: Drafts,
    centers: Vec<Center>,
    error: Option<String>,
    loading: bool,
    saving: bool,
    notifications: Notifications,
}

impl<C: HttpClient> HadiyaReportView<C> {
    pub fn new(api: MtcApi<C>, period: Period) -> Self {
        Self {
            api,
            period,
            center_id: None,
            tutor_name: String::new(),
            report: HadiyaReport::default(),
            drafts: Drafts::new(),
            centers: Vec::new(),
            error: None,
            loading: false,
            saving: false,
            notifications: Notifications::new(),
        }
    }

    /// Initial filters, applied without fetching
    pub fn with_filters(mut self, center_id: Option<String>, tutor_name: impl Into<String>) -> Self {
        self.center_id = center_id.filter(|c| !c.is_empty());
        self.tutor_name = tutor_name.into();
        self
    }

    /// Load filter options and the first report
    pub async fn init(&mut self) {
        self.load_centers().await;
        // Failure is already surfaced through `error()` and a toast
        let _ = self.reload().await;
    }

    // ========== Filters ==========

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn center_filter(&self) -> Option<&str> {
        self.center_id.as_deref()
    }

    pub fn tutor_name_filter(&self) -> &str {
        &self.tutor_name
    }

    fn query(&self) -> HadiyaReportQuery {
        HadiyaReportQuery {
            month: self.period.month,
            year: self.period.year,
            center_id: self.center_id.clone(),
            tutor_name: Some(self.tutor_name.clone()),
        }
    }

    /// Change the period and refetch when it differs
    pub async fn set_period(&mut self, month: u32, year: i32) -> PortalResult<()> {
        let period = Period::new(month, year)?;
        if period != self.period {
            self.period = period;
            self.reload().await?;
        }
        Ok(())
    }

    /// Filter by center; `None` or empty shows all centers
    pub async fn set_center_filter(&mut self, center_id: Option<String>) -> PortalResult<()> {
        let center_id = center_id.filter(|c| !c.is_empty());
        if center_id != self.center_id {
            self.center_id = center_id;
            self.reload().await?;
        }
        Ok(())
    }

    /// Search by tutor name; surrounding spaces are not significant
    pub async fn set_tutor_name_filter(&mut self, name: impl Into<String>) -> PortalResult<()> {
        let name = name.into();
        if name.trim() != self.tutor_name.trim() {
            self.tutor_name = name;
            self.reload().await?;
        }
        Ok(())
    }

    // ========== Loading ==========

    /// Center options for the filter; failure only raises a toast
    pub async fn load_centers(&mut self) {
        match self.api.list_centers().await {
            Ok(centers) => self.centers = centers,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching centers");
                self.notifications
                    .error("Could not load centers for filtering.");
            }
        }
    }

    /// Fetch the report and rebuild drafts
    ///
    /// On failure the previous report and drafts stay in place.
    pub async fn reload(&mut self) -> PortalResult<()> {
        self.loading = true;
        self.error = None;
        let query = self.query();
        let result = self.api.hadiya_report(&query).await;
        self.loading = false;

        match result {
            Ok(report) => {
                tracing::debug!(
                    month = query.month,
                    year = query.year,
                    rows = report.report.len(),
                    "Hadiya report loaded"
                );
                self.drafts = draft::build_drafts(&report.report, query.month, query.year);
                self.report = report;
                Ok(())
            }
            Err(e) => {
                let message = match e.message() {
                    m if m.trim().is_empty() => FETCH_FALLBACK.to_string(),
                    m => m,
                };
                self.error = Some(message.clone());
                self.notifications.error(message);
                Err(e.into())
            }
        }
    }

    // ========== Accessors ==========

    pub fn rows(&self) -> &[TutorHadiyaSummary] {
        &self.report.report
    }

    pub fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    pub fn draft(&self, tutor_id: &str) -> Option<&PaymentDraft> {
        self.drafts.get(tutor_id)
    }

    pub fn centers(&self) -> &[Center] {
        &self.centers
    }

    /// Inline error from the last fetch
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Grand total of paid drafts
    pub fn grand_total(&self) -> Decimal {
        draft::grand_total(&self.drafts)
    }

    fn assigned_amount(&self, tutor_id: &str) -> PortalResult<Decimal> {
        self.report
            .report
            .iter()
            .find(|r| r.tutor_id == tutor_id)
            .map(TutorHadiyaSummary::assigned_amount)
            .ok_or_else(|| PortalError::UnknownTutor(tutor_id.to_string()))
    }

    fn draft_mut(&mut self, tutor_id: &str) -> PortalResult<&mut PaymentDraft> {
        self.drafts
            .get_mut(tutor_id)
            .ok_or_else(|| PortalError::UnknownTutor(tutor_id.to_string()))
    }

    // ========== Editing ==========

    /// Record typed amount text; ignored while the draft is Paid
    pub fn set_amount_input(&mut self, tutor_id: &str, text: impl Into<String>) -> PortalResult<()> {
        let draft = self.draft_mut(tutor_id)?;
        if !draft.is_paid() {
            draft.amount_input = text.into();
        }
        Ok(())
    }

    /// Confirm the typed amount; returns whether it was accepted
    pub fn confirm_amount(&mut self, tutor_id: &str) -> PortalResult<bool> {
        let assigned = self.assigned_amount(tutor_id)?;
        let result = self.draft_mut(tutor_id)?.confirm(assigned);
        match result {
            Ok(amount) => {
                self.notifications
                    .success(format!("Payment of ₹{} confirmed", format_amount(amount)));
                Ok(true)
            }
            Err(rejection) => {
                self.notifications.error(rejection.to_string());
                Ok(false)
            }
        }
    }

    /// Toggle a draft's status; returns whether the change applied
    pub fn set_status(&mut self, tutor_id: &str, status: PaymentStatus) -> PortalResult<bool> {
        let assigned = self.assigned_amount(tutor_id)?;
        match self.draft_mut(tutor_id)?.set_status(status, assigned) {
            Ok(()) => Ok(true),
            Err(rejection) => {
                self.notifications.error(rejection.to_string());
                Ok(false)
            }
        }
    }

    // ========== Saving ==========

    /// Post every draft concurrently and refetch if anything succeeded
    ///
    /// Each request settles independently; failures are tallied, not
    /// rolled back.
    pub async fn save_payments(&mut self) -> SaveSummary {
        let period = self.period;
        let payments: Vec<RecordHadiyaPayment> = self
            .drafts
            .iter()
            .map(|(tutor_id, draft)| RecordHadiyaPayment {
                tutor_id: tutor_id.clone(),
                month: period.month,
                year: period.year,
                amount_paid: draft.effective_amount(),
                update: draft.record_exists,
            })
            .collect();

        if payments.is_empty() {
            self.notifications.info("No payments to save.");
            return SaveSummary::default();
        }

        self.saving = true;
        let api = &self.api;
        let results = join_all(payments.iter().map(|p| api.record_hadiya_payment(p))).await;
        self.saving = false;

        let mut summary = SaveSummary::default();
        for (payment, result) in payments.iter().zip(results) {
            match result {
                Ok(_) => summary.succeeded += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!(tutor_id = %payment.tutor_id, error = %e, "Failed to record payment");
                    let id_tail: String = {
                        let chars: Vec<char> = payment.tutor_id.chars().collect();
                        chars[chars.len().saturating_sub(5)..].iter().collect()
                    };
                    let reason: String = e.message().chars().take(30).collect();
                    self.notifications
                        .error(format!("Failed for tutor {}: {}", id_tail, reason));
                }
            }
        }

        if summary.succeeded > 0 {
            self.notifications.success(format!(
                "{} payment(s) recorded successfully!",
                summary.succeeded
            ));
        }
        if summary.failed > 0 {
            self.notifications.error(format!(
                "{} payment(s) failed. Check logs for details.",
                summary.failed
            ));
        }
        if summary.succeeded > 0 {
            let _ = self.reload().await;
        }
        summary
    }

    // ========== Export ==========

    /// Render the current drafts as CSV
    pub fn export_csv(&mut self, exported_on: NaiveDate) -> PortalResult<CsvExport> {
        match export::render(&self.report.report, &self.drafts, self.period, exported_on) {
            Ok(export) => {
                self.notifications.success("CSV report exported successfully!");
                Ok(export)
            }
            Err(e) => {
                self.notifications.error(e.to_string());
                Err(e)
            }
        }
    }
}
