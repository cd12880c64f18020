//! New tutor registration form
//!
//! Holds the local draft, validates it, loads center options with the
//! admin's bearer token and posts the new tutor.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Center, NewTutor, SUBJECTS, SessionTiming, SessionType, TutorRecord};
use thiserror::Error;

use mtc_client::{ClientError, HttpClient, MtcApi, SessionProvider};

use crate::core::{Notifications, PortalError, PortalResult};

static PHONE_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$"));

fn is_valid_phone(phone: &str) -> bool {
    matches!(PHONE_PATTERN.as_ref(), Ok(re) if re.is_match(phone))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Password,
    Qualifications,
    AssignedCenter,
    Subjects,
    SessionType,
    SessionTiming,
    AssignedHadiyaAmount,
    AadharNumber,
    BankName,
    AccountNumber,
    BankBranch,
    IfscCode,
}

impl FormField {
    pub const ALL: [FormField; 15] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Password,
        Self::Qualifications,
        Self::AssignedCenter,
        Self::Subjects,
        Self::SessionType,
        Self::SessionTiming,
        Self::AssignedHadiyaAmount,
        Self::AadharNumber,
        Self::BankName,
        Self::AccountNumber,
        Self::BankBranch,
        Self::IfscCode,
    ];

    /// Wire/form key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::Qualifications => "qualifications",
            Self::AssignedCenter => "assignedCenter",
            Self::Subjects => "subjects",
            Self::SessionType => "sessionType",
            Self::SessionTiming => "sessionTiming",
            Self::AssignedHadiyaAmount => "assignedHadiyaAmount",
            Self::AadharNumber => "aadharNumber",
            Self::BankName => "bankName",
            Self::AccountNumber => "accountNumber",
            Self::BankBranch => "bankBranch",
            Self::IfscCode => "ifscCode",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Validation messages keyed by field
pub type FieldErrors = BTreeMap<FormField, String>;

/// Form contents as typed, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TutorDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub qualifications: String,
    pub assigned_center: String,
    pub subjects: Vec<String>,
    pub session_type: String,
    pub session_timing: String,
    pub assigned_hadiya_amount: String,
    pub aadhar_number: String,
    pub bank_name: String,
    pub account_number: String,
    pub bank_branch: String,
    pub ifsc_code: String,
}

impl TutorDraft {
    /// Merge partial initial values over the empty form
    pub fn from_initial(initial: serde_json::Value) -> PortalResult<Self> {
        Ok(serde_json::from_value(initial)?)
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        let value = value.to_string();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Password => self.password = value,
            FormField::Qualifications => self.qualifications = value,
            FormField::AssignedCenter => self.assigned_center = value,
            FormField::Subjects => {
                self.subjects = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            }
            FormField::SessionType => self.session_type = value,
            FormField::SessionTiming => self.session_timing = value,
            FormField::AssignedHadiyaAmount => self.assigned_hadiya_amount = value,
            FormField::AadharNumber => self.aadhar_number = value,
            FormField::BankName => self.bank_name = value,
            FormField::AccountNumber => self.account_number = value,
            FormField::BankBranch => self.bank_branch = value,
            FormField::IfscCode => self.ifsc_code = value,
        }
    }

    fn hadiya_amount(&self) -> Option<Decimal> {
        Decimal::from_str(self.assigned_hadiya_amount.trim())
            .ok()
            .filter(|a| *a > Decimal::ZERO)
    }

    /// Check every rule, collecting one message per failing field
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name is required.".into());
        }
        if !self.email.contains('@') {
            errors.insert(FormField::Email, "Valid email is required.".into());
        }
        if !is_valid_phone(&self.phone) {
            errors.insert(
                FormField::Phone,
                "Valid 10-digit phone number is required.".into(),
            );
        }
        if self.password.chars().count() < 6 {
            errors.insert(
                FormField::Password,
                "Password must be at least 6 characters.".into(),
            );
        }
        if self.assigned_center.is_empty() {
            errors.insert(FormField::AssignedCenter, "Assigned Center is required.".into());
        }
        if self.hadiya_amount().is_none() {
            errors.insert(
                FormField::AssignedHadiyaAmount,
                "Valid Hadiya amount is required.".into(),
            );
        }
        if self.subjects.is_empty() {
            errors.insert(
                FormField::Subjects,
                "At least one subject must be selected.".into(),
            );
        }
        if SessionType::from_code(&self.session_type).is_none() {
            errors.insert(FormField::SessionType, "Session type is required.".into());
        }
        if SessionTiming::from_code(&self.session_timing).is_none() {
            errors.insert(FormField::SessionTiming, "Session timing is required.".into());
        }

        errors
    }

    /// Validated creation payload
    pub fn to_payload(&self) -> Result<NewTutor, FieldErrors> {
        let errors = self.validate();
        let amount = match self.hadiya_amount() {
            Some(amount) if errors.is_empty() => amount,
            _ => return Err(errors),
        };
        Ok(NewTutor {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            password: self.password.clone(),
            qualifications: self.qualifications.trim().to_string(),
            assigned_center: self.assigned_center.clone(),
            subjects: self.subjects.clone(),
            session_type: self.session_type.clone(),
            session_timing: self.session_timing.clone(),
            assigned_hadiya_amount: amount,
            aadhar_number: self.aadhar_number.trim().to_string(),
            bank_name: self.bank_name.trim().to_string(),
            account_number: self.account_number.trim().to_string(),
            bank_branch: self.bank_branch.trim().to_string(),
            ifsc_code: self.ifsc_code.trim().to_uppercase(),
        })
    }
}

/// Why center options could not be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CentersError {
    #[error(
        "You are not logged in or your session expired. Please log in as admin to load centers."
    )]
    NotLoggedIn,
    #[error("Session expired or unauthorized. Please log in as admin again to load centers.")]
    Unauthorized,
    #[error("Failed to fetch centers. Please try again.")]
    FetchFailed,
    #[error("Error fetching centers. Please check your connection and try again.")]
    Connection,
}

impl CentersError {
    /// The admin has to log in again before a retry can succeed
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::NotLoggedIn | Self::Unauthorized)
    }

    fn from_client(err: &ClientError) -> Self {
        match err {
            ClientError::Unauthorized(_) => Self::Unauthorized,
            e if e.is_http_status() => Self::FetchFailed,
            _ => Self::Connection,
        }
    }
}

pub struct TutorOnboardingForm<C> {
    api: MtcApi<C>,
    session: Arc<dyn SessionProvider>,
    draft: TutorDraft,
    errors: FieldErrors,
    centers: Vec<Center>,
    centers_error: Option<CentersError>,
    submitting: bool,
    notifications: Notifications,
}

impl<C: HttpClient> TutorOnboardingForm<C> {
    /// `session` must be the provider the transport authenticates with
    pub fn new(api: MtcApi<C>, session: Arc<dyn SessionProvider>, initial: TutorDraft) -> Self {
        Self {
            api,
            session,
            draft: initial,
            errors: FieldErrors::new(),
            centers: Vec::new(),
            centers_error: None,
            submitting: false,
            notifications: Notifications::new(),
        }
    }

    pub fn draft(&self) -> &TutorDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn centers(&self) -> &[Center] {
        &self.centers
    }

    pub fn centers_error(&self) -> Option<CentersError> {
        self.centers_error
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.draft.set_field(field, value);
    }

    /// Replace the selected subjects, keeping only known ones
    pub fn set_subjects<I, S>(&mut self, subjects: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.draft.subjects = subjects
            .into_iter()
            .filter_map(|s| SUBJECTS.iter().find(|k| **k == s.as_ref()))
            .map(|s| s.to_string())
            .collect();
    }

    /// Errors reported by the caller (e.g. server-side), shown per field
    pub fn merge_errors(&mut self, errors: FieldErrors) {
        self.errors.extend(errors);
    }

    /// Fetch center options; no request is made without a token
    pub async fn load_centers(&mut self) {
        self.centers.clear();
        if let Err(e) = self.session.token() {
            tracing::warn!(error = %e, "No admin session, skipping center fetch");
            self.centers_error = Some(CentersError::NotLoggedIn);
            return;
        }

        match self.api.list_centers().await {
            Ok(centers) => {
                tracing::debug!(count = centers.len(), "Centers loaded");
                self.centers = centers;
                self.centers_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching centers");
                self.centers_error = Some(CentersError::from_client(&e));
            }
        }
    }

    /// Clear the center error and fetch again
    pub async fn retry_centers(&mut self) {
        self.centers_error = None;
        self.load_centers().await;
    }

    /// Validate and create the tutor
    ///
    /// Invalid drafts and missing sessions never reach the network. The
    /// draft resets after a successful creation.
    pub async fn submit(&mut self) -> PortalResult<TutorRecord> {
        let payload = match self.draft.to_payload() {
            Ok(payload) => {
                self.errors.clear();
                payload
            }
            Err(errors) => {
                self.errors = errors.clone();
                return Err(PortalError::Validation(errors));
            }
        };

        if let Err(e) = self.session.token() {
            tracing::warn!(error = %e, "No admin session, tutor not submitted");
            self.notifications.error(format!("Failed to add tutor: {}", e));
            return Err(e.into());
        }

        self.submitting = true;
        let result = self.api.create_tutor(&payload).await;
        self.submitting = false;

        match result {
            Ok(tutor) => {
                tracing::info!(tutor_id = %tutor.id, phone = %payload.phone, "Tutor created");
                self.notifications.success("Tutor added successfully!");
                self.draft = TutorDraft::default();
                Ok(tutor)
            }
            Err(e) => {
                self.notifications
                    .error(format!("Failed to add tutor: {}", e.message()));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TutorDraft {
        TutorDraft {
            name: "Maryam".into(),
            email: "maryam@example.com".into(),
            phone: "9876543210".into(),
            password: "secret".into(),
            assigned_center: "c1".into(),
            subjects: vec!["Urdu".into()],
            session_type: "arabic".into(),
            session_timing: "after_asar".into(),
            assigned_hadiya_amount: "2500".into(),
            ..TutorDraft::default()
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let payload = valid_draft().to_payload().unwrap();
        assert_eq!(payload.assigned_hadiya_amount, Decimal::from(2500));
        assert_eq!(payload.session_timing, "after_asar");
    }

    #[test]
    fn test_phone_rules() {
        for phone in ["987654321", "98765432100", "98765x3210", " 987654321"] {
            let mut draft = valid_draft();
            draft.phone = phone.into();
            let errors = draft.validate();
            assert_eq!(
                errors.get(&FormField::Phone).map(String::as_str),
                Some("Valid 10-digit phone number is required."),
                "phone {phone:?}"
            );
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_rule_messages() {
        let mut draft = valid_draft();
        draft.password = "12345".into();
        draft.assigned_center.clear();
        draft.assigned_hadiya_amount = "0".into();
        draft.subjects.clear();

        let errors = draft.validate();
        assert_eq!(errors[&FormField::Password], "Password must be at least 6 characters.");
        assert_eq!(errors[&FormField::AssignedCenter], "Assigned Center is required.");
        assert_eq!(
            errors[&FormField::AssignedHadiyaAmount],
            "Valid Hadiya amount is required."
        );
        assert_eq!(errors[&FormField::Subjects], "At least one subject must be selected.");
        assert!(draft.to_payload().is_err());
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let mut draft = valid_draft();
        draft.assigned_hadiya_amount = "two thousand".into();
        assert!(draft.validate().contains_key(&FormField::AssignedHadiyaAmount));
    }

    #[test]
    fn test_unknown_session_codes_rejected() {
        let mut draft = valid_draft();
        draft.session_type = "quran".into();
        draft.session_timing = String::new();
        let errors = draft.validate();
        assert!(errors.contains_key(&FormField::SessionType));
        assert!(errors.contains_key(&FormField::SessionTiming));
    }

    #[test]
    fn test_initial_values_merge_with_defaults() {
        let draft = TutorDraft::from_initial(serde_json::json!({
            "name": "Hamza",
            "assignedCenter": "c7",
            "subjects": ["Science"]
        }))
        .unwrap();
        assert_eq!(draft.name, "Hamza");
        assert_eq!(draft.assigned_center, "c7");
        assert!(draft.phone.is_empty());
        assert_eq!(draft.subjects, vec!["Science".to_string()]);
    }

    #[test]
    fn test_set_field_subjects_list() {
        let mut draft = TutorDraft::default();
        draft.set_field(FormField::Subjects, "Mathematics, English ,,");
        assert_eq!(draft.subjects, vec!["Mathematics", "English"]);
        assert_eq!(FormField::from_key("ifscCode"), Some(FormField::IfscCode));
    }

    #[test]
    fn test_centers_error_login_hint() {
        assert!(CentersError::NotLoggedIn.requires_login());
        assert!(CentersError::Unauthorized.requires_login());
        assert!(!CentersError::FetchFailed.requires_login());
        assert_eq!(
            CentersError::from_client(&ClientError::Server {
                status: 500,
                message: "boom".into()
            }),
            CentersError::FetchFailed
        );
        assert_eq!(
            CentersError::from_client(&ClientError::InvalidResponse("eof".into())),
            CentersError::Connection
        );
    }
}
