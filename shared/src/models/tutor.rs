//! Tutor Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::center::CenterRef;

/// Subjects offered at the centers
pub const SUBJECTS: [&str; 7] = [
    "Mathematics",
    "Science",
    "English",
    "Social Studies",
    "Islamic Studies",
    "Urdu",
    "Hindi",
];

/// Session type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Arabic,
    Tuition,
}

impl SessionType {
    pub const ALL: [SessionType; 2] = [Self::Arabic, Self::Tuition];

    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "arabic",
            Self::Tuition => "tuition",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Arabic => "Arabic",
            Self::Tuition => "Tuition",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// Session timing, relative to the daily prayers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionTiming {
    AfterFajr,
    AfterZohar,
    AfterAsar,
    AfterMaghrib,
    AfterIsha,
}

impl SessionTiming {
    pub const ALL: [SessionTiming; 5] = [
        Self::AfterFajr,
        Self::AfterZohar,
        Self::AfterAsar,
        Self::AfterMaghrib,
        Self::AfterIsha,
    ];

    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            Self::AfterFajr => "after_fajr",
            Self::AfterZohar => "after_zohar",
            Self::AfterAsar => "after_asar",
            Self::AfterMaghrib => "after_maghrib",
            Self::AfterIsha => "after_isha",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AfterFajr => "After Fajr",
            Self::AfterZohar => "After Zohar",
            Self::AfterAsar => "After Asar",
            Self::AfterMaghrib => "After Maghrib",
            Self::AfterIsha => "After Isha",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// Bank account details attached to a tutor's documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub bank_branch: Option<String>,
    pub ifsc_code: Option<String>,
    /// Uploaded passbook photo URL
    pub passbook_photo: Option<String>,
}

/// Identification documents and uploads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorDocuments {
    pub aadhar_number: Option<String>,
    /// Uploaded aadhar photo URL
    pub aadhar_photo: Option<String>,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub memos: Vec<String>,
    pub resume: Option<String>,
    pub bank_account: Option<BankAccount>,
}

/// Tutor entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRecord {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: Option<String>,
    /// Login username
    pub phone: Option<String>,
    pub email: Option<String>,
    pub qualifications: Option<String>,
    pub assigned_center: Option<CenterRef>,
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Raw session type code (see [`SessionType`])
    pub session_type: Option<String>,
    /// Raw session timing code (see [`SessionTiming`])
    pub session_timing: Option<String>,
    pub assigned_hadiya_amount: Option<Decimal>,
    pub documents: Option<TutorDocuments>,
}

/// Create tutor payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTutor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub qualifications: String,
    /// Center reference (String ID)
    pub assigned_center: String,
    pub subjects: Vec<String>,
    pub session_type: String,
    pub session_timing: String,
    pub assigned_hadiya_amount: Decimal,
    pub aadhar_number: String,
    pub bank_name: String,
    pub account_number: String,
    pub bank_branch: String,
    pub ifsc_code: String,
}
