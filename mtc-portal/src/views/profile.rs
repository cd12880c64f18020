//! Read-only tutor profile
//!
//! Projects a [`TutorRecord`] into titled sections of labelled fields with
//! placeholders for anything missing.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use shared::models::{SessionTiming, SessionType, TutorDocuments, TutorRecord};

pub const NO_TUTOR: &str = "No tutor data available";

const NOT_PROVIDED: &str = "Not provided";
const NOT_ASSIGNED: &str = "Not assigned";
const NOT_SPECIFIED: &str = "Not specified";
const NOT_UPLOADED: &str = "Not uploaded";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Links(Vec<Link>),
}

impl FieldValue {
    fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn or_placeholder(value: Option<&str>, placeholder: &str) -> Self {
        Self::text(
            value
                .filter(|v| !v.is_empty())
                .unwrap_or(placeholder),
        )
    }

    fn link_or(url: Option<&str>, label: &str, placeholder: &str) -> Self {
        match url.filter(|u| !u.is_empty()) {
            Some(url) => Self::Links(vec![Link {
                label: label.into(),
                url: url.into(),
            }]),
            None => Self::text(placeholder),
        }
    }

    fn numbered_links(urls: &[String], prefix: &str, placeholder: &str) -> Self {
        if urls.is_empty() {
            return Self::text(placeholder);
        }
        Self::Links(
            urls.iter()
                .enumerate()
                .map(|(i, url)| Link {
                    label: format!("{} {}", prefix, i + 1),
                    url: url.clone(),
                })
                .collect(),
        )
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Links(links) => {
                let rendered: Vec<String> = links
                    .iter()
                    .map(|l| format!("{} <{}>", l.label, l.url))
                    .collect();
                f.write_str(&rendered.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSection {
    pub title: &'static str,
    pub fields: Vec<ProfileField>,
}

impl ProfileSection {
    pub fn field(&self, label: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.label == label).map(|f| &f.value)
    }
}

fn field(label: &'static str, value: FieldValue) -> ProfileField {
    ProfileField { label, value }
}

/// Label for a session type code; unknown codes pass through
pub fn session_type_label(code: &str) -> String {
    SessionType::from_code(code)
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn session_timing_label(code: &str) -> String {
    SessionTiming::from_code(code)
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

fn session_value(code: Option<&str>, label: fn(&str) -> String) -> FieldValue {
    match code.filter(|c| !c.is_empty()) {
        Some(code) => FieldValue::Text(label(code)),
        None => FieldValue::text(NOT_SPECIFIED),
    }
}

fn hadiya_value(amount: Option<Decimal>) -> FieldValue {
    match amount.filter(|a| !a.is_zero()) {
        Some(amount) => FieldValue::Text(format!("₹{}", amount.normalize())),
        None => FieldValue::text(NOT_ASSIGNED),
    }
}

fn document_fields(docs: &TutorDocuments) -> Vec<ProfileField> {
    vec![
        field(
            "Aadhar Number",
            FieldValue::or_placeholder(docs.aadhar_number.as_deref(), NOT_PROVIDED),
        ),
        field(
            "Aadhar Photo",
            FieldValue::link_or(docs.aadhar_photo.as_deref(), "View Document", NOT_UPLOADED),
        ),
        field(
            "Certificates",
            FieldValue::numbered_links(&docs.certificates, "Certificate", "No certificates uploaded"),
        ),
        field(
            "Memos",
            FieldValue::numbered_links(&docs.memos, "Memo", "No memos uploaded"),
        ),
        field(
            "Resume",
            FieldValue::link_or(docs.resume.as_deref(), "View Resume", NOT_UPLOADED),
        ),
    ]
}

fn bank_fields(docs: &TutorDocuments) -> Vec<ProfileField> {
    let Some(bank) = docs.bank_account.as_ref() else {
        return Vec::new();
    };
    vec![
        field(
            "Bank Name",
            FieldValue::or_placeholder(bank.bank_name.as_deref(), NOT_PROVIDED),
        ),
        field(
            "Bank Branch",
            FieldValue::or_placeholder(bank.bank_branch.as_deref(), NOT_PROVIDED),
        ),
        field(
            "Bank Account Number",
            FieldValue::or_placeholder(bank.account_number.as_deref(), NOT_PROVIDED),
        ),
        field(
            "IFSC Code",
            FieldValue::or_placeholder(bank.ifsc_code.as_deref(), NOT_PROVIDED),
        ),
        field(
            "Passbook Photo",
            FieldValue::link_or(bank.passbook_photo.as_deref(), "View Passbook", NOT_UPLOADED),
        ),
    ]
}

/// Tutor profile projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorProfileView {
    sections: Vec<ProfileSection>,
}

impl TutorProfileView {
    /// `None` when there is no record to show
    pub fn new(tutor: Option<&TutorRecord>) -> Option<Self> {
        tutor.map(Self::from_record)
    }

    pub fn from_record(tutor: &TutorRecord) -> Self {
        let subjects = if tutor.subjects.is_empty() {
            FieldValue::text("No subjects assigned")
        } else {
            FieldValue::Text(tutor.subjects.join(", "))
        };
        let center = tutor
            .assigned_center
            .as_ref()
            .map(|c| FieldValue::Text(c.display()))
            .unwrap_or_else(|| FieldValue::text(NOT_ASSIGNED));

        let (documents, bank) = match tutor.documents.as_ref() {
            Some(docs) => (document_fields(docs), bank_fields(docs)),
            None => (Vec::new(), Vec::new()),
        };

        let sections = vec![
            ProfileSection {
                title: "Personal Information",
                fields: vec![
                    field("Name", FieldValue::or_placeholder(tutor.name.as_deref(), NOT_PROVIDED)),
                    field("Email", FieldValue::or_placeholder(tutor.email.as_deref(), NOT_PROVIDED)),
                    field(
                        "Phone (Login Username)",
                        FieldValue::or_placeholder(tutor.phone.as_deref(), NOT_PROVIDED),
                    ),
                    field(
                        "Qualifications",
                        FieldValue::or_placeholder(tutor.qualifications.as_deref(), NOT_PROVIDED),
                    ),
                ],
            },
            ProfileSection {
                title: "Center & Subjects",
                fields: vec![field("Assigned Center", center), field("Subjects", subjects)],
            },
            ProfileSection {
                title: "Session Information",
                fields: vec![
                    field(
                        "Session Type",
                        session_value(tutor.session_type.as_deref(), session_type_label),
                    ),
                    field(
                        "Session Timing",
                        session_value(tutor.session_timing.as_deref(), session_timing_label),
                    ),
                ],
            },
            ProfileSection {
                title: "Hadiya",
                fields: vec![field(
                    "Assigned Hadiya Amount",
                    hadiya_value(tutor.assigned_hadiya_amount),
                )],
            },
            ProfileSection {
                title: "Documents",
                fields: documents,
            },
            ProfileSection {
                title: "Bank Details",
                fields: bank,
            },
        ];

        Self { sections }
    }

    pub fn sections(&self) -> &[ProfileSection] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&ProfileSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Plain-text rendering for terminals
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let _ = writeln!(out, "== {} ==", section.title);
            for f in &section.fields {
                let _ = writeln!(out, "{}: {}", f.label, f.value);
            }
            out.push('\n');
        }
        out
    }
}

/// Text for an optional record, with the empty-state message
pub fn render_profile(tutor: Option<&TutorRecord>) -> String {
    TutorProfileView::new(tutor)
        .map(|view| view.render_text())
        .unwrap_or_else(|| NO_TUTOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BankAccount, CenterRef};

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.into())
    }

    #[test]
    fn test_missing_tutor() {
        assert!(TutorProfileView::new(None).is_none());
        assert_eq!(render_profile(None), NO_TUTOR);
    }

    #[test]
    fn test_placeholders_for_sparse_record() {
        let view = TutorProfileView::from_record(&TutorRecord::default());
        let personal = view.section("Personal Information").unwrap();
        assert_eq!(personal.field("Email"), Some(&text("Not provided")));

        let center = view.section("Center & Subjects").unwrap();
        assert_eq!(center.field("Assigned Center"), Some(&text("Not assigned")));
        assert_eq!(center.field("Subjects"), Some(&text("No subjects assigned")));

        let session = view.section("Session Information").unwrap();
        assert_eq!(session.field("Session Type"), Some(&text("Not specified")));

        let hadiya = view.section("Hadiya").unwrap();
        assert_eq!(hadiya.field("Assigned Hadiya Amount"), Some(&text("Not assigned")));

        assert!(view.section("Documents").unwrap().fields.is_empty());
        assert!(view.section("Bank Details").unwrap().fields.is_empty());
    }

    #[test]
    fn test_labels_and_links() {
        let tutor = TutorRecord {
            name: Some("Sana".into()),
            assigned_center: Some(CenterRef::Id("64ab".into())),
            subjects: vec!["English".into(), "Hindi".into()],
            session_type: Some("tuition".into()),
            session_timing: Some("after_night".into()),
            assigned_hadiya_amount: Some(Decimal::from(4000)),
            documents: Some(TutorDocuments {
                certificates: vec!["https://f/1.pdf".into(), "https://f/2.pdf".into()],
                bank_account: Some(BankAccount {
                    ifsc_code: Some("HDFC0001".into()),
                    ..BankAccount::default()
                }),
                ..TutorDocuments::default()
            }),
            ..TutorRecord::default()
        };
        let view = TutorProfileView::from_record(&tutor);

        let center = view.section("Center & Subjects").unwrap();
        assert_eq!(center.field("Assigned Center"), Some(&text("ID: 64ab")));
        assert_eq!(center.field("Subjects"), Some(&text("English, Hindi")));

        let session = view.section("Session Information").unwrap();
        assert_eq!(session.field("Session Type"), Some(&text("Tuition")));
        assert_eq!(session.field("Session Timing"), Some(&text("after_night")));

        let hadiya = view.section("Hadiya").unwrap();
        assert_eq!(hadiya.field("Assigned Hadiya Amount"), Some(&text("₹4000")));

        let docs = view.section("Documents").unwrap();
        match docs.field("Certificates") {
            Some(FieldValue::Links(links)) => {
                assert_eq!(links.len(), 2);
                assert_eq!(links[1].label, "Certificate 2");
            }
            other => panic!("unexpected certificates value: {other:?}"),
        }
        assert_eq!(docs.field("Memos"), Some(&text("No memos uploaded")));
        assert_eq!(docs.field("Aadhar Photo"), Some(&text("Not uploaded")));

        let bank = view.section("Bank Details").unwrap();
        assert_eq!(bank.field("IFSC Code"), Some(&text("HDFC0001")));
        assert_eq!(bank.field("Passbook Photo"), Some(&text("Not uploaded")));

        let rendered = view.render_text();
        assert!(rendered.contains("== Hadiya ==\nAssigned Hadiya Amount: ₹4000\n"));
        assert!(rendered.contains("Certificate 1 <https://f/1.pdf>"));
    }
}
