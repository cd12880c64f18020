//! Screen view-models

pub mod dashboard;
pub mod hadiya;
pub mod onboarding;
pub mod profile;

pub use dashboard::{DashboardTab, ShellState, TutorDashboardShell};
pub use hadiya::HadiyaReportView;
pub use onboarding::{CentersError, FieldErrors, FormField, TutorDraft, TutorOnboardingForm};
pub use profile::TutorProfileView;
