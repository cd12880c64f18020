//! `mtc-portal` command line
//!
//! Each subcommand drives one view-model against the configured backend.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mtc_client::{
    FileSessionStore, MtcApi, NetworkHttpClient, SessionProvider, StoredSession,
};

use crate::core::{Notifications, PortalConfig, PortalError, ToastLevel};
use crate::utils::money::format_inr;
use crate::views::dashboard::{DashboardTab, SHELL_TITLE, TutorDashboardShell};
use crate::views::hadiya::{HadiyaReportView, PaymentStatus, Period};
use crate::views::onboarding::{TutorDraft, TutorOnboardingForm};
use crate::views::profile::render_profile;

#[derive(Debug, Parser)]
#[command(name = "mtc-portal")]
#[command(about = "MTC tuition portal: Hadiya payments, tutors and dashboards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "MTC_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Directory holding userData.json
    #[arg(long, env = "MTC_SESSION_DIR", global = true)]
    pub session_dir: Option<PathBuf>,

    #[arg(long, env = "MTC_LOG_LEVEL", global = true,
          value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Report filters shared by several commands
#[derive(Debug, Clone, clap::Args)]
pub struct ReportArgs {
    /// Month (1-12), defaults to the current month
    #[arg(long)]
    pub month: Option<u32>,

    #[arg(long)]
    pub year: Option<i32>,

    /// Center id filter
    #[arg(long)]
    pub center: Option<String>,

    /// Tutor name search
    #[arg(long)]
    pub tutor_name: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the Hadiya report for a period
    Report {
        #[command(flatten)]
        filters: ReportArgs,
    },

    /// Edit payment drafts and save them
    Pay {
        #[command(flatten)]
        filters: ReportArgs,

        /// Confirm a payment: TUTOR_ID or TUTOR_ID=AMOUNT (blank = assigned)
        #[arg(long = "confirm", value_name = "TUTOR_ID[=AMOUNT]")]
        confirm: Vec<String>,

        /// Mark paid with the assigned amount
        #[arg(long = "paid", value_name = "TUTOR_ID")]
        paid: Vec<String>,

        /// Mark pending (amount 0)
        #[arg(long = "pending", value_name = "TUTOR_ID")]
        pending: Vec<String>,
    },

    /// Export the report as CSV
    Export {
        #[command(flatten)]
        filters: ReportArgs,

        /// Output directory
        #[arg(long, env = "MTC_EXPORT_DIR")]
        out: Option<PathBuf>,
    },

    /// List centers
    Centers,

    /// Register a new tutor
    AddTutor(AddTutorArgs),

    /// Show a tutor profile
    Profile {
        tutor_id: String,
    },

    /// Manage the stored admin session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Simulate the tutor dashboard shell
    Dashboard {
        /// Viewport width
        #[arg(long, default_value = "1024")]
        width: u32,

        /// Tab to select (overview, students)
        #[arg(long)]
        select: Option<String>,

        /// Toggle the sidebar
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct AddTutorArgs {
    /// JSON file with initial form values
    #[arg(long)]
    pub from_json: Option<PathBuf>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub qualifications: Option<String>,
    /// Center id
    #[arg(long)]
    pub center: Option<String>,
    /// Comma-separated subjects
    #[arg(long)]
    pub subjects: Option<String>,
    /// arabic | tuition
    #[arg(long)]
    pub session_type: Option<String>,
    /// after_fajr | after_zohar | after_asar | after_maghrib | after_isha
    #[arg(long)]
    pub session_timing: Option<String>,
    #[arg(long)]
    pub hadiya: Option<String>,
    #[arg(long)]
    pub aadhar_number: Option<String>,
    #[arg(long)]
    pub bank_name: Option<String>,
    #[arg(long)]
    pub account_number: Option<String>,
    #[arg(long)]
    pub bank_branch: Option<String>,
    #[arg(long)]
    pub ifsc_code: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum SessionAction {
    /// Store a bearer token
    Set {
        token: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Remove the stored session
    Clear,
    /// Show whether a usable session exists
    Show,
}

impl Cli {
    /// Overlay command-line values on the environment config
    pub fn apply_to(&self, config: &mut PortalConfig) {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(dir) = &self.session_dir {
            config.session_dir = dir.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Command::Export { out: Some(dir), .. } = &self.command {
            config.export_dir = dir.clone();
        }
    }
}

fn print_toasts(notifications: &mut Notifications) {
    for toast in notifications.drain() {
        let tag = match toast.level {
            ToastLevel::Success => "ok",
            ToastLevel::Info => "info",
            ToastLevel::Error => "error",
        };
        eprintln!("[{}] {}", tag, toast.message);
    }
}

struct App {
    config: PortalConfig,
    session: Arc<FileSessionStore>,
}

impl App {
    fn new(config: PortalConfig) -> Self {
        let session = Arc::new(FileSessionStore::new(config.session_dir.clone()));
        Self { config, session }
    }

    fn api(&self) -> Result<MtcApi<NetworkHttpClient>> {
        let client = self
            .config
            .client_config()
            .with_session(self.session.clone())
            .build_http_client()
            .context("Failed to build HTTP client")?;
        Ok(MtcApi::new(client))
    }

    fn period(&self, filters: &ReportArgs) -> Result<Period> {
        let current = Period::current();
        Ok(Period::new(
            filters.month.unwrap_or(current.month),
            filters.year.unwrap_or(current.year),
        )?)
    }

    async fn report_view(&self, filters: &ReportArgs) -> Result<HadiyaReportView<NetworkHttpClient>> {
        let mut view = HadiyaReportView::new(self.api()?, self.period(filters)?)
            .with_filters(
                filters.center.clone(),
                filters.tutor_name.clone().unwrap_or_default(),
            );
        view.load_centers().await;
        view.reload().await?;
        Ok(view)
    }
}

fn print_report(view: &HadiyaReportView<NetworkHttpClient>) {
    let period = view.period();
    println!("Hadiya report - {} {}", period.month_name(), period.year);
    println!(
        "{:<26} {:<24} {:<18} {:>12} {:>12}  {}",
        "TUTOR ID", "NAME", "CENTER", "ASSIGNED", "PAID", "STATUS"
    );
    for row in view.rows() {
        let draft = view.draft(&row.tutor_id);
        let (paid, status) = match draft {
            Some(d) if d.is_paid() => (format_inr(d.amount_paid), PaymentStatus::Paid),
            _ => ("-".to_string(), PaymentStatus::Pending),
        };
        println!(
            "{:<26} {:<24} {:<18} {:>12} {:>12}  {}",
            row.tutor_id,
            row.tutor_name,
            row.center_name(),
            format_inr(row.assigned_amount()),
            paid,
            status
        );
    }
    println!("Grand total paid: {}", format_inr(view.grand_total()));
}

fn split_confirm(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((id, amount)) => (id, Some(amount)),
        None => (arg, None),
    }
}

fn build_draft(args: &AddTutorArgs) -> Result<TutorDraft> {
    let mut draft = match &args.from_json {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            TutorDraft::from_initial(serde_json::from_str(&text)?)?
        }
        None => TutorDraft::default(),
    };
    let overrides = [
        (&args.name, &mut draft.name),
        (&args.email, &mut draft.email),
        (&args.phone, &mut draft.phone),
        (&args.password, &mut draft.password),
        (&args.qualifications, &mut draft.qualifications),
        (&args.center, &mut draft.assigned_center),
        (&args.session_type, &mut draft.session_type),
        (&args.session_timing, &mut draft.session_timing),
        (&args.hadiya, &mut draft.assigned_hadiya_amount),
        (&args.aadhar_number, &mut draft.aadhar_number),
        (&args.bank_name, &mut draft.bank_name),
        (&args.account_number, &mut draft.account_number),
        (&args.bank_branch, &mut draft.bank_branch),
        (&args.ifsc_code, &mut draft.ifsc_code),
    ];
    for (value, slot) in overrides {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
    if let Some(subjects) = &args.subjects {
        draft.set_field(crate::views::FormField::Subjects, subjects);
    }
    Ok(draft)
}

/// Run one command
pub async fn run(cli: Cli, config: PortalConfig) -> Result<()> {
    let ctx = App::new(config);

    match cli.command {
        Command::Report { filters } => {
            let mut view = ctx.report_view(&filters).await?;
            print_report(&view);
            print_toasts(view.notifications_mut());
        }

        Command::Pay {
            filters,
            confirm,
            paid,
            pending,
        } => {
            let mut view = ctx.report_view(&filters).await?;
            for id in &pending {
                view.set_status(id, PaymentStatus::Pending)?;
            }
            for id in &paid {
                if !view.set_status(id, PaymentStatus::Paid)? {
                    print_toasts(view.notifications_mut());
                    anyhow::bail!("Could not mark tutor {} as paid", id);
                }
            }
            for arg in &confirm {
                let (id, amount) = split_confirm(arg);
                view.set_amount_input(id, amount.unwrap_or(""))?;
                if !view.confirm_amount(id)? {
                    print_toasts(view.notifications_mut());
                    anyhow::bail!("Payment confirmation for tutor {} was rejected", id);
                }
            }
            let summary = view.save_payments().await;
            print_toasts(view.notifications_mut());
            println!(
                "Saved {} payment(s), {} failed",
                summary.succeeded, summary.failed
            );
            if summary.failed > 0 {
                anyhow::bail!("{} payment(s) failed", summary.failed);
            }
        }

        Command::Export { filters, .. } => {
            let mut view = ctx.report_view(&filters).await?;
            let today = chrono::Local::now().date_naive();
            let export = view.export_csv(today);
            print_toasts(view.notifications_mut());
            let path = export?.write_to(&ctx.config.export_dir)?;
            println!("{}", path.display());
        }

        Command::Centers => {
            let centers = ctx.api()?.list_centers().await?;
            for center in centers {
                println!("{}\t{}", center.id, center.name);
            }
        }

        Command::AddTutor(args) => {
            let draft = build_draft(&args)?;
            let session: Arc<dyn SessionProvider> = ctx.session.clone();
            let mut form = TutorOnboardingForm::new(ctx.api()?, session, draft);
            form.load_centers().await;
            if let Some(err) = form.centers_error() {
                eprintln!("[warn] {}", err);
            }
            match form.submit().await {
                Ok(tutor) => {
                    print_toasts(form.notifications_mut());
                    println!("Created tutor {}", tutor.id);
                }
                Err(PortalError::Validation(errors)) => {
                    for (field, message) in &errors {
                        eprintln!("{}: {}", field.key(), message);
                    }
                    anyhow::bail!("Tutor form is invalid");
                }
                Err(e) => {
                    print_toasts(form.notifications_mut());
                    return Err(e.into());
                }
            }
        }

        Command::Profile { tutor_id } => {
            let tutor = match ctx.api()?.get_tutor(&tutor_id).await {
                Ok(tutor) => Some(tutor),
                Err(mtc_client::ClientError::NotFound(_)) => None,
                Err(e) => return Err(e.into()),
            };
            println!("{}", render_profile(tutor.as_ref()).trim_end());
        }

        Command::Session { action } => match action {
            SessionAction::Set { token, name, role } => {
                let mut session = StoredSession::new(token);
                session.name = name;
                session.role = role;
                ctx.session.save(&session)?;
                println!("Session saved to {}", ctx.session.path().display());
            }
            SessionAction::Clear => {
                ctx.session.delete()?;
                println!("Session cleared");
            }
            SessionAction::Show => match ctx.session.token() {
                Ok(_) => println!("Logged in ({})", ctx.session.path().display()),
                Err(e) => println!("{}", e),
            },
        },

        Command::Dashboard {
            width,
            select,
            toggle,
        } => {
            let shell = TutorDashboardShell::new(width);
            if toggle {
                shell.toggle_sidebar();
            }
            if let Some(id) = select {
                shell.select_tab_id(&id);
            }
            let state = shell.state();
            println!("{}", SHELL_TITLE);
            for tab in DashboardTab::ALL {
                let marker = if tab == state.active_tab { "*" } else { " " };
                println!(" {} {} ({})", marker, tab.label(), tab.id());
            }
            println!(
                "viewport: {}px, mobile: {}, sidebar: {}",
                state.viewport_width,
                state.is_mobile,
                if state.sidebar_open { "open" } else { "closed" }
            );
        }
    }

    Ok(())
}
