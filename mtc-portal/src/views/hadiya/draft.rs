//! Per-tutor payment drafts
//!
//! Drafts are the admin's uncommitted edits, rebuilt from the fetched report
//! on every reload. `amount_paid` always holds the real rupee amount.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::models::TutorHadiyaSummary;
use thiserror::Error;

use crate::utils::money::{format_inr, parse_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn rupees(amount: &Decimal) -> String {
    format_inr(*amount)
}

/// Why a confirmation or toggle was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountRejection {
    #[error("Please enter a valid amount greater than zero")]
    NotPositive,
    #[error("Amount cannot exceed the assigned Hadiya of {}", rupees(.0))]
    ExceedsAssigned(Decimal),
    #[error("No Hadiya amount is assigned to this tutor")]
    NothingAssigned,
    #[error("Payment is already confirmed; mark it Pending to change the amount")]
    AlreadyPaid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDraft {
    pub amount_paid: Decimal,
    pub status: PaymentStatus,
    /// A record exists server-side for the period, so save must update it
    pub record_exists: bool,
    /// Amount text typed but not yet confirmed
    pub amount_input: String,
}

impl PaymentDraft {
    /// Initial draft for a report row
    ///
    /// Paid only when a record for the period carries a positive amount.
    pub fn from_summary(summary: &TutorHadiyaSummary, month: u32, year: i32) -> Self {
        match summary.record_for(month, year) {
            Some(record) if record.amount_paid > Decimal::ZERO => Self {
                amount_paid: record.amount_paid,
                status: PaymentStatus::Paid,
                record_exists: true,
                amount_input: String::new(),
            },
            Some(_) => Self::pending(true),
            None => Self::pending(false),
        }
    }

    fn pending(record_exists: bool) -> Self {
        Self {
            amount_paid: Decimal::ZERO,
            status: PaymentStatus::Pending,
            record_exists,
            amount_input: String::new(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }

    /// Validate the typed amount against the assigned one
    ///
    /// A blank input stands for the full assigned amount.
    pub fn resolve_amount(&self, assigned: Decimal) -> Result<Decimal, AmountRejection> {
        let amount = if self.amount_input.trim().is_empty() {
            assigned
        } else {
            parse_amount(&self.amount_input).ok_or(AmountRejection::NotPositive)?
        };
        if amount <= Decimal::ZERO {
            return Err(AmountRejection::NotPositive);
        }
        if amount > assigned {
            return Err(AmountRejection::ExceedsAssigned(assigned));
        }
        Ok(amount)
    }

    /// Confirm the typed amount; the draft is untouched on rejection
    ///
    /// Paid drafts are locked until switched back to Pending.
    pub fn confirm(&mut self, assigned: Decimal) -> Result<Decimal, AmountRejection> {
        if self.is_paid() {
            return Err(AmountRejection::AlreadyPaid);
        }
        let amount = self.resolve_amount(assigned)?;
        self.amount_paid = amount;
        self.status = PaymentStatus::Paid;
        self.amount_input.clear();
        Ok(amount)
    }

    /// Switch status; Paid takes the assigned amount, Pending zeroes it
    pub fn set_status(
        &mut self,
        status: PaymentStatus,
        assigned: Decimal,
    ) -> Result<(), AmountRejection> {
        match status {
            PaymentStatus::Paid => {
                if assigned <= Decimal::ZERO {
                    return Err(AmountRejection::NothingAssigned);
                }
                self.amount_paid = assigned;
            }
            PaymentStatus::Pending => self.amount_paid = Decimal::ZERO,
        }
        self.status = status;
        self.amount_input.clear();
        Ok(())
    }

    /// Amount to display/export for the draft's status
    pub fn effective_amount(&self) -> Decimal {
        if self.is_paid() {
            self.amount_paid
        } else {
            Decimal::ZERO
        }
    }
}

/// Drafts keyed by tutor id
pub type Drafts = BTreeMap<String, PaymentDraft>;

pub fn build_drafts(report: &[TutorHadiyaSummary], month: u32, year: i32) -> Drafts {
    report
        .iter()
        .map(|row| {
            (
                row.tutor_id.clone(),
                PaymentDraft::from_summary(row, month, year),
            )
        })
        .collect()
}

/// Sum of paid amounts across all drafts
pub fn grand_total(drafts: &Drafts) -> Decimal {
    drafts.values().map(PaymentDraft::effective_amount).sum()
}
