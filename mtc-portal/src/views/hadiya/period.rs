//! Reporting period helpers

use chrono::Datelike;

use crate::core::{PortalError, PortalResult};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A (month, year) reporting period; month is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> PortalResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PortalError::InvalidPeriod { month, year });
        }
        Ok(Self { month, year })
    }

    /// Current local month
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or("")
    }
}

pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

/// Selectable years: five back, four ahead
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - 5..=current_year + 4).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_validation() {
        assert!(Period::new(1, 2025).is_ok());
        assert!(Period::new(12, 2025).is_ok());
        assert!(matches!(
            Period::new(13, 2025),
            Err(PortalError::InvalidPeriod { month: 13, .. })
        ));
        assert!(Period::new(0, 2025).is_err());
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(0), None);
        assert_eq!(Period { month: 9, year: 2024 }.month_name(), "September");
    }

    #[test]
    fn test_year_window() {
        let years = year_options(2025);
        assert_eq!(years.len(), 10);
        assert_eq!(years.first(), Some(&2020));
        assert_eq!(years.last(), Some(&2029));
    }
}
