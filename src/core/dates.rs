//! Due-date classification relative to "today"
//!
//! The current moment is normalised to its calendar day once, when the
//! classifier is built, so a single run never sees the day change halfway
//! through and time of day never matters.

use crate::core::models::Assignment;
use chrono::{Days, Local, NaiveDate};

/// Width of the due-soon window in days. Today and the boundary day itself
/// are excluded, leaving the next two days.
pub const DUE_SOON_DAYS: u64 = 3;

/// Default lookahead for [`DateClassifier::upcoming_assignments`]
pub const DEFAULT_UPCOMING_DAYS: u64 = 7;

/// Where a due date falls relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Before today
    Overdue,
    /// Today
    DueToday,
    /// Within the due-soon window
    DueSoon,
    /// Any later day
    Upcoming,
}

impl DueStatus {
    /// Short human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due today",
            Self::DueSoon => "due soon",
            Self::Upcoming => "upcoming",
        }
    }
}

/// Classifies dates against a fixed "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateClassifier {
    today: NaiveDate,
}

impl DateClassifier {
    /// Classifier anchored at the given day
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Classifier anchored at the local clock's current day
    #[must_use]
    pub fn from_local_clock() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// The anchor day
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// `today + days`, saturating at the calendar's end
    fn horizon(&self, days: u64) -> NaiveDate {
        self.today
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX)
    }

    /// True iff `date` is strictly before today
    #[must_use]
    pub fn is_overdue(&self, date: NaiveDate) -> bool {
        date < self.today
    }

    /// True iff `date` is today
    #[must_use]
    pub fn is_due_today(&self, date: NaiveDate) -> bool {
        date == self.today
    }

    /// True iff `date` lies strictly between today and today + 3 days
    #[must_use]
    pub fn is_due_soon(&self, date: NaiveDate) -> bool {
        self.is_within(date, DUE_SOON_DAYS)
    }

    /// True iff `date` lies strictly between today and today + `days`
    #[must_use]
    pub fn is_within(&self, date: NaiveDate, days: u64) -> bool {
        date > self.today && date < self.horizon(days)
    }

    /// Classify `date`
    #[must_use]
    pub fn classify(&self, date: NaiveDate) -> DueStatus {
        if self.is_overdue(date) {
            DueStatus::Overdue
        } else if self.is_due_today(date) {
            DueStatus::DueToday
        } else if self.is_due_soon(date) {
            DueStatus::DueSoon
        } else {
            DueStatus::Upcoming
        }
    }

    /// Assignments due strictly after today and strictly before today +
    /// `days`, whether or not they are completed. Input order is kept.
    #[must_use]
    pub fn upcoming_assignments<'a>(
        &self,
        assignments: &'a [Assignment],
        days: u64,
    ) -> Vec<&'a Assignment> {
        assignments
            .iter()
            .filter(|a| self.is_within(a.due_date, days))
            .collect()
    }

    /// Incomplete assignments whose due date has passed. Input order is kept.
    #[must_use]
    pub fn overdue_assignments<'a>(&self, assignments: &'a [Assignment]) -> Vec<&'a Assignment> {
        assignments
            .iter()
            .filter(|a| !a.completed && self.is_overdue(a.due_date))
            .collect()
    }
}

impl Default for DateClassifier {
    fn default() -> Self {
        Self::from_local_clock()
    }
}

/// Long display form, e.g. "Oct 19, 2026"
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Short display form, e.g. "Oct 19"
#[must_use]
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
