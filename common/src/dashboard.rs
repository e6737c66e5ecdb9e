//! View-model for the dashboard cards.

use chrono::{Days, NaiveDate};
use serde::Deserialize;

use crate::model::drive::VaccineDrive;
use crate::model::null_as_default;

/// Drives starting within this many days are listed as upcoming.
pub const UPCOMING_WINDOW_DAYS: u64 = 30;

/// Body of `GET /vaccine-records/dashboard`.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub total_students: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub vaccinated_students: u64,
}

impl DashboardCounts {
    /// Vaccinated share in percent. A zero total yields `0.0`.
    pub fn vaccinated_percentage(&self) -> f64 {
        if self.total_students == 0 {
            return 0.0;
        }
        self.vaccinated_students as f64 / self.total_students as f64 * 100.0
    }

    /// Text of the vaccinated card, e.g. `10 (25.00%)`.
    pub fn vaccinated_summary(&self) -> String {
        format!(
            "{} ({:.2}%)",
            self.vaccinated_students,
            self.vaccinated_percentage()
        )
    }
}

/// Per-card load state; each card loads and fails on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum CardState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for CardState<T> {
    fn default() -> Self {
        CardState::Loading
    }
}

/// Drives dated from `today` through the window end, soonest first.
pub fn upcoming_drives(drives: &[VaccineDrive], today: NaiveDate) -> Vec<VaccineDrive> {
    let end = today
        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
        .unwrap_or(today);
    let mut upcoming: Vec<(NaiveDate, VaccineDrive)> = drives
        .iter()
        .filter_map(|drive| drive.date().map(|date| (date, drive.clone())))
        .filter(|(date, _)| *date >= today && *date <= end)
        .collect();
    upcoming.sort_by_key(|(date, _)| *date);
    upcoming.into_iter().map(|(_, drive)| drive).collect()
}
