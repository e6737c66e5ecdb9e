//! Date rules for vaccination drives.
//!
//! The form works with date-only `YYYY-MM-DD` values; the vaccine service
//! stores a timestamp at UTC midnight.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::error::PortalError;

/// New drives must be scheduled at least this many days ahead.
pub const CREATION_LEAD_DAYS: u64 = 16;

const FORM_FORMAT: &str = "%Y-%m-%d";

pub fn parse_form_date(raw: &str) -> Result<NaiveDate, PortalError> {
    NaiveDate::parse_from_str(raw.trim(), FORM_FORMAT)
        .map_err(|_| PortalError::InvalidDate(raw.to_string()))
}

/// `2025-03-01` becomes `2025-03-01T00:00:00+00:00`.
pub fn to_utc_midnight(date: NaiveDate) -> String {
    format!("{}T00:00:00+00:00", date.format(FORM_FORMAT))
}

/// Reads a stored drive date, accepting RFC 3339 timestamps or bare dates.
pub fn parse_drive_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Utc).date_naive());
    }
    raw.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, FORM_FORMAT).ok())
}

/// Earliest date accepted for a new drive.
pub fn creation_floor(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(CREATION_LEAD_DAYS))
        .unwrap_or(today)
}

pub fn check_new_drive_date(date: NaiveDate, today: NaiveDate) -> Result<(), String> {
    let floor = creation_floor(today);
    if date < floor {
        Err(format!(
            "Drive date must be on or after {}",
            floor.format(FORM_FORMAT)
        ))
    } else {
        Ok(())
    }
}

/// A drive stays editable until its start (UTC midnight) has passed.
pub fn is_editable(drive_date: &str, now: DateTime<Utc>) -> bool {
    match parse_drive_date(drive_date) {
        Some(date) => date.and_time(NaiveTime::MIN).and_utc() >= now,
        None => false,
    }
}

pub fn display(drive_date: &str) -> String {
    parse_drive_date(drive_date)
        .map(|date| date.format("%d %b %Y").to_string())
        .unwrap_or_else(|| drive_date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn midnight_stamp_round_trips_to_same_day() {
        let date = parse_form_date("2025-03-01").unwrap();
        let stamp = to_utc_midnight(date);
        assert_eq!(stamp, "2025-03-01T00:00:00+00:00");
        assert!(stamp.ends_with("+00:00"));
        assert_eq!(parse_drive_date(&stamp), Some(day(2025, 3, 1)));
    }

    #[test]
    fn parses_offset_and_bare_dates() {
        assert_eq!(
            parse_drive_date("2025-03-01T22:30:00-05:00"),
            Some(day(2025, 3, 2))
        );
        assert_eq!(parse_drive_date("2025-03-01"), Some(day(2025, 3, 1)));
        assert_eq!(parse_drive_date("soon"), None);
    }

    #[test]
    fn past_and_near_dates_are_rejected_for_new_drives() {
        let today = day(2025, 1, 1);
        assert!(check_new_drive_date(day(2024, 12, 31), today).is_err());
        assert!(check_new_drive_date(day(2025, 1, 16), today).is_err());
        assert!(check_new_drive_date(day(2025, 1, 17), today).is_ok());
    }

    #[test]
    fn edit_closes_once_drive_started() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        assert!(!is_editable("2025-03-01T00:00:00+00:00", now));
        assert!(is_editable("2025-03-02T00:00:00+00:00", now));
        assert!(!is_editable("garbage", now));
    }

    #[test]
    fn display_falls_back_to_raw_value() {
        assert_eq!(display("2025-03-01T00:00:00+00:00"), "01 Mar 2025");
        assert_eq!(display("tbd"), "tbd");
    }
}
