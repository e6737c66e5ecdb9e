use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diff::FormSchema;
use crate::drive_date;
use crate::error::PortalError;
use crate::model::catalog::VACCINES;
use crate::model::null_as_default;

/// Separator the vaccine service uses inside the `classes` column.
pub const CLASS_SEPARATOR: &str = ", ";

/// A scheduled drive as stored by the vaccine service (`VaccineDriveInfo`).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VaccineDrive {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub vaccine_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub drive_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub doses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub classes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl VaccineDrive {
    pub fn date(&self) -> Option<NaiveDate> {
        drive_date::parse_drive_date(&self.drive_date)
    }

    pub fn class_list(&self) -> Vec<String> {
        split_classes(&self.classes)
    }
}

pub fn split_classes(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_classes(classes: &[String]) -> String {
    classes.join(CLASS_SEPARATOR)
}

/// Add/edit drive dialog values.
///
/// `drive_date` holds the raw `YYYY-MM-DD` value of the date input and
/// `classes` the multi-select; both are converted to the wire shape only when
/// a payload is built.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DriveForm {
    #[serde(skip)]
    pub id: Option<i64>,
    pub vaccine_name: String,
    pub drive_date: String,
    pub doses: u32,
    pub classes: Vec<String>,
}

impl DriveForm {
    /// Blank form for a new drive, dated on the earliest allowed day.
    pub fn new_drive(today: NaiveDate) -> Self {
        Self {
            id: None,
            vaccine_name: VACCINES[0].to_string(),
            drive_date: drive_date::creation_floor(today).format("%Y-%m-%d").to_string(),
            doses: 0,
            classes: Vec::new(),
        }
    }

    pub fn from_drive(drive: &VaccineDrive) -> Self {
        Self {
            id: drive.id,
            vaccine_name: drive.vaccine_name.clone(),
            drive_date: drive
                .date()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| drive.drive_date.clone()),
            doses: drive.doses,
            classes: drive.class_list(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Full record posted when creating a drive.
    pub fn to_new_drive(&self) -> Result<VaccineDrive, PortalError> {
        Ok(VaccineDrive {
            id: None,
            vaccine_name: self.vaccine_name.clone(),
            drive_date: drive_date::to_utc_midnight(drive_date::parse_form_date(
                &self.drive_date,
            )?),
            doses: self.doses,
            classes: join_classes(&self.classes),
            created_at: None,
            updated_at: None,
        })
    }
}

impl FormSchema for DriveForm {
    fn record_id(&self) -> Option<i64> {
        self.id
    }

    fn encode_field(field: &str, value: Value) -> Value {
        match (field, value) {
            ("classes", Value::Array(items)) => {
                let labels: Vec<String> = items
                    .into_iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect();
                Value::String(join_classes(&labels))
            }
            ("drive_date", Value::String(raw)) => match drive_date::parse_form_date(&raw) {
                Ok(date) => Value::String(drive_date::to_utc_midnight(date)),
                Err(_) => Value::String(raw),
            },
            (_, value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive() -> VaccineDrive {
        VaccineDrive {
            id: Some(4),
            vaccine_name: "covaxin".into(),
            drive_date: "2025-03-01T00:00:00+00:00".into(),
            doses: 40,
            classes: "Grade 1, Grade 2".into(),
            ..VaccineDrive::default()
        }
    }

    #[test]
    fn form_round_trips_classes_and_date() {
        let form = DriveForm::from_drive(&drive());
        assert_eq!(form.drive_date, "2025-03-01");
        assert_eq!(form.classes, vec!["Grade 1", "Grade 2"]);

        let rebuilt = form.to_new_drive().unwrap();
        assert_eq!(rebuilt.classes, "Grade 1, Grade 2");
        assert_eq!(rebuilt.drive_date, "2025-03-01T00:00:00+00:00");
        assert_eq!(rebuilt.id, None);
    }

    #[test]
    fn new_drive_form_starts_at_floor() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let form = DriveForm::new_drive(today);
        assert_eq!(form.drive_date, "2025-01-17");
        assert_eq!(form.vaccine_name, "pfizer shield");
        assert!(!form.is_editing());
    }

    #[test]
    fn split_ignores_blank_segments() {
        assert_eq!(split_classes("Grade 1,, Grade 4 ,"), vec!["Grade 1", "Grade 4"]);
        assert!(split_classes("").is_empty());
    }

    #[test]
    fn bad_form_date_is_rejected() {
        let mut form = DriveForm::from_drive(&drive());
        form.drive_date = "03/01/2025".into();
        assert!(matches!(form.to_new_drive(), Err(PortalError::InvalidDate(_))));
    }
}
