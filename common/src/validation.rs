//! Client-side form rules. A form that fails validation never reaches the
//! network; its errors are shown inline next to each field.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::drive_date;
use crate::model::catalog;
use crate::model::drive::DriveForm;
use crate::model::student::{StudentForm, VaccinateForm, VaccinationRecordRequest};
use crate::session::Credentials;

pub const MIN_NAME_LEN: usize = 3;

/// Error message per field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_student(form: &StudentForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    let name = form.name.trim();
    if name.is_empty() {
        errors.insert("name", "Name is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.insert("name", "Name should be at least 3 characters long");
    }
    if blank(&form.class) {
        errors.insert("class", "Class is required");
    }
    if blank(&form.gender) {
        errors.insert("gender", "Gender is required");
    }
    if blank(&form.roll_no) {
        errors.insert("roll_no", "Roll No is required");
    }
    if blank(&form.phone_no) {
        errors.insert("phone_no", "Phone No is required");
    }
    errors.into_result()
}

/// Drive rules. The lead-time floor only applies to new drives.
pub fn validate_drive(form: &DriveForm, today: NaiveDate) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if blank(&form.vaccine_name) {
        errors.insert("vaccine_name", "Vaccine name cannot be empty");
    } else if !catalog::is_known_vaccine(&form.vaccine_name) {
        errors.insert("vaccine_name", "Unknown vaccine");
    }
    if blank(&form.drive_date) {
        errors.insert("drive_date", "Drive date cannot be empty");
    } else {
        match drive_date::parse_form_date(&form.drive_date) {
            Ok(date) if !form.is_editing() => {
                if let Err(message) = drive_date::check_new_drive_date(date, today) {
                    errors.insert("drive_date", message);
                }
            }
            Ok(_) => {}
            Err(err) => errors.insert("drive_date", err.to_string()),
        }
    }
    if form.doses < 1 {
        errors.insert("doses", "Number of doses must be at least 1");
    }
    if form.classes.is_empty() {
        errors.insert("classes", "Select at least one class");
    }
    errors.into_result()
}

pub fn validate_vaccination(form: &VaccinateForm) -> Result<VaccinationRecordRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    if form.student_id.is_none() {
        errors.insert("student_id", "Student id is required");
    }
    if form.drive_id.is_none() {
        errors.insert("drive_id", "Drive id is required");
    }
    match (form.student_id, form.drive_id) {
        (Some(student_id), Some(drive_id)) => Ok(VaccinationRecordRequest {
            student_id,
            drive_id,
        }),
        _ => Err(errors),
    }
}

pub fn validate_login(credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if credentials.username.is_empty() {
        errors.insert("username", "Username is required");
    }
    if credentials.password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn valid_student() -> StudentForm {
        StudentForm {
            id: None,
            name: "Kiran".into(),
            class: "Grade 1".into(),
            gender: "Male".into(),
            roll_no: "4".into(),
            phone_no: "12345".into(),
        }
    }

    fn valid_drive() -> DriveForm {
        DriveForm {
            id: None,
            vaccine_name: "covaxin".into(),
            drive_date: "2025-02-01".into(),
            doses: 10,
            classes: vec!["Grade 2".into()],
        }
    }

    #[test]
    fn complete_student_passes() {
        assert_eq!(validate_student(&valid_student()), Ok(()));
    }

    #[test]
    fn student_errors_are_reported_per_field() {
        let form = StudentForm {
            name: "Al".into(),
            ..StudentForm::default()
        };
        let errors = validate_student(&form).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.get("name"),
            Some("Name should be at least 3 characters long")
        );
        assert_eq!(errors.get("phone_no"), Some("Phone No is required"));
    }

    #[test]
    fn past_drive_is_rejected_before_any_request() {
        let mut form = valid_drive();
        form.drive_date = "2024-12-25".into();
        let errors = validate_drive(&form, today()).unwrap_err();
        assert!(errors.get("drive_date").unwrap().starts_with("Drive date must be on or after"));
    }

    #[test]
    fn editing_skips_the_lead_time_floor() {
        let mut form = valid_drive();
        form.id = Some(8);
        form.drive_date = "2025-01-05".into();
        assert_eq!(validate_drive(&form, today()), Ok(()));
    }

    #[test]
    fn drive_needs_doses_and_classes() {
        let mut form = valid_drive();
        form.doses = 0;
        form.classes.clear();
        form.vaccine_name = "sputnik".into();
        let errors = validate_drive(&form, today()).unwrap_err();
        assert!(errors.get("doses").is_some());
        assert!(errors.get("classes").is_some());
        assert_eq!(errors.get("vaccine_name"), Some("Unknown vaccine"));
    }

    #[test]
    fn vaccination_needs_both_ids() {
        let form = VaccinateForm {
            student_id: Some(1),
            drive_id: None,
        };
        let errors = validate_vaccination(&form).unwrap_err();
        assert_eq!(errors.get("drive_id"), Some("Drive id is required"));

        let form = VaccinateForm {
            student_id: Some(1),
            drive_id: Some(9),
        };
        assert_eq!(
            validate_vaccination(&form),
            Ok(VaccinationRecordRequest {
                student_id: 1,
                drive_id: 9
            })
        );
    }

    #[test]
    fn login_fields_are_required() {
        let errors = validate_login(&Credentials::default()).unwrap_err();
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }
}
