use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::diff::{dirty_patch, FormSchema, Patch};
use crate::error::PortalError;

/// A student as stored by the student service.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Student {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub class: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub roll_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccine_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccine_date: Option<String>,
}

impl Student {
    pub fn is_vaccinated(&self) -> bool {
        self.vaccination.unwrap_or(false)
    }
}

/// Editable subset of a [`Student`] backing the add/edit dialog.
///
/// `id` is `None` while adding. Gender and roll number are locked once the
/// dialog edits an existing record.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    #[serde(skip)]
    pub id: Option<i64>,
    pub name: String,
    pub class: String,
    pub gender: String,
    pub roll_no: String,
    pub phone_no: String,
}

impl StudentForm {
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            class: student.class.clone(),
            gender: student.gender.clone(),
            roll_no: student.roll_no.clone(),
            phone_no: student.phone_no.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Copy with the typed text fields trimmed. Both the create body and the
    /// edit patch are built from this.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            class: self.class.clone(),
            gender: self.gender.clone(),
            roll_no: self.roll_no.trim().to_string(),
            phone_no: self.phone_no.trim().to_string(),
        }
    }

    /// Full record posted when creating a student.
    pub fn to_new_student(&self) -> Student {
        let form = self.normalized();
        Student {
            id: None,
            name: form.name,
            class: form.class,
            gender: form.gender,
            roll_no: form.roll_no,
            phone_no: form.phone_no,
            ..Student::default()
        }
    }

    /// `PATCH` body for an edit opened from `pristine`: the id plus the fields
    /// whose trimmed value changed.
    pub fn edit_patch(&self, pristine: &StudentForm) -> Result<Patch, PortalError> {
        dirty_patch(&pristine.normalized(), &self.normalized())
    }
}

impl FormSchema for StudentForm {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

/// Body of `POST /vaccine-records`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaccinationRecordRequest {
    pub student_id: i64,
    pub drive_id: i64,
}

/// Vaccinate dialog values before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaccinateForm {
    pub student_id: Option<i64>,
    pub drive_id: Option<i64>,
}

impl VaccinateForm {
    pub fn for_student(student: &Student) -> Self {
        Self {
            student_id: student.id,
            drive_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_server_rows() {
        let student: Student =
            serde_json::from_str(r#"{"id":7,"name":"Asha","class":"Grade 3","vaccination":null}"#)
                .unwrap();
        assert_eq!(student.id, Some(7));
        assert_eq!(student.gender, "");
        assert!(!student.is_vaccinated());
    }

    #[test]
    fn null_text_columns_read_as_empty() {
        let student: Student =
            serde_json::from_str(r#"{"id":8,"name":"Kiran","phone_no":null,"roll_no":null}"#).unwrap();
        assert_eq!(student.phone_no, "");
        assert_eq!(student.roll_no, "");
    }

    fn editing(name: &str, phone_no: &str) -> StudentForm {
        StudentForm {
            id: Some(5),
            name: name.into(),
            class: "Grade 4".into(),
            gender: "Female".into(),
            roll_no: "21".into(),
            phone_no: phone_no.into(),
        }
    }

    #[test]
    fn edit_patch_sends_trimmed_values() {
        let pristine = editing("Bob", "555");
        let patch = editing("  Bobby  ", "555").edit_patch(&pristine).unwrap();
        assert_eq!(patch.get("name"), Some(&serde_json::json!("Bobby")));
        assert_eq!(patch.changed_fields(), vec!["name"]);
    }

    #[test]
    fn whitespace_only_edit_is_no_change() {
        let pristine = editing("Bob", "555");
        let patch = editing("Bob ", " 555").edit_patch(&pristine).unwrap();
        assert_eq!(patch.id(), Some(5));
        assert!(!patch.has_changes());
    }

    #[test]
    fn new_student_omits_id_and_vaccination() {
        let form = StudentForm {
            id: Some(3),
            name: " Ravi ".into(),
            class: "Grade 2".into(),
            gender: "Male".into(),
            roll_no: "12".into(),
            phone_no: "555".into(),
        };
        let body = serde_json::to_value(form.to_new_student()).unwrap();
        assert!(body.get("id").is_none());
        assert!(body.get("vaccination").is_none());
        assert_eq!(body["name"], "Ravi");
    }
}
