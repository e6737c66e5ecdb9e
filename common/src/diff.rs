//! Dirty-field patches for partial updates.
//!
//! A patch holds the record id plus every field whose current value differs
//! from the snapshot taken when the form was opened. Omitted fields mean
//! "unchanged" to the backend, never "clear".

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::PortalError;

/// A form that can be diffed against its pristine snapshot.
pub trait FormSchema: Serialize {
    /// Identifier of the record being edited; `None` for a new record.
    fn record_id(&self) -> Option<i64>;

    /// Converts a changed field from its form shape to its wire shape.
    fn encode_field(_field: &str, value: Value) -> Value {
        value
    }
}

/// Partial record sent with `PATCH`.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    fields: Map<String, Value>,
}

impl Patch {
    pub fn id(&self) -> Option<i64> {
        self.fields.get("id").and_then(Value::as_i64)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Names of the changed fields, excluding `id`.
    pub fn changed_fields(&self) -> Vec<&str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|field| *field != "id")
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.fields.keys().any(|field| field != "id")
    }
}

impl Serialize for Patch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn as_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        _ => Map::new(),
    }
}

/// Builds `{id} ∪ changed fields` from the snapshot and the current values.
pub fn dirty_patch<F: FormSchema>(pristine: &F, current: &F) -> Result<Patch, PortalError> {
    let id = current
        .record_id()
        .or_else(|| pristine.record_id())
        .ok_or(PortalError::MissingId)?;

    let before = as_object(serde_json::to_value(pristine)?);
    let after = as_object(serde_json::to_value(current)?);

    let mut fields = Map::new();
    fields.insert("id".to_string(), Value::from(id));
    for (field, value) in after {
        if field == "id" || before.get(&field) == Some(&value) {
            continue;
        }
        let encoded = F::encode_field(&field, value);
        fields.insert(field, encoded);
    }

    Ok(Patch { fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::drive::DriveForm;
    use crate::model::student::StudentForm;

    fn student() -> StudentForm {
        StudentForm {
            id: Some(11),
            name: "Meera".into(),
            class: "Grade 5".into(),
            gender: "Female".into(),
            roll_no: "22".into(),
            phone_no: "9000".into(),
        }
    }

    fn drive() -> DriveForm {
        DriveForm {
            id: Some(2),
            vaccine_name: "covishield".into(),
            drive_date: "2025-03-01".into(),
            doses: 20,
            classes: vec!["Grade 1".into()],
        }
    }

    #[test]
    fn untouched_form_yields_only_id() {
        let patch = dirty_patch(&student(), &student()).unwrap();
        assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({"id": 11}));
        assert!(!patch.has_changes());
    }

    #[test]
    fn only_changed_fields_with_current_values() {
        let mut edited = student();
        edited.name = "Meera K".into();
        edited.phone_no = "9111".into();
        let patch = dirty_patch(&student(), &edited).unwrap();
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"id": 11, "name": "Meera K", "phone_no": "9111"})
        );
    }

    #[test]
    fn field_changed_back_is_not_dirty() {
        let mut edited = student();
        edited.class = "Grade 6".into();
        edited.class = "Grade 5".into();
        assert!(!dirty_patch(&student(), &edited).unwrap().has_changes());
    }

    #[test]
    fn drive_fields_are_encoded_for_the_wire() {
        let mut edited = drive();
        edited.classes.push("Grade 3".into());
        edited.drive_date = "2025-04-10".into();
        let patch = dirty_patch(&drive(), &edited).unwrap();
        assert_eq!(patch.id(), Some(2));
        assert_eq!(patch.get("classes").unwrap(), "Grade 1, Grade 3");
        assert_eq!(patch.get("drive_date").unwrap(), "2025-04-10T00:00:00+00:00");
        assert!(patch.get("doses").is_none());
        assert!(patch.get("vaccine_name").is_none());
    }

    #[test]
    fn new_record_cannot_be_patched() {
        let mut pristine = student();
        pristine.id = None;
        let current = pristine.clone();
        assert!(matches!(
            dirty_patch(&pristine, &current),
            Err(PortalError::MissingId)
        ));
    }
}
