use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Status row of an asynchronous bulk import or report job.
///
/// Field names follow the student service, including its `Id` and
/// `request_Type` spellings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ImportRecordStatus {
    #[serde(rename = "Id", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub error_message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub processed_records: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_records: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(rename = "request_Type", deserialize_with = "null_as_default")]
    pub request_type: String,
}

/// Successful report generation: a link to the produced file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportLink {
    pub file: String,
}

/// Which bulk upload endpoint a spreadsheet goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Students,
    VaccineRecords,
}

impl ImportKind {
    pub const ACCEPTED_EXTENSION: &'static str = ".xlsx";

    /// Multipart part names the spreadsheet is attached under. The two import
    /// endpoints read different names, so every upload carries both.
    pub const UPLOAD_PARTS: [&'static str; 2] = ["file", "dataFile"];

    pub fn path(self) -> &'static str {
        match self {
            ImportKind::Students => "/bulk-upload/students",
            ImportKind::VaccineRecords => "/bulk-upload/vaccine-records",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImportKind::Students => "Bulk Student Import",
            ImportKind::VaccineRecords => "Bulk Vaccine Records Import",
        }
    }

    pub fn accepts(file_name: &str) -> bool {
        file_name
            .to_ascii_lowercase()
            .ends_with(Self::ACCEPTED_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_service_field_spellings() {
        let record: ImportRecordStatus = serde_json::from_str(
            r#"{"Id":3,"file_name":"a.xlsx","status":"DONE","request_Type":"STUDENT_UPLOAD","processed_records":9,"total_records":10}"#,
        )
        .unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.request_type, "STUDENT_UPLOAD");
        assert_eq!(record.error_message, "");
    }

    #[test]
    fn null_columns_read_as_empty() {
        let record: ImportRecordStatus = serde_json::from_str(
            r#"{"Id":4,"file_name":"b.xlsx","error_message":null,"file_path":null,"processed_records":null}"#,
        )
        .unwrap();
        assert_eq!(record.error_message, "");
        assert_eq!(record.file_path, "");
        assert_eq!(record.processed_records, 0);
    }

    #[test]
    fn uploads_attach_both_part_names() {
        assert_eq!(ImportKind::UPLOAD_PARTS, ["file", "dataFile"]);
        assert_ne!(ImportKind::Students.path(), ImportKind::VaccineRecords.path());
    }

    #[test]
    fn only_spreadsheets_are_accepted() {
        assert!(ImportKind::accepts("roster.XLSX"));
        assert!(!ImportKind::accepts("roster.csv"));
    }
}
