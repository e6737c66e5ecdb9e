use common::envelope::{ApiResult, Success};
use common::model::import_record::{ImportKind, ReportLink};
use common::model::student::Student;
use common::model::Page;
use common::query::FilterField;
use common::sequence::RequestToken;
use serde_json::Value;

/// Editable fields of the add/edit dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentField {
    Name,
    Class,
    Gender,
    RollNo,
    PhoneNo,
}

pub enum Msg {
    Fetch,
    Loaded(RequestToken, ApiResult<Page<Student>>),
    SetPage(u32),
    SetFilter(FilterField, String),

    OpenAdd,
    OpenEdit(Student),
    CloseDialog,
    EditField(StudentField, String),
    Submit,
    Saved(ApiResult<Success<Student>>),

    OpenVaccinate(Student),
    SetDriveId(String),
    SubmitVaccination,
    Vaccinated(ApiResult<Success<Student>>),

    Import(ImportKind, web_sys::File),
    Imported(ImportKind, ApiResult<Success<Value>>),

    OpenReport,
    GenerateReport,
    ReportReady(ApiResult<ReportLink>),
}
