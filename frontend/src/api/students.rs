use common::diff::Patch;
use common::envelope::{ApiResult, Failure, Success};
use common::model::import_record::{ImportKind, ReportLink};
use common::model::student::{Student, VaccinationRecordRequest};
use common::model::Page;
use common::pagination::Pagination;
use common::query::{clean_filters, list_query, ReportFilters, StudentFilters};
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

use super::{read_response, send_json, with_query};
use crate::config::portal_config;

fn invalid_query(err: common::error::PortalError) -> Failure {
    Failure::new("Invalid Filters", err.to_string())
}

pub async fn list(pagination: Pagination, filters: StudentFilters) -> ApiResult<Page<Student>> {
    let pairs = list_query(pagination, &filters).map_err(invalid_query)?;
    let url = with_query(portal_config().student_endpoint("/vaccine-records/students"), &pairs);
    let request = Request::get(&url);
    read_response(request.send().await, "list students").await
}

pub async fn add(student: Student) -> ApiResult<Success<Student>> {
    let url = portal_config().student_endpoint("/students");
    send_json(Request::post(&url), &student, "add student").await
}

pub async fn update(patch: Patch) -> ApiResult<Success<Student>> {
    let url = portal_config().student_endpoint("/students");
    send_json(Request::patch(&url), &patch, "update student").await
}

pub async fn vaccinate(record: VaccinationRecordRequest) -> ApiResult<Success<Student>> {
    let url = portal_config().student_endpoint("/vaccine-records");
    send_json(Request::post(&url), &record, "vaccinate student").await
}

/// Hands a spreadsheet to the asynchronous importer. The envelope only
/// acknowledges receipt; progress shows up in the import status list.
pub async fn bulk_upload(kind: ImportKind, file: File) -> ApiResult<Success<Value>> {
    let form = FormData::new().map_err(|_| Failure::unknown())?;
    for part in ImportKind::UPLOAD_PARTS {
        form.append_with_blob_and_filename(part, &file, &file.name())
            .map_err(|_| Failure::unknown())?;
    }

    let url = portal_config().student_endpoint(kind.path());
    let request = Request::post(&url)
        .header("Accept", "application/json")
        .body(form)
        .map_err(|_| Failure::unknown())?;
    read_response(request.send().await, kind.label()).await
}

pub async fn generate_report(filters: ReportFilters) -> ApiResult<ReportLink> {
    let pairs = clean_filters(&filters).map_err(invalid_query)?;
    let url = with_query(portal_config().student_endpoint("/vaccine-records/genrate-report"), &pairs);
    let request = Request::get(&url).header("Accept", "application/json");
    read_response(request.send().await, "generate report").await
}
