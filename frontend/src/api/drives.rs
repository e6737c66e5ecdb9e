use common::diff::Patch;
use common::envelope::{ApiResult, Success};
use common::model::drive::VaccineDrive;
use common::model::Page;
use gloo_net::http::Request;

use super::{read_response, send_json};
use crate::config::portal_config;

const DRIVES_PATH: &str = "/vaccine/drives";

/// All drives. The endpoint is unpaged, so `total` stays zero.
pub async fn list() -> ApiResult<Page<VaccineDrive>> {
    let url = portal_config().vaccine_endpoint(DRIVES_PATH);
    read_response(Request::get(&url).send().await, "list drives").await
}

pub async fn add(drive: VaccineDrive) -> ApiResult<Success<VaccineDrive>> {
    let url = portal_config().vaccine_endpoint(DRIVES_PATH);
    send_json(Request::post(&url), &drive, "add drive").await
}

pub async fn update(patch: Patch) -> ApiResult<Success<VaccineDrive>> {
    let url = portal_config().vaccine_endpoint(DRIVES_PATH);
    send_json(Request::patch(&url), &patch, "update drive").await
}
