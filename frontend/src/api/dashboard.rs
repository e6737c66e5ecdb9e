use common::dashboard::DashboardCounts;
use common::envelope::ApiResult;
use gloo_net::http::Request;

use super::read_response;
use crate::config::portal_config;

pub async fn counts() -> ApiResult<DashboardCounts> {
    let url = portal_config().student_endpoint("/vaccine-records/dashboard");
    read_response(Request::get(&url).send().await, "dashboard counts").await
}
