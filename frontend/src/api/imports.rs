use common::envelope::ApiResult;
use common::model::import_record::ImportRecordStatus;
use common::model::Page;
use common::pagination::Pagination;
use gloo_net::http::Request;

use super::{read_response, with_query};
use crate::config::portal_config;

/// One page of import/report job status rows, newest first as the service
/// returns them.
pub async fn list(pagination: Pagination) -> ApiResult<Page<ImportRecordStatus>> {
    let pairs = pagination.query_pairs();
    let url = with_query(portal_config().student_endpoint("/bulk-upload"), &pairs);
    let request = Request::get(&url);
    read_response(request.send().await, "list import records").await
}
