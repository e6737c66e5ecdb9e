//! HTTP clients for the student and vaccine services.
//!
//! Every call resolves to an [`ApiResult`]: transport errors and bodies that
//! cannot be read collapse into [`Failure::unknown`], everything else goes
//! through the envelope decoder in `common`.

pub mod dashboard;
pub mod drives;
pub mod imports;
pub mod students;

use common::envelope::{self, ApiResult, Failure};
use common::query;
use gloo_console::{error, log};
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Reads and classifies a response. `what` names the call in console logs.
pub(crate) async fn read_response<T: DeserializeOwned>(
    sent: Result<Response, gloo_net::Error>,
    what: &str,
) -> ApiResult<T> {
    let response = match sent {
        Ok(response) => response,
        Err(err) => {
            error!(format!("{what}: request failed: {err}"));
            return Err(Failure::unknown());
        }
    };

    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            error!(format!("{what}: unreadable body (status {status}): {err}"));
            return Err(Failure::unknown());
        }
    };

    let result = envelope::decode_response(status, &body);
    if let Err(failure) = &result {
        log!(format!("{what}: {failure}"));
    }
    result
}

/// Sends `body` as JSON with the given method builder.
pub(crate) async fn send_json<B, T>(builder: RequestBuilder, body: &B, what: &str) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = match builder.json(body) {
        Ok(request) => request,
        Err(err) => {
            error!(format!("{what}: could not encode body: {err}"));
            return Err(Failure::unknown());
        }
    };
    read_response(request.send().await, what).await
}

/// Appends already-cleaned query pairs to `url`.
pub(crate) fn with_query(url: String, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        url
    } else {
        format!("{url}?{}", query::to_query_string(pairs))
    }
}
