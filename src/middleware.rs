use axum::http::HeaderName;
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use uuid::Uuid;

const X_REQUEST_ID: &str = "x-request-id";

/// Tags every request with a fresh UUID so log lines from the OTP flow can
/// be correlated across handler and repository spans.
#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        Some(RequestId::new(
            Uuid::new_v4().to_string().parse().unwrap(),
        ))
    }
}

pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeUuidRequestId)
}
