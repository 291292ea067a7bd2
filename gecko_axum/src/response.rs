use axum::Json;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use gecko_service::{AdapterError, RenderedResponse};
use serde_json::json;

/// The outcome of a widget request, as an axum response.
///
/// Errors are answered with their status and a `{"message": ...}` body.
#[derive(Debug)]
pub struct GeckoboardResponse(pub Result<RenderedResponse, AdapterError>);

impl From<Result<RenderedResponse, AdapterError>> for GeckoboardResponse {
    fn from(result: Result<RenderedResponse, AdapterError>) -> Self {
        Self(result)
    }
}

impl IntoResponse for GeckoboardResponse {
    fn into_response(self) -> Response {
        match self.0 {
            Ok(rendered) => (
                [(header::CONTENT_TYPE, rendered.content_type)],
                rendered.body,
            )
                .into_response(),
            Err(error) => (
                error.status(),
                Json(json!({
                    "message": error.to_string(),
                })),
            )
                .into_response(),
        }
    }
}
