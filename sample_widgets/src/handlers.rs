use axum::extract::State;
use axum::response::IntoResponse;
use gecko_axum::{GeckoboardRequest, GeckoboardResponse};
use gecko_service::GeckoboardService;
use serde_json::json;
use tracing::instrument;

use crate::AppContext;
use crate::widgets::{echo_api_key, sample_payload};

/// Sample data for each widget type, open to everyone.
#[instrument(skip_all)]
pub async fn test_widget(
    State(context): State<AppContext>,
    request: GeckoboardRequest,
) -> GeckoboardResponse {
    tracing::info!("test_widget");

    GeckoboardService::new(&request, sample_payload)
        .and_then(|service| {
            service
                .trace_errors(context.config.trace_resolver_errors)
                .result()
        })
        .into()
}

/// Sample data for each widget type, for the demo API key only.
#[instrument(skip_all)]
pub async fn test_widget_api(
    State(context): State<AppContext>,
    request: GeckoboardRequest,
) -> GeckoboardResponse {
    tracing::info!("test_widget_api");

    let demo_api_key = context.config.demo_api_key.as_str();

    GeckoboardService::new(&request, sample_payload)
        .and_then(|service| {
            service
                .with_authorizer(move |api_key| api_key == demo_api_key)
                .trace_errors(context.config.trace_resolver_errors)
                .result()
        })
        .into()
}

/// Returns the caller's API key as the text of the first item.
#[instrument(skip_all)]
pub async fn test_widget_api2(
    State(context): State<AppContext>,
    request: GeckoboardRequest,
) -> GeckoboardResponse {
    tracing::info!("test_widget_api2");

    GeckoboardService::new(&request, echo_api_key)
        .and_then(|service| {
            service
                .trace_errors(context.config.trace_resolver_errors)
                .result()
        })
        .into()
}

#[instrument]
pub async fn health() -> impl IntoResponse {
    tracing::info!("health check");

    axum::Json(json!({ "status" : "UP" }))
}
