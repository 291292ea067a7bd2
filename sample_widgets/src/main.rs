/**
 * This is the main entrypoint for the `sample_widgets` service.
 *
 * It serves sample data for every Geckoboard custom widget type, with and
 * without API key checks, so a dashboard can be pointed at it to try the
 * widgets out.
 */
use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{iter::once, net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    sensitive_headers::SetSensitiveRequestHeadersLayer, trace::TraceLayer,
};

mod handlers;
mod widgets;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
struct Config {
    listen_addr: SocketAddr,
    demo_api_key: String,
    trace_resolver_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            demo_api_key: "123".to_string(),
            trace_resolver_errors: false,
        }
    }
}

#[derive(Debug, Clone)]
struct AppContext {
    config: Arc<Config>,
}

impl gecko_app::ContextProvider<Config> for AppContext {
    fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the application context
    let app_context: AppContext =
        gecko_app::create_app_context::<AppContext, Config>()?;

    let addr = app_context.config.listen_addr;

    gecko_axum::run_app(app(app_context), addr).await
}

fn app(app_context: AppContext) -> Router {
    // Set up a trace layer
    let trace_layer = TraceLayer::new_for_http().on_request(
        |request: &Request<Body>, _: &tracing::Span| {
            tracing::info!(
                "received request: {method} {uri}",
                method = request.method(),
                uri = request.uri()
            );
        },
    );

    let compression_layer = CompressionLayer::new().gzip(true).deflate(true);

    Router::new()
        .route(
            "/geckoboard/test_widget",
            get(handlers::test_widget).post(handlers::test_widget),
        )
        .route(
            "/geckoboard/test_widget_api",
            get(handlers::test_widget_api).post(handlers::test_widget_api),
        )
        .route(
            "/geckoboard/test_widget_api2",
            get(handlers::test_widget_api2).post(handlers::test_widget_api2),
        )
        .route("/health", get(handlers::health))
        .fallback(not_found)
        .layer(trace_layer)
        // keep API keys out of the request logs
        .layer(SetSensitiveRequestHeadersLayer::new(once(AUTHORIZATION)))
        .layer(compression_layer)
        .with_state(app_context)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "not found",
        })),
    )
}
