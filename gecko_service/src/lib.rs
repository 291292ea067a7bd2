//! Adapter between Geckoboard custom widget requests and application data.
//!
//! A request carries three things: the `format` parameter (JSON or XML),
//! the `type` parameter (which widget shape is wanted) and, optionally, an
//! API key in a Basic `Authorization` header. [`GeckoboardService`] parses
//! those, calls back into the application for the payload and renders it
//! the way the dashboard expects.
//!
//! ```
//! use gecko_service::{GeckoboardService, MemoryRequest};
//! use widget_types::DataItem;
//!
//! let request = MemoryRequest::new()
//!     .with_param("format", "json")
//!     .with_param("type", "1");
//!
//! let service = GeckoboardService::new(&request, |_api_key, _widget_type| {
//!     Ok(Some(vec![DataItem::new(123, ""), DataItem::new(238, "")].into()))
//! })?;
//!
//! let response = service.result()?;
//! assert_eq!(
//!     response.body,
//!     br#"{"item":[{"text":"","value":123},{"text":"","value":238}]}"#
//! );
//! # Ok::<(), gecko_service::AdapterError>(())
//! ```

mod auth;
mod encode;
mod error;
mod parse;
mod request;
mod service;

pub use auth::api_key_from_authorization;
pub use encode::{EncodeError, RenderedResponse, ResponseEncoder, SerdeEncoder};
pub use error::AdapterError;
pub use parse::{
    AUTHORIZATION_HEADER, PARAM_FORMAT, PARAM_TYPE, ParsedRequest,
    parse_format, parse_widget_type,
};
pub use request::{MemoryRequest, RequestView, find_ignore_case};
pub use service::{BoxError, GeckoboardService, ResolveResult};
