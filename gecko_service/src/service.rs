use serde::Serialize;
use widget_types::{
    ResponseFormat, WidgetPayload, WidgetRecord, WidgetSequence, WidgetType,
};

use crate::{
    AdapterError, EncodeError, ParsedRequest, RenderedResponse,
    RequestView, ResponseEncoder, SerdeEncoder,
};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// What a resolver returns: a payload, nothing, or a failure.
pub type ResolveResult = Result<Option<WidgetPayload>, BoxError>;

type Authorizer<'a> = Box<dyn Fn(&str) -> bool + Send + Sync + 'a>;

/// Answers one Geckoboard widget request.
///
/// Construction validates the request; [`GeckoboardService::result`]
/// authorizes the API key, asks the resolver for the payload and renders
/// it in the requested format.
pub struct GeckoboardService<'a, F> {
    request: ParsedRequest,
    resolver: F,
    authorizer: Option<Authorizer<'a>>,
    trace_errors: bool,
}

impl<'a, F> GeckoboardService<'a, F>
where
    F: Fn(&str, WidgetType) -> ResolveResult,
{
    /// Parses the request and keeps the resolver for later.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::BadRequest`] if the request does not name a
    /// known widget type.
    pub fn new<R>(request: &R, resolver: F) -> Result<Self, AdapterError>
    where
        R: RequestView + ?Sized,
    {
        Ok(Self::from_parsed(ParsedRequest::from_request(request)?, resolver))
    }

    pub fn from_parsed(request: ParsedRequest, resolver: F) -> Self {
        Self {
            request,
            resolver,
            authorizer: None,
            trace_errors: false,
        }
    }

    /// Only answer when `authorizer` accepts the API key. Without one,
    /// every key, including the empty one, is accepted.
    #[must_use]
    pub fn with_authorizer(
        mut self,
        authorizer: impl Fn(&str) -> bool + Send + Sync + 'a,
    ) -> Self {
        self.authorizer = Some(Box::new(authorizer));
        self
    }

    /// Log resolver failures at error level. Off by default.
    #[must_use]
    pub fn trace_errors(mut self, enabled: bool) -> Self {
        self.trace_errors = enabled;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.request.api_key
    }

    pub const fn format(&self) -> ResponseFormat {
        self.request.format
    }

    pub const fn widget_type(&self) -> WidgetType {
        self.request.widget_type
    }

    /// Renders the response with the standard serializers.
    ///
    /// # Errors
    ///
    /// See [`GeckoboardService::result_with`].
    pub fn result(&self) -> Result<RenderedResponse, AdapterError> {
        self.result_with(&SerdeEncoder)
    }

    /// Renders the response with the given serializers.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Unauthorized`] if the authorizer rejects
    /// the API key, and [`AdapterError::Internal`] if the resolver fails,
    /// returns nothing, or the payload cannot be encoded.
    pub fn result_with<E: ResponseEncoder>(
        &self,
        encoder: &E,
    ) -> Result<RenderedResponse, AdapterError> {
        let rejected = self
            .authorizer
            .as_ref()
            .is_some_and(|authorize| !authorize(self.api_key()));
        if rejected {
            tracing::info!(
                widget_type = %self.widget_type(),
                "rejecting widget request with invalid api key"
            );
            return Err(AdapterError::Unauthorized);
        }

        let payload = match (self.resolver)(self.api_key(), self.widget_type())
        {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                self.trace_failure(&"resolver returned no payload");
                return Err(AdapterError::Internal);
            }
            Err(e) => {
                self.trace_failure(&e);
                return Err(AdapterError::Internal);
            }
        };

        let body =
            render(encoder, self.format(), &payload).map_err(|e| {
                tracing::error!(error = %e, "failed to encode widget payload");
                AdapterError::Internal
            })?;

        Ok(RenderedResponse::new(self.format(), body))
    }

    fn trace_failure(&self, cause: &dyn std::fmt::Display) {
        if self.trace_errors {
            tracing::error!(
                widget_type = %self.widget_type(),
                "attempt to retrieve result for widget failed: {cause}"
            );
        }
    }
}

/// Sequences are wrapped so every response has the same `item` shape.
#[derive(Serialize)]
struct ItemEnvelope<'a, T> {
    item: &'a [T],
}

fn render<E: ResponseEncoder>(
    encoder: &E,
    format: ResponseFormat,
    payload: &WidgetPayload,
) -> Result<Vec<u8>, EncodeError> {
    match payload {
        WidgetPayload::Record(WidgetRecord::LineChart(chart)) => {
            encode(encoder, format, chart)
        }
        WidgetPayload::Record(WidgetRecord::GeckOMeter(meter)) => {
            encode(encoder, format, meter)
        }
        WidgetPayload::Sequence(WidgetSequence::Items(items)) => {
            encode(encoder, format, &ItemEnvelope { item: items.as_slice() })
        }
        WidgetPayload::Sequence(WidgetSequence::Text(items)) => {
            encode(encoder, format, &ItemEnvelope { item: items.as_slice() })
        }
        WidgetPayload::Sequence(WidgetSequence::Pie(items)) => {
            encode(encoder, format, &ItemEnvelope { item: items.as_slice() })
        }
    }
}

fn encode<E: ResponseEncoder, T: Serialize>(
    encoder: &E,
    format: ResponseFormat,
    value: &T,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        ResponseFormat::Json => encoder.encode_json(value),
        ResponseFormat::Xml => encoder.encode_xml(value),
    }
}
