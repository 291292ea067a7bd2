use widget_types::{ResponseFormat, WidgetType};

use crate::{AdapterError, RequestView, auth::api_key_from_authorization};

pub const PARAM_FORMAT: &str = "format";
pub const PARAM_TYPE: &str = "type";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// The validated parameters of a widget request.
///
/// Only constructed once the widget type is known to be valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub format: ResponseFormat,
    pub widget_type: WidgetType,
    /// Empty when the request carried no usable Basic credential.
    pub api_key: String,
}

impl ParsedRequest {
    /// Extracts format, widget type and API key from a request.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::BadRequest`] if the `type` parameter is
    /// missing, not an integer, or not a known widget ordinal. Nothing
    /// else about the request can fail.
    pub fn from_request<R>(request: &R) -> Result<Self, AdapterError>
    where
        R: RequestView + ?Sized,
    {
        let format = parse_format(request.param(PARAM_FORMAT));

        let Some(widget_type) = parse_widget_type(request.param(PARAM_TYPE))
        else {
            tracing::debug!("rejecting widget request without a valid type");
            return Err(AdapterError::BadRequest);
        };

        let api_key = request
            .header(AUTHORIZATION_HEADER)
            .map(api_key_from_authorization)
            .unwrap_or_default();

        tracing::debug!(
            ?format,
            %widget_type,
            has_api_key = !api_key.is_empty(),
            "parsed widget request"
        );

        Ok(Self {
            format,
            widget_type,
            api_key,
        })
    }
}

/// Maps the `format` parameter to a response format.
///
/// `1`/`xml` select XML and `0`/`json` select JSON, ignoring case. Any
/// other value, including none at all, falls back to JSON rather than
/// failing: the dashboard does not always send what its documentation
/// says.
#[must_use]
pub fn parse_format(raw: Option<&str>) -> ResponseFormat {
    let raw = raw.map(str::trim).unwrap_or_default();

    if raw == "1" || raw.eq_ignore_ascii_case("xml") {
        ResponseFormat::Xml
    } else {
        ResponseFormat::Json
    }
}

/// Maps the `type` parameter to a widget type, `None` if it is missing,
/// not an integer, or outside the known ordinals.
#[must_use]
pub fn parse_widget_type(raw: Option<&str>) -> Option<WidgetType> {
    raw?.trim()
        .parse::<i64>()
        .ok()
        .and_then(WidgetType::from_ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryRequest;

    const AUTHORIZATION_TEST_123: &str = "Basic MTIzOlg=";

    #[test]
    fn test_format_spellings() {
        assert_eq!(parse_format(Some("1")), ResponseFormat::Xml);
        assert_eq!(parse_format(Some("xml")), ResponseFormat::Xml);
        assert_eq!(parse_format(Some("XML")), ResponseFormat::Xml);
        assert_eq!(parse_format(Some("0")), ResponseFormat::Json);
        assert_eq!(parse_format(Some("json")), ResponseFormat::Json);
        assert_eq!(parse_format(Some("JsOn")), ResponseFormat::Json);
    }

    #[test]
    fn test_format_defaults_to_json() {
        assert_eq!(parse_format(None), ResponseFormat::Json);
        assert_eq!(parse_format(Some("")), ResponseFormat::Json);
        assert_eq!(parse_format(Some("foobar")), ResponseFormat::Json);
        assert_eq!(parse_format(Some("2")), ResponseFormat::Json);
    }

    #[test]
    fn test_widget_type_values() {
        assert_eq!(
            parse_widget_type(Some("1")),
            Some(WidgetType::NumberAndSecondaryStat)
        );
        assert_eq!(
            parse_widget_type(Some(" 7 ")),
            Some(WidgetType::GeckOMeter)
        );
        assert_eq!(parse_widget_type(Some("0")), None);
        assert_eq!(parse_widget_type(Some("8")), None);
        assert_eq!(parse_widget_type(Some("bar")), None);
        assert_eq!(parse_widget_type(Some("")), None);
        assert_eq!(parse_widget_type(Some("2.0")), None);
        assert_eq!(parse_widget_type(None), None);
    }

    #[test]
    fn test_valid_request_with_xml_and_type_2() {
        let request = MemoryRequest::new()
            .with_header("Authorization", AUTHORIZATION_TEST_123)
            .with_param("format", "xml")
            .with_param("type", "2");

        let parsed = ParsedRequest::from_request(&request).unwrap();

        assert_eq!(parsed.api_key, "123");
        assert_eq!(parsed.format, ResponseFormat::Xml);
        assert_eq!(parsed.widget_type, WidgetType::RagColumnAndNumbers);
    }

    #[test]
    fn test_valid_request_with_json_and_type_4() {
        let request = MemoryRequest::new()
            .with_header("Authorization", AUTHORIZATION_TEST_123)
            .with_param("format", "json")
            .with_param("type", "4");

        let parsed = ParsedRequest::from_request(&request).unwrap();

        assert_eq!(parsed.api_key, "123");
        assert_eq!(parsed.format, ResponseFormat::Json);
        assert_eq!(parsed.widget_type, WidgetType::Text);
    }

    #[test]
    fn test_missing_authorization_means_empty_key() {
        let request = MemoryRequest::new().with_param("type", "3");

        let parsed = ParsedRequest::from_request(&request).unwrap();

        assert_eq!(parsed.api_key, "");
        assert_eq!(parsed.format, ResponseFormat::Json);
    }

    #[test]
    fn test_bad_type_is_rejected() {
        for raw in [None, Some("bar"), Some("0"), Some("8")] {
            let mut request = MemoryRequest::new().with_param("format", "xml");
            if let Some(raw) = raw {
                request = request.with_param("type", raw);
            }

            assert_eq!(
                ParsedRequest::from_request(&request),
                Err(AdapterError::BadRequest),
                "type {raw:?}"
            );
        }
    }
}
