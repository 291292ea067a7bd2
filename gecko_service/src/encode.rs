use serde::Serialize;
use thiserror::Error;
use widget_types::{ResponseFormat, number};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XML encoding failed: {0}")]
    Xml(String),
}

/// The serializers used to render widget payloads.
///
/// Hosts with their own JSON or XML conventions can substitute these;
/// [`SerdeEncoder`] is what the dashboard expects.
pub trait ResponseEncoder {
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    fn encode_json<T: Serialize>(&self, value: &T)
    -> Result<Vec<u8>, EncodeError>;

    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as XML.
    fn encode_xml<T: Serialize>(&self, value: &T)
    -> Result<Vec<u8>, EncodeError>;
}

/// Compact JSON via `serde_json`, and UTF-8 XML via `quick-xml` with a
/// declaration and two-space indentation. The XML root element is the
/// name of the serialized type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeEncoder;

impl ResponseEncoder for SerdeEncoder {
    fn encode_json<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(value)?)
    }

    fn encode_xml<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, EncodeError> {
        let mut xml = String::from(XML_DECLARATION);

        let mut serializer = quick_xml::se::Serializer::new(&mut xml);
        serializer.indent(' ', 2);
        // XML has no number type; decimals go out as their exact text.
        number::as_text(|| value.serialize(serializer))
            .map_err(|e| EncodeError::Xml(e.to_string()))?;

        Ok(xml.into_bytes())
    }
}

/// A fully rendered body, ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl RenderedResponse {
    #[must_use]
    pub const fn new(format: ResponseFormat, body: Vec<u8>) -> Self {
        Self {
            content_type: format.content_type(),
            body,
        }
    }
}
