use http::StatusCode;
use thiserror::Error;

/// Why a widget request could not be answered.
///
/// The messages are shown to the dashboard as-is. Internal failures never
/// carry their cause; it goes to the trace log instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterError {
    #[error(
        "missing or invalid type parameter; must identify one of the known widget types"
    )]
    BadRequest,
    #[error("invalid API key.")]
    Unauthorized,
    #[error("could not complete the request")]
    Internal,
}

impl AdapterError {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AdapterError::BadRequest.status(), 400);
        assert_eq!(AdapterError::Unauthorized.status(), 403);
        assert_eq!(AdapterError::Internal.status(), 500);
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            AdapterError::BadRequest.to_string(),
            "missing or invalid type parameter; must identify one of the known widget types"
        );
        assert_eq!(AdapterError::Unauthorized.to_string(), "invalid API key.");
        assert_eq!(
            AdapterError::Internal.to_string(),
            "could not complete the request"
        );
    }
}
