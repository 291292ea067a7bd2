use axum::extract::{Form, FromRequest, FromRequestParts, Query, Request};
use axum::http::{HeaderMap, Method};
use gecko_service::{RequestView, find_ignore_case};

/// The parameters and headers of a widget request.
///
/// The dashboard sends its parameters either in the query string or as a
/// url-encoded form body, so both are collected, query first. This
/// extractor never rejects: whatever is malformed is left out and the
/// adapter decides whether the request can be answered.
#[derive(Debug, Clone, Default)]
pub struct GeckoboardRequest {
    params: Vec<(String, String)>,
    headers: HeaderMap,
}

impl<S> FromRequest<S> for GeckoboardRequest
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let mut params =
            match Query::<Vec<(String, String)>>::from_request_parts(
                &mut parts, state,
            )
            .await
            {
                Ok(Query(params)) => params,
                Err(rejection) => {
                    tracing::debug!(%rejection, "ignoring malformed query string");
                    Vec::new()
                }
            };

        let headers = parts.headers.clone();

        if parts.method != Method::GET && parts.method != Method::HEAD {
            let req = Request::from_parts(parts, body);
            match Form::<Vec<(String, String)>>::from_request(req, state).await
            {
                Ok(Form(form)) => params.extend(form),
                Err(rejection) => {
                    tracing::debug!(%rejection, "no form parameters");
                }
            }
        }

        Ok(Self { params, headers })
    }
}

impl RequestView for GeckoboardRequest {
    fn param(&self, name: &str) -> Option<&str> {
        find_ignore_case(&self.params, name)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
    use tokio::runtime::Runtime;

    fn extract(request: Request) -> GeckoboardRequest {
        let rt = Runtime::new().unwrap();
        rt.block_on(GeckoboardRequest::from_request(request, &()))
            .unwrap()
    }

    #[test]
    fn test_query_parameters() {
        let request = axum::http::Request::builder()
            .uri("/widget?Format=xml&type=2")
            .body(Body::empty())
            .unwrap();

        let extracted = extract(request);

        assert_eq!(extracted.param("format"), Some("xml"));
        assert_eq!(extracted.param("TYPE"), Some("2"));
    }

    #[test]
    fn test_form_parameters_follow_query() {
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/widget?type=3")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("format=1&type=5"))
            .unwrap();

        let extracted = extract(request);

        assert_eq!(extracted.param("format"), Some("1"));
        assert_eq!(extracted.param("type"), Some("3"));
    }

    #[test]
    fn test_non_form_body_is_ignored() {
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/widget")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"type":1}"#))
            .unwrap();

        let extracted = extract(request);

        assert_eq!(extracted.param("type"), None);
    }

    #[test]
    fn test_headers_are_kept() {
        let request = axum::http::Request::builder()
            .uri("/widget")
            .header(AUTHORIZATION, "Basic MTIzOlg=")
            .body(Body::empty())
            .unwrap();

        let extracted = extract(request);

        assert_eq!(extracted.header("Authorization"), Some("Basic MTIzOlg="));
        assert_eq!(extracted.header("authorization"), Some("Basic MTIzOlg="));
        assert_eq!(extracted.header("x-missing"), None);
    }
}
