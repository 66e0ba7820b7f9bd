use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use tracing::{trace, warn};

use crate::error::{ErrorEnvelope, RequestSummary, ResponseSummary, RestError};
use crate::request::Request;
use crate::session::Session;
use crate::{Error, Result};

mod direct;
pub use direct::DirectTransport;

mod proxy;
pub use proxy::ProxyTransport;

pub mod multipart;
pub use multipart::File;

#[cfg(test)]
pub(crate) mod mock;

/// Moves a [`Request`] to Discord and back.
///
/// Implementations must attach `session.token()` as the authorization header and classify the
/// response with [`check_response`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_raw(&self, session: &Session, request: Request) -> Result<Bytes>;
}

/// Success is 200, 201 or 204; 401 is [`Error::Unauthorized`]; anything else is a [`RestError`].
pub fn check_response(
    request: RequestSummary,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Bytes> {
    match status {
        StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(body),
        StatusCode::UNAUTHORIZED => Error::Unauthorized.into(),
        _ => {
            let envelope = serde_json::from_slice::<ErrorEnvelope>(&body).ok();
            warn!(
                method = %request.method,
                url = %request.url,
                status = status.as_u16(),
                code = envelope.as_ref().map(|e| e.code),
                "request failed"
            );

            let err = RestError {
                request,
                response: ResponseSummary { status, headers },
                body,
                envelope,
            };

            Error::Rest(Box::new(err)).into()
        }
    }
}

/// The part of a request every HTTP transport does the same way.
pub(crate) async fn execute(
    client: &reqwest::Client,
    url: String,
    session: &Session,
    request: Request,
    timeout: Duration,
) -> Result<Bytes> {
    let Request {
        method,
        content_type,
        body,
        mut headers,
        ..
    } = request;

    if !body.is_empty() && !headers.contains_key(CONTENT_TYPE) {
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_str(&content_type)?);
        }
    }

    let mut token = HeaderValue::from_str(session.token())?;
    token.set_sensitive(true);
    headers.insert(AUTHORIZATION, token);

    let summary = RequestSummary::new(method.clone(), url.clone(), &headers);

    // PUT and friends always carry a body, even a zero-length one
    let has_body = method != Method::GET && method != Method::DELETE;
    let mut builder = client
        .request(method, url)
        .headers(headers)
        .timeout(timeout);

    if has_body {
        builder = builder.body(body);
    }

    // reqwest errors carry the url, which may hold a webhook token
    let res = builder.send().await.map_err(reqwest::Error::without_url)?;
    let status = res.status();
    let headers = res.headers().clone();
    trace!(status = status.as_u16(), url = %summary.url, "received response");

    let body = res.bytes().await.map_err(reqwest::Error::without_url)?;
    check_response(summary, status, headers, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn summary() -> RequestSummary {
        RequestSummary::new(Method::GET, "http://proxy/api/v9/x".to_owned(), &HeaderMap::new())
    }

    #[test]
    fn test_success_statuses() {
        for status in [StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT] {
            let body = check_response(summary(), status, HeaderMap::new(), Bytes::from_static(b"{}")).unwrap();
            assert_eq!(&body[..], b"{}");
        }
    }

    #[test]
    fn test_unauthorized() {
        let err = check_response(summary(), StatusCode::UNAUTHORIZED, HeaderMap::new(), Bytes::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_rest_error() {
        let body = Bytes::from_static(br#"{"code":50013,"message":"Missing Permissions"}"#);
        let err = check_response(summary(), StatusCode::FORBIDDEN, HeaderMap::new(), body).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Rest);
        assert_eq!(err.code(), Some(50013));

        let rest = err.as_rest().unwrap();
        assert_eq!(rest.status(), StatusCode::FORBIDDEN);
        assert_eq!(rest.request.url, "http://proxy/api/v9/x");
        assert_eq!(rest.envelope.as_ref().unwrap().message, "Missing Permissions");
    }

    #[test]
    fn test_rest_error_unparseable_body() {
        let body = Bytes::from_static(b"<html>bad gateway</html>");
        let err = check_response(summary(), StatusCode::BAD_GATEWAY, HeaderMap::new(), body).unwrap_err();

        let rest = err.as_rest().unwrap();
        assert!(rest.envelope.is_none());
        assert_eq!(&rest.body[..], b"<html>bad gateway</html>");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_accepted_is_not_success() {
        let err = check_response(summary(), StatusCode::ACCEPTED, HeaderMap::new(), Bytes::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Rest);
    }
}
