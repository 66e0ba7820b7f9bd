use async_trait::async_trait;
use bytes::Bytes;
use tracing::instrument;
use url::Url;

use super::{execute, Transport};
use crate::endpoints::redact_token;
use crate::config::ProxyConfig;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

/// Sends every request to a rate-limiting proxy that forwards it to Discord.
///
/// The proxy owns the user agent and rate limit handling, so only the authorization header is added here.
#[derive(Clone, Debug)]
pub struct ProxyTransport {
    client: reqwest::Client,
    config: ProxyConfig,
}

impl ProxyTransport {
    pub fn new(config: ProxyConfig) -> Result<ProxyTransport> {
        let client = reqwest::ClientBuilder::new().use_rustls_tls().build()?;
        Ok(ProxyTransport::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: ProxyConfig) -> ProxyTransport {
        ProxyTransport { client, config }
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// `endpoint` may already carry a query string.
    pub fn url_for(&self, endpoint: &str) -> Result<Url> {
        let raw = format!(
            "{}://{}{}{}",
            self.config.proxy_scheme, self.config.proxy_host, self.config.api_base, endpoint
        );

        Ok(Url::parse(&raw)?)
    }
}

#[async_trait]
impl Transport for ProxyTransport {
    #[instrument(skip(self, session, request), fields(method = %request.method, endpoint = %redact_token(&request.endpoint)))]
    async fn fetch_raw(&self, session: &Session, request: Request) -> Result<Bytes> {
        let url = self.url_for(&request.endpoint)?;
        execute(&self.client, url.into(), session, request, self.config.timeout()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::APPLICATION_JSON;
    use crate::ErrorKind;
    use reqwest::Method;
    use std::sync::Arc;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, Session) {
        let server = MockServer::start().await;
        let host = server.uri().trim_start_matches("http://").to_owned();

        let transport = ProxyTransport::new(ProxyConfig::new(host)).unwrap();
        let session = Session::new("Bot secret", Arc::new(transport));
        (server, session)
    }

    #[test]
    fn test_url_for() {
        let transport = ProxyTransport::new(ProxyConfig::new("proxy:8080")).unwrap();
        let url = transport.url_for("/channels/1/messages?limit=2").unwrap();

        assert_eq!(url.as_str(), "http://proxy:8080/api/v9/channels/1/messages?limit=2");
    }

    #[tokio::test]
    async fn test_get() {
        let (server, session) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v9/channels/1/messages"))
            .and(query_param("limit", "2"))
            .and(header("authorization", "Bot secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let req = Request::new(Method::GET, "/channels/1/messages?limit=2");
        let body = session.fetch_raw(req).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_post_json() {
        let (server, session) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v9/channels/1/messages"))
            .and(header("content-type", APPLICATION_JSON))
            .and(body_string(r#"{"content":"hi"}"#))
            .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let req = Request::new(Method::POST, "/channels/1/messages")
            .with_body(APPLICATION_JSON, r#"{"content":"hi"}"#);
        let body = session.fetch_raw(req).await.unwrap();
        assert_eq!(&body[..], br#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn test_caller_content_type_wins() {
        let (server, session) = setup().await;

        Mock::given(method("PATCH"))
            .and(header("content-type", "text/plain"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let req = Request::new(Method::PATCH, "/x")
            .with_body(APPLICATION_JSON, "{}")
            .with_header(reqwest::header::CONTENT_TYPE, "text/plain")
            .unwrap();
        assert!(session.fetch_raw(req).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let (server, session) = setup().await;

        Mock::given(method("DELETE"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"code":10003,"message":"Unknown Channel"}"#),
            )
            .mount(&server)
            .await;

        let err = session
            .fetch_raw(Request::new(Method::DELETE, "/channels/9"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Rest);
        assert_eq!(err.code(), Some(crate::JsonErrorCode::UNKNOWN_CHANNEL));

        let rest = err.as_rest().unwrap();
        assert!(rest.request.url.ends_with("/api/v9/channels/9"));
        assert_eq!(rest.request.headers["authorization"], "[redacted]");
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let (server, session) = setup().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"code":0,"message":"401: Unauthorized"}"#))
            .mount(&server)
            .await;

        let err = session.fetch_raw(Request::new(Method::GET, "/users/@me")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }
}
