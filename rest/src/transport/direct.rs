use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::instrument;

use super::{execute, Transport};
use crate::endpoints::{redact_token, API_BASE, DISCORD_URL};
use crate::request::Request;
use crate::session::Session;
use crate::Result;

pub const USER_AGENT: &str = concat!(
    "DiscordBot (https://github.com/TicketsBot/tickets.rs, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Talks to Discord without a proxy in front. No rate limit handling is done.
#[derive(Clone, Debug)]
pub struct DirectTransport {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl DirectTransport {
    pub fn new(timeout: Duration) -> Result<DirectTransport> {
        let client = reqwest::ClientBuilder::new()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(DirectTransport {
            client,
            base_url: format!("{}{}", DISCORD_URL, API_BASE),
            timeout,
        })
    }

    /// Points the transport somewhere other than discord.com, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> DirectTransport {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Transport for DirectTransport {
    #[instrument(skip(self, session, request), fields(method = %request.method, endpoint = %redact_token(&request.endpoint)))]
    async fn fetch_raw(&self, session: &Session, request: Request) -> Result<Bytes> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        execute(&self.client, url, session, request, self.timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Match, Mock, MockServer, ResponseTemplate};

    /// Compares the whole header; `header()` would split the value on its comma.
    struct UserAgent(&'static str);

    impl Match for UserAgent {
        fn matches(&self, request: &wiremock::Request) -> bool {
            request
                .headers
                .get("user-agent")
                .and_then(|v| v.to_str().ok())
                == Some(self.0)
        }
    }

    #[tokio::test]
    async fn test_user_agent() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v9/guilds/1/bans/2"))
            .and(UserAgent(USER_AGENT))
            .and(header("authorization", "Bot secret"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let transport = DirectTransport::new(Duration::from_secs(5))
            .unwrap()
            .with_base_url(format!("{}/api/v9", server.uri()));
        let session = Session::new("Bot secret", Arc::new(transport));

        session
            .fetch_raw(Request::new(Method::PUT, "/guilds/1/bans/2"))
            .await
            .unwrap();
    }
}
