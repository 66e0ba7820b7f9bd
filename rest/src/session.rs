use std::future::{pending, Future};
use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, Instrument, Span};

use crate::endpoints::redact_token;
use crate::request::Request;
use crate::transport::Transport;
use crate::{Error, Result};

/// Everything an operation needs: a token, a transport, a cancellation context and a span to log under.
///
/// Cloning is cheap; the transport is shared.
#[derive(Clone)]
pub struct Session {
    token: String,
    transport: Arc<dyn Transport>,
    context: Context,
    span: Span,
}

impl Session {
    /// `token` is sent verbatim, so include the `Bot ` or `Bearer ` prefix.
    pub fn new(token: impl Into<String>, transport: Arc<dyn Transport>) -> Session {
        Session {
            token: token.into(),
            transport,
            context: Context::default(),
            span: Span::none(),
        }
    }

    pub fn with_context(mut self, context: Context) -> Session {
        self.context = context;
        self
    }

    pub fn with_span(mut self, span: Span) -> Session {
        self.span = span;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Sends the request and returns the body of a successful response.
    pub async fn fetch_raw(&self, request: Request) -> Result<Bytes> {
        let fut = async {
            debug!(method = %request.method, endpoint = %redact_token(&request.endpoint), "sending request");
            self.transport.fetch_raw(self, request).await
        };

        self.context.run(fut.instrument(self.span.clone())).await
    }

    /// Sends the request and decodes the response. An empty body decodes as JSON `null`.
    pub async fn fetch_to_object<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let body = self.fetch_raw(request).await?;
        decode(&body)
    }

    /// Encodes `payload` as the JSON body, then behaves like [`Session::fetch_to_object`].
    pub async fn fetch_json_json<P, T>(
        &self,
        method: Method,
        endpoint: impl Into<String>,
        payload: &P,
        headers: HeaderMap,
    ) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = Request::json(method, endpoint, payload)?;
        request.headers.extend(headers);
        self.fetch_to_object(request).await
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body = if body.is_empty() { b"null".as_slice() } else { body };
    Ok(serde_json::from_slice(body)?)
}

/// Deadline and cancellation shared by every request made through a session.
#[derive(Clone, Debug, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Cancels every in-flight and future request of the sessions holding the paired [`Context`].
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

impl Context {
    pub fn with_deadline(mut self, deadline: Instant) -> Context {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: std::time::Duration) -> Context {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_cancel(mut self) -> (Context, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        self.cancel = Some(rx);
        (self, CancelHandle(tx))
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().map_or(false, |rx| *rx.borrow())
    }

    async fn cancelled(&self) {
        let Some(mut rx) = self.cancel.clone() else {
            return pending().await;
        };

        loop {
            if *rx.borrow_and_update() {
                return;
            }

            // sender dropped without cancelling
            if rx.changed().await.is_err() {
                return pending().await;
            }
        }
    }

    pub(crate) async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let work = async {
            tokio::select! {
                res = fut => res,
                _ = self.cancelled() => Err(Error::Cancelled),
            }
        };

        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, work)
                .await
                .map_err(|_| Error::Timeout)?,
            None => work.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_deadline() {
        let ctx = Context::default().with_timeout(Duration::from_millis(10));
        let res: Result<()> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await;

        assert!(matches!(res, Err(Error::Timeout)));
    }

    #[tokio::test]
    async fn test_cancel() {
        let (ctx, handle) = Context::default().with_cancel();

        let task = {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                ctx.run(async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Ok(())
                })
                .await
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.cancel();

        assert!(matches!(task.await.unwrap(), Err(Error::Cancelled)));
        assert!(ctx.is_cancelled());
        assert!(matches!(ctx.run(async { Ok(()) }).await, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_dropped_handle_does_not_cancel() {
        let (ctx, handle) = Context::default().with_cancel();
        drop(handle);

        assert_eq!(ctx.run(async { Ok(5) }).await.unwrap(), 5);
    }

    #[test]
    fn test_decode_empty_body() {
        decode::<()>(b"").unwrap();
        assert!(decode::<Option<u8>>(b"").unwrap().is_none());
        assert_eq!(decode::<u8>(b"7").unwrap(), 7);
    }
}
