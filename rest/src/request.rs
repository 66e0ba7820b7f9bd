use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, CONTROLS};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use crate::query::Query;
use crate::Result;

pub const AUDIT_LOG_REASON: &str = "x-audit-log-reason";
pub const APPLICATION_JSON: &str = "application/json; charset=utf-8";

/// A request as handed to a [`Transport`](crate::transport::Transport). `endpoint` is relative to the API base.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub endpoint: String,
    pub content_type: Option<String>,
    pub body: Bytes,
    pub headers: HeaderMap,
}

impl Request {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Request {
        Request {
            method,
            endpoint: endpoint.into(),
            content_type: None,
            body: Bytes::new(),
            headers: HeaderMap::new(),
        }
    }

    pub fn json<T: Serialize + ?Sized>(
        method: Method,
        endpoint: impl Into<String>,
        payload: &T,
    ) -> Result<Request> {
        let body = serde_json::to_vec(payload)?;
        Ok(Request::new(method, endpoint).with_body(APPLICATION_JSON, body))
    }

    pub fn with_body(mut self, content_type: impl Into<String>, body: impl Into<Bytes>) -> Request {
        self.content_type = Some(content_type.into());
        self.body = body.into();
        self
    }

    pub fn with_query(mut self, query: Query) -> Request {
        self.endpoint = query.apply(self.endpoint);
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: &str) -> Result<Request> {
        self.headers.insert(name, HeaderValue::from_str(value)?);
        Ok(self)
    }

    /// Attaches the audit log reason header when a reason is given.
    pub fn with_reason(mut self, reason: Option<&str>) -> Result<Request> {
        if let Some(reason) = reason {
            let encoded = utf8_percent_encode(reason, CONTROLS).to_string();
            let value = HeaderValue::from_str(&encoded)?;
            self.headers.insert(HeaderName::from_static(AUDIT_LOG_REASON), value);
        }

        Ok(self)
    }

    pub fn reason(&self) -> Option<&str> {
        self.headers
            .get(AUDIT_LOG_REASON)
            .and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason() {
        let req = Request::new(Method::DELETE, "/x").with_reason(None).unwrap();
        assert!(req.headers.is_empty());

        let req = Request::new(Method::DELETE, "/x")
            .with_reason(Some("cleanup"))
            .unwrap();
        assert_eq!(req.reason(), Some("cleanup"));
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn test_reason_non_ascii() {
        let req = Request::new(Method::DELETE, "/x")
            .with_reason(Some("spam\nbot ü"))
            .unwrap();
        assert_eq!(req.reason(), Some("spam%0Abot %C3%BC"));
    }

    #[test]
    fn test_json() {
        #[derive(Serialize)]
        struct Payload {
            name: &'static str,
        }

        let req = Request::json(Method::POST, "/y", &Payload { name: "x" }).unwrap();
        assert_eq!(req.content_type.as_deref(), Some("application/json; charset=utf-8"));
        assert_eq!(&req.body[..], br#"{"name":"x"}"#);
    }
}
