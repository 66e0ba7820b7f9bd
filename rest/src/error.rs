use std::fmt;

use bytes::Bytes;
use model::ModelError;
use reqwest::header::{HeaderMap, InvalidHeaderValue};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::value::RawValue;
use thiserror::Error;

use crate::endpoints::redact_token;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("401 Unauthorized: the token was rejected")]
    Unauthorized,

    #[error("unsupported image type: expected png, jpeg, gif or webp")]
    UnsupportedImageType,

    #[error("{0}")]
    Rest(Box<RestError>),

    #[error("error (de)serializing json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error encoding request body: {0}")]
    Io(#[from] std::io::Error),

    #[error("error performing HTTP request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request deadline exceeded")]
    Timeout,

    #[error("request was cancelled")]
    Cancelled,

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// The categories every failure falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    UnsupportedImageType,
    Rest,
    Codec,
    Transport,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized => ErrorKind::Unauthorized,
            Error::UnsupportedImageType => ErrorKind::UnsupportedImageType,
            Error::Rest(_) => ErrorKind::Rest,
            Error::Json(_) | Error::Io(_) => ErrorKind::Codec,
            Error::Http(_) | Error::Timeout | Error::Cancelled => ErrorKind::Transport,
            Error::InvalidHeader(_) | Error::Url(_) => ErrorKind::Transport,
        }
    }

    /// The structured error, for non-2xx responses other than 401.
    pub fn as_rest(&self) -> Option<&RestError> {
        match self {
            Error::Rest(e) => Some(e),
            _ => None,
        }
    }

    /// Discord's JSON error code, when the response carried one.
    pub fn code(&self) -> Option<u32> {
        self.as_rest().and_then(RestError::code)
    }
}

impl From<ModelError> for Error {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::UnsupportedImageType => Error::UnsupportedImageType,
        }
    }
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Result<T> {
        Err(e)
    }
}

/// A non-success response, with enough of the exchange kept to diagnose it.
#[derive(Debug)]
pub struct RestError {
    pub request: RequestSummary,
    pub response: ResponseSummary,
    pub body: Bytes,
    /// Best-effort decode of Discord's error body.
    pub envelope: Option<ErrorEnvelope>,
}

impl RestError {
    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    pub fn code(&self) -> Option<u32> {
        self.envelope.as_ref().map(|e| e.code)
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} returned {}",
            self.request.method, self.request.url, self.response.status
        )?;

        if let Some(envelope) = &self.envelope {
            write!(f, ": {} (code {})", envelope.message, envelope.code)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RequestSummary {
    pub method: Method,
    pub url: String,
    /// Sensitive headers, such as authorization, are redacted.
    pub headers: HeaderMap,
}

impl RequestSummary {
    /// Webhook and interaction tokens in `url` are redacted too.
    pub fn new(method: Method, url: String, headers: &HeaderMap) -> Self {
        let url = redact_token(&url).into_owned();
        let mut headers = headers.clone();
        for value in headers.values_mut() {
            if value.is_sensitive() {
                *value = reqwest::header::HeaderValue::from_static("[redacted]");
            }
        }

        Self { method, url, headers }
    }
}

#[derive(Debug, Clone)]
pub struct ResponseSummary {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub code: u32,
    pub message: String,
    /// Per-field errors, nested the same way as the request payload.
    #[serde(default)]
    pub errors: Option<Box<RawValue>>,
}

/// Frequently matched values of [`ErrorEnvelope::code`].
pub struct JsonErrorCode;

impl JsonErrorCode {
    pub const GENERAL_ERROR: u32 = 0;
    pub const UNKNOWN_ACCOUNT: u32 = 10001;
    pub const UNKNOWN_APPLICATION: u32 = 10002;
    pub const UNKNOWN_CHANNEL: u32 = 10003;
    pub const UNKNOWN_GUILD: u32 = 10004;
    pub const UNKNOWN_INTEGRATION: u32 = 10005;
    pub const UNKNOWN_INVITE: u32 = 10006;
    pub const UNKNOWN_MEMBER: u32 = 10007;
    pub const UNKNOWN_MESSAGE: u32 = 10008;
    pub const UNKNOWN_OVERWRITE: u32 = 10009;
    pub const UNKNOWN_ROLE: u32 = 10011;
    pub const UNKNOWN_TOKEN: u32 = 10012;
    pub const UNKNOWN_USER: u32 = 10013;
    pub const UNKNOWN_EMOJI: u32 = 10014;
    pub const UNKNOWN_WEBHOOK: u32 = 10015;
    pub const UNKNOWN_BAN: u32 = 10026;
    pub const UNKNOWN_INTERACTION: u32 = 10062;
    pub const UNKNOWN_APPLICATION_COMMAND: u32 = 10063;
    pub const UNKNOWN_STICKER: u32 = 10060;
    pub const UNKNOWN_STAGE_INSTANCE: u32 = 10067;
    pub const UNKNOWN_ENTITLEMENT: u32 = 10069;
    pub const BOTS_CANNOT_USE_ENDPOINT: u32 = 20001;
    pub const MAX_GUILDS: u32 = 30001;
    pub const MAX_PINS: u32 = 30003;
    pub const MAX_ROLES: u32 = 30005;
    pub const MAX_WEBHOOKS: u32 = 30007;
    pub const MAX_EMOJIS: u32 = 30008;
    pub const MAX_REACTIONS: u32 = 30010;
    pub const MAX_CHANNELS: u32 = 30013;
    pub const UNAUTHORIZED: u32 = 40001;
    pub const MISSING_ACCESS: u32 = 50001;
    pub const INVALID_ACCOUNT_TYPE: u32 = 50002;
    pub const CANNOT_EXECUTE_ON_DM: u32 = 50003;
    pub const CANNOT_EDIT_OTHER_USERS_MESSAGE: u32 = 50005;
    pub const CANNOT_SEND_EMPTY_MESSAGE: u32 = 50006;
    pub const CANNOT_SEND_MESSAGES_TO_USER: u32 = 50007;
    pub const MISSING_PERMISSIONS: u32 = 50013;
    pub const INVALID_FORM_BODY: u32 = 50035;
    pub const BULK_DELETE_MESSAGE_TOO_OLD: u32 = 50034;
    pub const INTERACTION_ALREADY_ACKNOWLEDGED: u32 = 40060;
    pub const THREAD_ARCHIVED: u32 = 50083;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::Unauthorized.kind(), ErrorKind::Unauthorized);
        assert_eq!(Error::from(ModelError::UnsupportedImageType).kind(), ErrorKind::UnsupportedImageType);
        assert_eq!(Error::Timeout.kind(), ErrorKind::Transport);
        assert_eq!(Error::Cancelled.kind(), ErrorKind::Transport);

        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        assert_eq!(Error::from(json_err).kind(), ErrorKind::Codec);
    }

    #[test]
    fn test_redaction() {
        let mut headers = HeaderMap::new();
        let mut token = reqwest::header::HeaderValue::from_static("Bot secret");
        token.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, token);
        headers.insert("x-audit-log-reason", reqwest::header::HeaderValue::from_static("spam"));

        let summary = RequestSummary::new(Method::GET, "http://x/y".to_owned(), &headers);
        assert_eq!(summary.headers[reqwest::header::AUTHORIZATION], "[redacted]");
        assert_eq!(summary.headers["x-audit-log-reason"], "spam");
    }
}
