//! One function per REST route. Each takes the session first, then path ids, then the payload,
//! then query options and finally the audit log reason.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::request::Request;
use crate::session::Session;
use crate::transport::multipart::encode_with_files;
use crate::transport::File;
use crate::Result;

pub mod application_commands;
pub mod audit_log;
pub mod channels;
pub mod emojis;
pub mod entitlements;
pub mod gateway;
pub mod guilds;
pub mod interactions;
pub mod invites;
pub mod oauth2;
pub mod stage_instances;
pub mod stickers;
pub mod threads;
pub mod users;
pub mod webhooks;

/// Sends `payload` as JSON, or as `payload_json` plus `file<n>` parts when there are files.
pub(crate) fn payload_request<P: Serialize + ?Sized>(
    method: Method,
    endpoint: impl Into<String>,
    payload: &P,
    files: &[File],
) -> Result<Request> {
    if files.is_empty() {
        return Request::json(method, endpoint, payload);
    }

    let (content_type, body) = encode_with_files(payload, files)?;
    Ok(Request::new(method, endpoint).with_body(content_type, body))
}

pub(crate) async fn send_with_files<P, T>(
    session: &Session,
    method: Method,
    endpoint: impl Into<String>,
    payload: &P,
    files: &[File],
) -> Result<T>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = payload_request(method, endpoint, payload, files)?;
    session.fetch_to_object(request).await
}

/// For routes that answer 204.
pub(crate) async fn no_content(session: &Session, request: Request) -> Result<()> {
    session.fetch_raw(request).await?;
    Ok(())
}
