use model::channel::message::{AllowedMentions, Embed, Message, MessageFlags, PartialAttachment};
use model::interaction::Component;
use model::webhook::Webhook;
use model::{ImageData, Snowflake};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::{no_content, payload_request, send_with_files};
use crate::endpoints;
use crate::query::Query;
use crate::request::Request;
use crate::session::Session;
use crate::transport::File;
use crate::Result;

#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateWebhookParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageData>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyWebhookParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageData>,
    /// Ignored by the token authenticated route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
}

/// Also the body of interaction follow-ups. `tts` is always sent.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ExecuteWebhookParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub tts: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<PartialAttachment>,
    /// Only `SUPPRESS_EMBEDS` and, for follow-ups, `EPHEMERAL` are honoured.
    #[serde(skip_serializing_if = "MessageFlags::is_empty")]
    pub flags: MessageFlags,
    /// Creates a thread when executing into a forum channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
    #[serde(skip)]
    pub files: Vec<File>,
}

impl ExecuteWebhookParams {
    pub fn content(content: impl Into<String>) -> Self {
        ExecuteWebhookParams {
            content: Some(content.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteWebhookQuery {
    /// Wait for the message to be created and return it.
    pub wait: Option<bool>,
    pub thread_id: Option<Snowflake>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct EditWebhookMessageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    /// Attachments to keep, plus metadata for new uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<PartialAttachment>>,
    #[serde(skip)]
    pub files: Vec<File>,
}

fn thread_query(thread_id: Option<Snowflake>) -> Query {
    Query::new().push("thread_id", thread_id)
}

#[instrument(skip(session, params))]
pub async fn create_webhook(
    session: &Session,
    channel_id: Snowflake,
    params: &CreateWebhookParams,
    reason: Option<&str>,
) -> Result<Webhook> {
    let request = Request::json(Method::POST, endpoints::channel_webhooks(channel_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn get_channel_webhooks(session: &Session, channel_id: Snowflake) -> Result<Vec<Webhook>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::channel_webhooks(channel_id)))
        .await
}

#[instrument(skip(session))]
pub async fn get_guild_webhooks(session: &Session, guild_id: Snowflake) -> Result<Vec<Webhook>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_webhooks(guild_id)))
        .await
}

#[instrument(skip(session))]
pub async fn get_webhook(session: &Session, webhook_id: Snowflake) -> Result<Webhook> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::webhook(webhook_id)))
        .await
}

/// The returned webhook has no `user`.
#[instrument(skip(session, token))]
pub async fn get_webhook_with_token(session: &Session, webhook_id: Snowflake, token: &str) -> Result<Webhook> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::webhook_with_token(webhook_id, token)))
        .await
}

#[instrument(skip(session, params))]
pub async fn modify_webhook(
    session: &Session,
    webhook_id: Snowflake,
    params: &ModifyWebhookParams,
    reason: Option<&str>,
) -> Result<Webhook> {
    let request = Request::json(Method::PATCH, endpoints::webhook(webhook_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session, token, params))]
pub async fn modify_webhook_with_token(
    session: &Session,
    webhook_id: Snowflake,
    token: &str,
    params: &ModifyWebhookParams,
    reason: Option<&str>,
) -> Result<Webhook> {
    let endpoint = endpoints::webhook_with_token(webhook_id, token);
    let request = Request::json(Method::PATCH, endpoint, params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn delete_webhook(session: &Session, webhook_id: Snowflake, reason: Option<&str>) -> Result<()> {
    let request = Request::new(Method::DELETE, endpoints::webhook(webhook_id)).with_reason(reason)?;
    no_content(session, request).await
}

#[instrument(skip(session, token))]
pub async fn delete_webhook_with_token(
    session: &Session,
    webhook_id: Snowflake,
    token: &str,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::webhook_with_token(webhook_id, token);
    no_content(session, Request::new(Method::DELETE, endpoint).with_reason(reason)?).await
}

/// Returns the created message only when `query.wait` is true.
#[instrument(skip(session, token, params))]
pub async fn execute_webhook(
    session: &Session,
    webhook_id: Snowflake,
    token: &str,
    params: &ExecuteWebhookParams,
    query: ExecuteWebhookQuery,
) -> Result<Option<Message>> {
    let query = Query::new().push("wait", query.wait).push("thread_id", query.thread_id);
    let request = payload_request(
        Method::POST,
        endpoints::webhook_with_token(webhook_id, token),
        params,
        &params.files,
    )?
    .with_query(query);

    session.fetch_to_object(request).await
}

#[instrument(skip(session, token))]
pub async fn get_webhook_message(
    session: &Session,
    webhook_id: Snowflake,
    token: &str,
    message_id: Snowflake,
    thread_id: Option<Snowflake>,
) -> Result<Message> {
    let endpoint = endpoints::webhook_message(webhook_id, token, message_id);
    session
        .fetch_to_object(Request::new(Method::GET, endpoint).with_query(thread_query(thread_id)))
        .await
}

#[instrument(skip(session, token, params))]
pub async fn edit_webhook_message(
    session: &Session,
    webhook_id: Snowflake,
    token: &str,
    message_id: Snowflake,
    params: &EditWebhookMessageParams,
    thread_id: Option<Snowflake>,
) -> Result<Message> {
    let endpoint = thread_query(thread_id).apply(endpoints::webhook_message(webhook_id, token, message_id));
    send_with_files(session, Method::PATCH, endpoint, params, &params.files).await
}

#[instrument(skip(session, token))]
pub async fn delete_webhook_message(
    session: &Session,
    webhook_id: Snowflake,
    token: &str,
    message_id: Snowflake,
    thread_id: Option<Snowflake>,
) -> Result<()> {
    let endpoint = endpoints::webhook_message(webhook_id, token, message_id);
    no_content(session, Request::new(Method::DELETE, endpoint).with_query(thread_query(thread_id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_execute_without_wait() {
        let mock = MockTransport::new();
        mock.push(204, "");

        let msg = execute_webhook(
            &mock.session(),
            Snowflake(1),
            "tok",
            &ExecuteWebhookParams::content("hello"),
            ExecuteWebhookQuery::default(),
        )
        .await
        .unwrap();
        assert!(msg.is_none());

        let req = &mock.requests()[0];
        assert_eq!(req.endpoint, "/webhooks/1/tok");
        assert_eq!(&req.body[..], br#"{"content":"hello","tts":false}"#);
    }

    #[tokio::test]
    async fn test_error_hides_token() {
        let mock = MockTransport::new();
        mock.push(404, r#"{"message":"Unknown Webhook","code":10015}"#);

        let err = get_webhook_with_token(&mock.session(), Snowflake(8), "hunter2hunter2")
            .await
            .unwrap_err();

        assert_eq!(err.code(), Some(10015));
        assert!(!err.to_string().contains("hunter2hunter2"));
        assert!(!format!("{:?}", err).contains("hunter2hunter2"));
        assert_eq!(err.as_rest().unwrap().request.url, "/webhooks/8/[redacted]");

        // the request itself still carries the token
        assert_eq!(mock.requests()[0].endpoint, "/webhooks/8/hunter2hunter2");
    }

    #[tokio::test]
    async fn test_execute_wait_in_thread() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"id":"5","channel_id":"6","content":"hello"}"#);

        let query = ExecuteWebhookQuery {
            wait: Some(true),
            thread_id: Some(Snowflake(6)),
        };
        let msg = execute_webhook(&mock.session(), Snowflake(1), "tok", &ExecuteWebhookParams::content("hello"), query)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(msg.channel_id, Snowflake(6));
        assert_eq!(mock.requests()[0].endpoint, "/webhooks/1/tok?wait=true&thread_id=6");
    }

    #[tokio::test]
    async fn test_edit_message_thread() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"id":"5","channel_id":"6","content":"edited"}"#);

        let params = EditWebhookMessageParams {
            content: Some("edited".to_owned()),
            ..Default::default()
        };
        edit_webhook_message(&mock.session(), Snowflake(1), "tok", Snowflake(5), &params, Some(Snowflake(6)))
            .await
            .unwrap();

        let req = &mock.requests()[0];
        assert_eq!(req.method, Method::PATCH);
        assert_eq!(req.endpoint, "/webhooks/1/tok/messages/5?thread_id=6");
    }
}
