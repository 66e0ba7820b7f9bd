use model::channel::message::{AllowedMentions, Embed, Message, MessageFlags, MessageReference, PartialAttachment};
use model::channel::{
    Channel, ChannelFlags, ChannelType, FollowedChannel, PermissionOverwrite, PermissionOverwriteType,
    ThreadArchiveDuration, VideoQualityMode,
};
use model::interaction::Component;
use model::invite::{Invite, TargetType};
use model::user::User;
use model::{PermissionBitSet, Snowflake};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::{no_content, send_with_files};
use crate::endpoints::{self, ME};
use crate::query::Query;
use crate::request::Request;
use crate::session::Session;
use crate::transport::File;
use crate::Result;

#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyChannelParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only conversion between text and news is supported.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Vec<PermissionOverwrite>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtc_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_quality_mode: Option<VideoQualityMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_auto_archive_duration: Option<ThreadArchiveDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<ChannelFlags>,
    // thread only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_archive_duration: Option<ThreadArchiveDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitable: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct GetChannelMessagesQuery {
    pub around: Option<Snowflake>,
    pub before: Option<Snowflake>,
    pub after: Option<Snowflake>,
    /// 1 to 100, Discord defaults to 50.
    pub limit: Option<u8>,
}

impl GetChannelMessagesQuery {
    pub fn limit(limit: u8) -> Self {
        GetChannelMessagesQuery {
            limit: Some(limit),
            ..Default::default()
        }
    }

    fn to_query(&self) -> Query {
        Query::new()
            .push("around", self.around)
            .push("before", self.before)
            .push("after", self.after)
            .push("limit", self.limit)
    }
}

/// `tts` is always sent; every other absent field is omitted.
#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateMessageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    pub tts: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_reference: Option<MessageReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sticker_ids: Vec<Snowflake>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<PartialAttachment>,
    #[serde(skip_serializing_if = "MessageFlags::is_empty")]
    pub flags: MessageFlags,
    /// Uploaded as `file0..fileN`.
    #[serde(skip)]
    pub files: Vec<File>,
}

impl CreateMessageParams {
    pub fn content(content: impl Into<String>) -> Self {
        CreateMessageParams {
            content: Some(content.into()),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct EditMessageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<MessageFlags>,
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

#[derive(Debug, Clone, Default)]
pub struct GetReactionsQuery {
    pub after: Option<Snowflake>,
    /// 1 to 100, Discord defaults to 25.
    pub limit: Option<u8>,
}

#[derive(Serialize, Debug, Clone)]
pub struct EditChannelPermissionsParams {
    #[serde(rename = "type")]
    pub overwrite_type: PermissionOverwriteType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<PermissionBitSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny: Option<PermissionBitSet>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateChannelInviteParams {
    /// Seconds, 0 for never. Discord defaults to 86400.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_application_id: Option<Snowflake>,
}

#[derive(Serialize)]
struct BulkDeleteBody<'a> {
    messages: &'a [Snowflake],
}

#[derive(Serialize)]
struct FollowNewsChannelBody {
    webhook_channel_id: Snowflake,
}

#[instrument(skip(session))]
pub async fn get_channel(session: &Session, channel_id: Snowflake) -> Result<Channel> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::channel(channel_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn modify_channel(
    session: &Session,
    channel_id: Snowflake,
    params: &ModifyChannelParams,
    reason: Option<&str>,
) -> Result<Channel> {
    let request = Request::json(Method::PATCH, endpoints::channel(channel_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

/// Deletes a guild channel or closes a DM. Returns the deleted channel.
#[instrument(skip(session))]
pub async fn delete_channel(session: &Session, channel_id: Snowflake, reason: Option<&str>) -> Result<Channel> {
    let request = Request::new(Method::DELETE, endpoints::channel(channel_id)).with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn get_channel_messages(
    session: &Session,
    channel_id: Snowflake,
    query: &GetChannelMessagesQuery,
) -> Result<Vec<Message>> {
    let request = Request::new(Method::GET, endpoints::channel_messages(channel_id)).with_query(query.to_query());
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn get_channel_message(session: &Session, channel_id: Snowflake, message_id: Snowflake) -> Result<Message> {
    let request = Request::new(Method::GET, endpoints::channel_message(channel_id, message_id));
    session.fetch_to_object(request).await
}

/// Sent as multipart when `params.files` is not empty.
#[instrument(skip(session, params))]
pub async fn create_message(session: &Session, channel_id: Snowflake, params: &CreateMessageParams) -> Result<Message> {
    send_with_files(
        session,
        Method::POST,
        endpoints::channel_messages(channel_id),
        params,
        &params.files,
    )
    .await
}

#[instrument(skip(session))]
pub async fn crosspost_message(session: &Session, channel_id: Snowflake, message_id: Snowflake) -> Result<Message> {
    let request = Request::new(Method::POST, endpoints::channel_message_crosspost(channel_id, message_id));
    session.fetch_to_object(request).await
}

/// `emoji` is a unicode emoji or `name:id` for custom emojis.
#[instrument(skip(session))]
pub async fn create_reaction(session: &Session, channel_id: Snowflake, message_id: Snowflake, emoji: &str) -> Result<()> {
    let endpoint = endpoints::message_reaction(channel_id, message_id, emoji, ME);
    no_content(session, Request::new(Method::PUT, endpoint)).await
}

#[instrument(skip(session))]
pub async fn delete_own_reaction(
    session: &Session,
    channel_id: Snowflake,
    message_id: Snowflake,
    emoji: &str,
) -> Result<()> {
    let endpoint = endpoints::message_reaction(channel_id, message_id, emoji, ME);
    no_content(session, Request::new(Method::DELETE, endpoint)).await
}

#[instrument(skip(session))]
pub async fn delete_user_reaction(
    session: &Session,
    channel_id: Snowflake,
    message_id: Snowflake,
    emoji: &str,
    user_id: Snowflake,
) -> Result<()> {
    let endpoint = endpoints::message_reaction(channel_id, message_id, emoji, user_id);
    no_content(session, Request::new(Method::DELETE, endpoint)).await
}

/// Users that reacted with `emoji`.
#[instrument(skip(session))]
pub async fn get_reactions(
    session: &Session,
    channel_id: Snowflake,
    message_id: Snowflake,
    emoji: &str,
    query: &GetReactionsQuery,
) -> Result<Vec<User>> {
    let query = Query::new().push("after", query.after).push("limit", query.limit);
    let endpoint = endpoints::message_reactions_for_emoji(channel_id, message_id, emoji);
    session
        .fetch_to_object(Request::new(Method::GET, endpoint).with_query(query))
        .await
}

#[instrument(skip(session))]
pub async fn delete_all_reactions(session: &Session, channel_id: Snowflake, message_id: Snowflake) -> Result<()> {
    let endpoint = endpoints::message_reactions(channel_id, message_id);
    no_content(session, Request::new(Method::DELETE, endpoint)).await
}

#[instrument(skip(session))]
pub async fn delete_all_reactions_for_emoji(
    session: &Session,
    channel_id: Snowflake,
    message_id: Snowflake,
    emoji: &str,
) -> Result<()> {
    let endpoint = endpoints::message_reactions_for_emoji(channel_id, message_id, emoji);
    no_content(session, Request::new(Method::DELETE, endpoint)).await
}

#[instrument(skip(session, params))]
pub async fn edit_message(
    session: &Session,
    channel_id: Snowflake,
    message_id: Snowflake,
    params: &EditMessageParams,
) -> Result<Message> {
    send_with_files(
        session,
        Method::PATCH,
        endpoints::channel_message(channel_id, message_id),
        params,
        &params.files,
    )
    .await
}

#[instrument(skip(session))]
pub async fn delete_message(
    session: &Session,
    channel_id: Snowflake,
    message_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let request = Request::new(Method::DELETE, endpoints::channel_message(channel_id, message_id)).with_reason(reason)?;
    no_content(session, request).await
}

/// Deletes 2 to 100 messages no older than two weeks.
#[instrument(skip(session, message_ids), fields(count = message_ids.len()))]
pub async fn bulk_delete_messages(
    session: &Session,
    channel_id: Snowflake,
    message_ids: &[Snowflake],
    reason: Option<&str>,
) -> Result<()> {
    let body = BulkDeleteBody { messages: message_ids };
    let request = Request::json(Method::POST, endpoints::channel_messages_bulk_delete(channel_id), &body)?
        .with_reason(reason)?;
    no_content(session, request).await
}

#[instrument(skip(session, params))]
pub async fn edit_channel_permissions(
    session: &Session,
    channel_id: Snowflake,
    overwrite_id: Snowflake,
    params: &EditChannelPermissionsParams,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::channel_permission(channel_id, overwrite_id);
    let request = Request::json(Method::PUT, endpoint, params)?.with_reason(reason)?;
    no_content(session, request).await
}

#[instrument(skip(session))]
pub async fn delete_channel_permission(
    session: &Session,
    channel_id: Snowflake,
    overwrite_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::channel_permission(channel_id, overwrite_id);
    no_content(session, Request::new(Method::DELETE, endpoint).with_reason(reason)?).await
}

#[instrument(skip(session))]
pub async fn get_channel_invites(session: &Session, channel_id: Snowflake) -> Result<Vec<Invite>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::channel_invites(channel_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn create_channel_invite(
    session: &Session,
    channel_id: Snowflake,
    params: &CreateChannelInviteParams,
    reason: Option<&str>,
) -> Result<Invite> {
    let request = Request::json(Method::POST, endpoints::channel_invites(channel_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

/// Follows the news channel `channel_id` into `webhook_channel_id`.
#[instrument(skip(session))]
pub async fn follow_news_channel(
    session: &Session,
    channel_id: Snowflake,
    webhook_channel_id: Snowflake,
) -> Result<FollowedChannel> {
    let body = FollowNewsChannelBody { webhook_channel_id };
    let request = Request::json(Method::POST, endpoints::channel_followers(channel_id), &body)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn trigger_typing_indicator(session: &Session, channel_id: Snowflake) -> Result<()> {
    no_content(session, Request::new(Method::POST, endpoints::channel_typing(channel_id))).await
}

#[instrument(skip(session))]
pub async fn get_pinned_messages(session: &Session, channel_id: Snowflake) -> Result<Vec<Message>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::channel_pins(channel_id)))
        .await
}

#[instrument(skip(session))]
pub async fn pin_message(
    session: &Session,
    channel_id: Snowflake,
    message_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::channel_pin(channel_id, message_id);
    no_content(session, Request::new(Method::PUT, endpoint).with_reason(reason)?).await
}

#[instrument(skip(session))]
pub async fn unpin_message(
    session: &Session,
    channel_id: Snowflake,
    message_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::channel_pin(channel_id, message_id);
    no_content(session, Request::new(Method::DELETE, endpoint).with_reason(reason)?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{APPLICATION_JSON, AUDIT_LOG_REASON};
    use crate::transport::mock::MockTransport;
    use crate::transport::multipart::tests::parts;
    use crate::ErrorKind;

    const MESSAGE: &str = r#"{"id":"222","channel_id":"111","content":"hi","edited_timestamp":null}"#;

    #[tokio::test]
    async fn test_create_message() {
        let mock = MockTransport::new();
        mock.push(200, MESSAGE);

        let msg = create_message(&mock.session(), Snowflake(111), &CreateMessageParams::content("hi"))
            .await
            .unwrap();
        assert_eq!(msg.id, Snowflake(222));

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].endpoint, "/channels/111/messages");
        assert_eq!(requests[0].content_type.as_deref(), Some(APPLICATION_JSON));
        assert_eq!(&requests[0].body[..], br#"{"content":"hi","tts":false}"#);
    }

    #[tokio::test]
    async fn test_create_message_with_file() {
        let mock = MockTransport::new();
        mock.push(200, MESSAGE);

        let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0xDE, 0xAD];
        let params = CreateMessageParams {
            files: vec![File::new("ticket.png", png.clone()).with_content_type("image/png")],
            ..CreateMessageParams::content("hi")
        };

        create_message(&mock.session(), Snowflake(111), &params).await.unwrap();

        let req = &mock.requests()[0];
        let content_type = req.content_type.clone().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));

        let parts = parts(&content_type, &req.body);
        assert_eq!(parts.len(), 2);
        assert!(parts[0].0.contains("name=\"payload_json\""));
        assert_eq!(parts[0].1, br#"{"content":"hi","tts":false}"#);
        assert!(parts[1].0.contains("name=\"file0\"; filename=\"ticket.png\""));
        assert_eq!(parts[1].1, png);
    }

    #[tokio::test]
    async fn test_bulk_delete() {
        let mock = MockTransport::new();
        mock.push(204, "");

        bulk_delete_messages(&mock.session(), Snowflake(4), &[Snowflake(1), Snowflake(2)], Some("purge"))
            .await
            .unwrap();

        let req = &mock.requests()[0];
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.endpoint, "/channels/4/messages/bulk-delete");
        assert_eq!(&req.body[..], br#"{"messages":["1","2"]}"#);
        assert_eq!(req.headers[AUDIT_LOG_REASON], "purge");
    }

    #[tokio::test]
    async fn test_no_reason_no_header() {
        let mock = MockTransport::new();
        mock.push(204, "");

        delete_message(&mock.session(), Snowflake(1), Snowflake(2), None).await.unwrap();
        assert!(mock.requests()[0].headers.get(AUDIT_LOG_REASON).is_none());
    }

    #[tokio::test]
    async fn test_reaction_endpoints() {
        let mock = MockTransport::new();
        mock.push(204, "");
        mock.push(200, "[]");

        let session = mock.session();
        create_reaction(&session, Snowflake(1), Snowflake(2), "blob:9").await.unwrap();
        get_reactions(
            &session,
            Snowflake(1),
            Snowflake(2),
            "#️⃣",
            &GetReactionsQuery { limit: Some(5), ..Default::default() },
        )
        .await
        .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].endpoint, "/channels/1/messages/2/reactions/blob:9/@me");
        assert_eq!(requests[1].endpoint, "/channels/1/messages/2/reactions/%23️⃣?limit=5");
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mock = MockTransport::new();
        mock.push(401, r#"{"message":"401: Unauthorized","code":0}"#);

        let err = get_channel(&mock.session(), Snowflake(1)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_messages_query() {
        let mock = MockTransport::new();
        mock.push(200, "[]");

        let query = GetChannelMessagesQuery {
            before: Some(Snowflake(10)),
            limit: Some(50),
            ..Default::default()
        };
        get_channel_messages(&mock.session(), Snowflake(3), &query).await.unwrap();
        assert_eq!(mock.requests()[0].endpoint, "/channels/3/messages?before=10&limit=50");
    }
}
