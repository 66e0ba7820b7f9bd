use chrono::{DateTime, Utc};
use model::channel::{Channel, ChannelType, ThreadArchiveDuration, ThreadList, ThreadMember};
use model::Snowflake;
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::no_content;
use crate::endpoints::{self, ME};
use crate::query::Query;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

#[derive(Serialize, Debug, Clone, Default)]
pub struct StartThreadFromMessageParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_archive_duration: Option<ThreadArchiveDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
}

#[derive(Serialize, Debug, Clone)]
pub struct StartThreadParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_archive_duration: Option<ThreadArchiveDuration>,
    #[serde(rename = "type")]
    pub thread_type: ChannelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
}

impl StartThreadParams {
    pub fn private(name: impl Into<String>) -> StartThreadParams {
        StartThreadParams {
            name: name.into(),
            auto_archive_duration: None,
            thread_type: ChannelType::GuildPrivateThread,
            invitable: None,
            rate_limit_per_user: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListArchivedThreadsQuery {
    /// Archive timestamp to page from. The joined private threads route pages by thread id instead, see `before_id`.
    pub before: Option<DateTime<Utc>>,
    pub before_id: Option<Snowflake>,
    pub limit: Option<u8>,
}

impl ListArchivedThreadsQuery {
    fn to_query(&self) -> Query {
        let before = self.before.map(|ts| ts.to_rfc3339()).or_else(|| self.before_id.map(|id| id.to_string()));
        Query::new().push("before", before).push("limit", self.limit)
    }
}

#[instrument(skip(session, params))]
pub async fn start_thread_from_message(
    session: &Session,
    channel_id: Snowflake,
    message_id: Snowflake,
    params: &StartThreadFromMessageParams,
    reason: Option<&str>,
) -> Result<Channel> {
    let endpoint = endpoints::message_threads(channel_id, message_id);
    let request = Request::json(Method::POST, endpoint, params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session, params))]
pub async fn start_thread_without_message(
    session: &Session,
    channel_id: Snowflake,
    params: &StartThreadParams,
    reason: Option<&str>,
) -> Result<Channel> {
    let request = Request::json(Method::POST, endpoints::channel_threads(channel_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn join_thread(session: &Session, thread_id: Snowflake) -> Result<()> {
    no_content(session, Request::new(Method::PUT, endpoints::thread_member(thread_id, ME))).await
}

#[instrument(skip(session))]
pub async fn add_thread_member(session: &Session, thread_id: Snowflake, user_id: Snowflake) -> Result<()> {
    no_content(session, Request::new(Method::PUT, endpoints::thread_member(thread_id, user_id))).await
}

#[instrument(skip(session))]
pub async fn leave_thread(session: &Session, thread_id: Snowflake) -> Result<()> {
    no_content(session, Request::new(Method::DELETE, endpoints::thread_member(thread_id, ME))).await
}

#[instrument(skip(session))]
pub async fn remove_thread_member(session: &Session, thread_id: Snowflake, user_id: Snowflake) -> Result<()> {
    no_content(session, Request::new(Method::DELETE, endpoints::thread_member(thread_id, user_id))).await
}

#[instrument(skip(session))]
pub async fn get_thread_member(session: &Session, thread_id: Snowflake, user_id: Snowflake) -> Result<ThreadMember> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::thread_member(thread_id, user_id)))
        .await
}

#[instrument(skip(session))]
pub async fn list_thread_members(session: &Session, thread_id: Snowflake) -> Result<Vec<ThreadMember>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::thread_members(thread_id)))
        .await
}

#[instrument(skip(session))]
pub async fn list_public_archived_threads(
    session: &Session,
    channel_id: Snowflake,
    query: &ListArchivedThreadsQuery,
) -> Result<ThreadList> {
    let request = Request::new(Method::GET, endpoints::public_archived_threads(channel_id)).with_query(query.to_query());
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn list_private_archived_threads(
    session: &Session,
    channel_id: Snowflake,
    query: &ListArchivedThreadsQuery,
) -> Result<ThreadList> {
    let request = Request::new(Method::GET, endpoints::private_archived_threads(channel_id)).with_query(query.to_query());
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn list_joined_private_archived_threads(
    session: &Session,
    channel_id: Snowflake,
    query: &ListArchivedThreadsQuery,
) -> Result<ThreadList> {
    let endpoint = endpoints::joined_private_archived_threads(channel_id);
    session
        .fetch_to_object(Request::new(Method::GET, endpoint).with_query(query.to_query()))
        .await
}

#[instrument(skip(session))]
pub async fn list_active_guild_threads(session: &Session, guild_id: Snowflake) -> Result<ThreadList> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_active_threads(guild_id)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_start_private_thread() {
        let mock = MockTransport::new();
        mock.push(201, r#"{"id":"9","type":12,"name":"ticket-1"}"#);

        let thread = start_thread_without_message(&mock.session(), Snowflake(1), &StartThreadParams::private("ticket-1"), None)
            .await
            .unwrap();
        assert_eq!(thread.channel_type, ChannelType::GuildPrivateThread);

        let req = &mock.requests()[0];
        assert_eq!(req.endpoint, "/channels/1/threads");
        assert_eq!(&req.body[..], br#"{"name":"ticket-1","type":12}"#);
    }

    #[tokio::test]
    async fn test_archived_threads_query() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"threads":[],"members":[],"has_more":true}"#);

        let query = ListArchivedThreadsQuery {
            before_id: Some(Snowflake(77)),
            limit: Some(2),
            ..Default::default()
        };
        let list = list_joined_private_archived_threads(&mock.session(), Snowflake(1), &query)
            .await
            .unwrap();
        assert!(list.has_more);
        assert_eq!(
            mock.requests()[0].endpoint,
            "/channels/1/users/@me/threads/archived/private?before=77&limit=2"
        );
    }

    #[tokio::test]
    async fn test_join_thread() {
        let mock = MockTransport::new();
        mock.push(204, "");

        join_thread(&mock.session(), Snowflake(3)).await.unwrap();
        let req = &mock.requests()[0];
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.endpoint, "/channels/3/thread-members/@me");
        assert!(req.body.is_empty());
    }
}
