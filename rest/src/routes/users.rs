use model::channel::Channel;
use model::guild::{Guild, Member};
use model::user::User;
use model::{ImageData, Snowflake};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::no_content;
use crate::endpoints;
use crate::query::Query;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyCurrentUserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// `Some(None)` removes the avatar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Option<ImageData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Option<ImageData>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetCurrentUserGuildsQuery {
    pub before: Option<Snowflake>,
    pub after: Option<Snowflake>,
    /// 1 to 200.
    pub limit: Option<u8>,
    pub with_counts: Option<bool>,
}

impl GetCurrentUserGuildsQuery {
    fn to_query(self) -> Query {
        Query::new()
            .push("before", self.before)
            .push("after", self.after)
            .push("limit", self.limit)
            .push("with_counts", self.with_counts)
    }
}

#[derive(Serialize, Debug)]
struct CreateDmParams {
    recipient_id: Snowflake,
}

#[instrument(skip(session))]
pub async fn get_current_user(session: &Session) -> Result<User> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::CURRENT_USER))
        .await
}

#[instrument(skip(session))]
pub async fn get_user(session: &Session, user_id: Snowflake) -> Result<User> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::user(user_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn modify_current_user(session: &Session, params: &ModifyCurrentUserParams) -> Result<User> {
    session
        .fetch_json_json(Method::PATCH, endpoints::CURRENT_USER, params, HeaderMap::new())
        .await
}

/// Partial guilds: id, name, icon, owner, permissions and features, plus approximate counts when requested.
#[instrument(skip(session))]
pub async fn get_current_user_guilds(session: &Session, query: GetCurrentUserGuildsQuery) -> Result<Vec<Guild>> {
    let request = Request::new(Method::GET, endpoints::CURRENT_USER_GUILDS).with_query(query.to_query());
    session.fetch_to_object(request).await
}

/// Requires the `guilds.members.read` OAuth2 scope.
#[instrument(skip(session))]
pub async fn get_current_user_guild_member(session: &Session, guild_id: Snowflake) -> Result<Member> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::current_user_guild_member(guild_id)))
        .await
}

#[instrument(skip(session))]
pub async fn leave_guild(session: &Session, guild_id: Snowflake) -> Result<()> {
    no_content(session, Request::new(Method::DELETE, endpoints::current_user_guild(guild_id))).await
}

/// Returns the existing DM channel if one is already open.
#[instrument(skip(session))]
pub async fn create_dm(session: &Session, recipient_id: Snowflake) -> Result<Channel> {
    let params = CreateDmParams { recipient_id };
    session
        .fetch_json_json(Method::POST, endpoints::CURRENT_USER_CHANNELS, &params, HeaderMap::new())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use model::channel::ChannelType;

    #[tokio::test]
    async fn test_create_dm() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"id":"77","type":1,"recipients":[{"id":"5","username":"ryan"}]}"#);

        let channel = create_dm(&mock.session(), Snowflake(5)).await.unwrap();
        assert_eq!(channel.id, Snowflake(77));
        assert_eq!(channel.channel_type, ChannelType::DM);

        let req = &mock.requests()[0];
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.endpoint, "/users/@me/channels");
        assert_eq!(&req.body[..], br#"{"recipient_id":"5"}"#);
    }

    #[tokio::test]
    async fn test_current_user_guilds() {
        let mock = MockTransport::new();
        mock.push(
            200,
            r#"[{"id":"1","name":"one","icon":null,"owner":true,"permissions":"8","features":[]}]"#,
        );

        let query = GetCurrentUserGuildsQuery {
            after: Some(Snowflake(0)),
            limit: Some(200),
            ..Default::default()
        };
        let guilds = get_current_user_guilds(&mock.session(), query).await.unwrap();
        assert_eq!(guilds.len(), 1);
        assert!(guilds[0].owner);
        assert_eq!(mock.requests()[0].endpoint, "/users/@me/guilds?after=0&limit=200");
    }

    #[tokio::test]
    async fn test_remove_avatar() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"id":"5","username":"bot","avatar":null}"#);

        let params = ModifyCurrentUserParams {
            avatar: Some(None),
            ..Default::default()
        };
        let user = modify_current_user(&mock.session(), &params).await.unwrap();
        assert!(user.avatar.is_none());
        assert_eq!(&mock.requests()[0].body[..], br#"{"avatar":null}"#);
    }
}
