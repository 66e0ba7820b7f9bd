use model::invite::Invite;
use model::Snowflake;
use reqwest::Method;
use tracing::instrument;

use crate::endpoints;
use crate::query::Query;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct GetInviteQuery {
    pub with_counts: Option<bool>,
    pub with_expiration: Option<bool>,
    pub guild_scheduled_event_id: Option<Snowflake>,
}

#[instrument(skip(session))]
pub async fn get_invite(session: &Session, code: &str, query: &GetInviteQuery) -> Result<Invite> {
    let query = Query::new()
        .push("with_counts", query.with_counts)
        .push("with_expiration", query.with_expiration)
        .push("guild_scheduled_event_id", query.guild_scheduled_event_id);

    session
        .fetch_to_object(Request::new(Method::GET, endpoints::invite(code)).with_query(query))
        .await
}

/// Returns the deleted invite.
#[instrument(skip(session))]
pub async fn delete_invite(session: &Session, code: &str, reason: Option<&str>) -> Result<Invite> {
    let request = Request::new(Method::DELETE, endpoints::invite(code)).with_reason(reason)?;
    session.fetch_to_object(request).await
}
