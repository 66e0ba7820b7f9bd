use model::audit_log::{AuditLog, AuditLogEvent};
use model::Snowflake;
use reqwest::Method;
use tracing::instrument;

use crate::endpoints;
use crate::query::Query;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct GetAuditLogQuery {
    pub user_id: Option<Snowflake>,
    pub action_type: Option<AuditLogEvent>,
    pub before: Option<Snowflake>,
    pub after: Option<Snowflake>,
    /// 1 to 100, Discord defaults to 50.
    pub limit: Option<u8>,
}

impl GetAuditLogQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .push("user_id", self.user_id)
            .push("action_type", self.action_type.map(AuditLogEvent::value))
            .push("before", self.before)
            .push("after", self.after)
            .push("limit", self.limit)
    }
}

#[instrument(skip(session))]
pub async fn get_guild_audit_log(session: &Session, guild_id: Snowflake, query: &GetAuditLogQuery) -> Result<AuditLog> {
    let request = Request::new(Method::GET, endpoints::guild_audit_logs(guild_id)).with_query(query.to_query());
    session.fetch_to_object(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_query_order() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"audit_log_entries":[],"users":[],"webhooks":[]}"#);

        let query = GetAuditLogQuery {
            user_id: Some(Snowflake(5)),
            action_type: Some(AuditLogEvent::MemberKick),
            limit: Some(10),
            ..Default::default()
        };
        let log = get_guild_audit_log(&mock.session(), Snowflake(1), &query).await.unwrap();
        assert!(log.audit_log_entries.is_empty());

        assert_eq!(
            mock.requests()[0].endpoint,
            "/guilds/1/audit-logs?user_id=5&action_type=20&limit=10"
        );
    }
}
