use model::entitlement::{Entitlement, EntitlementOwnerType};
use model::Snowflake;
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

#[derive(Debug, Clone, Default)]
pub struct ListEntitlementsQuery {
    pub user_id: Option<Snowflake>,
    pub sku_ids: Vec<Snowflake>,
    pub before: Option<Snowflake>,
    pub after: Option<Snowflake>,
    /// 1 to 100.
    pub limit: Option<u8>,
    pub guild_id: Option<Snowflake>,
    pub exclude_ended: Option<bool>,
}

impl ListEntitlementsQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .push("user_id", self.user_id)
            .push_list("sku_ids", &self.sku_ids)
            .push("before", self.before)
            .push("after", self.after)
            .push("limit", self.limit)
            .push("guild_id", self.guild_id)
            .push("exclude_ended", self.exclude_ended)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateTestEntitlementParams {
    pub sku_id: Snowflake,
    pub owner_id: Snowflake,
    pub owner_type: EntitlementOwnerType,
}

#[instrument(skip(session))]
pub async fn list_entitlements(
    session: &Session,
    application_id: Snowflake,
    query: &ListEntitlementsQuery,
) -> Result<Vec<Entitlement>> {
    let request = Request::new(Method::GET, endpoints::entitlements(application_id)).with_query(query.to_query());
    session.fetch_to_object(request).await
}

/// The entitlement is granted without payment and has no `starts_at` or `ends_at`.
#[instrument(skip(session))]
pub async fn create_test_entitlement(
    session: &Session,
    application_id: Snowflake,
    params: &CreateTestEntitlementParams,
) -> Result<Entitlement> {
    session
        .fetch_json_json(Method::POST, endpoints::entitlements(application_id), params, HeaderMap::new())
        .await
}

#[instrument(skip(session))]
pub async fn delete_test_entitlement(session: &Session, application_id: Snowflake, entitlement_id: Snowflake) -> Result<()> {
    let endpoint = endpoints::entitlement(application_id, entitlement_id);
    no_content(session, Request::new(Method::DELETE, endpoint)).await
}

/// Marks a one-time purchase as used.
#[instrument(skip(session))]
pub async fn consume_entitlement(session: &Session, application_id: Snowflake, entitlement_id: Snowflake) -> Result<()> {
    let endpoint = endpoints::entitlement_consume(application_id, entitlement_id);
    no_content(session, Request::new(Method::POST, endpoint)).await
}
