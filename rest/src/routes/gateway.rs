use model::gateway::{GatewayBotInfo, GatewayInfo};
use reqwest::Method;
use tracing::instrument;

use crate::endpoints;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

#[instrument(skip(session))]
pub async fn get_gateway(session: &Session) -> Result<GatewayInfo> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::GATEWAY))
        .await
}

/// Also returns the recommended shard count and the identify budget.
#[instrument(skip(session))]
pub async fn get_gateway_bot(session: &Session) -> Result<GatewayBotInfo> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::GATEWAY_BOT))
        .await
}
