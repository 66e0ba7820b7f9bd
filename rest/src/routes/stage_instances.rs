use model::stage::{PrivacyLevel, StageInstance};
use model::Snowflake;
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::no_content;
use crate::endpoints;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

#[derive(Serialize, Debug, Clone)]
pub struct CreateStageInstanceParams {
    pub channel_id: Snowflake,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<PrivacyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_start_notification: Option<bool>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyStageInstanceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<PrivacyLevel>,
}

#[instrument(skip(session, params))]
pub async fn create_stage_instance(
    session: &Session,
    params: &CreateStageInstanceParams,
    reason: Option<&str>,
) -> Result<StageInstance> {
    let request = Request::json(Method::POST, endpoints::STAGE_INSTANCES, params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn get_stage_instance(session: &Session, channel_id: Snowflake) -> Result<StageInstance> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::stage_instance(channel_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn modify_stage_instance(
    session: &Session,
    channel_id: Snowflake,
    params: &ModifyStageInstanceParams,
    reason: Option<&str>,
) -> Result<StageInstance> {
    let request = Request::json(Method::PATCH, endpoints::stage_instance(channel_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn delete_stage_instance(session: &Session, channel_id: Snowflake, reason: Option<&str>) -> Result<()> {
    let request = Request::new(Method::DELETE, endpoints::stage_instance(channel_id)).with_reason(reason)?;
    no_content(session, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_create() {
        let mock = MockTransport::new();
        mock.push(
            200,
            r#"{"id":"1","guild_id":"2","channel_id":"3","topic":"AMA","privacy_level":2}"#,
        );

        let params = CreateStageInstanceParams {
            channel_id: Snowflake(3),
            topic: "AMA".to_owned(),
            privacy_level: None,
            send_start_notification: None,
        };
        let stage = create_stage_instance(&mock.session(), &params, Some("event")).await.unwrap();
        assert_eq!(stage.privacy_level, PrivacyLevel::GuildOnly);

        let req = &mock.requests()[0];
        assert_eq!(req.endpoint, "/stage-instances");
        assert_eq!(&req.body[..], br#"{"channel_id":"3","topic":"AMA"}"#);
        assert_eq!(req.reason(), Some("event"));
    }
}
