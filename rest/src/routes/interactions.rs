use model::channel::message::Message;
use model::interaction::InteractionResponse;
use model::Snowflake;
use reqwest::Method;
use tracing::instrument;

use super::webhooks::{EditWebhookMessageParams, ExecuteWebhookParams};
use super::{no_content, send_with_files};
use crate::endpoints::{self, ORIGINAL_MESSAGE};
use crate::request::Request;
use crate::session::Session;
use crate::transport::File;
use crate::Result;

/// Ids needed to edit or delete a follow-up message later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowupHandle {
    pub application_id: Snowflake,
    pub token: String,
    pub message_id: Snowflake,
}

impl FollowupHandle {
    pub async fn get(&self, session: &Session) -> Result<Message> {
        get_followup_message(session, self.application_id, &self.token, self.message_id).await
    }

    pub async fn edit(&self, session: &Session, params: &EditWebhookMessageParams) -> Result<Message> {
        edit_followup_message(session, self.application_id, &self.token, self.message_id, params).await
    }

    pub async fn delete(&self, session: &Session) -> Result<()> {
        delete_followup_message(session, self.application_id, &self.token, self.message_id).await
    }
}

/// Must be called within 3 seconds of receiving the interaction. `files` are only valid for message responses.
#[instrument(skip(session, token, response, files))]
pub async fn create_interaction_response(
    session: &Session,
    interaction_id: Snowflake,
    token: &str,
    response: &InteractionResponse,
    files: &[File],
) -> Result<()> {
    let request = super::payload_request(
        Method::POST,
        endpoints::interaction_callback(interaction_id, token),
        response,
        files,
    )?;
    no_content(session, request).await
}

#[instrument(skip(session, token))]
pub async fn get_original_interaction_response(
    session: &Session,
    application_id: Snowflake,
    token: &str,
) -> Result<Message> {
    let endpoint = endpoints::webhook_message(application_id, token, ORIGINAL_MESSAGE);
    session.fetch_to_object(Request::new(Method::GET, endpoint)).await
}

#[instrument(skip(session, token, params))]
pub async fn edit_original_interaction_response(
    session: &Session,
    application_id: Snowflake,
    token: &str,
    params: &EditWebhookMessageParams,
) -> Result<Message> {
    let endpoint = endpoints::webhook_message(application_id, token, ORIGINAL_MESSAGE);
    send_with_files(session, Method::PATCH, endpoint, params, &params.files).await
}

#[instrument(skip(session, token))]
pub async fn delete_original_interaction_response(
    session: &Session,
    application_id: Snowflake,
    token: &str,
) -> Result<()> {
    let endpoint = endpoints::webhook_message(application_id, token, ORIGINAL_MESSAGE);
    no_content(session, Request::new(Method::DELETE, endpoint)).await
}

#[instrument(skip(session, token, params))]
pub async fn create_followup_message(
    session: &Session,
    application_id: Snowflake,
    token: &str,
    params: &ExecuteWebhookParams,
) -> Result<(FollowupHandle, Message)> {
    let endpoint = endpoints::webhook_with_token(application_id, token);
    let message: Message = send_with_files(session, Method::POST, endpoint, params, &params.files).await?;

    let handle = FollowupHandle {
        application_id,
        token: token.to_owned(),
        message_id: message.id,
    };

    Ok((handle, message))
}

#[instrument(skip(session, token))]
pub async fn get_followup_message(
    session: &Session,
    application_id: Snowflake,
    token: &str,
    message_id: Snowflake,
) -> Result<Message> {
    let endpoint = endpoints::webhook_message(application_id, token, message_id);
    session.fetch_to_object(Request::new(Method::GET, endpoint)).await
}

#[instrument(skip(session, token, params))]
pub async fn edit_followup_message(
    session: &Session,
    application_id: Snowflake,
    token: &str,
    message_id: Snowflake,
    params: &EditWebhookMessageParams,
) -> Result<Message> {
    let endpoint = endpoints::webhook_message(application_id, token, message_id);
    send_with_files(session, Method::PATCH, endpoint, params, &params.files).await
}

#[instrument(skip(session, token))]
pub async fn delete_followup_message(
    session: &Session,
    application_id: Snowflake,
    token: &str,
    message_id: Snowflake,
) -> Result<()> {
    let endpoint = endpoints::webhook_message(application_id, token, message_id);
    no_content(session, Request::new(Method::DELETE, endpoint)).await
}
