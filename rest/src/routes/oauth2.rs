use model::application::{Application, AuthorizationInformation};
use reqwest::Method;
use tracing::instrument;

use crate::endpoints;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

#[instrument(skip(session))]
pub async fn get_current_bot_application_information(session: &Session) -> Result<Application> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::OAUTH2_CURRENT_APPLICATION))
        .await
}

/// Requires a bearer token.
#[instrument(skip(session))]
pub async fn get_current_authorization_information(session: &Session) -> Result<AuthorizationInformation> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::OAUTH2_CURRENT_AUTHORIZATION))
        .await
}
