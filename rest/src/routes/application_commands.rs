use model::interaction::{
    ApplicationCommand, ApplicationCommandOption, ApplicationCommandPermissions, ApplicationCommandType,
    GuildApplicationCommandPermissions,
};
use model::{PermissionBitSet, Snowflake};
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
pub struct CreateApplicationCommandParams {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub command_type: Option<ApplicationCommandType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<PermissionBitSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dm_permission: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

impl CreateApplicationCommandParams {
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        CreateApplicationCommandParams {
            name: name.into(),
            description: description.into(),
            command_type: Some(ApplicationCommandType::ChatInput),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct EditApplicationCommandParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ApplicationCommandOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<PermissionBitSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dm_permission: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct EditApplicationCommandPermissionsParams {
    pub permissions: Vec<ApplicationCommandPermissions>,
}

#[instrument(skip(session))]
pub async fn list_global_application_commands(
    session: &Session,
    application_id: Snowflake,
    with_localizations: Option<bool>,
) -> Result<Vec<ApplicationCommand>> {
    let query = Query::new().push("with_localizations", with_localizations);
    let request = Request::new(Method::GET, endpoints::application_commands(application_id)).with_query(query);
    session.fetch_to_object(request).await
}

#[instrument(skip(session, params))]
pub async fn create_global_application_command(
    session: &Session,
    application_id: Snowflake,
    params: &CreateApplicationCommandParams,
) -> Result<ApplicationCommand> {
    let endpoint = endpoints::application_commands(application_id);
    session
        .fetch_json_json(Method::POST, endpoint, params, HeaderMap::new())
        .await
}

#[instrument(skip(session))]
pub async fn get_global_application_command(
    session: &Session,
    application_id: Snowflake,
    command_id: Snowflake,
) -> Result<ApplicationCommand> {
    let endpoint = endpoints::application_command(application_id, command_id);
    session.fetch_to_object(Request::new(Method::GET, endpoint)).await
}

#[instrument(skip(session, params))]
pub async fn edit_global_application_command(
    session: &Session,
    application_id: Snowflake,
    command_id: Snowflake,
    params: &EditApplicationCommandParams,
) -> Result<ApplicationCommand> {
    let endpoint = endpoints::application_command(application_id, command_id);
    session
        .fetch_json_json(Method::PATCH, endpoint, params, HeaderMap::new())
        .await
}

#[instrument(skip(session))]
pub async fn delete_global_application_command(
    session: &Session,
    application_id: Snowflake,
    command_id: Snowflake,
) -> Result<()> {
    let endpoint = endpoints::application_command(application_id, command_id);
    no_content(session, Request::new(Method::DELETE, endpoint)).await
}

/// Replaces every global command with `commands`. Commands not in the list are deleted.
#[instrument(skip(session, commands))]
pub async fn bulk_overwrite_global_application_commands(
    session: &Session,
    application_id: Snowflake,
    commands: &[CreateApplicationCommandParams],
) -> Result<Vec<ApplicationCommand>> {
    let endpoint = endpoints::application_commands(application_id);
    session
        .fetch_json_json(Method::PUT, endpoint, commands, HeaderMap::new())
        .await
}

#[instrument(skip(session))]
pub async fn list_guild_application_commands(
    session: &Session,
    application_id: Snowflake,
    guild_id: Snowflake,
    with_localizations: Option<bool>,
) -> Result<Vec<ApplicationCommand>> {
    let query = Query::new().push("with_localizations", with_localizations);
    let endpoint = endpoints::guild_application_commands(application_id, guild_id);
    session
        .fetch_to_object(Request::new(Method::GET, endpoint).with_query(query))
        .await
}

#[instrument(skip(session, params))]
pub async fn create_guild_application_command(
    session: &Session,
    application_id: Snowflake,
    guild_id: Snowflake,
    params: &CreateApplicationCommandParams,
) -> Result<ApplicationCommand> {
    let endpoint = endpoints::guild_application_commands(application_id, guild_id);
    session
        .fetch_json_json(Method::POST, endpoint, params, HeaderMap::new())
        .await
}

#[instrument(skip(session))]
pub async fn get_guild_application_command(
    session: &Session,
    application_id: Snowflake,
    guild_id: Snowflake,
    command_id: Snowflake,
) -> Result<ApplicationCommand> {
    let endpoint = endpoints::guild_application_command(application_id, guild_id, command_id);
    session.fetch_to_object(Request::new(Method::GET, endpoint)).await
}

#[instrument(skip(session, params))]
pub async fn edit_guild_application_command(
    session: &Session,
    application_id: Snowflake,
    guild_id: Snowflake,
    command_id: Snowflake,
    params: &EditApplicationCommandParams,
) -> Result<ApplicationCommand> {
    let endpoint = endpoints::guild_application_command(application_id, guild_id, command_id);
    session
        .fetch_json_json(Method::PATCH, endpoint, params, HeaderMap::new())
        .await
}

#[instrument(skip(session))]
pub async fn delete_guild_application_command(
    session: &Session,
    application_id: Snowflake,
    guild_id: Snowflake,
    command_id: Snowflake,
) -> Result<()> {
    let endpoint = endpoints::guild_application_command(application_id, guild_id, command_id);
    no_content(session, Request::new(Method::DELETE, endpoint)).await
}

#[instrument(skip(session, commands))]
pub async fn bulk_overwrite_guild_application_commands(
    session: &Session,
    application_id: Snowflake,
    guild_id: Snowflake,
    commands: &[CreateApplicationCommandParams],
) -> Result<Vec<ApplicationCommand>> {
    let endpoint = endpoints::guild_application_commands(application_id, guild_id);
    session
        .fetch_json_json(Method::PUT, endpoint, commands, HeaderMap::new())
        .await
}

/// Permissions of every command in the guild that has overrides.
#[instrument(skip(session))]
pub async fn list_guild_application_command_permissions(
    session: &Session,
    application_id: Snowflake,
    guild_id: Snowflake,
) -> Result<Vec<GuildApplicationCommandPermissions>> {
    let endpoint = endpoints::guild_application_command_permissions(application_id, guild_id);
    session.fetch_to_object(Request::new(Method::GET, endpoint)).await
}

#[instrument(skip(session))]
pub async fn get_application_command_permissions(
    session: &Session,
    application_id: Snowflake,
    guild_id: Snowflake,
    command_id: Snowflake,
) -> Result<GuildApplicationCommandPermissions> {
    let endpoint = endpoints::application_command_permissions(application_id, guild_id, command_id);
    session.fetch_to_object(Request::new(Method::GET, endpoint)).await
}

/// Requires a bearer token with the `applications.commands.permissions.update` scope.
#[instrument(skip(session, params))]
pub async fn edit_application_command_permissions(
    session: &Session,
    application_id: Snowflake,
    guild_id: Snowflake,
    command_id: Snowflake,
    params: &EditApplicationCommandPermissionsParams,
) -> Result<GuildApplicationCommandPermissions> {
    let endpoint = endpoints::application_command_permissions(application_id, guild_id, command_id);
    session
        .fetch_json_json(Method::PUT, endpoint, params, HeaderMap::new())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_bulk_overwrite() {
        let mock = MockTransport::new();
        mock.push(200, "[]");

        let commands = vec![CreateApplicationCommandParams::chat_input("close", "Closes the ticket")];
        let res = bulk_overwrite_guild_application_commands(&mock.session(), Snowflake(1), Snowflake(2), &commands)
            .await
            .unwrap();
        assert!(res.is_empty());

        let req = &mock.requests()[0];
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.endpoint, "/applications/1/guilds/2/commands");
        assert_eq!(
            &req.body[..],
            br#"[{"name":"close","description":"Closes the ticket","type":1}]"#
        );
    }

    #[tokio::test]
    async fn test_list_with_localizations() {
        let mock = MockTransport::new();
        mock.push(200, "[]");

        list_global_application_commands(&mock.session(), Snowflake(1), Some(true))
            .await
            .unwrap();
        assert_eq!(mock.requests()[0].endpoint, "/applications/1/commands?with_localizations=true");
    }
}
