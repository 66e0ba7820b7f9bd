use chrono::{DateTime, Utc};
use model::channel::{Channel, ChannelType, PermissionOverwrite, ThreadArchiveDuration, VideoQualityMode};
use model::guild::{
    Ban, DefaultMessageNotifications, ExplicitContentFilterLevel, Guild, GuildPreview, GuildWidgetSettings,
    Integration, Member, PruneCount, Role, SystemChannelFlags, VerificationLevel, VoiceRegion, WelcomeScreen,
    WelcomeScreenChannel,
};
use model::invite::Invite;
use model::{ImageData, PermissionBitSet, Snowflake};
use reqwest::header::HeaderMap;
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
pub struct CreateGuildParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<VerificationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message_notifications: Option<DefaultMessageNotifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_content_filter: Option<ExplicitContentFilterLevel>,
    /// The first role becomes `@everyone`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
    /// Ids are placeholders that other fields may refer to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_flags: Option<SystemChannelFlags>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyGuildParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<VerificationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message_notifications: Option<DefaultMessageNotifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_content_filter: Option<ExplicitContentFilterLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ImageData>,
    /// Requires ownership of the guild.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_splash: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_flags: Option<SystemChannelFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_updates_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_progress_bar_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_alerts_channel_id: Option<Snowflake>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateGuildChannelParams {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permission_overwrites: Vec<PermissionOverwrite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtc_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_quality_mode: Option<VideoQualityMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_auto_archive_duration: Option<ThreadArchiveDuration>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ChannelPosition {
    pub id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_permissions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
}

#[derive(Debug, Clone, Default)]
pub struct ListGuildMembersQuery {
    /// 1 to 1000.
    pub limit: Option<u16>,
    pub after: Option<Snowflake>,
}

/// Requires an OAuth2 access token with the `guilds.join` scope for the user being added.
#[derive(Serialize, Debug, Clone, Default)]
pub struct AddGuildMemberParams {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
}

/// `Some(None)` fields are sent as `null`, which clears them.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyGuildMemberParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Snowflake>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
    /// `Some(None)` disconnects the member from voice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Option<Snowflake>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<Option<DateTime<Utc>>>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyCurrentMemberParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetGuildBansQuery {
    pub limit: Option<u16>,
    pub before: Option<Snowflake>,
    pub after: Option<Snowflake>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct CreateGuildBanParams {
    /// 0 to 604800.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_message_seconds: Option<u32>,
}

/// Shared by role creation and modification.
#[derive(Serialize, Debug, Clone, Default)]
pub struct GuildRoleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionBitSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentionable: Option<bool>,
}

#[derive(Serialize, Debug, Clone)]
pub struct RolePosition {
    pub id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct BeginGuildPruneParams {
    /// 1 to 30, Discord defaults to 7.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u8>,
    /// Set to false for large guilds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_prune_count: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_roles: Vec<Snowflake>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyGuildWelcomeScreenParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_channels: Option<Vec<WelcomeScreenChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[instrument(skip(session, params))]
pub async fn create_guild(session: &Session, params: &CreateGuildParams) -> Result<Guild> {
    session
        .fetch_json_json(Method::POST, endpoints::GUILDS, params, HeaderMap::new())
        .await
}

#[instrument(skip(session))]
pub async fn get_guild(session: &Session, guild_id: Snowflake, with_counts: Option<bool>) -> Result<Guild> {
    let query = Query::new().push("with_counts", with_counts);
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild(guild_id)).with_query(query))
        .await
}

#[instrument(skip(session))]
pub async fn get_guild_preview(session: &Session, guild_id: Snowflake) -> Result<GuildPreview> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_preview(guild_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn modify_guild(
    session: &Session,
    guild_id: Snowflake,
    params: &ModifyGuildParams,
    reason: Option<&str>,
) -> Result<Guild> {
    let request = Request::json(Method::PATCH, endpoints::guild(guild_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

/// Requires ownership of the guild.
#[instrument(skip(session))]
pub async fn delete_guild(session: &Session, guild_id: Snowflake) -> Result<()> {
    no_content(session, Request::new(Method::DELETE, endpoints::guild(guild_id))).await
}

/// Excludes threads.
#[instrument(skip(session))]
pub async fn get_guild_channels(session: &Session, guild_id: Snowflake) -> Result<Vec<Channel>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_channels(guild_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn create_guild_channel(
    session: &Session,
    guild_id: Snowflake,
    params: &CreateGuildChannelParams,
    reason: Option<&str>,
) -> Result<Channel> {
    let request = Request::json(Method::POST, endpoints::guild_channels(guild_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session, positions))]
pub async fn modify_guild_channel_positions(
    session: &Session,
    guild_id: Snowflake,
    positions: &[ChannelPosition],
    reason: Option<&str>,
) -> Result<()> {
    let request = Request::json(Method::PATCH, endpoints::guild_channels(guild_id), positions)?.with_reason(reason)?;
    no_content(session, request).await
}

#[instrument(skip(session))]
pub async fn get_guild_member(session: &Session, guild_id: Snowflake, user_id: Snowflake) -> Result<Member> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_member(guild_id, user_id)))
        .await
}

/// Requires the guild members intent.
#[instrument(skip(session))]
pub async fn list_guild_members(
    session: &Session,
    guild_id: Snowflake,
    query: &ListGuildMembersQuery,
) -> Result<Vec<Member>> {
    let query = Query::new().push("limit", query.limit).push("after", query.after);
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_members(guild_id)).with_query(query))
        .await
}

/// Members whose username or nickname starts with `query`.
#[instrument(skip(session))]
pub async fn search_guild_members(
    session: &Session,
    guild_id: Snowflake,
    query: &str,
    limit: Option<u16>,
) -> Result<Vec<Member>> {
    let query = Query::new().push("query", Some(query)).push("limit", limit);
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_members_search(guild_id)).with_query(query))
        .await
}

/// Returns `None` when the user was already a member.
#[instrument(skip(session, params))]
pub async fn add_guild_member(
    session: &Session,
    guild_id: Snowflake,
    user_id: Snowflake,
    params: &AddGuildMemberParams,
) -> Result<Option<Member>> {
    let endpoint = endpoints::guild_member(guild_id, user_id);
    session
        .fetch_json_json(Method::PUT, endpoint, params, HeaderMap::new())
        .await
}

#[instrument(skip(session, params))]
pub async fn modify_guild_member(
    session: &Session,
    guild_id: Snowflake,
    user_id: Snowflake,
    params: &ModifyGuildMemberParams,
    reason: Option<&str>,
) -> Result<Member> {
    let endpoint = endpoints::guild_member(guild_id, user_id);
    let request = Request::json(Method::PATCH, endpoint, params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session, params))]
pub async fn modify_current_member(
    session: &Session,
    guild_id: Snowflake,
    params: &ModifyCurrentMemberParams,
    reason: Option<&str>,
) -> Result<Member> {
    let request = Request::json(Method::PATCH, endpoints::guild_member(guild_id, ME), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn add_guild_member_role(
    session: &Session,
    guild_id: Snowflake,
    user_id: Snowflake,
    role_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::guild_member_role(guild_id, user_id, role_id);
    no_content(session, Request::new(Method::PUT, endpoint).with_reason(reason)?).await
}

#[instrument(skip(session))]
pub async fn remove_guild_member_role(
    session: &Session,
    guild_id: Snowflake,
    user_id: Snowflake,
    role_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::guild_member_role(guild_id, user_id, role_id);
    no_content(session, Request::new(Method::DELETE, endpoint).with_reason(reason)?).await
}

/// Kicks the member.
#[instrument(skip(session))]
pub async fn remove_guild_member(
    session: &Session,
    guild_id: Snowflake,
    user_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::guild_member(guild_id, user_id);
    no_content(session, Request::new(Method::DELETE, endpoint).with_reason(reason)?).await
}

#[instrument(skip(session))]
pub async fn get_guild_bans(session: &Session, guild_id: Snowflake, query: &GetGuildBansQuery) -> Result<Vec<Ban>> {
    let query = Query::new()
        .push("limit", query.limit)
        .push("before", query.before)
        .push("after", query.after);
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_bans(guild_id)).with_query(query))
        .await
}

#[instrument(skip(session))]
pub async fn get_guild_ban(session: &Session, guild_id: Snowflake, user_id: Snowflake) -> Result<Ban> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_ban(guild_id, user_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn create_guild_ban(
    session: &Session,
    guild_id: Snowflake,
    user_id: Snowflake,
    params: &CreateGuildBanParams,
    reason: Option<&str>,
) -> Result<()> {
    let request = Request::json(Method::PUT, endpoints::guild_ban(guild_id, user_id), params)?.with_reason(reason)?;
    no_content(session, request).await
}

#[instrument(skip(session))]
pub async fn remove_guild_ban(
    session: &Session,
    guild_id: Snowflake,
    user_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::guild_ban(guild_id, user_id);
    no_content(session, Request::new(Method::DELETE, endpoint).with_reason(reason)?).await
}

#[instrument(skip(session))]
pub async fn get_guild_roles(session: &Session, guild_id: Snowflake) -> Result<Vec<Role>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_roles(guild_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn create_guild_role(
    session: &Session,
    guild_id: Snowflake,
    params: &GuildRoleParams,
    reason: Option<&str>,
) -> Result<Role> {
    let request = Request::json(Method::POST, endpoints::guild_roles(guild_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

/// Returns every role in the guild.
#[instrument(skip(session, positions))]
pub async fn modify_guild_role_positions(
    session: &Session,
    guild_id: Snowflake,
    positions: &[RolePosition],
    reason: Option<&str>,
) -> Result<Vec<Role>> {
    let request = Request::json(Method::PATCH, endpoints::guild_roles(guild_id), positions)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session, params))]
pub async fn modify_guild_role(
    session: &Session,
    guild_id: Snowflake,
    role_id: Snowflake,
    params: &GuildRoleParams,
    reason: Option<&str>,
) -> Result<Role> {
    let request = Request::json(Method::PATCH, endpoints::guild_role(guild_id, role_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn delete_guild_role(
    session: &Session,
    guild_id: Snowflake,
    role_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::guild_role(guild_id, role_id);
    no_content(session, Request::new(Method::DELETE, endpoint).with_reason(reason)?).await
}

#[instrument(skip(session, include_roles))]
pub async fn get_guild_prune_count(
    session: &Session,
    guild_id: Snowflake,
    days: Option<u8>,
    include_roles: &[Snowflake],
) -> Result<PruneCount> {
    let query = Query::new().push("days", days).push_list("include_roles", include_roles);
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_prune(guild_id)).with_query(query))
        .await
}

#[instrument(skip(session, params))]
pub async fn begin_guild_prune(
    session: &Session,
    guild_id: Snowflake,
    params: &BeginGuildPruneParams,
    reason: Option<&str>,
) -> Result<PruneCount> {
    let request = Request::json(Method::POST, endpoints::guild_prune(guild_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn get_guild_voice_regions(session: &Session, guild_id: Snowflake) -> Result<Vec<VoiceRegion>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_regions(guild_id)))
        .await
}

#[instrument(skip(session))]
pub async fn get_guild_invites(session: &Session, guild_id: Snowflake) -> Result<Vec<Invite>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_invites(guild_id)))
        .await
}

#[instrument(skip(session))]
pub async fn get_guild_integrations(session: &Session, guild_id: Snowflake) -> Result<Vec<Integration>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_integrations(guild_id)))
        .await
}

/// Also removes any bot or webhook associated with the integration.
#[instrument(skip(session))]
pub async fn delete_guild_integration(
    session: &Session,
    guild_id: Snowflake,
    integration_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let endpoint = endpoints::guild_integration(guild_id, integration_id);
    no_content(session, Request::new(Method::DELETE, endpoint).with_reason(reason)?).await
}

#[instrument(skip(session))]
pub async fn get_guild_widget_settings(session: &Session, guild_id: Snowflake) -> Result<GuildWidgetSettings> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_widget(guild_id)))
        .await
}

#[instrument(skip(session))]
pub async fn modify_guild_widget(
    session: &Session,
    guild_id: Snowflake,
    settings: &GuildWidgetSettings,
    reason: Option<&str>,
) -> Result<GuildWidgetSettings> {
    let request = Request::json(Method::PATCH, endpoints::guild_widget(guild_id), settings)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

/// Partial invite carrying only `code` and `uses`. `code` is null when the guild has no vanity url.
#[instrument(skip(session))]
pub async fn get_guild_vanity_url(session: &Session, guild_id: Snowflake) -> Result<Invite> {
    #[derive(serde::Deserialize)]
    struct VanityUrl {
        code: Option<String>,
        #[serde(default)]
        uses: u32,
    }

    let vanity: VanityUrl = session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_vanity_url(guild_id)))
        .await?;

    let mut invite = Invite {
        code: vanity.code.unwrap_or_default(),
        ..Default::default()
    };
    invite.metadata.uses = vanity.uses;

    Ok(invite)
}

#[instrument(skip(session))]
pub async fn get_guild_welcome_screen(session: &Session, guild_id: Snowflake) -> Result<WelcomeScreen> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_welcome_screen(guild_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn modify_guild_welcome_screen(
    session: &Session,
    guild_id: Snowflake,
    params: &ModifyGuildWelcomeScreenParams,
    reason: Option<&str>,
) -> Result<WelcomeScreen> {
    let endpoint = endpoints::guild_welcome_screen(guild_id);
    let request = Request::json(Method::PATCH, endpoint, params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}
