//! Relative API paths. Query strings are added by the operations, never here.

use std::borrow::Cow;
use std::fmt::Display;

use model::Snowflake;

pub const API_VERSION: &str = "9";
pub const API_BASE: &str = "/api/v9";
pub const DISCORD_URL: &str = "https://discord.com";

/// Escapes a reaction emoji for use as a path segment. Custom emojis are passed as `name:id`.
pub fn encode_emoji(emoji: &str) -> String {
    emoji.replace('#', "%23")
}

/// Hides the token segment of webhook and interaction paths. Works on bare endpoints and full urls.
pub fn redact_token(url: &str) -> Cow<'_, str> {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };

    let mut segments: Vec<&str> = path.split('/').collect();
    let Some(pos) = segments
        .iter()
        .position(|s| *s == "webhooks" || *s == "interactions")
    else {
        return Cow::Borrowed(url);
    };

    match segments.get_mut(pos + 2) {
        Some(token) if !token.is_empty() => *token = "[redacted]",
        _ => return Cow::Borrowed(url),
    }

    let mut redacted = segments.join("/");
    if let Some(query) = query {
        redacted.push('?');
        redacted.push_str(query);
    }

    Cow::Owned(redacted)
}

// Application commands

pub fn application_commands(application_id: Snowflake) -> String {
    format!("/applications/{}/commands", application_id)
}

pub fn application_command(application_id: Snowflake, command_id: Snowflake) -> String {
    format!("/applications/{}/commands/{}", application_id, command_id)
}

pub fn guild_application_commands(application_id: Snowflake, guild_id: Snowflake) -> String {
    format!("/applications/{}/guilds/{}/commands", application_id, guild_id)
}

pub fn guild_application_command(
    application_id: Snowflake,
    guild_id: Snowflake,
    command_id: Snowflake,
) -> String {
    format!(
        "/applications/{}/guilds/{}/commands/{}",
        application_id, guild_id, command_id
    )
}

pub fn guild_application_command_permissions(
    application_id: Snowflake,
    guild_id: Snowflake,
) -> String {
    format!(
        "/applications/{}/guilds/{}/commands/permissions",
        application_id, guild_id
    )
}

pub fn application_command_permissions(
    application_id: Snowflake,
    guild_id: Snowflake,
    command_id: Snowflake,
) -> String {
    format!(
        "/applications/{}/guilds/{}/commands/{}/permissions",
        application_id, guild_id, command_id
    )
}

// Entitlements

pub fn entitlements(application_id: Snowflake) -> String {
    format!("/applications/{}/entitlements", application_id)
}

pub fn entitlement(application_id: Snowflake, entitlement_id: Snowflake) -> String {
    format!("/applications/{}/entitlements/{}", application_id, entitlement_id)
}

pub fn entitlement_consume(application_id: Snowflake, entitlement_id: Snowflake) -> String {
    format!("/applications/{}/entitlements/{}/consume", application_id, entitlement_id)
}

// Channels

pub fn channel(channel_id: Snowflake) -> String {
    format!("/channels/{}", channel_id)
}

pub fn channel_messages(channel_id: Snowflake) -> String {
    format!("/channels/{}/messages", channel_id)
}

pub fn channel_message(channel_id: Snowflake, message_id: Snowflake) -> String {
    format!("/channels/{}/messages/{}", channel_id, message_id)
}

pub fn channel_message_crosspost(channel_id: Snowflake, message_id: Snowflake) -> String {
    format!("/channels/{}/messages/{}/crosspost", channel_id, message_id)
}

pub fn channel_messages_bulk_delete(channel_id: Snowflake) -> String {
    format!("/channels/{}/messages/bulk-delete", channel_id)
}

pub fn message_reactions(channel_id: Snowflake, message_id: Snowflake) -> String {
    format!("/channels/{}/messages/{}/reactions", channel_id, message_id)
}

pub fn message_reactions_for_emoji(channel_id: Snowflake, message_id: Snowflake, emoji: &str) -> String {
    format!(
        "/channels/{}/messages/{}/reactions/{}",
        channel_id,
        message_id,
        encode_emoji(emoji)
    )
}

/// `user` is a user id or `@me`.
pub fn message_reaction(
    channel_id: Snowflake,
    message_id: Snowflake,
    emoji: &str,
    user: impl Display,
) -> String {
    format!(
        "/channels/{}/messages/{}/reactions/{}/{}",
        channel_id,
        message_id,
        encode_emoji(emoji),
        user
    )
}

pub fn channel_permission(channel_id: Snowflake, overwrite_id: Snowflake) -> String {
    format!("/channels/{}/permissions/{}", channel_id, overwrite_id)
}

pub fn channel_invites(channel_id: Snowflake) -> String {
    format!("/channels/{}/invites", channel_id)
}

pub fn channel_followers(channel_id: Snowflake) -> String {
    format!("/channels/{}/followers", channel_id)
}

pub fn channel_typing(channel_id: Snowflake) -> String {
    format!("/channels/{}/typing", channel_id)
}

pub fn channel_pins(channel_id: Snowflake) -> String {
    format!("/channels/{}/pins", channel_id)
}

pub fn channel_pin(channel_id: Snowflake, message_id: Snowflake) -> String {
    format!("/channels/{}/pins/{}", channel_id, message_id)
}

pub fn channel_webhooks(channel_id: Snowflake) -> String {
    format!("/channels/{}/webhooks", channel_id)
}

// Threads

pub fn message_threads(channel_id: Snowflake, message_id: Snowflake) -> String {
    format!("/channels/{}/messages/{}/threads", channel_id, message_id)
}

pub fn channel_threads(channel_id: Snowflake) -> String {
    format!("/channels/{}/threads", channel_id)
}

/// `user` is a user id or `@me`.
pub fn thread_member(thread_id: Snowflake, user: impl Display) -> String {
    format!("/channels/{}/thread-members/{}", thread_id, user)
}

pub fn thread_members(thread_id: Snowflake) -> String {
    format!("/channels/{}/thread-members", thread_id)
}

pub fn public_archived_threads(channel_id: Snowflake) -> String {
    format!("/channels/{}/threads/archived/public", channel_id)
}

pub fn private_archived_threads(channel_id: Snowflake) -> String {
    format!("/channels/{}/threads/archived/private", channel_id)
}

pub fn joined_private_archived_threads(channel_id: Snowflake) -> String {
    format!("/channels/{}/users/@me/threads/archived/private", channel_id)
}

pub fn guild_active_threads(guild_id: Snowflake) -> String {
    format!("/guilds/{}/threads/active", guild_id)
}

// Guilds

pub const GUILDS: &str = "/guilds";

pub fn guild(guild_id: Snowflake) -> String {
    format!("/guilds/{}", guild_id)
}

pub fn guild_preview(guild_id: Snowflake) -> String {
    format!("/guilds/{}/preview", guild_id)
}

pub fn guild_audit_logs(guild_id: Snowflake) -> String {
    format!("/guilds/{}/audit-logs", guild_id)
}

pub fn guild_channels(guild_id: Snowflake) -> String {
    format!("/guilds/{}/channels", guild_id)
}

pub fn guild_members(guild_id: Snowflake) -> String {
    format!("/guilds/{}/members", guild_id)
}

pub fn guild_members_search(guild_id: Snowflake) -> String {
    format!("/guilds/{}/members/search", guild_id)
}

/// `user` is a user id or `@me`.
pub fn guild_member(guild_id: Snowflake, user: impl Display) -> String {
    format!("/guilds/{}/members/{}", guild_id, user)
}

pub fn guild_member_role(guild_id: Snowflake, user_id: Snowflake, role_id: Snowflake) -> String {
    format!("/guilds/{}/members/{}/roles/{}", guild_id, user_id, role_id)
}

pub fn guild_bans(guild_id: Snowflake) -> String {
    format!("/guilds/{}/bans", guild_id)
}

pub fn guild_ban(guild_id: Snowflake, user_id: Snowflake) -> String {
    format!("/guilds/{}/bans/{}", guild_id, user_id)
}

pub fn guild_roles(guild_id: Snowflake) -> String {
    format!("/guilds/{}/roles", guild_id)
}

pub fn guild_role(guild_id: Snowflake, role_id: Snowflake) -> String {
    format!("/guilds/{}/roles/{}", guild_id, role_id)
}

pub fn guild_prune(guild_id: Snowflake) -> String {
    format!("/guilds/{}/prune", guild_id)
}

pub fn guild_regions(guild_id: Snowflake) -> String {
    format!("/guilds/{}/regions", guild_id)
}

pub fn guild_invites(guild_id: Snowflake) -> String {
    format!("/guilds/{}/invites", guild_id)
}

pub fn guild_integrations(guild_id: Snowflake) -> String {
    format!("/guilds/{}/integrations", guild_id)
}

pub fn guild_integration(guild_id: Snowflake, integration_id: Snowflake) -> String {
    format!("/guilds/{}/integrations/{}", guild_id, integration_id)
}

pub fn guild_widget(guild_id: Snowflake) -> String {
    format!("/guilds/{}/widget", guild_id)
}

pub fn guild_vanity_url(guild_id: Snowflake) -> String {
    format!("/guilds/{}/vanity-url", guild_id)
}

pub fn guild_welcome_screen(guild_id: Snowflake) -> String {
    format!("/guilds/{}/welcome-screen", guild_id)
}

pub fn guild_emojis(guild_id: Snowflake) -> String {
    format!("/guilds/{}/emojis", guild_id)
}

pub fn guild_emoji(guild_id: Snowflake, emoji_id: Snowflake) -> String {
    format!("/guilds/{}/emojis/{}", guild_id, emoji_id)
}

pub fn guild_stickers(guild_id: Snowflake) -> String {
    format!("/guilds/{}/stickers", guild_id)
}

pub fn guild_sticker(guild_id: Snowflake, sticker_id: Snowflake) -> String {
    format!("/guilds/{}/stickers/{}", guild_id, sticker_id)
}

pub fn guild_webhooks(guild_id: Snowflake) -> String {
    format!("/guilds/{}/webhooks", guild_id)
}

// Invites

pub fn invite(code: &str) -> String {
    format!("/invites/{}", code)
}

// Stage instances

pub const STAGE_INSTANCES: &str = "/stage-instances";

pub fn stage_instance(channel_id: Snowflake) -> String {
    format!("/stage-instances/{}", channel_id)
}

// Stickers

pub const STICKER_PACKS: &str = "/sticker-packs";

pub fn sticker(sticker_id: Snowflake) -> String {
    format!("/stickers/{}", sticker_id)
}

// Users

pub const CURRENT_USER: &str = "/users/@me";
pub const CURRENT_USER_GUILDS: &str = "/users/@me/guilds";
pub const CURRENT_USER_CHANNELS: &str = "/users/@me/channels";

pub fn user(user_id: Snowflake) -> String {
    format!("/users/{}", user_id)
}

pub fn current_user_guild(guild_id: Snowflake) -> String {
    format!("/users/@me/guilds/{}", guild_id)
}

pub fn current_user_guild_member(guild_id: Snowflake) -> String {
    format!("/users/@me/guilds/{}/member", guild_id)
}

// Webhooks and interactions

pub fn webhook(webhook_id: Snowflake) -> String {
    format!("/webhooks/{}", webhook_id)
}

pub fn webhook_with_token(webhook_id: Snowflake, token: &str) -> String {
    format!("/webhooks/{}/{}", webhook_id, token)
}

/// `message` is a message id or `@original`.
pub fn webhook_message(webhook_id: Snowflake, token: &str, message: impl Display) -> String {
    format!("/webhooks/{}/{}/messages/{}", webhook_id, token, message)
}

pub fn interaction_callback(interaction_id: Snowflake, token: &str) -> String {
    format!("/interactions/{}/{}/callback", interaction_id, token)
}

pub const ORIGINAL_MESSAGE: &str = "@original";
pub const ME: &str = "@me";

// OAuth2 and gateway

pub const OAUTH2_CURRENT_APPLICATION: &str = "/oauth2/applications/@me";
pub const OAUTH2_CURRENT_AUTHORIZATION: &str = "/oauth2/@me";
pub const GATEWAY: &str = "/gateway";
pub const GATEWAY_BOT: &str = "/gateway/bot";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(channel(Snowflake(111)), "/channels/111");
        assert_eq!(guild_role(Snowflake(1), Snowflake(2)), "/guilds/1/roles/2");
        assert_eq!(guild_member(Snowflake(1), ME), "/guilds/1/members/@me");
        assert_eq!(
            webhook_message(Snowflake(5), "tok", ORIGINAL_MESSAGE),
            "/webhooks/5/tok/messages/@original"
        );
        assert_eq!(channel_messages_bulk_delete(Snowflake(4)), "/channels/4/messages/bulk-delete");
    }

    #[test]
    fn test_redact_token() {
        assert_eq!(
            redact_token("/webhooks/8/tok/messages/5?thread_id=6"),
            "/webhooks/8/[redacted]/messages/5?thread_id=6"
        );
        assert_eq!(
            redact_token("http://proxy/api/v9/interactions/1/tok/callback"),
            "http://proxy/api/v9/interactions/1/[redacted]/callback"
        );
        assert_eq!(redact_token("/webhooks/8"), "/webhooks/8");
        assert_eq!(redact_token("/channels/3/webhooks"), "/channels/3/webhooks");
        assert_eq!(redact_token("/guilds/1/members/2"), "/guilds/1/members/2");
    }

    #[test]
    fn test_reaction_escaping() {
        let path = message_reaction(Snowflake(1), Snowflake(2), "🔥#x", Snowflake(3));
        assert_eq!(path, "/channels/1/messages/2/reactions/🔥%23x/3");
        assert_eq!(path.matches("%23").count(), 1);

        assert_eq!(
            message_reaction(Snowflake(1), Snowflake(2), "blob:123", ME),
            "/channels/1/messages/2/reactions/blob:123/@me"
        );
    }
}
