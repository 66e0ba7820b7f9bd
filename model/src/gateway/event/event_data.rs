use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::channel::{Channel, ChannelType, ThreadMember};
use crate::gateway::ShardInfo;
use crate::guild::{Emoji, Member, Role, UnavailableGuild};
use crate::invite::TargetType;
use crate::sticker::Sticker;
use crate::user::{PresenceUpdate, User};
use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ready {
    #[serde(rename = "v")]
    pub gateway_version: u8,
    pub user: User,
    pub guilds: Vec<UnavailableGuild>,
    pub session_id: String,
    pub resume_gateway_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard: Option<ShardInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ThreadDelete {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub parent_id: Snowflake,
    pub r#type: ChannelType,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ThreadListSync {
    pub guild_id: Snowflake,
    #[serde(default)]
    pub channel_ids: Vec<Snowflake>,
    pub threads: Vec<Channel>,
    pub members: Vec<ThreadMember>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ThreadMembersUpdate {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub member_count: u16,
    #[serde(default)]
    pub added_members: Vec<ThreadMember>,
    #[serde(default)]
    pub removed_member_ids: Vec<Snowflake>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChannelPinsUpdate {
    pub guild_id: Option<Snowflake>,
    pub channel_id: Snowflake,
    pub last_pin_timestamp: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildBanAdd {
    pub guild_id: Snowflake,
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildBanRemove {
    pub guild_id: Snowflake,
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildEmojisUpdate {
    pub guild_id: Snowflake,
    pub emojis: Vec<Emoji>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildStickersUpdate {
    pub guild_id: Snowflake,
    pub stickers: Vec<Sticker>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildIntegrationsUpdate {
    pub guild_id: Snowflake,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildMemberAdd {
    pub guild_id: Snowflake,
    #[serde(flatten)]
    pub member: Member,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildMemberRemove {
    pub guild_id: Snowflake,
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildMemberUpdate {
    pub guild_id: Snowflake,
    pub roles: Vec<Snowflake>,
    pub user: User,
    pub nick: Option<String>,
    pub joined_at: Option<DateTime<Utc>>,
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pending: bool,
    pub communication_disabled_until: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildMembersChunk {
    pub guild_id: Snowflake,
    pub members: Vec<Member>,
    pub chunk_index: u32,
    pub chunk_count: u32,
    #[serde(default)]
    pub not_found: Vec<Snowflake>,
    #[serde(default)]
    pub presences: Vec<PresenceUpdate>,
    pub nonce: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildRoleCreate {
    pub guild_id: Snowflake,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildRoleUpdate {
    pub guild_id: Snowflake,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildRoleDelete {
    pub guild_id: Snowflake,
    pub role_id: Snowflake,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InviteCreate {
    pub channel_id: Snowflake,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub guild_id: Option<Snowflake>,
    pub inviter: Option<User>,
    pub max_age: u32,
    pub max_uses: u32,
    pub target_type: Option<TargetType>,
    pub target_user: Option<User>,
    pub temporary: bool,
    pub uses: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InviteDelete {
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageDelete {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageDeleteBulk {
    pub ids: Vec<Snowflake>,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageReactionAdd {
    pub user_id: Snowflake,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub member: Option<Member>,
    pub emoji: Emoji,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageReactionRemove {
    pub user_id: Snowflake,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub emoji: Emoji,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageReactionRemoveAll {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub guild_id: Option<Snowflake>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageReactionRemoveEmoji {
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub message_id: Snowflake,
    pub emoji: Emoji,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TypingStart {
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub user_id: Snowflake,
    /// Unix seconds.
    pub timestamp: u64,
    pub member: Option<Member>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VoiceServerUpdate {
    pub token: String,
    pub guild_id: Snowflake,
    pub endpoint: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WebhooksUpdate {
    pub guild_id: Snowflake,
    pub channel_id: Snowflake,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildScheduledEventUser {
    pub guild_scheduled_event_id: Snowflake,
    pub user_id: Snowflake,
    pub guild_id: Snowflake,
}
