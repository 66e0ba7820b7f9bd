use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::{Emoji, Member, Role, SystemChannelFlags, VoiceState};
use crate::channel::Channel;
use crate::stage::StageInstance;
use crate::sticker::Sticker;
use crate::user::PresenceUpdate;
use crate::{ImageHash, PermissionBitSet, Snowflake};
use chrono::{DateTime, Utc};

/// Full guild object. Most fields are absent from partial projections such as
/// the current user's guild list, so nearly everything defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Guild {
    pub id: Snowflake,
    #[serde(default)]
    pub name: String,
    pub icon: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_splash: Option<ImageHash>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub owner: bool,
    #[serde(default)]
    pub owner_id: Snowflake,
    /// Permissions of the current user, only on the current user's guild list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionBitSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Snowflake>,
    #[serde(default)]
    pub afk_timeout: u32,
    #[serde(default)]
    pub widget_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_channel_id: Option<Snowflake>,
    #[serde(default)]
    pub verification_level: VerificationLevel,
    #[serde(default)]
    pub default_message_notifications: DefaultMessageNotifications,
    #[serde(default)]
    pub explicit_content_filter: ExplicitContentFilterLevel,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub emojis: Vec<Emoji>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub mfa_level: MFALevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Snowflake>,
    #[serde(default)]
    pub system_channel_flags: SystemChannelFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub large: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub voice_states: Vec<VoiceState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<Channel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threads: Vec<Channel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presences: Vec<PresenceUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_presences: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_members: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vanity_url_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<ImageHash>,
    #[serde(default)]
    pub premium_tier: PremiumTier,
    #[serde(default)]
    pub premium_subscription_count: u32,
    #[serde(default)]
    pub preferred_locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_updates_channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_video_channel_users: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_presence_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_screen: Option<WelcomeScreen>,
    #[serde(default)]
    pub nsfw_level: NsfwLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stage_instances: Vec<StageInstance>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stickers: Vec<Sticker>,
    #[serde(default)]
    pub premium_progress_bar_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_alerts_channel_id: Option<Snowflake>,
}

impl Guild {
    pub fn role(&self, id: Snowflake) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn channel(&self, id: Snowflake) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

impl PartialEq for Guild {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum VerificationLevel {
    #[default]
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    VeryHigh = 4,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DefaultMessageNotifications {
    #[default]
    AllMessages = 0,
    OnlyMentions = 1,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ExplicitContentFilterLevel {
    #[default]
    Disabled = 0,
    MembersWithoutRoles = 1,
    AllMembers = 2,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum MFALevel {
    #[default]
    None = 0,
    Elevated = 1,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PremiumTier {
    #[default]
    None = 0,
    TierOne = 1,
    TierTwo = 2,
    TierThree = 3,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum NsfwLevel {
    #[default]
    Default = 0,
    Explicit = 1,
    Safe = 2,
    AgeRestricted = 3,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct WelcomeScreen {
    pub description: Option<String>,
    #[serde(default)]
    pub welcome_channels: Vec<WelcomeScreenChannel>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WelcomeScreenChannel {
    pub channel_id: Snowflake,
    pub description: String,
    pub emoji_id: Option<Snowflake>,
    pub emoji_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_guild_projection() {
        let raw = r#"{
            "id": "80351110224678912",
            "name": "1337 Krew",
            "icon": "8342729096ea3675442027381ff50dfe",
            "owner": true,
            "permissions": "36953089",
            "features": ["COMMUNITY", "NEWS"],
            "approximate_member_count": 3268,
            "approximate_presence_count": 784
        }"#;

        let g: Guild = serde_json::from_str(raw).unwrap();
        assert!(g.owner);
        assert!(g.has_feature("NEWS"));
        assert_eq!(g.permissions, Some(PermissionBitSet(36953089)));
        assert_eq!(g.verification_level, VerificationLevel::None);
        assert!(g.roles.is_empty());
    }

    #[test]
    fn test_enum_values() {
        assert_eq!(serde_json::to_string(&NsfwLevel::AgeRestricted).unwrap(), "3");
        assert_eq!(serde_json::to_string(&PremiumTier::TierTwo).unwrap(), "2");
        assert_eq!(serde_json::to_string(&VerificationLevel::VeryHigh).unwrap(), "4");
    }
}
