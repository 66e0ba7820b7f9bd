use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::application::Application;
use crate::channel::Channel;
use crate::guild::{Guild, GuildScheduledEvent};
use crate::user::User;

/// An invite. Metadata fields are only present on routes that return them, vanity invites carry only `code`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Invite {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild: Option<Box<Guild>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inviter: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_application: Option<Application>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_presence_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_member_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_scheduled_event: Option<GuildScheduledEvent>,
    #[serde(flatten)]
    pub metadata: InviteMetadata,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct InviteMetadata {
    #[serde(default)]
    pub uses: u32,
    #[serde(default)]
    pub max_uses: u32,
    /// Seconds, 0 for never.
    #[serde(default)]
    pub max_age: u32,
    #[serde(default)]
    pub temporary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TargetType {
    Stream = 1,
    EmbeddedApplication = 2,
}

impl Invite {
    pub fn url(&self) -> String {
        format!("https://discord.gg/{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanity() {
        let invite: Invite = serde_json::from_str(r#"{"code":"abc","uses":12}"#).unwrap();
        assert_eq!(invite.url(), "https://discord.gg/abc");
        assert_eq!(invite.metadata.uses, 12);
        assert!(invite.guild.is_none());
    }

    #[test]
    fn test_with_guild_and_channel() {
        let raw = r#"{
            "code": "0vCdhLbwjZZTWZLD",
            "guild": {"id": "165176875973476352", "name": "CS:GO Fraggers Only", "splash": null, "icon": null, "features": []},
            "channel": {"id": "165176875973476352", "name": "illuminati", "type": 0},
            "inviter": {"id": "115590097100865541", "username": "speed", "avatar": null, "discriminator": "7653"},
            "target_type": 1,
            "expires_at": "2021-07-01T00:00:00+00:00"
        }"#;

        let invite: Invite = serde_json::from_str(raw).unwrap();
        assert_eq!(invite.guild.unwrap().name, "CS:GO Fraggers Only");
        assert_eq!(invite.channel.unwrap().name.as_deref(), Some("illuminati"));
        assert_eq!(invite.target_type, Some(TargetType::Stream));
    }
}
