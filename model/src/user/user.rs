use serde::{Deserialize, Serialize};

use super::{PremiumType, UserFlags};
use crate::{Discriminator, ImageHash, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct User {
    pub id: Snowflake,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub discriminator: Discriminator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    pub avatar: Option<ImageHash>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub flags: UserFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<PremiumType>,
    #[serde(default)]
    pub public_flags: UserFlags,
    /// Id of a DM channel already opened with this user. Never sent over the wire.
    #[serde(skip)]
    pub dm_channel_id: Option<Snowflake>,
}

impl User {
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    /// `username#1234` for legacy accounts, the bare username otherwise.
    pub fn tag(&self) -> String {
        if self.discriminator.is_legacy() {
            format!("{}#{}", self.username, self.discriminator)
        } else {
            self.username.clone()
        }
    }

    /// Index into the default avatar set, used when `avatar` is null.
    pub fn default_avatar_index(&self) -> u64 {
        if self.discriminator.is_legacy() {
            u64::from(self.discriminator.0 % 5)
        } else {
            (self.id.0 >> 22) % 6
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_and_helpers() {
        let raw = r#"{
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
            "avatar": "8342729096ea3675442027381ff50dfe",
            "verified": true,
            "email": "nelly@discord.com",
            "flags": 64,
            "premium_type": 1,
            "public_flags": 64
        }"#;

        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.tag(), "Nelly#1337");
        assert_eq!(user.mention(), "<@80351110224678912>");
        assert!(user.public_flags.contains(UserFlags::HYPESQUAD_ONLINE_HOUSE_1));
        assert_eq!(user.default_avatar_index(), 2);
        assert!(user.dm_channel_id.is_none());
    }

    #[test]
    fn test_dm_cache_not_serialized() {
        let user = User {
            id: Snowflake(1),
            dm_channel_id: Some(Snowflake(2)),
            ..Default::default()
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("dm_channel_id"));
    }
}
