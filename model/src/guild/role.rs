use serde::{Deserialize, Serialize};

use crate::{PermissionBitSet, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Role {
    pub id: Snowflake,
    /// Not sent by Discord; filled in by callers that know the owning guild.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub name: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub hoist: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode_emoji: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub permissions: PermissionBitSet,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub mentionable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<RoleTags>,
    #[serde(default)]
    pub flags: u64,
}

impl Role {
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id)
    }
}

/// Presence-only markers: a key that is present with a `null` value means `true`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RoleTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<Snowflake>,
    #[serde(default, deserialize_with = "present", skip_serializing)]
    pub premium_subscriber: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_listing_id: Option<Snowflake>,
    #[serde(default, deserialize_with = "present", skip_serializing)]
    pub available_for_purchase: bool,
    #[serde(default, deserialize_with = "present", skip_serializing)]
    pub guild_connections: bool,
}

fn present<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    serde::de::IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_presence() {
        let raw = r#"{
            "id": "41771983423143936",
            "name": "Nitro Booster",
            "color": 16023551,
            "position": 3,
            "permissions": "66321471",
            "tags": {"premium_subscriber": null}
        }"#;

        let role: Role = serde_json::from_str(raw).unwrap();
        assert_eq!(role.permissions, PermissionBitSet(66321471));
        assert!(role.tags.as_ref().unwrap().premium_subscriber);
        assert_eq!(role.mention(), "<@&41771983423143936>");
    }
}
