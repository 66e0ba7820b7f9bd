use serde::{Deserialize, Serialize};

use super::{ChannelFlags, ChannelType, PermissionOverwrite};
use crate::channel::{ThreadMember, ThreadMetadata, VideoQualityMode};
use crate::user::User;
use crate::{PermissionBitSet, Snowflake};
use chrono::{DateTime, Utc};

/// Text, voice, DM, thread, stage and news channels share one record; `channel_type`
/// discriminates which of the optional fields are meaningful.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Channel {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permission_overwrites: Vec<PermissionOverwrite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_pin_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtc_region: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_quality_mode: Option<VideoQualityMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_metadata: Option<ThreadMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ThreadMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_auto_archive_duration: Option<u16>,
    /// Computed permissions of the invoking user, only present on interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionBitSet>,
    #[serde(default)]
    pub flags: ChannelFlags,
}

impl Channel {
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_projection() {
        let c: Channel = serde_json::from_str(r#"{"id":"333","name":"x","type":0}"#).unwrap();
        assert_eq!(c.id, Snowflake(333));
        assert_eq!(c.name.as_deref(), Some("x"));
        assert!(c.guild_id.is_none());
        assert_eq!(c.mention(), "<#333>");
    }

    #[test]
    fn test_thread_variant() {
        let raw = r#"{
            "id": "41771983423143937",
            "guild_id": "41771983423143937",
            "parent_id": "41771983423143937",
            "owner_id": "41771983423143937",
            "name": "don't buy dota-2",
            "type": 11,
            "last_message_id": null,
            "message_count": 1,
            "member_count": 5,
            "rate_limit_per_user": 2,
            "thread_metadata": {
                "archived": false,
                "auto_archive_duration": 1440,
                "archive_timestamp": "2021-04-12T23:40:39.855793+00:00",
                "locked": false
            },
            "total_message_sent": 1
        }"#;

        let c: Channel = serde_json::from_str(raw).unwrap();
        assert!(c.channel_type.is_thread());
        assert!(c.last_message_id.is_none());
        assert!(!c.thread_metadata.unwrap().archived);
    }
}
