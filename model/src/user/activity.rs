use serde::{Deserialize, Serialize};

use super::{ActivityEmoji, ActivityFlags, ActivityType, Assets, Party, Secrets, Timestamps};
use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Activity {
    pub name: String,

    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    /// only valid when activity_type = streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing)]
    pub created_at: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Timestamps>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ActivityEmoji>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Assets>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Secrets>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<bool>,

    #[serde(default)]
    pub flags: ActivityFlags,
}

impl Activity {
    pub fn new(name: String, activity_type: ActivityType) -> Activity {
        Activity {
            name,
            activity_type,
            url: None,
            created_at: 0,
            timestamps: None,
            application_id: None,
            details: None,
            state: None,
            emoji: None,
            party: None,
            assets: None,
            secrets: None,
            instance: None,
            flags: ActivityFlags::empty(),
        }
    }

    pub fn streaming(name: String, url: String) -> Activity {
        Activity {
            url: Some(url),
            ..Activity::new(name, ActivityType::Streaming)
        }
    }
}
