use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::stage::PrivacyLevel;
use crate::user::User;
use crate::{ImageHash, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildScheduledEvent {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<Snowflake>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scheduled_start_time: DateTime<Utc>,
    pub scheduled_end_time: Option<DateTime<Utc>>,
    pub privacy_level: PrivacyLevel,
    pub status: EventStatus,
    pub entity_type: EventEntityType,
    pub entity_id: Option<Snowflake>,
    pub entity_metadata: Option<EventEntityMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageHash>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EventEntityMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EventStatus {
    Scheduled = 1,
    Active = 2,
    Completed = 3,
    Canceled = 4,
}

impl EventStatus {
    /// Completed and canceled events cannot change status again.
    pub fn is_final(self) -> bool {
        matches!(self, EventStatus::Completed | EventStatus::Canceled)
    }
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EventEntityType {
    StageInstance = 1,
    Voice = 2,
    External = 3,
}
