use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::Snowflake;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StageInstance {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub channel_id: Snowflake,
    pub topic: String,
    pub privacy_level: PrivacyLevel,
    #[serde(default)]
    pub discoverable_disabled: bool,
    #[serde(default)]
    pub guild_scheduled_event_id: Option<Snowflake>,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PrivacyLevel {
    Public = 1,
    #[default]
    GuildOnly = 2,
}
