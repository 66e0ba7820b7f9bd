use serde::{Deserialize, Serialize};

use super::{Activity, ClientStatus, StatusType, User};
use crate::Snowflake;

/// Presence as reported by the gateway. `user` may only carry its id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PresenceUpdate {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub status: StatusType,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub client_status: ClientStatus,
}
