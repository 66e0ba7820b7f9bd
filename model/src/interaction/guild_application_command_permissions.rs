use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildApplicationCommandPermissions {
    /// The command id, or the application id for guild-wide defaults.
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub guild_id: Snowflake,
    pub permissions: Vec<ApplicationCommandPermissions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationCommandPermissions {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub permission_type: ApplicationCommandPermissionType,
    pub permission: bool,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ApplicationCommandPermissionType {
    Role = 1,
    User = 2,
    Channel = 3,
}
