use serde::{Deserialize, Serialize};

use crate::user::User;
use crate::{PermissionBitSet, Snowflake};
use chrono::{DateTime, Utc};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Member {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_disabled_until: Option<DateTime<Utc>>,
    /// Only present on interaction payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionBitSet>,
    #[serde(default)]
    pub flags: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
}

impl Member {
    pub fn user_id(&self) -> Option<Snowflake> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn has_role(&self, role: Snowflake) -> bool {
        self.roles.contains(&role)
    }

    /// Nickname if set, otherwise the user's display name.
    pub fn display_name(&self) -> Option<&str> {
        self.nick
            .as_deref()
            .or_else(|| self.user.as_ref().map(|u| u.display_name()))
    }
}
