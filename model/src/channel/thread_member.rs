use crate::guild::Member;
use crate::Snowflake;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ThreadMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Snowflake>,
    pub join_timestamp: DateTime<Utc>,
    pub flags: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
}

/// Threads plus the current user's membership in them, as returned by the thread listing routes.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ThreadList {
    #[serde(default)]
    pub threads: Vec<super::Channel>,
    #[serde(default)]
    pub members: Vec<ThreadMember>,
    /// Absent on the active threads route, which is not paginated.
    #[serde(default)]
    pub has_more: bool,
}
