use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// Result of following a news channel into another channel.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FollowedChannel {
    pub channel_id: Snowflake,
    pub webhook_id: Snowflake,
}
