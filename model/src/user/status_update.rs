use serde::{Deserialize, Serialize};

use super::{Activity, ActivityType, StatusType};

/// Presence the client asks the gateway to display.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusUpdate {
    pub since: Option<u64>,
    pub activities: Vec<Activity>,
    pub status: StatusType,
    pub afk: bool,
}

impl StatusUpdate {
    pub fn new(
        activity_type: ActivityType,
        status: String,
        status_type: StatusType,
    ) -> StatusUpdate {
        StatusUpdate {
            since: None,
            activities: vec![Activity::new(status, activity_type)],
            status: status_type,
            afk: false,
        }
    }
}
