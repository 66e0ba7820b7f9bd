use serde::{Deserialize, Serialize};

use super::StatusType;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ClientStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<StatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<StatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<StatusType>,
}
