use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    #[default]
    Online,
    Dnd,
    Idle,
    Invisible,
    Offline,
}
