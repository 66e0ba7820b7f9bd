use serde::{Deserialize, Serialize};

use super::Opcode;
use crate::user::StatusUpdate;

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdatePresence {
    #[serde(rename = "op")]
    opcode: Opcode,

    #[serde(rename = "d")]
    pub data: StatusUpdate,
}

impl UpdatePresence {
    pub fn new(presence: StatusUpdate) -> UpdatePresence {
        UpdatePresence {
            opcode: Opcode::PresenceUpdate,
            data: presence,
        }
    }
}
