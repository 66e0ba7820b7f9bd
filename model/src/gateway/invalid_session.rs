use serde::{Deserialize, Serialize};

use super::Opcode;

#[derive(Serialize, Deserialize, Debug)]
pub struct InvalidSession {
    #[serde(rename = "op")]
    opcode: Opcode,

    #[serde(rename = "d")]
    pub is_resumable: bool,
}
