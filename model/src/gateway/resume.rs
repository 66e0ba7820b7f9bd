use serde::{Deserialize, Serialize};

use super::Opcode;

#[derive(Serialize, Deserialize, Debug)]
pub struct Resume {
    #[serde(rename = "op")]
    opcode: Opcode,

    #[serde(rename = "d")]
    pub data: ResumeData,
}

impl Resume {
    pub fn new(token: String, session_id: String, seq: u64) -> Resume {
        Resume {
            opcode: Opcode::Resume,
            data: ResumeData {
                token,
                session_id,
                seq,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ResumeData {
    pub token: String,
    pub session_id: String,
    pub seq: u64,
}
