use serde::{Deserialize, Serialize};

use super::Opcode;

#[derive(Serialize, Deserialize, Debug)]
pub struct Heartbeat {
    #[serde(rename = "op")]
    opcode: Opcode,

    /// Last sequence number received, null before the first dispatch.
    #[serde(rename = "d")]
    pub seq: Option<u64>,
}

impl Heartbeat {
    pub fn new(seq: Option<u64>) -> Heartbeat {
        Heartbeat {
            opcode: Opcode::Heartbeat,
            seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heartbeat() {
        assert_eq!(serde_json::to_string(&Heartbeat::new(None)).unwrap(), r#"{"op":1,"d":null}"#);
        assert_eq!(serde_json::to_string(&Heartbeat::new(Some(5))).unwrap(), r#"{"op":1,"d":5}"#);
    }
}
