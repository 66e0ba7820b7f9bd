use serde::{Deserialize, Serialize};

use super::{Intents, Opcode, ShardInfo};
use crate::user::StatusUpdate;

#[derive(Serialize, Deserialize, Debug)]
pub struct Identify {
    #[serde(rename = "op")]
    opcode: Opcode,

    #[serde(rename = "d")]
    pub data: IdentifyData,
}

impl Identify {
    /// large_threshold is clamped to 50..=250.
    pub fn new(
        token: String,
        large_threshold: Option<u8>,
        shard_info: ShardInfo,
        presence: Option<StatusUpdate>,
        intents: Intents,
    ) -> Identify {
        Identify {
            opcode: Opcode::Identify,
            data: IdentifyData {
                token,
                properties: ConnectionProperties::new(),
                compress: None,
                large_threshold: large_threshold.map(|t| t.clamp(50, 250)),
                shard_info,
                presence,
                intents,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct IdentifyData {
    pub token: String,

    pub properties: ConnectionProperties,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_threshold: Option<u8>,

    #[serde(rename = "shard")]
    pub shard_info: ShardInfo,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<StatusUpdate>,

    pub intents: Intents,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConnectionProperties {
    pub os: String,
    pub browser: String,
    pub device: String,
}

const LIBRARY_NAME: &str = "discord-rest";

impl ConnectionProperties {
    pub fn new() -> ConnectionProperties {
        ConnectionProperties {
            os: std::env::consts::OS.to_owned(),
            browser: LIBRARY_NAME.to_owned(),
            device: LIBRARY_NAME.to_owned(),
        }
    }
}

impl Default for ConnectionProperties {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_identify_frame() {
        let identify = Identify::new(
            "Bot abc".to_owned(),
            Some(10),
            ShardInfo::new(0, 1),
            None,
            Intents::GUILDS | Intents::GUILD_MESSAGES,
        );

        let value: Value = serde_json::to_value(&identify).unwrap();
        assert_eq!(value["op"], 2);
        assert_eq!(value["d"]["large_threshold"], 50);
        assert_eq!(value["d"]["shard"], serde_json::json!([0, 1]));
        assert_eq!(value["d"]["intents"], 513);
        assert!(value["d"].get("presence").is_none());
    }
}
