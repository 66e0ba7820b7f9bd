use serde::{Deserialize, Serialize};

use super::Opcode;
use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateVoiceState {
    #[serde(rename = "op")]
    opcode: Opcode,

    #[serde(rename = "d")]
    pub data: UpdateVoiceStateData,
}

impl UpdateVoiceState {
    /// `channel_id` of None disconnects.
    pub fn new(guild_id: Snowflake, channel_id: Option<Snowflake>, self_mute: bool, self_deaf: bool) -> Self {
        UpdateVoiceState {
            opcode: Opcode::VoiceStateUpdate,
            data: UpdateVoiceStateData {
                guild_id,
                channel_id,
                self_mute,
                self_deaf,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateVoiceStateData {
    pub guild_id: Snowflake,
    pub channel_id: Option<Snowflake>,
    pub self_mute: bool,
    pub self_deaf: bool,
}
