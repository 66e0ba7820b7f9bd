mod opcode;
pub use opcode::Opcode;

mod payload;
pub use payload::GatewayPayload;

pub mod event;

mod shard_info;
pub use shard_info::ShardInfo;

mod intents;
pub use intents::Intents;

mod identify;
pub use identify::{ConnectionProperties, Identify, IdentifyData};

mod resume;
pub use resume::{Resume, ResumeData};

mod heartbeat;
pub use heartbeat::Heartbeat;

mod hello;
pub use hello::{Hello, HelloData};

mod invalid_session;
pub use invalid_session::InvalidSession;

mod request_guild_members;
pub use request_guild_members::{RequestGuildMembers, RequestGuildMembersData};

mod update_presence;
pub use update_presence::UpdatePresence;

mod update_voice_state;
pub use update_voice_state::{UpdateVoiceState, UpdateVoiceStateData};

/// Response of the get-gateway route.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct GatewayInfo {
    pub url: String,
}

/// Response of the get-gateway-bot route.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct GatewayBotInfo {
    pub url: String,
    pub shards: u32,
    pub session_start_limit: SessionStartLimit,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct SessionStartLimit {
    pub total: u32,
    pub remaining: u32,
    /// Milliseconds until the limit resets.
    pub reset_after: u64,
    pub max_concurrency: u32,
}
