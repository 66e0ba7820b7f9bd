use serde::{Deserialize, Serialize};

use super::Opcode;
use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug)]
pub struct RequestGuildMembers {
    #[serde(rename = "op")]
    opcode: Opcode,

    #[serde(rename = "d")]
    pub data: RequestGuildMembersData,
}

impl RequestGuildMembers {
    /// Requests members whose username starts with `query`; an empty query with limit 0 returns all.
    pub fn by_query(guild_id: Snowflake, query: String, limit: u32) -> RequestGuildMembers {
        RequestGuildMembers {
            opcode: Opcode::RequestGuildMembers,
            data: RequestGuildMembersData {
                guild_id,
                query: Some(query),
                limit,
                presences: false,
                user_ids: Vec::new(),
                nonce: None,
            },
        }
    }

    pub fn by_ids(guild_id: Snowflake, user_ids: Vec<Snowflake>) -> RequestGuildMembers {
        RequestGuildMembers {
            opcode: Opcode::RequestGuildMembers,
            data: RequestGuildMembersData {
                guild_id,
                query: None,
                limit: 0,
                presences: false,
                user_ids,
                nonce: None,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RequestGuildMembersData {
    pub guild_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub limit: u32,
    #[serde(default)]
    pub presences: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}
