use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::{ApplicationCommandOptionType, ApplicationCommandType};
use crate::channel::message::{Attachment, Message};
use crate::channel::Channel;
use crate::guild::{Member, Role};
use crate::user::User;
use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandInteractionData {
    pub id: Snowflake,
    pub name: String,
    #[serde(rename = "type", default)]
    pub command_type: ApplicationCommandType,
    #[serde(default)]
    pub resolved: ApplicationCommandInteractionDataResolved,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandInteractionDataOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    /// User or message targeted by a context menu command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<Snowflake>,
}

impl ApplicationCommandInteractionData {
    /// Finds a top-level option by name.
    pub fn option(&self, name: &str) -> Option<&ApplicationCommandInteractionDataOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandInteractionDataOption {
    pub name: String,
    #[serde(rename = "type")]
    pub option_type: ApplicationCommandOptionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<RawValue>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandInteractionDataOption>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub focused: bool,
}

impl ApplicationCommandInteractionDataOption {
    /// Decodes the raw option value into `T`.
    pub fn value_as<'a, T: Deserialize<'a>>(&'a self) -> Option<serde_json::Result<T>> {
        self.value.as_ref().map(|raw| serde_json::from_str(raw.get()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ApplicationCommandInteractionDataResolved {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub users: HashMap<Snowflake, User>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub members: HashMap<Snowflake, Member>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub roles: HashMap<Snowflake, Role>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub channels: HashMap<Snowflake, Channel>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub messages: HashMap<Snowflake, Message>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attachments: HashMap<Snowflake, Attachment>,
}
