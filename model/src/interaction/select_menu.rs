use serde::{Deserialize, Serialize};

use super::ComponentType;
use crate::channel::ChannelType;
use crate::guild::Emoji;
use crate::util::is_false;
use crate::Snowflake;

/// Any of the select menu component types; `r#type` tells them apart.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SelectMenu {
    pub r#type: ComponentType,
    pub custom_id: String,
    /// Only for string selects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_types: Vec<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_values: Vec<SelectDefaultValue>,
    /// 0-25
    #[serde(default = "one")]
    pub min_values: u8,
    /// 1-25
    #[serde(default = "one")]
    pub max_values: u8,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Emoji>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub default: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectDefaultValue {
    pub id: Snowflake,
    pub r#type: SelectDefaultValueType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectDefaultValueType {
    User,
    Role,
    Channel,
}

fn one() -> u8 {
    1
}
