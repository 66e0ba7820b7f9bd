use serde::de::Error;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::{ApplicationCommandOptionChoice, Component};
use crate::channel::message::embed::Embed;
use crate::channel::message::{AllowedMentions, MessageFlags, PartialAttachment};

/// Reply to an interaction, sent through the create-response route.
#[derive(Debug, Clone)]
pub enum InteractionResponse {
    Pong,
    ChannelMessageWithSource(InteractionCallbackMessage),
    DeferredChannelMessageWithSource(DeferredApplicationCommandResponseData),
    DeferredMessageUpdate,
    UpdateMessage(InteractionCallbackMessage),
    ApplicationCommandAutoCompleteResult(ApplicationCommandAutoCompleteResultResponseData),
    Modal(ModalResponseData),
}

/// Message body of a callback, also used to edit original responses.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct InteractionCallbackMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    #[serde(default, skip_serializing_if = "MessageFlags::is_empty")]
    pub flags: MessageFlags,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<PartialAttachment>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DeferredApplicationCommandResponseData {
    #[serde(default)]
    pub flags: MessageFlags,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandAutoCompleteResultResponseData {
    pub choices: Vec<ApplicationCommandOptionChoice>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalResponseData {
    pub custom_id: String,
    pub title: String,
    pub components: Vec<Component>,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[non_exhaustive]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
    DeferredMessageUpdate = 6,
    UpdateMessage = 7,
    ApplicationCommandAutoCompleteResult = 8,
    Modal = 9,
}

impl TryFrom<u64> for InteractionResponseType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Pong,
            4 => Self::ChannelMessageWithSource,
            5 => Self::DeferredChannelMessageWithSource,
            6 => Self::DeferredMessageUpdate,
            7 => Self::UpdateMessage,
            8 => Self::ApplicationCommandAutoCompleteResult,
            9 => Self::Modal,
            _ => {
                return Err(
                    format!("invalid interaction response type \"{}\"", value).into_boxed_str()
                )
            }
        })
    }
}

impl InteractionResponse {
    pub fn new_pong() -> InteractionResponse {
        InteractionResponse::Pong
    }

    pub fn new_channel_message_with_source(data: InteractionCallbackMessage) -> InteractionResponse {
        InteractionResponse::ChannelMessageWithSource(data)
    }

    /// Defers an ephemeral reply.
    pub fn new_deferred_message_with_source() -> InteractionResponse {
        InteractionResponse::DeferredChannelMessageWithSource(DeferredApplicationCommandResponseData {
            flags: MessageFlags::EPHEMERAL,
        })
    }

    pub fn new_deferred_message_update() -> InteractionResponse {
        InteractionResponse::DeferredMessageUpdate
    }

    pub fn new_update_message(data: InteractionCallbackMessage) -> InteractionResponse {
        InteractionResponse::UpdateMessage(data)
    }

    pub fn new_application_command_auto_complete_result_response(
        choices: Vec<ApplicationCommandOptionChoice>,
    ) -> InteractionResponse {
        InteractionResponse::ApplicationCommandAutoCompleteResult(
            ApplicationCommandAutoCompleteResultResponseData { choices },
        )
    }

    pub fn new_modal(data: ModalResponseData) -> InteractionResponse {
        InteractionResponse::Modal(data)
    }

    pub fn response_type(&self) -> InteractionResponseType {
        match self {
            Self::Pong => InteractionResponseType::Pong,
            Self::ChannelMessageWithSource(_) => InteractionResponseType::ChannelMessageWithSource,
            Self::DeferredChannelMessageWithSource(_) => {
                InteractionResponseType::DeferredChannelMessageWithSource
            }
            Self::DeferredMessageUpdate => InteractionResponseType::DeferredMessageUpdate,
            Self::UpdateMessage(_) => InteractionResponseType::UpdateMessage,
            Self::ApplicationCommandAutoCompleteResult(_) => {
                InteractionResponseType::ApplicationCommandAutoCompleteResult
            }
            Self::Modal(_) => InteractionResponseType::Modal,
        }
    }

    /// Attachment metadata for uploads that accompany the response, if any.
    pub fn attachments_mut(&mut self) -> Option<&mut Vec<PartialAttachment>> {
        match self {
            Self::ChannelMessageWithSource(data) | Self::UpdateMessage(data) => {
                Some(&mut data.attachments)
            }
            _ => None,
        }
    }
}

impl Serialize for InteractionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("InteractionResponse", 2)?;
        s.serialize_field("type", &self.response_type())?;

        match self {
            Self::Pong | Self::DeferredMessageUpdate => {}
            Self::ChannelMessageWithSource(data) | Self::UpdateMessage(data) => {
                s.serialize_field("data", data)?
            }
            Self::DeferredChannelMessageWithSource(data) => s.serialize_field("data", data)?,
            Self::ApplicationCommandAutoCompleteResult(data) => s.serialize_field("data", data)?,
            Self::Modal(data) => s.serialize_field("data", data)?,
        }

        s.end()
    }
}

impl<'de> Deserialize<'de> for InteractionResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;

        let response_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| Box::from("interaction response type was not an integer"))
            .and_then(InteractionResponseType::try_from)
            .map_err(D::Error::custom)?;

        let data = value
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null);

        let response = match response_type {
            InteractionResponseType::Pong => Ok(Self::Pong),
            InteractionResponseType::ChannelMessageWithSource => {
                serde_json::from_value(data).map(Self::ChannelMessageWithSource)
            }
            InteractionResponseType::DeferredChannelMessageWithSource => {
                if data.is_null() {
                    Ok(Self::DeferredChannelMessageWithSource(Default::default()))
                } else {
                    serde_json::from_value(data).map(Self::DeferredChannelMessageWithSource)
                }
            }
            InteractionResponseType::DeferredMessageUpdate => Ok(Self::DeferredMessageUpdate),
            InteractionResponseType::UpdateMessage => {
                serde_json::from_value(data).map(Self::UpdateMessage)
            }
            InteractionResponseType::ApplicationCommandAutoCompleteResult => {
                serde_json::from_value(data).map(Self::ApplicationCommandAutoCompleteResult)
            }
            InteractionResponseType::Modal => serde_json::from_value(data).map(Self::Modal),
        }
        .map_err(D::Error::custom)?;

        Ok(response)
    }
}
