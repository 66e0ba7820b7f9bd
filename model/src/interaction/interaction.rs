use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::{ApplicationCommandInteractionData, ApplicationCommandInteractionDataResolved, ComponentType};
use crate::channel::message::Message;
use crate::guild::Member;
use crate::user::User;
use crate::{PermissionBitSet, Snowflake};

#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Interaction {
    Ping(Box<PingInteraction>),
    ApplicationCommand(Box<ApplicationCommandInteraction>),
    MessageComponent(Box<MessageComponentInteraction>),
    ApplicationCommandAutoComplete(Box<ApplicationCommandAutoCompleteInteraction>),
    ModalSubmit(Box<ModalSubmitInteraction>),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutoComplete = 4,
    ModalSubmit = 5,
}

impl TryFrom<u64> for InteractionType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::ApplicationCommandAutoComplete,
            5 => Self::ModalSubmit,
            _ => return Err(format!("invalid interaction type \"{}\"", value).into_boxed_str()),
        })
    }
}

/// Fields shared by every interaction kind.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InteractionBase {
    pub id: Snowflake,
    pub application_id: Snowflake,
    #[serde(rename = "type")]
    pub interaction_type: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Present when invoked in a guild.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
    /// Present when invoked in a DM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub token: String,
    pub version: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_permissions: Option<PermissionBitSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_locale: Option<String>,
}

impl InteractionBase {
    /// The invoking user, whether the interaction came from a guild or a DM.
    pub fn invoker(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|m| m.user.as_ref())
            .or(self.user.as_ref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PingInteraction {
    #[serde(flatten)]
    pub base: InteractionBase,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandInteraction {
    #[serde(flatten)]
    pub base: InteractionBase,
    pub data: ApplicationCommandInteractionData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageComponentInteraction {
    #[serde(flatten)]
    pub base: InteractionBase,
    pub message: Message,
    pub data: MessageComponentInteractionData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageComponentInteractionData {
    pub custom_id: String,
    pub component_type: ComponentType,
    /// Selected values, for select menus.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(default)]
    pub resolved: ApplicationCommandInteractionDataResolved,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandAutoCompleteInteraction {
    #[serde(flatten)]
    pub base: InteractionBase,
    pub data: ApplicationCommandInteractionData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalSubmitInteraction {
    #[serde(flatten)]
    pub base: InteractionBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    pub data: ModalInteractionData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalInteractionData {
    pub custom_id: String,
    pub components: Vec<ModalInteractionActionRowData>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalInteractionActionRowData {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub components: Vec<ModalInteractionComponentData>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalInteractionComponentData {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub custom_id: String,
    pub value: String,
}

impl Interaction {
    pub fn base(&self) -> &InteractionBase {
        match self {
            Interaction::Ping(i) => &i.base,
            Interaction::ApplicationCommand(i) => &i.base,
            Interaction::MessageComponent(i) => &i.base,
            Interaction::ApplicationCommandAutoComplete(i) => &i.base,
            Interaction::ModalSubmit(i) => &i.base,
        }
    }

    pub fn id(&self) -> Snowflake {
        self.base().id
    }

    pub fn application_id(&self) -> Snowflake {
        self.base().application_id
    }

    pub fn token(&self) -> &str {
        &self.base().token
    }

    pub fn interaction_type(&self) -> InteractionType {
        self.base().interaction_type
    }
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let interaction_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| Box::from("interaction type was not an integer"))
            .and_then(InteractionType::try_from)
            .map_err(D::Error::custom)?;

        let interaction = match interaction_type {
            InteractionType::Ping => serde_json::from_value(value).map(Interaction::Ping),
            InteractionType::ApplicationCommand => {
                serde_json::from_value(value).map(Interaction::ApplicationCommand)
            }
            InteractionType::MessageComponent => {
                serde_json::from_value(value).map(Interaction::MessageComponent)
            }
            InteractionType::ApplicationCommandAutoComplete => {
                serde_json::from_value(value).map(Interaction::ApplicationCommandAutoComplete)
            }
            InteractionType::ModalSubmit => {
                serde_json::from_value(value).map(Interaction::ModalSubmit)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping() {
        let raw = r#"{"id":"1","application_id":"2","type":1,"token":"t","version":1}"#;
        let interaction: Interaction = serde_json::from_str(raw).unwrap();
        assert!(matches!(interaction, Interaction::Ping(_)));
        assert_eq!(interaction.id(), Snowflake(1));
        assert_eq!(interaction.token(), "t");
    }

    #[test]
    fn test_application_command() {
        let raw = r#"{
            "id": "10",
            "application_id": "20",
            "type": 2,
            "guild_id": "30",
            "channel_id": "40",
            "member": {"user": {"id": "50", "username": "u"}, "roles": [], "joined_at": "2021-01-01T00:00:00+00:00", "deaf": false, "mute": false},
            "token": "abc",
            "version": 1,
            "locale": "en-GB",
            "data": {
                "id": "60",
                "name": "close",
                "type": 1,
                "options": [{"name": "reason", "type": 3, "value": "done"}]
            }
        }"#;

        let interaction: Interaction = serde_json::from_str(raw).unwrap();
        let Interaction::ApplicationCommand(cmd) = &interaction else {
            panic!("wrong variant: {:?}", interaction);
        };

        assert_eq!(cmd.base.invoker().map(|u| u.id), Some(Snowflake(50)));
        assert_eq!(cmd.data.name, "close");
        let reason: String = cmd.data.option("reason").unwrap().value_as().unwrap().unwrap();
        assert_eq!(reason, "done");
        assert_eq!(interaction.interaction_type(), InteractionType::ApplicationCommand);
    }

    #[test]
    fn test_unknown_type() {
        let raw = r#"{"id":"1","application_id":"2","type":9,"token":"t","version":1}"#;
        assert!(serde_json::from_str::<Interaction>(raw).is_err());
    }
}
