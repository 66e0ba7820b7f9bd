use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::channel::Channel;
use crate::guild::Guild;
use crate::user::User;
use crate::{ImageHash, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Webhook {
    pub id: Snowflake,
    #[serde(rename = "type", default)]
    pub webhook_type: WebhookType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    /// Absent when fetched by token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub name: Option<String>,
    pub avatar: Option<ImageHash>,
    /// Only incoming webhooks carry a token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub application_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_guild: Option<Box<Guild>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_channel: Option<Box<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum WebhookType {
    #[default]
    Incoming = 1,
    ChannelFollower = 2,
    Application = 3,
}

impl PartialEq for Webhook {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming() {
        let raw = r#"{
            "name": "test webhook",
            "type": 1,
            "channel_id": "199737254929760256",
            "token": "3d89bb7572e0fb30d8128367b3b1b44fecd1726de135cbe28a41f8b2f777c372ba2939e72279b94526ff5d1bd4358d65cf11",
            "avatar": null,
            "guild_id": "199737254929760256",
            "id": "223704706495545344",
            "application_id": null,
            "user": {"username": "test", "discriminator": "7479", "id": "190320984123768832", "avatar": "b004ec1740a63ca06ae2e14c5cee11f3", "public_flags": 131328}
        }"#;

        let webhook: Webhook = serde_json::from_str(raw).unwrap();
        assert_eq!(webhook.webhook_type, WebhookType::Incoming);
        assert!(webhook.token.is_some());
        assert!(webhook.application_id.is_none());
    }
}
