use serde::{Deserialize, Serialize};

use super::{ApplicationCommandOption, ApplicationCommandType};
use crate::{PermissionBitSet, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommand {
    pub id: Snowflake,
    #[serde(rename = "type", default)]
    pub command_type: ApplicationCommandType,
    pub application_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub options: Vec<ApplicationCommandOption>,
    #[serde(default)]
    pub default_member_permissions: Option<PermissionBitSet>,
    #[serde(default = "crate::util::returns_true")]
    pub default_permission: bool,
    #[serde(default)]
    pub nsfw: bool,
    /// Autoincrementing version id, bumped on every substantial edit.
    pub version: Snowflake,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ApplicationCommandOptionType;

    #[test]
    fn test_nested_options() {
        let raw = r#"{
            "id": "1",
            "application_id": "2",
            "name": "permissions",
            "description": "Get or edit permissions",
            "version": "3",
            "options": [
                {
                    "name": "user",
                    "description": "Get or edit permissions for a user",
                    "type": 2,
                    "options": [
                        {
                            "name": "get",
                            "description": "Get permissions for a user",
                            "type": 1,
                            "options": [
                                {"name": "user", "description": "The user", "type": 6, "required": true}
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let cmd: ApplicationCommand = serde_json::from_str(raw).unwrap();
        assert_eq!(cmd.command_type, ApplicationCommandType::ChatInput);
        assert!(cmd.default_permission);

        let group = &cmd.options[0];
        assert_eq!(group.option_type, ApplicationCommandOptionType::SubCommandGroup);
        let sub = &group.options[0];
        assert_eq!(sub.option_type, ApplicationCommandOptionType::SubCommand);
        assert_eq!(sub.options[0].option_type, ApplicationCommandOptionType::User);
        assert!(sub.options[0].required);
    }
}
