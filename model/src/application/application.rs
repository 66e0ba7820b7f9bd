use serde::{Deserialize, Serialize};

use super::{ApplicationFlags, Team};
use crate::user::User;
use crate::{ImageHash, PermissionBitSet, Snowflake};

/// Most fields are absent in partial projections such as invite targets.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Application {
    pub id: Snowflake,
    #[serde(default)]
    pub name: String,
    pub icon: Option<ImageHash>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rpc_origins: Vec<String>,
    #[serde(default)]
    pub bot_public: bool,
    #[serde(default)]
    pub bot_require_code_grant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    /// Hex encoded ed25519 key used to verify interaction signatures.
    #[serde(default)]
    pub verify_key: String,
    pub team: Option<Team>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_sku_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<ImageHash>,
    #[serde(default)]
    pub flags: ApplicationFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_guild_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_params: Option<InstallParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_install_url: Option<String>,
}

impl Application {
    /// The user that owns the application, or the team owner for team applications.
    pub fn owner_id(&self) -> Option<Snowflake> {
        match &self.team {
            Some(team) => Some(team.owner_user_id),
            None => self.owner.as_ref().map(|owner| owner.id),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InstallParams {
    pub scopes: Vec<String>,
    pub permissions: PermissionBitSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_owner() {
        let raw = r#"{
            "id": "172150183260323840",
            "name": "Baba O-Riley",
            "icon": null,
            "description": "Test",
            "bot_public": true,
            "bot_require_code_grant": false,
            "verify_key": "1e0a356058d627ca38a5c8c9648818061d49e49bd9da9e3ab17d98ad4d6bg2u8",
            "flags": 8388608,
            "team": {
                "icon": null,
                "id": "531992624043786253",
                "name": "team",
                "owner_user_id": "511972282709709995",
                "members": [{
                    "membership_state": 2,
                    "team_id": "531992624043786253",
                    "user": {"id": "511972282709709995", "username": "Mr Owner", "discriminator": "0"},
                    "role": "admin"
                }]
            }
        }"#;

        let app: Application = serde_json::from_str(raw).unwrap();
        assert_eq!(app.owner_id(), Some(Snowflake(511972282709709995)));
        assert!(app.flags.contains(ApplicationFlags::APPLICATION_COMMAND_BADGE));
    }
}
