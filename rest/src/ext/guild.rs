use async_trait::async_trait;
use model::guild::{Emoji, Guild, Role};
use model::Snowflake;

use crate::routes::emojis::{self, ModifyGuildEmojiParams};
use crate::routes::guilds::{self, GuildRoleParams, ModifyGuildParams};
use crate::session::Session;
use crate::Result;

#[async_trait]
pub trait GuildExt {
    async fn edit(&mut self, session: &Session, params: &ModifyGuildParams, reason: Option<&str>) -> Result<()>;
}

#[async_trait]
impl GuildExt for Guild {
    async fn edit(&mut self, session: &Session, params: &ModifyGuildParams, reason: Option<&str>) -> Result<()> {
        *self = guilds::modify_guild(session, self.id, params, reason).await?;
        Ok(())
    }
}

/// Roles and emojis don't always know their guild, so it is passed in and kept on the receiver.
#[async_trait]
pub trait RoleExt {
    async fn edit(
        &mut self,
        session: &Session,
        guild_id: Snowflake,
        params: &GuildRoleParams,
        reason: Option<&str>,
    ) -> Result<()>;
}

#[async_trait]
impl RoleExt for Role {
    async fn edit(
        &mut self,
        session: &Session,
        guild_id: Snowflake,
        params: &GuildRoleParams,
        reason: Option<&str>,
    ) -> Result<()> {
        let mut role = guilds::modify_guild_role(session, guild_id, self.id, params, reason).await?;
        role.guild_id = Some(guild_id);
        *self = role;
        Ok(())
    }
}

#[async_trait]
pub trait EmojiExt {
    async fn edit(
        &mut self,
        session: &Session,
        guild_id: Snowflake,
        params: &ModifyGuildEmojiParams,
        reason: Option<&str>,
    ) -> Result<()>;
}

#[async_trait]
impl EmojiExt for Emoji {
    async fn edit(
        &mut self,
        session: &Session,
        guild_id: Snowflake,
        params: &ModifyGuildEmojiParams,
        reason: Option<&str>,
    ) -> Result<()> {
        let mut emoji = emojis::modify_guild_emoji(session, guild_id, self.id, params, reason).await?;
        emoji.guild_id = Some(guild_id);
        *self = emoji;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_guild_edit() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"id":"1","name":"renamed","icon":null,"owner_id":"2"}"#);

        let mut guild = Guild {
            id: Snowflake(1),
            name: "old".to_owned(),
            ..Default::default()
        };
        let params = ModifyGuildParams {
            name: Some("renamed".to_owned()),
            ..Default::default()
        };
        guild.edit(&mock.session(), &params, None).await.unwrap();
        assert_eq!(guild.name, "renamed");
        assert_eq!(guild.owner_id, Snowflake(2));
    }

    #[tokio::test]
    async fn test_role_edit_keeps_guild() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"id":"5","name":"Admins","color":255}"#);

        let mut role: Role = serde_json::from_str(r#"{"id":"5","name":"Staff"}"#).unwrap();
        let params = GuildRoleParams {
            name: Some("Admins".to_owned()),
            ..Default::default()
        };
        role.edit(&mock.session(), Snowflake(1), &params, Some("rename")).await.unwrap();

        assert_eq!(role.name, "Admins");
        assert_eq!(role.guild_id, Some(Snowflake(1)));
        assert_eq!(mock.requests()[0].endpoint, "/guilds/1/roles/5");
    }

    #[tokio::test]
    async fn test_emoji_edit_failure() {
        let mock = MockTransport::new();
        mock.push(403, r#"{"message":"Missing Permissions","code":50013}"#);

        let mut emoji: Emoji = serde_json::from_str(r#"{"id":"7","name":"old"}"#).unwrap();
        let params = ModifyGuildEmojiParams {
            name: Some("new".to_owned()),
            ..Default::default()
        };
        let err = emoji.edit(&mock.session(), Snowflake(1), &params, None).await.unwrap_err();
        assert_eq!(err.code(), Some(50013));
        assert_eq!(emoji.name.as_deref(), Some("old"));
        assert!(emoji.guild_id.is_none());
    }
}
