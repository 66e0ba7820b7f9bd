use async_trait::async_trait;
use model::guild::Member;
use model::Snowflake;

use crate::routes::guilds::{self, ModifyGuildMemberParams};
use crate::session::Session;
use crate::Result;

#[async_trait]
pub trait MemberExt {
    /// With `atomic`, one request per missing role; roles granted before a failure stay
    /// recorded on the receiver. Otherwise a single member edit with the merged role list.
    async fn add_roles(
        &mut self,
        session: &Session,
        guild_id: Snowflake,
        user_id: Snowflake,
        roles: &[Snowflake],
        atomic: bool,
        reason: Option<&str>,
    ) -> Result<()>;

    async fn remove_roles(
        &mut self,
        session: &Session,
        guild_id: Snowflake,
        user_id: Snowflake,
        roles: &[Snowflake],
        atomic: bool,
        reason: Option<&str>,
    ) -> Result<()>;
}

#[async_trait]
impl MemberExt for Member {
    async fn add_roles(
        &mut self,
        session: &Session,
        guild_id: Snowflake,
        user_id: Snowflake,
        roles: &[Snowflake],
        atomic: bool,
        reason: Option<&str>,
    ) -> Result<()> {
        let mut missing: Vec<Snowflake> = Vec::with_capacity(roles.len());
        for role in roles {
            if !self.has_role(*role) && !missing.contains(role) {
                missing.push(*role);
            }
        }

        if missing.is_empty() {
            return Ok(());
        }

        if atomic {
            for role in missing {
                guilds::add_guild_member_role(session, guild_id, user_id, role, reason).await?;
                self.roles.push(role);
            }

            Ok(())
        } else {
            let mut merged = self.roles.clone();
            merged.extend(missing);
            replace_roles(self, session, guild_id, user_id, merged, reason).await
        }
    }

    async fn remove_roles(
        &mut self,
        session: &Session,
        guild_id: Snowflake,
        user_id: Snowflake,
        roles: &[Snowflake],
        atomic: bool,
        reason: Option<&str>,
    ) -> Result<()> {
        let mut held: Vec<Snowflake> = Vec::with_capacity(roles.len());
        for role in roles {
            if self.has_role(*role) && !held.contains(role) {
                held.push(*role);
            }
        }

        if held.is_empty() {
            return Ok(());
        }

        if atomic {
            for role in held {
                guilds::remove_guild_member_role(session, guild_id, user_id, role, reason).await?;
                self.roles.retain(|r| *r != role);
            }

            Ok(())
        } else {
            let remaining = self.roles.iter().copied().filter(|r| !held.contains(r)).collect();
            replace_roles(self, session, guild_id, user_id, remaining, reason).await
        }
    }
}

async fn replace_roles(
    member: &mut Member,
    session: &Session,
    guild_id: Snowflake,
    user_id: Snowflake,
    roles: Vec<Snowflake>,
    reason: Option<&str>,
) -> Result<()> {
    let params = ModifyGuildMemberParams {
        roles: Some(roles),
        ..Default::default()
    };

    let mut updated = guilds::modify_guild_member(session, guild_id, user_id, &params, reason).await?;
    updated.guild_id = updated.guild_id.or(member.guild_id);
    *member = updated;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use crate::ErrorKind;
    use reqwest::Method;

    const GUILD: Snowflake = Snowflake(1);
    const USER: Snowflake = Snowflake(2);
    const A: Snowflake = Snowflake(10);
    const B: Snowflake = Snowflake(11);
    const C: Snowflake = Snowflake(12);

    fn member(roles: Vec<Snowflake>) -> Member {
        Member {
            roles,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_atomic_add_partial_failure() {
        let mock = MockTransport::new();
        mock.push(204, "");
        mock.push(403, r#"{"message":"Missing Permissions","code":50013}"#);

        let mut member = member(vec![A]);
        let err = member
            .add_roles(&mock.session(), GUILD, USER, &[B, C], true, None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Rest);
        assert_eq!(member.roles, vec![A, B]);

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].endpoint, "/guilds/1/members/2/roles/11");
        assert_eq!(requests[1].endpoint, "/guilds/1/members/2/roles/12");
    }

    #[tokio::test]
    async fn test_atomic_add_skips_held() {
        let mock = MockTransport::new();
        mock.push(204, "");

        let mut member = member(vec![A]);
        member
            .add_roles(&mock.session(), GUILD, USER, &[A, B], true, None)
            .await
            .unwrap();

        assert_eq!(member.roles, vec![A, B]);
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_bulk_add() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"roles":["10","11","12"],"user":{"id":"2","username":"ryan"}}"#);

        let mut member = member(vec![A]);
        member.guild_id = Some(GUILD);
        member
            .add_roles(&mock.session(), GUILD, USER, &[B, C], false, Some("promote"))
            .await
            .unwrap();

        assert_eq!(member.roles, vec![A, B, C]);
        assert_eq!(member.guild_id, Some(GUILD));

        let req = &mock.requests()[0];
        assert_eq!(req.method, Method::PATCH);
        assert_eq!(req.endpoint, "/guilds/1/members/2");
        assert_eq!(&req.body[..], br#"{"roles":["10","11","12"]}"#);
    }

    #[tokio::test]
    async fn test_bulk_remove_failure_leaves_roles() {
        let mock = MockTransport::new();
        mock.push(401, "");

        let mut member = member(vec![A, B]);
        let err = member
            .remove_roles(&mock.session(), GUILD, USER, &[B], false, None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(member.roles, vec![A, B]);
    }

    #[tokio::test]
    async fn test_atomic_remove() {
        let mock = MockTransport::new();
        mock.push(204, "");

        let mut member = member(vec![A, B]);
        member
            .remove_roles(&mock.session(), GUILD, USER, &[A, C], true, None)
            .await
            .unwrap();

        assert_eq!(member.roles, vec![B]);
        let req = &mock.requests()[0];
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.endpoint, "/guilds/1/members/2/roles/10");
    }
}
