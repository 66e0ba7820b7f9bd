use async_trait::async_trait;
use model::channel::message::Message;
use model::channel::{Channel, ChannelType};
use model::user::User;

use crate::routes::channels::{self, CreateMessageParams};
use crate::routes::users;
use crate::session::Session;
use crate::Result;

#[async_trait]
pub trait UserExt {
    /// Opens a DM channel, or returns a channel carrying only the id of the one already cached.
    async fn create_dm(&mut self, session: &Session) -> Result<Channel>;

    async fn send(&mut self, session: &Session, params: &CreateMessageParams) -> Result<Message>;
}

#[async_trait]
impl UserExt for User {
    async fn create_dm(&mut self, session: &Session) -> Result<Channel> {
        if let Some(id) = self.dm_channel_id {
            return Ok(Channel {
                id,
                channel_type: ChannelType::DM,
                ..Default::default()
            });
        }

        let channel = users::create_dm(session, self.id).await?;
        self.dm_channel_id = Some(channel.id);
        Ok(channel)
    }

    async fn send(&mut self, session: &Session, params: &CreateMessageParams) -> Result<Message> {
        let channel = self.create_dm(session).await?;
        channels::create_message(session, channel.id, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use model::Snowflake;

    fn user() -> User {
        User {
            id: Snowflake(5),
            username: "ryan".to_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_send_caches_dm() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"id":"77","type":1}"#);
        mock.push(200, r#"{"id":"100","channel_id":"77","content":"hi"}"#);
        mock.push(200, r#"{"id":"101","channel_id":"77","content":"again"}"#);

        let session = mock.session();
        let mut user = user();
        user.send(&session, &CreateMessageParams::content("hi")).await.unwrap();
        assert_eq!(user.dm_channel_id, Some(Snowflake(77)));

        user.send(&session, &CreateMessageParams::content("again")).await.unwrap();

        let endpoints: Vec<_> = mock.requests().into_iter().map(|r| r.endpoint).collect();
        assert_eq!(
            endpoints,
            vec!["/users/@me/channels", "/channels/77/messages", "/channels/77/messages"]
        );
    }

    #[tokio::test]
    async fn test_create_dm_failure_leaves_cache_empty() {
        let mock = MockTransport::new();
        mock.push(403, r#"{"message":"Cannot send messages to this user","code":50007}"#);

        let mut user = user();
        let err = user.create_dm(&mock.session()).await.unwrap_err();
        assert_eq!(err.code(), Some(50007));
        assert!(user.dm_channel_id.is_none());
    }
}
