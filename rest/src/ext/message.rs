use async_trait::async_trait;
use model::channel::message::{Message, MessageReference};

use crate::routes::channels::{self, CreateMessageParams};
use crate::session::Session;
use crate::Result;

#[async_trait]
pub trait MessageExt {
    /// Posts `params` in the same channel as a reply. Any reference already on `params` is replaced.
    async fn reply(&self, session: &Session, params: CreateMessageParams) -> Result<Message>;

    fn reference(&self) -> MessageReference;
}

#[async_trait]
impl MessageExt for Message {
    async fn reply(&self, session: &Session, mut params: CreateMessageParams) -> Result<Message> {
        params.message_reference = Some(self.reference());
        channels::create_message(session, self.channel_id, &params).await
    }

    fn reference(&self) -> MessageReference {
        MessageReference {
            message_id: Some(self.id),
            channel_id: Some(self.channel_id),
            guild_id: self.guild_id,
            fail_if_not_exists: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn test_reply() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"id":"4","channel_id":"2","content":"pong"}"#);

        let message: Message =
            serde_json::from_str(r#"{"id":"3","channel_id":"2","guild_id":"1","content":"ping"}"#).unwrap();
        let reply = message
            .reply(&mock.session(), CreateMessageParams::content("pong"))
            .await
            .unwrap();
        assert_eq!(reply.id, model::Snowflake(4));

        let req = &mock.requests()[0];
        assert_eq!(req.endpoint, "/channels/2/messages");
        assert_eq!(
            &req.body[..],
            br#"{"content":"pong","tts":false,"message_reference":{"message_id":"3","channel_id":"2","guild_id":"1","fail_if_not_exists":true}}"#
        );
    }
}
