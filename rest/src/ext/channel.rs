use async_trait::async_trait;
use model::channel::message::Message;
use model::channel::Channel;
use tracing::debug;

use crate::routes::channels::{
    self, CreateMessageParams, GetChannelMessagesQuery, ModifyChannelParams,
};
use crate::session::Session;
use crate::Result;

#[async_trait]
pub trait ChannelExt {
    async fn edit(&mut self, session: &Session, params: &ModifyChannelParams, reason: Option<&str>) -> Result<()>;

    async fn send(&self, session: &Session, params: &CreateMessageParams) -> Result<Message>;

    /// Fetches up to `limit` of the latest messages and deletes them, returning what was deleted.
    async fn purge(&self, session: &Session, limit: u8, reason: Option<&str>) -> Result<Vec<Message>>;
}

#[async_trait]
impl ChannelExt for Channel {
    async fn edit(&mut self, session: &Session, params: &ModifyChannelParams, reason: Option<&str>) -> Result<()> {
        *self = channels::modify_channel(session, self.id, params, reason).await?;
        Ok(())
    }

    async fn send(&self, session: &Session, params: &CreateMessageParams) -> Result<Message> {
        channels::create_message(session, self.id, params).await
    }

    async fn purge(&self, session: &Session, limit: u8, reason: Option<&str>) -> Result<Vec<Message>> {
        let messages = channels::get_channel_messages(session, self.id, &GetChannelMessagesQuery::limit(limit)).await?;
        let ids: Vec<_> = messages.iter().map(|m| m.id).collect();

        debug!(channel_id = %self.id, count = ids.len(), "purging messages");

        // bulk delete rejects fewer than 2 ids
        match ids.as_slice() {
            [] => {}
            [id] => channels::delete_message(session, self.id, *id, reason).await?,
            _ => channels::bulk_delete_messages(session, self.id, &ids, reason).await?,
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use crate::ErrorKind;
    use model::Snowflake;
    use reqwest::Method;

    fn channel(id: u64) -> Channel {
        Channel {
            id: Snowflake(id),
            name: Some("old".to_owned()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_edit_with_reason() {
        let mock = MockTransport::new();
        mock.push(200, r#"{"id":"333","name":"x","type":0}"#);

        let mut channel = channel(333);
        let params = ModifyChannelParams {
            name: Some("x".to_owned()),
            ..Default::default()
        };
        channel.edit(&mock.session(), &params, Some("cleanup")).await.unwrap();
        assert_eq!(channel.name.as_deref(), Some("x"));

        let req = &mock.requests()[0];
        assert_eq!(req.method, Method::PATCH);
        assert_eq!(req.endpoint, "/channels/333");
        assert_eq!(req.reason(), Some("cleanup"));
        assert_eq!(&req.body[..], br#"{"name":"x"}"#);
    }

    #[tokio::test]
    async fn test_edit_unauthorized_leaves_receiver() {
        let mock = MockTransport::new();
        mock.push(401, r#"{"message":"401: Unauthorized","code":0}"#);

        let mut channel = channel(333);
        let params = ModifyChannelParams {
            name: Some("x".to_owned()),
            ..Default::default()
        };
        let err = channel.edit(&mock.session(), &params, None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(channel.name.as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_purge() {
        let mock = MockTransport::new();
        mock.push(
            200,
            r#"[{"id":"2","channel_id":"444","content":"b"},{"id":"1","channel_id":"444","content":"a"}]"#,
        );
        mock.push(204, "");

        let purged = channel(444).purge(&mock.session(), 2, None).await.unwrap();
        assert_eq!(purged.len(), 2);

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].endpoint, "/channels/444/messages?limit=2");
        assert_eq!(requests[1].method, Method::POST);
        assert_eq!(requests[1].endpoint, "/channels/444/messages/bulk-delete");
        assert_eq!(&requests[1].body[..], br#"{"messages":["2","1"]}"#);
    }

    #[tokio::test]
    async fn test_purge_single() {
        let mock = MockTransport::new();
        mock.push(200, r#"[{"id":"9","channel_id":"444","content":"only"}]"#);
        mock.push(204, "");

        channel(444).purge(&mock.session(), 10, None).await.unwrap();
        let requests = mock.requests();
        assert_eq!(requests[1].method, Method::DELETE);
        assert_eq!(requests[1].endpoint, "/channels/444/messages/9");
    }
}
