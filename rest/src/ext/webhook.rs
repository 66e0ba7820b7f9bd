use async_trait::async_trait;
use model::webhook::Webhook;

use crate::routes::webhooks::{self, ModifyWebhookParams};
use crate::session::Session;
use crate::Result;

#[async_trait]
pub trait WebhookExt {
    /// Uses the webhook's own token when it has one, unless `channel_id` is set: only the
    /// bot authenticated route can move a webhook.
    async fn edit(&mut self, session: &Session, params: &ModifyWebhookParams, reason: Option<&str>) -> Result<()>;
}

#[async_trait]
impl WebhookExt for Webhook {
    async fn edit(&mut self, session: &Session, params: &ModifyWebhookParams, reason: Option<&str>) -> Result<()> {
        let token = self.token.as_deref().filter(|_| params.channel_id.is_none());
        let mut updated = match token {
            Some(token) => webhooks::modify_webhook_with_token(session, self.id, token, params, reason).await?,
            None => webhooks::modify_webhook(session, self.id, params, reason).await?,
        };

        if updated.token.is_none() {
            updated.token = self.token.take();
        }
        *self = updated;
        Ok(())
    }
}
