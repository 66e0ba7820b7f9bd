use model::guild::Emoji;
use model::{ImageData, Snowflake};
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::no_content;
use crate::endpoints;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

#[derive(Serialize, Debug, Clone)]
pub struct CreateGuildEmojiParams {
    pub name: String,
    /// At most 256 KiB.
    pub image: ImageData,
    /// Roles allowed to use the emoji. Empty means everyone.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyGuildEmojiParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Snowflake>>,
}

#[instrument(skip(session))]
pub async fn list_guild_emojis(session: &Session, guild_id: Snowflake) -> Result<Vec<Emoji>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_emojis(guild_id)))
        .await
}

#[instrument(skip(session))]
pub async fn get_guild_emoji(session: &Session, guild_id: Snowflake, emoji_id: Snowflake) -> Result<Emoji> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_emoji(guild_id, emoji_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn create_guild_emoji(
    session: &Session,
    guild_id: Snowflake,
    params: &CreateGuildEmojiParams,
    reason: Option<&str>,
) -> Result<Emoji> {
    let request = Request::json(Method::POST, endpoints::guild_emojis(guild_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session, params))]
pub async fn modify_guild_emoji(
    session: &Session,
    guild_id: Snowflake,
    emoji_id: Snowflake,
    params: &ModifyGuildEmojiParams,
    reason: Option<&str>,
) -> Result<Emoji> {
    let request = Request::json(Method::PATCH, endpoints::guild_emoji(guild_id, emoji_id), params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn delete_guild_emoji(
    session: &Session,
    guild_id: Snowflake,
    emoji_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let request = Request::new(Method::DELETE, endpoints::guild_emoji(guild_id, emoji_id)).with_reason(reason)?;
    no_content(session, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use crate::{Error, ErrorKind};

    #[tokio::test]
    async fn test_create_emoji() {
        let mock = MockTransport::new();
        mock.push(201, r#"{"id":"5","name":"ticket","roles":[]}"#);

        let params = CreateGuildEmojiParams {
            name: "ticket".to_owned(),
            image: ImageData::new(b"GIF89a\x01\x00".to_vec()).unwrap(),
            roles: Vec::new(),
        };
        let emoji = create_guild_emoji(&mock.session(), Snowflake(1), &params, None).await.unwrap();
        assert_eq!(emoji.id, Snowflake(5));

        assert_eq!(
            &mock.requests()[0].body[..],
            br#"{"name":"ticket","image":"data:image/gif;base64,R0lGODlhAQA="}"#
        );
    }

    #[tokio::test]
    async fn test_unsupported_image_before_io() {
        let mock = MockTransport::new();

        let res: Result<Emoji> = async {
            let params = CreateGuildEmojiParams {
                name: "ticket".to_owned(),
                image: ImageData::new(b"not an image".to_vec())?,
                roles: Vec::new(),
            };
            create_guild_emoji(&mock.session(), Snowflake(1), &params, None).await
        }
        .await;

        assert!(matches!(res, Err(Error::UnsupportedImageType)));
        assert_eq!(res.unwrap_err().kind(), ErrorKind::UnsupportedImageType);
        assert!(mock.requests().is_empty());
    }
}
