use bytes::Bytes;
use model::sticker::{Sticker, StickerPackList};
use model::Snowflake;
use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::no_content;
use crate::endpoints;
use crate::request::Request;
use crate::session::Session;
use crate::transport::multipart::Form;
use crate::transport::File;
use crate::Result;

/// Sent as a multipart form, not JSON.
#[derive(Debug, Clone)]
pub struct CreateGuildStickerParams {
    pub name: String,
    pub description: String,
    /// Autocomplete keywords, comma separated.
    pub tags: String,
    /// PNG, APNG, GIF or Lottie JSON, at most 512 KiB.
    pub file: File,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ModifyGuildStickerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

#[instrument(skip(session))]
pub async fn get_sticker(session: &Session, sticker_id: Snowflake) -> Result<Sticker> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::sticker(sticker_id)))
        .await
}

#[instrument(skip(session))]
pub async fn list_nitro_sticker_packs(session: &Session) -> Result<StickerPackList> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::STICKER_PACKS))
        .await
}

#[instrument(skip(session))]
pub async fn list_guild_stickers(session: &Session, guild_id: Snowflake) -> Result<Vec<Sticker>> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_stickers(guild_id)))
        .await
}

#[instrument(skip(session))]
pub async fn get_guild_sticker(session: &Session, guild_id: Snowflake, sticker_id: Snowflake) -> Result<Sticker> {
    session
        .fetch_to_object(Request::new(Method::GET, endpoints::guild_sticker(guild_id, sticker_id)))
        .await
}

#[instrument(skip(session, params))]
pub async fn create_guild_sticker(
    session: &Session,
    guild_id: Snowflake,
    params: &CreateGuildStickerParams,
    reason: Option<&str>,
) -> Result<Sticker> {
    let (content_type, body) = sticker_form(params)?;
    let request = Request::new(Method::POST, endpoints::guild_stickers(guild_id))
        .with_body(content_type, body)
        .with_reason(reason)?;
    session.fetch_to_object(request).await
}

fn sticker_form(params: &CreateGuildStickerParams) -> Result<(String, Bytes)> {
    let mut form = Form::new();
    form.text_part("name", &params.name);
    form.text_part("description", &params.description);
    form.text_part("tags", &params.tags);
    form.file_part("file", &params.file);
    form.finish()
}

#[instrument(skip(session, params))]
pub async fn modify_guild_sticker(
    session: &Session,
    guild_id: Snowflake,
    sticker_id: Snowflake,
    params: &ModifyGuildStickerParams,
    reason: Option<&str>,
) -> Result<Sticker> {
    let endpoint = endpoints::guild_sticker(guild_id, sticker_id);
    let request = Request::json(Method::PATCH, endpoint, params)?.with_reason(reason)?;
    session.fetch_to_object(request).await
}

#[instrument(skip(session))]
pub async fn delete_guild_sticker(
    session: &Session,
    guild_id: Snowflake,
    sticker_id: Snowflake,
    reason: Option<&str>,
) -> Result<()> {
    let request = Request::new(Method::DELETE, endpoints::guild_sticker(guild_id, sticker_id)).with_reason(reason)?;
    no_content(session, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use crate::transport::multipart::tests::parts;

    #[tokio::test]
    async fn test_create_sticker_form() {
        let mock = MockTransport::new();
        mock.push(
            201,
            r#"{"id":"7","name":"wave","description":"hi","tags":"wave","type":2,"format_type":1}"#,
        );

        let params = CreateGuildStickerParams {
            name: "wave".to_owned(),
            description: "hi".to_owned(),
            tags: "wave".to_owned(),
            file: File::new("wave.png", &b"\x89PNG\r\n\x1a\n"[..]).with_content_type("image/png"),
        };
        let sticker = create_guild_sticker(&mock.session(), Snowflake(1), &params, None).await.unwrap();
        assert_eq!(sticker.id, Snowflake(7));

        let req = &mock.requests()[0];
        let parts = parts(req.content_type.as_deref().unwrap(), &req.body);
        let names: Vec<_> = parts
            .iter()
            .map(|(headers, _)| headers.lines().next().unwrap().to_owned())
            .collect();

        assert_eq!(
            names,
            vec![
                "Content-Disposition: form-data; name=\"name\"",
                "Content-Disposition: form-data; name=\"description\"",
                "Content-Disposition: form-data; name=\"tags\"",
                "Content-Disposition: form-data; name=\"file\"; filename=\"wave.png\"",
            ]
        );
        assert_eq!(parts[3].1, b"\x89PNG\r\n\x1a\n");
    }
}
