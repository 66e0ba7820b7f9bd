use serde::{Deserialize, Serialize};

use super::Sticker;
use crate::Snowflake;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StickerPack {
    pub id: Snowflake,
    pub stickers: Vec<Sticker>,
    pub name: String,
    pub sku_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_sticker_id: Option<Snowflake>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_asset_id: Option<Snowflake>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StickerPackList {
    pub sticker_packs: Vec<StickerPack>,
}
