use serde::{Deserialize, Serialize};

use crate::user::User;
use crate::Snowflake;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Sticker {
    pub id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_id: Option<Snowflake>,
    pub name: String,
    pub description: Option<String>,
    /// Comma separated autocomplete keywords.
    #[serde(default)]
    pub tags: String,
    pub r#type: StickerType,
    pub format_type: FormatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_value: Option<usize>,
}

impl Sticker {
    pub fn to_item(&self) -> StickerItem {
        StickerItem {
            id: self.id,
            name: self.name.clone(),
            format_type: self.format_type,
        }
    }
}

mod sticker_type;
pub use sticker_type::StickerType;

mod format_type;
pub use format_type::FormatType;

mod sticker_item;
pub use sticker_item::StickerItem;

mod sticker_pack;
pub use sticker_pack::{StickerPack, StickerPackList};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guild_sticker() {
        let raw = r#"{
            "id": "749054660769218631",
            "name": "Wave",
            "tags": "wumpus, hello",
            "type": 2,
            "format_type": 3,
            "description": "Wumpus waves hello",
            "available": true,
            "guild_id": "1"
        }"#;

        let sticker: Sticker = serde_json::from_str(raw).unwrap();
        assert_eq!(sticker.r#type, StickerType::Guild);
        assert_eq!(sticker.format_type.extension(), "json");
        assert_eq!(sticker.to_item().id, Snowflake(749054660769218631));
    }
}
