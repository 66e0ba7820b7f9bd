use serde::{Deserialize, Serialize};

use super::FormatType;
use crate::Snowflake;

/// The trimmed sticker representation attached to messages.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StickerItem {
    pub id: Snowflake,
    pub name: String,
    pub format_type: FormatType,
}
