use serde::{Deserialize, Serialize};

use super::Emoji;
use crate::sticker::Sticker;
use crate::{ImageHash, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GuildPreview {
    pub id: Snowflake,
    pub name: String,
    pub icon: Option<ImageHash>,
    pub splash: Option<ImageHash>,
    pub discovery_splash: Option<ImageHash>,
    #[serde(default)]
    pub emojis: Vec<Emoji>,
    #[serde(default)]
    pub features: Vec<String>,
    pub approximate_member_count: u32,
    pub approximate_presence_count: u32,
    pub description: Option<String>,
    #[serde(default)]
    pub stickers: Vec<Sticker>,
}

/// Response to prune count and begin prune; `pruned` is null when `compute_prune_count` is false.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct PruneCount {
    pub pruned: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GuildWidgetSettings {
    pub enabled: bool,
    pub channel_id: Option<Snowflake>,
}
