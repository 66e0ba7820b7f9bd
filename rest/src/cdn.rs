//! Absolute asset URLs on the CDN.

use model::sticker::FormatType;
use model::{ImageHash, Snowflake};

pub const CDN_URL: &str = "https://cdn.discordapp.com";

pub fn user_avatar(user_id: Snowflake, avatar: &ImageHash) -> String {
    format!("{}/avatars/{}/{}.{}", CDN_URL, user_id, avatar, avatar.extension())
}

/// `index` as returned by `User::default_avatar_index`.
pub fn default_user_avatar(index: u64) -> String {
    format!("{}/embed/avatars/{}.png", CDN_URL, index)
}

pub fn guild_member_avatar(guild_id: Snowflake, user_id: Snowflake, avatar: &ImageHash) -> String {
    format!(
        "{}/guilds/{}/users/{}/avatars/{}.{}",
        CDN_URL,
        guild_id,
        user_id,
        avatar,
        avatar.extension()
    )
}

pub fn user_banner(user_id: Snowflake, banner: &ImageHash) -> String {
    format!("{}/banners/{}/{}.{}", CDN_URL, user_id, banner, banner.extension())
}

pub fn guild_icon(guild_id: Snowflake, icon: &ImageHash) -> String {
    format!("{}/icons/{}/{}.{}", CDN_URL, guild_id, icon, icon.extension())
}

pub fn guild_splash(guild_id: Snowflake, splash: &ImageHash) -> String {
    format!("{}/splashes/{}/{}.png", CDN_URL, guild_id, splash)
}

pub fn guild_discovery_splash(guild_id: Snowflake, splash: &ImageHash) -> String {
    format!("{}/discovery-splashes/{}/{}.png", CDN_URL, guild_id, splash)
}

pub fn guild_banner(guild_id: Snowflake, banner: &ImageHash) -> String {
    format!("{}/banners/{}/{}.{}", CDN_URL, guild_id, banner, banner.extension())
}

pub fn custom_emoji(emoji_id: Snowflake, animated: bool) -> String {
    let ext = if animated { "gif" } else { "png" };
    format!("{}/emojis/{}.{}", CDN_URL, emoji_id, ext)
}

pub fn application_icon(application_id: Snowflake, icon: &ImageHash) -> String {
    format!("{}/app-icons/{}/{}.png", CDN_URL, application_id, icon)
}

pub fn role_icon(role_id: Snowflake, icon: &ImageHash) -> String {
    format!("{}/role-icons/{}/{}.png", CDN_URL, role_id, icon)
}

pub fn sticker(sticker_id: Snowflake, format: FormatType) -> String {
    format!("{}/stickers/{}.{}", CDN_URL, sticker_id, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar() {
        let hash: ImageHash = serde_json::from_str(r#""a_0a1b2c3d4e5f60718293a4b5c6d7e8f9""#).unwrap();
        assert_eq!(
            user_avatar(Snowflake(80351110224678912), &hash),
            "https://cdn.discordapp.com/avatars/80351110224678912/a_0a1b2c3d4e5f60718293a4b5c6d7e8f9.gif"
        );
        assert_eq!(default_user_avatar(2), "https://cdn.discordapp.com/embed/avatars/2.png");
    }

    #[test]
    fn test_sticker() {
        assert_eq!(
            sticker(Snowflake(9), FormatType::Lottie),
            "https://cdn.discordapp.com/stickers/9.json"
        );
    }
}
