use serde::{Deserialize, Serialize};

use crate::user::User;
use crate::Snowflake;

/// Custom or unicode emoji. Unicode emojis carry a zero id and their character as `name`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Emoji {
    #[serde(default, skip_serializing_if = "Snowflake::is_zero")]
    pub id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub require_colons: bool,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub managed: bool,
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub animated: bool,
    #[serde(default = "crate::util::returns_true")]
    pub available: bool,
}

impl Emoji {
    pub fn unicode(character: impl Into<String>) -> Emoji {
        Emoji {
            name: Some(character.into()),
            available: true,
            ..Default::default()
        }
    }

    pub fn is_custom(&self) -> bool {
        !self.id.is_zero()
    }

    /// Segment used in reaction routes: `name:id` for custom emojis, the character otherwise.
    pub fn api_name(&self) -> String {
        let name = self.name.as_deref().unwrap_or_default();
        if self.is_custom() {
            format!("{}:{}", name, self.id)
        } else {
            name.to_owned()
        }
    }

    /// Markup that renders the emoji inside message content.
    pub fn message_format(&self) -> String {
        let name = self.name.as_deref().unwrap_or_default();
        match (self.is_custom(), self.animated) {
            (false, _) => name.to_owned(),
            (true, true) => format!("<a:{}:{}>", name, self.id),
            (true, false) => format!("<:{}:{}>", name, self.id),
        }
    }
}

impl PartialEq for Emoji {
    fn eq(&self, other: &Self) -> bool {
        if self.is_custom() || other.is_custom() {
            self.id == other.id
        } else {
            self.name == other.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_emoji_has_null_id() {
        let e: Emoji = serde_json::from_str(r#"{"id":null,"name":"🔥"}"#).unwrap();
        assert!(!e.is_custom());
        assert_eq!(e.api_name(), "🔥");
        assert_eq!(e.message_format(), "🔥");
    }

    #[test]
    fn test_custom_emoji_format() {
        let e: Emoji =
            serde_json::from_str(r#"{"id":"41771983429993937","name":"LUL","animated":true}"#)
                .unwrap();
        assert_eq!(e.api_name(), "LUL:41771983429993937");
        assert_eq!(e.message_format(), "<a:LUL:41771983429993937>");
        assert!(e.available);
    }
}
