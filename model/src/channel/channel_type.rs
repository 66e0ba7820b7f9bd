use serde_repr::{Deserialize_repr, Serialize_repr};
use ChannelType::*;

/// Numeric values follow the documented table; 7, 8 and 9 are unassigned.
#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelType {
    #[default]
    GuildText = 0,
    DM = 1,
    GuildVoice = 2,
    GroupDM = 3,
    GuildCategory = 4,
    GuildNews = 5,
    GuildStore = 6,
    GuildNewsThread = 10,
    GuildPublicThread = 11,
    GuildPrivateThread = 12,
    GuildStageVoice = 13,
    GuildDirectory = 14,
    GuildForum = 15,
    GuildMedia = 16,
}

impl ChannelType {
    pub fn is_thread(&self) -> bool {
        matches!(self, GuildNewsThread | GuildPublicThread | GuildPrivateThread)
    }

    pub fn is_voice(&self) -> bool {
        matches!(self, GuildVoice | GuildStageVoice)
    }

    pub fn is_private(&self) -> bool {
        matches!(self, DM | GroupDM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_is_preserved() {
        assert_eq!(serde_json::to_string(&GuildStore).unwrap(), "6");
        assert_eq!(serde_json::to_string(&GuildNewsThread).unwrap(), "10");
        assert_eq!(serde_json::to_string(&GuildStageVoice).unwrap(), "13");

        for hole in ["7", "8", "9"] {
            assert!(serde_json::from_str::<ChannelType>(hole).is_err());
        }

        let t: ChannelType = serde_json::from_str("11").unwrap();
        assert_eq!(t, GuildPublicThread);
        assert!(t.is_thread());
    }
}
