use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize_repr, Deserialize_repr, Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ActivityType {
    Game = 0,
    Streaming = 1,
    Listening = 2,
    Watching = 3,
    Custom = 4,
    Competing = 5,
}

impl TryFrom<u8> for ActivityType {
    type Error = Box<str>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Game,
            1 => Self::Streaming,
            2 => Self::Listening,
            3 => Self::Watching,
            4 => Self::Custom,
            5 => Self::Competing,
            _ => return Err(format!("invalid activity type \"{}\"", value).into_boxed_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        assert_eq!(ActivityType::try_from(1), Ok(ActivityType::Streaming));
        assert_eq!(ActivityType::try_from(4), Ok(ActivityType::Custom));
        assert!(ActivityType::try_from(100).is_err());
    }
}
