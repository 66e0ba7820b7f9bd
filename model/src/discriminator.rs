use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::Formatter;

/// Legacy four digit user tag. Users migrated to unique usernames report `"0"`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Discriminator(pub u16);

impl Discriminator {
    pub fn is_legacy(&self) -> bool {
        self.0 != 0
    }
}

impl Serialize for Discriminator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 == 0 {
            serializer.serialize_str("0")
        } else {
            serializer.serialize_str(&format!("{:0>4}", self.0))
        }
    }
}

struct DiscriminatorVisitor;

impl<'de> Visitor<'de> for DiscriminatorVisitor {
    type Value = Discriminator;

    fn expecting(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("a zero-padded decimal string")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        u16::try_from(v)
            .map(Discriminator)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map(Discriminator)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Discriminator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DiscriminatorVisitor)
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            f.write_str("0")
        } else {
            write!(f, "{:0>4}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        assert_eq!(serde_json::to_string(&Discriminator(7)).unwrap(), r#""0007""#);
        assert_eq!(serde_json::to_string(&Discriminator(0)).unwrap(), r#""0""#);

        let d: Discriminator = serde_json::from_str(r#""0042""#).unwrap();
        assert_eq!(d, Discriminator(42));
        assert!(d.is_legacy());
    }
}
