use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// CDN asset hash, optionally prefixed with `a_` for animated assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHash {
    pub animated: bool,
    data: u128,
}

impl ImageHash {
    /// File extension the CDN serves this asset under by default.
    pub fn extension(&self) -> &'static str {
        if self.animated {
            "gif"
        } else {
            "png"
        }
    }
}

impl fmt::Display for ImageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.animated {
            write!(f, "a_{:032x}", self.data)
        } else {
            write!(f, "{:032x}", self.data)
        }
    }
}

impl Serialize for ImageHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ImageHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        let (animated, hash) = match raw.strip_prefix("a_") {
            Some(hash) => (true, hash),
            None => (false, raw.as_str()),
        };
        let data = u128::from_str_radix(hash, 16).map_err(Error::custom)?;

        Ok(ImageHash { animated, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_leading_zeroes() {
        let raw = r#""0a1b2c3d4e5f60718293a4b5c6d7e8f9""#;
        let hash: ImageHash = serde_json::from_str(raw).unwrap();
        assert!(!hash.animated);
        assert_eq!(serde_json::to_string(&hash).unwrap(), raw);
    }

    #[test]
    fn test_animated() {
        let raw = r#""a_1269e74af4df7417b13759eae50c83dc""#;
        let hash: ImageHash = serde_json::from_str(raw).unwrap();
        assert!(hash.animated);
        assert_eq!(hash.extension(), "gif");
        assert_eq!(serde_json::to_string(&hash).unwrap(), raw);
    }
}
