use chrono::{DateTime, Utc};
use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Milliseconds between the unix epoch and the first second of 2015, the epoch of every snowflake.
pub const DISCORD_EPOCH: u64 = 1420070400000;

/// Discord identifier. Always a quoted decimal string on the wire; `null` decodes to 0.
///
/// An id of 0 is reserved for "unset".
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Snowflake(pub u64);

impl Snowflake {
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Unix timestamp in milliseconds at which the id was minted.
    pub fn timestamp_millis(&self) -> u64 {
        (self.0 >> 22) + DISCORD_EPOCH
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp_millis() as i64).unwrap_or_default()
    }

    pub fn worker_id(&self) -> u8 {
        ((self.0 & 0x3E0000) >> 17) as u8
    }

    pub fn process_id(&self) -> u8 {
        ((self.0 & 0x1F000) >> 12) as u8
    }

    pub fn increment(&self) -> u16 {
        (self.0 & 0xFFF) as u16
    }

    /// Smallest snowflake minted at `unix_ms`. Useful as a `before`/`after` pagination cursor.
    pub fn from_timestamp_millis(unix_ms: u64) -> Snowflake {
        Snowflake(unix_ms.saturating_sub(DISCORD_EPOCH) << 22)
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct SnowflakeVisitor;

impl<'de> Visitor<'de> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal string, u64 or null")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Snowflake(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(Snowflake)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(Snowflake(0))
    }

    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        Ok(Snowflake(0))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Snowflake(s.parse()?))
    }
}

impl From<u64> for Snowflake {
    fn from(x: u64) -> Self {
        Snowflake(x)
    }
}

impl From<Snowflake> for u64 {
    fn from(s: Snowflake) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        id: Snowflake,
    }

    #[test]
    fn test_serialize_is_quoted() {
        let json = serde_json::to_string(&Wrapper { id: Snowflake(0) }).unwrap();
        assert_eq!(json, r#"{"id":"0"}"#);

        let json = serde_json::to_string(&Snowflake(143090142360371200)).unwrap();
        assert_eq!(json, r#""143090142360371200""#);
    }

    #[test]
    fn test_null_is_zero() {
        let w: Wrapper = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert_eq!(w.id, Snowflake(0));

        let s: Snowflake = serde_json::from_str("null").unwrap();
        assert!(s.is_zero());
    }

    #[test]
    fn test_round_trip_bounds() {
        for v in [0, 1, 4096, 143090142360371200, i64::MAX as u64] {
            let json = serde_json::to_string(&Snowflake(v)).unwrap();
            let back: Snowflake = serde_json::from_str(&json).unwrap();
            assert_eq!(back, Snowflake(v));
        }
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_str::<Snowflake>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"id":"12a"}"#).is_err());
    }

    #[test]
    fn test_accepts_bare_integer() {
        let s: Snowflake = serde_json::from_str("80351110224678912").unwrap();
        assert_eq!(s, Snowflake(80351110224678912));
    }

    #[test]
    fn test_created_at() {
        let s = Snowflake(143090142360371200);
        assert_eq!(s.timestamp_millis(), 1454185748425);
        assert_eq!(s.created_at().timestamp(), 1454185748);
        assert_eq!(s.created_at().timestamp_subsec_millis(), 425);
    }

    #[test]
    fn test_time_is_monotonic() {
        let ids = [0u64, 1 << 22, 143090142360371200, 175928847299117063, i64::MAX as u64];
        for pair in ids.windows(2) {
            assert!(Snowflake(pair[0]).created_at() <= Snowflake(pair[1]).created_at());
        }
    }

    #[test]
    fn test_components() {
        let s = Snowflake(175928847299117063);
        assert_eq!(s.worker_id(), 1);
        assert_eq!(s.process_id(), 0);
        assert_eq!(s.increment(), 7);
    }

    #[test]
    fn test_from_timestamp() {
        let s = Snowflake::from_timestamp_millis(1454185748425);
        assert_eq!(s.timestamp_millis(), 1454185748425);
        assert_eq!(Snowflake::from_timestamp_millis(0), Snowflake(0));
    }

    #[test]
    fn test_map_keys() {
        let map: HashMap<Snowflake, u8> = serde_json::from_str(r#"{"5":1,"6":2}"#).unwrap();
        assert_eq!(map.get(&Snowflake(6)), Some(&2));
    }
}
