use crate::channel::Permission;
use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::Formatter;

/// 64-bit permission field. Encoded as a quoted decimal string, like a snowflake.
///
/// A JSON `null` decodes to the empty set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PermissionBitSet(pub u64);

impl PermissionBitSet {
    pub fn has_permission(&self, permission: Permission) -> bool {
        let perm = permission as u64;
        self.0 & perm == perm
    }

    pub fn contains(&self, other: PermissionBitSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, permission: Permission) {
        self.0 |= permission as u64;
    }

    pub fn remove(&mut self, permission: Permission) {
        self.0 &= !(permission as u64);
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<&[Permission]> for PermissionBitSet {
    fn from(permissions: &[Permission]) -> Self {
        PermissionBitSet(Permission::sum(permissions))
    }
}

impl Serialize for PermissionBitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BitSetVisitor;

impl<'de> Visitor<'de> for BitSetVisitor {
    type Value = PermissionBitSet;

    fn expecting(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("a decimal string, integer or null")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(PermissionBitSet(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(PermissionBitSet(v as u64))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map(PermissionBitSet)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(PermissionBitSet::default())
    }
}

impl<'de> Deserialize<'de> for PermissionBitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BitSetVisitor)
    }
}

impl fmt::Display for PermissionBitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Serialize)]
    struct Holder {
        #[serde(default)]
        permissions: PermissionBitSet,
    }

    #[test]
    fn test_round_trip() {
        for v in [0u64, 8, 1 << 40, u64::MAX >> 1] {
            let json = serde_json::to_string(&PermissionBitSet(v)).unwrap();
            assert_eq!(json, format!("\"{}\"", v));
            let back: PermissionBitSet = serde_json::from_str(&json).unwrap();
            assert_eq!(back.0, v);
        }
    }

    #[test]
    fn test_null_leaves_default() {
        let h: Holder = serde_json::from_str(r#"{"permissions":null}"#).unwrap();
        assert!(h.permissions.is_empty());

        let h: Holder = serde_json::from_str("{}").unwrap();
        assert!(h.permissions.is_empty());
    }

    #[test]
    fn test_has_permission() {
        let mut set = PermissionBitSet::from(&[Permission::SendMessages, Permission::ViewChannel][..]);
        assert!(set.has_permission(Permission::SendMessages));
        assert!(!set.has_permission(Permission::Administrator));

        set.insert(Permission::Administrator);
        set.remove(Permission::SendMessages);
        assert!(set.has_permission(Permission::Administrator));
        assert!(!set.has_permission(Permission::SendMessages));
    }
}
