pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}

pub(crate) fn returns_true() -> bool {
    true
}

/// Implements integer serde for a `bitflags` type. Unknown bits are retained.
macro_rules! bitflags_serde {
    ($name:ident, $bits:ty) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.bits(), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let bits = <$bits as serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from_bits_retain(bits))
            }
        }
    };
}

pub(crate) use bitflags_serde;
