use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{PermissionBitSet, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PermissionOverwrite {
    pub id: Snowflake,

    #[serde(rename = "type")]
    pub overwrite_type: PermissionOverwriteType,

    #[serde(default)]
    pub allow: PermissionBitSet,

    #[serde(default)]
    pub deny: PermissionBitSet,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PermissionOverwriteType {
    Role = 0,
    Member = 1,
}
