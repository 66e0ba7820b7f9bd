use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `[shard_id, num_shards]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardInfo {
    pub shard_id: u32,
    pub num_shards: u32,
}

impl ShardInfo {
    pub fn new(shard_id: u32, num_shards: u32) -> ShardInfo {
        ShardInfo {
            shard_id,
            num_shards,
        }
    }

    /// The shard responsible for a guild.
    pub fn for_guild(guild_id: crate::Snowflake, num_shards: u32) -> ShardInfo {
        let shard_id = (guild_id.0 >> 22) % u64::from(num_shards.max(1));
        ShardInfo::new(shard_id as u32, num_shards)
    }
}

impl Serialize for ShardInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;

        seq.serialize_element(&self.shard_id)?;
        seq.serialize_element(&self.num_shards)?;

        seq.end()
    }
}

impl<'de> Deserialize<'de> for ShardInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [shard_id, num_shards]: [u32; 2] = Deserialize::deserialize(deserializer)?;
        Ok(ShardInfo::new(shard_id, num_shards))
    }
}
