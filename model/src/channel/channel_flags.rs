use bitflags::bitflags;

use crate::util::bitflags_serde;

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ChannelFlags: u64 {
        const PINNED = 1 << 1;
        const REQUIRE_TAG = 1 << 4;
        const HIDE_MEDIA_DOWNLOAD_OPTIONS = 1 << 15;
    }
}

bitflags_serde!(ChannelFlags, u64);
