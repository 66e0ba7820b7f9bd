mod channel;
pub use channel::*;

mod channel_type;
pub use channel_type::ChannelType;

mod channel_flags;
pub use channel_flags::ChannelFlags;

mod permission_overwrite;
pub use permission_overwrite::*;

pub mod message;

mod reaction;
pub use reaction::Reaction;

mod thread_metadata;
pub use thread_metadata::{ThreadArchiveDuration, ThreadMetadata};

mod thread_member;
pub use thread_member::{ThreadList, ThreadMember};

mod video_quality_mode;
pub use video_quality_mode::VideoQualityMode;

mod permission;
pub use permission::Permission;

mod followed_channel;
pub use followed_channel::FollowedChannel;
