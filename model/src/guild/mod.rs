mod unavailable_guild;
pub use unavailable_guild::UnavailableGuild;

mod guild;
pub use guild::*;

mod role;
pub use role::{Role, RoleTags};

mod emoji;
pub use emoji::Emoji;

mod voice_state;
pub use voice_state::{VoiceRegion, VoiceState};

mod member;
pub use member::Member;

mod ban;
pub use ban::Ban;

mod integration;
pub use integration::*;

mod preview;
pub use preview::{GuildPreview, GuildWidgetSettings, PruneCount};

mod system_channel_flags;
pub use system_channel_flags::SystemChannelFlags;

mod scheduled_event;
pub use scheduled_event::{EventEntityMetadata, EventEntityType, EventStatus, GuildScheduledEvent};
