mod message;
pub use message::*;

pub mod embed;
pub use embed::Embed;

mod attachment;
pub use attachment::{Attachment, PartialAttachment};

mod allowed_mentions;
pub use allowed_mentions::{AllowedMentionType, AllowedMentions};

mod flags;
pub use flags::MessageFlags;
