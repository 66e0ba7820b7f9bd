//! Methods on model entities that forward to a route and, where the route returns the
//! updated entity, overwrite the receiver with it. The receiver is only touched on success.

mod channel;
pub use channel::ChannelExt;

mod guild;
pub use guild::{EmojiExt, GuildExt, RoleExt};

mod member;
pub use member::MemberExt;

mod message;
pub use message::MessageExt;

mod user;
pub use user::UserExt;

mod webhook;
pub use webhook::WebhookExt;
