use serde::Serialize;
use serde_json::value::RawValue;

use super::*;
use crate::channel::message::Message;
use crate::channel::{Channel, ThreadMember};
use crate::entitlement::Entitlement;
use crate::guild::{Guild, GuildScheduledEvent, Integration, UnavailableGuild, VoiceState};
use crate::interaction::{GuildApplicationCommandPermissions, Interaction};
use crate::stage::StageInstance;
use crate::user::{PresenceUpdate, User};

macro_rules! events {
    ($($variant:ident($data:ty) = $name:literal,)*) => {
        /// A decoded dispatch (`op` 0) frame.
        #[derive(Serialize, Debug, Clone)]
        #[serde(tag = "t", content = "d")]
        pub enum Event {
            $(
                #[serde(rename = $name)]
                $variant($data),
            )*
        }

        impl Event {
            /// Decodes `d` according to the event name `t`. Unknown names yield `Ok(None)`.
            pub fn from_parts(name: &str, data: &RawValue) -> serde_json::Result<Option<Event>> {
                let event = match name {
                    $($name => Event::$variant(serde_json::from_str(data.get())?),)*
                    _ => return Ok(None),
                };

                Ok(Some(event))
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Event::$variant(_) => $name,)*
                }
            }
        }
    };
}

events! {
    Ready(Ready) = "READY",
    Resumed(serde_json::Value) = "RESUMED",
    ApplicationCommandPermissionsUpdate(GuildApplicationCommandPermissions) = "APPLICATION_COMMAND_PERMISSIONS_UPDATE",
    ChannelCreate(Channel) = "CHANNEL_CREATE",
    ChannelUpdate(Channel) = "CHANNEL_UPDATE",
    ChannelDelete(Channel) = "CHANNEL_DELETE",
    ChannelPinsUpdate(ChannelPinsUpdate) = "CHANNEL_PINS_UPDATE",
    EntitlementCreate(Entitlement) = "ENTITLEMENT_CREATE",
    EntitlementUpdate(Entitlement) = "ENTITLEMENT_UPDATE",
    EntitlementDelete(Entitlement) = "ENTITLEMENT_DELETE",
    ThreadCreate(Channel) = "THREAD_CREATE",
    ThreadUpdate(Channel) = "THREAD_UPDATE",
    ThreadDelete(ThreadDelete) = "THREAD_DELETE",
    ThreadListSync(ThreadListSync) = "THREAD_LIST_SYNC",
    ThreadMemberUpdate(ThreadMember) = "THREAD_MEMBER_UPDATE",
    ThreadMembersUpdate(ThreadMembersUpdate) = "THREAD_MEMBERS_UPDATE",
    GuildCreate(Box<Guild>) = "GUILD_CREATE",
    GuildUpdate(Box<Guild>) = "GUILD_UPDATE",
    GuildDelete(UnavailableGuild) = "GUILD_DELETE",
    GuildBanAdd(GuildBanAdd) = "GUILD_BAN_ADD",
    GuildBanRemove(GuildBanRemove) = "GUILD_BAN_REMOVE",
    GuildEmojisUpdate(GuildEmojisUpdate) = "GUILD_EMOJIS_UPDATE",
    GuildStickersUpdate(GuildStickersUpdate) = "GUILD_STICKERS_UPDATE",
    GuildIntegrationsUpdate(GuildIntegrationsUpdate) = "GUILD_INTEGRATIONS_UPDATE",
    GuildMemberAdd(GuildMemberAdd) = "GUILD_MEMBER_ADD",
    GuildMemberRemove(GuildMemberRemove) = "GUILD_MEMBER_REMOVE",
    GuildMemberUpdate(GuildMemberUpdate) = "GUILD_MEMBER_UPDATE",
    GuildMembersChunk(GuildMembersChunk) = "GUILD_MEMBERS_CHUNK",
    GuildRoleCreate(GuildRoleCreate) = "GUILD_ROLE_CREATE",
    GuildRoleUpdate(GuildRoleUpdate) = "GUILD_ROLE_UPDATE",
    GuildRoleDelete(GuildRoleDelete) = "GUILD_ROLE_DELETE",
    GuildScheduledEventCreate(GuildScheduledEvent) = "GUILD_SCHEDULED_EVENT_CREATE",
    GuildScheduledEventUpdate(GuildScheduledEvent) = "GUILD_SCHEDULED_EVENT_UPDATE",
    GuildScheduledEventDelete(GuildScheduledEvent) = "GUILD_SCHEDULED_EVENT_DELETE",
    GuildScheduledEventUserAdd(GuildScheduledEventUser) = "GUILD_SCHEDULED_EVENT_USER_ADD",
    GuildScheduledEventUserRemove(GuildScheduledEventUser) = "GUILD_SCHEDULED_EVENT_USER_REMOVE",
    IntegrationCreate(Integration) = "INTEGRATION_CREATE",
    IntegrationUpdate(Integration) = "INTEGRATION_UPDATE",
    InteractionCreate(Interaction) = "INTERACTION_CREATE",
    InviteCreate(InviteCreate) = "INVITE_CREATE",
    InviteDelete(InviteDelete) = "INVITE_DELETE",
    MessageCreate(Box<Message>) = "MESSAGE_CREATE",
    MessageUpdate(Box<Message>) = "MESSAGE_UPDATE",
    MessageDelete(MessageDelete) = "MESSAGE_DELETE",
    MessageDeleteBulk(MessageDeleteBulk) = "MESSAGE_DELETE_BULK",
    MessageReactionAdd(MessageReactionAdd) = "MESSAGE_REACTION_ADD",
    MessageReactionRemove(MessageReactionRemove) = "MESSAGE_REACTION_REMOVE",
    MessageReactionRemoveAll(MessageReactionRemoveAll) = "MESSAGE_REACTION_REMOVE_ALL",
    MessageReactionRemoveEmoji(MessageReactionRemoveEmoji) = "MESSAGE_REACTION_REMOVE_EMOJI",
    PresenceUpdate(PresenceUpdate) = "PRESENCE_UPDATE",
    StageInstanceCreate(StageInstance) = "STAGE_INSTANCE_CREATE",
    StageInstanceUpdate(StageInstance) = "STAGE_INSTANCE_UPDATE",
    StageInstanceDelete(StageInstance) = "STAGE_INSTANCE_DELETE",
    TypingStart(TypingStart) = "TYPING_START",
    UserUpdate(User) = "USER_UPDATE",
    VoiceStateUpdate(VoiceState) = "VOICE_STATE_UPDATE",
    VoiceServerUpdate(VoiceServerUpdate) = "VOICE_SERVER_UPDATE",
    WebhooksUpdate(WebhooksUpdate) = "WEBHOOKS_UPDATE",
}
