mod snowflake;
pub use snowflake::{Snowflake, DISCORD_EPOCH};

mod discriminator;
pub use discriminator::Discriminator;

mod image_hash;
pub use image_hash::ImageHash;

mod image_data;
pub use image_data::{bytes_to_data_url, detect_mime, ImageData};

mod permission_bit_set;
pub use permission_bit_set::PermissionBitSet;

mod error;
pub use error::ModelError;

pub mod application;
pub mod audit_log;
pub mod channel;
pub mod entitlement;
pub mod gateway;
pub mod guild;
pub mod interaction;
pub mod invite;
pub mod stage;
pub mod sticker;
pub mod user;
pub mod webhook;

mod util;
