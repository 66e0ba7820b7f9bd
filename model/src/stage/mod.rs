mod stage_instance;
pub use stage_instance::{PrivacyLevel, StageInstance};
