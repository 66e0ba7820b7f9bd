use serde::{Deserialize, Serialize};

use super::{Component, ComponentType};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionRow {
    pub r#type: ComponentType,
    pub components: Vec<Component>,
}

impl ActionRow {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            r#type: ComponentType::ActionRow,
            components,
        }
    }
}
