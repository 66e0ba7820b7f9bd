use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Timestamps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

impl Timestamps {
    pub fn new(start: Option<u64>, end: Option<u64>) -> Timestamps {
        Timestamps { start, end }
    }
}
