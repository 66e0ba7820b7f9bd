use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Hello {
    #[serde(rename = "d")]
    pub data: HelloData,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HelloData {
    /// Milliseconds.
    pub heartbeat_interval: u32,
}
