use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::event::Event;
use super::Opcode;

/// The envelope every gateway frame shares. `d` is kept raw until the opcode is known.
#[derive(Serialize, Deserialize, Debug)]
pub struct GatewayPayload {
    #[serde(rename = "op")]
    pub opcode: Opcode,

    #[serde(rename = "d", default)]
    pub data: Option<Box<RawValue>>,

    #[serde(rename = "s", default)]
    pub seq: Option<u64>,

    #[serde(rename = "t", default)]
    pub event_name: Option<String>,
}

impl GatewayPayload {
    /// Decodes a dispatch frame. Returns `Ok(None)` for non-dispatch frames and unknown events.
    pub fn event(&self) -> serde_json::Result<Option<Event>> {
        if self.opcode != Opcode::Dispatch {
            return Ok(None);
        }

        match (&self.event_name, &self.data) {
            (Some(name), Some(data)) => Event::from_parts(name, data),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let raw = r#"{"op":0,"s":42,"t":"MESSAGE_DELETE","d":{"id":"1","channel_id":"2","guild_id":"3"}}"#;
        let payload: GatewayPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.seq, Some(42));

        match payload.event().unwrap() {
            Some(Event::MessageDelete(ev)) => assert_eq!(ev.channel_id.0, 2),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_unknown_and_non_dispatch() {
        let raw = r#"{"op":0,"s":1,"t":"SOMETHING_NEW","d":{}}"#;
        let payload: GatewayPayload = serde_json::from_str(raw).unwrap();
        assert!(payload.event().unwrap().is_none());

        let raw = r#"{"op":11,"d":null}"#;
        let payload: GatewayPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.opcode, Opcode::HeartbeatAck);
        assert!(payload.event().unwrap().is_none());
    }
}
