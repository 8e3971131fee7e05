//! Message envelope.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{ProtocolError, Result};

/// Tags of the inbound message kinds the client understands.
pub mod kind {
    /// Full game state snapshot.
    pub const SERVER_GAME_STATE: &str = "serverGameState";
    /// Sound effect request.
    pub const SERVER_SOUND: &str = "serverSound";
    /// Out-of-band chat line.
    pub const SERVER_TALK: &str = "serverTalk";
    /// Incremental model changes.
    pub const SERVER_MODEL_SYNC: &str = "serverModelSync";
}

/// A decoded message as delivered by the transport.
///
/// Only the tag is interpreted here; `data` stays opaque until a handler
/// decodes it with [`InboundMessage::decode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Message type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Payload matching the tag's schema.
    #[serde(default)]
    pub data: Value,
}

impl InboundMessage {
    /// Build a message from a tag and a typed payload.
    pub fn new<T: Serialize>(kind: impl Into<String>, payload: &T) -> Result<Self> {
        let kind = kind.into();
        match serde_json::to_value(payload) {
            Ok(data) => Ok(Self { kind, data }),
            Err(source) => Err(ProtocolError::Encode { kind, source }),
        }
    }

    /// Parse one JSON-encoded envelope.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(ProtocolError::Envelope)
    }

    /// Encode this envelope as a single JSON line.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|source| ProtocolError::Encode { kind: self.kind.clone(), source })
    }

    /// Decode the payload into the schema of its tag.
    ///
    /// Consumes the message so the payload is moved, not cloned.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        let Self { kind, data } = self;
        serde_json::from_value(data).map_err(|source| ProtocolError::Payload { kind, source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ServerSound;

    #[test]
    fn parses_envelope() {
        let msg =
            InboundMessage::from_json(r#"{"type":"serverSound","data":{"sound":"whistle"}}"#)
                .unwrap();

        assert_eq!(msg.kind, kind::SERVER_SOUND);
        let sound: ServerSound = msg.decode().unwrap();
        assert_eq!(sound.sound, "whistle");
    }

    #[test]
    fn missing_data_is_null() {
        let msg = InboundMessage::from_json(r#"{"type":"ping"}"#).unwrap();
        assert_eq!(msg.data, Value::Null);
    }

    #[test]
    fn missing_type_is_envelope_error() {
        let err = InboundMessage::from_json(r#"{"data":{}}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::Envelope(_)));
    }

    #[test]
    fn wrong_payload_shape_is_payload_error() {
        let msg = InboundMessage::from_json(r#"{"type":"serverSound","data":{"volume":3}}"#)
            .unwrap();
        let err = msg.decode::<ServerSound>().unwrap_err();

        assert_eq!(err.kind(), Some(kind::SERVER_SOUND));
    }

    #[test]
    fn json_line_survives_reparse() {
        let sound = ServerSound { sound: "kick".into() };
        let msg = InboundMessage::new(kind::SERVER_SOUND, &sound).unwrap();
        let line = msg.to_json().unwrap();

        assert!(!line.contains('\n'));
        assert_eq!(InboundMessage::from_json(&line).unwrap(), msg);
    }
}
