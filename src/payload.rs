// Copyright 2025 Cowboy AI, LLC.

//! Opaque JSON payload bytes
//!
//! Envelopes carry their payload as raw JSON bytes. The core never interprets
//! a payload except at two points: registry validators check its shape, and
//! subdomain deciders/folds decode it into their own payload structs. In the
//! envelope's own JSON form the payload is embedded inline (not re-encoded as
//! a string), which [`serde_json::value::RawValue`] makes lossless.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

/// Raw JSON payload carried by command and event envelopes
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PayloadJson(Bytes);

impl PayloadJson {
    /// The empty object payload, `{}`
    pub fn empty() -> Self {
        Self(Bytes::from_static(b"{}"))
    }

    /// Wrap raw bytes without validating them.
    ///
    /// Registries validate payload bytes before any decision or append, so
    /// construction stays cheap and infallible.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Serialize a payload struct into opaque bytes
    pub fn encode<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self(Bytes::from(serde_json::to_vec(value)?)))
    }

    /// Decode the payload into a typed struct
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.0)
    }

    /// The raw payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True when no bytes are present at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PayloadJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PayloadJson({})", String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for PayloadJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            return serializer.serialize_none();
        }
        let raw: &RawValue = serde_json::from_slice(&self.0)
            .map_err(|e| serde::ser::Error::custom(format!("payload is not valid JSON: {e}")))?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PayloadJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Box<RawValue> = Deserialize::deserialize(deserializer)?;
        Ok(Self(Bytes::copy_from_slice(raw.get().as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        character_id: String,
        name: String,
    }

    #[test]
    fn encode_decode_round_trip() {
        let sample = Sample {
            character_id: "char-1".into(),
            name: "Aria".into(),
        };
        let payload = PayloadJson::encode(&sample).unwrap();
        let back: Sample = payload.decode().unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn serializes_inline_not_as_string() {
        #[derive(Serialize)]
        struct Envelope {
            payload_json: PayloadJson,
        }
        let env = Envelope {
            payload_json: PayloadJson::from_bytes(&br#"{"a":1}"#[..]),
        };
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, r#"{"payload_json":{"a":1}}"#);
    }

    #[test]
    fn deserializes_arbitrary_json_shapes() {
        #[derive(Deserialize)]
        struct Envelope {
            payload_json: PayloadJson,
        }
        let env: Envelope =
            serde_json::from_str(r#"{"payload_json":{"nested":{"deep":[1,2,3]}}}"#).unwrap();
        assert_eq!(env.payload_json.as_bytes(), br#"{"nested":{"deep":[1,2,3]}}"#);
    }

    #[test]
    fn invalid_bytes_fail_on_serialize() {
        let payload = PayloadJson::from_bytes(&b"not json"[..]);
        assert!(serde_json::to_string(&payload).is_err());
    }

    #[test]
    fn empty_helpers() {
        assert!(PayloadJson::default().is_empty());
        assert!(!PayloadJson::empty().is_empty());
        assert_eq!(PayloadJson::empty().as_bytes(), b"{}");
    }
}
