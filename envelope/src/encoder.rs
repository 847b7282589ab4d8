use serde::Serialize;

use crate::error::EnvelopeError;

/// Turns a payload into response body bytes.
pub trait Encoder: Send + Sync {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, EnvelopeError>;
}

/// Production encoder backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, EnvelopeError> {
        Ok(serde_json::to_vec(value)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn encodes_plain_values() {
        let bytes = JsonEncoder.encode(&vec![1, 2, 3]).unwrap();
        assert_eq!(bytes, b"[1,2,3]");
    }

    #[test]
    fn reports_maps_with_non_string_keys() {
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");

        let err = JsonEncoder.encode(&map).unwrap_err();
        assert!(matches!(err, EnvelopeError::Encode(_)));
    }
}
