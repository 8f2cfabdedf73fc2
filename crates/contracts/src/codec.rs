//! JSON encoding and decoding of wire records.
//!
//! Thin wrappers over `serde_json` that tag failures with the shape involved
//! and emit tracing events, so producers and consumers share one entry point.

use std::any::type_name;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::types::{ContractError, ContractResult};

/// Encode a record as compact JSON
pub fn encode<T: Serialize>(value: &T) -> ContractResult<String> {
    let shape = type_name::<T>();
    let json = serde_json::to_string(value).map_err(|err| ContractError::encode(shape, err))?;
    debug!(shape, bytes = json.len(), "encoded record");
    Ok(json)
}

/// Encode a record as indented JSON
pub fn encode_pretty<T: Serialize>(value: &T) -> ContractResult<String> {
    let shape = type_name::<T>();
    let json =
        serde_json::to_string_pretty(value).map_err(|err| ContractError::encode(shape, err))?;
    debug!(shape, bytes = json.len(), "encoded record");
    Ok(json)
}

/// Decode a record from a JSON string
pub fn decode<T: DeserializeOwned>(json: &str) -> ContractResult<T> {
    let shape = type_name::<T>();
    match serde_json::from_str(json) {
        Ok(value) => {
            debug!(shape, bytes = json.len(), "decoded record");
            Ok(value)
        }
        Err(err) => {
            warn!(shape, line = err.line(), column = err.column(), error = %err, "failed to decode record");
            Err(ContractError::decode(shape, err))
        }
    }
}

/// Decode a record from raw JSON bytes
pub fn decode_slice<T: DeserializeOwned>(bytes: &[u8]) -> ContractResult<T> {
    let shape = type_name::<T>();
    match serde_json::from_slice(bytes) {
        Ok(value) => {
            debug!(shape, bytes = bytes.len(), "decoded record");
            Ok(value)
        }
        Err(err) => {
            warn!(shape, line = err.line(), column = err.column(), error = %err, "failed to decode record");
            Err(ContractError::decode(shape, err))
        }
    }
}
