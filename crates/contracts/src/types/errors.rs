//! Error types for the contract layer.

use thiserror::Error;

/// Result type alias for contract operations
pub type ContractResult<T> = Result<T, ContractError>;

/// Main error type for encoding, decoding and describing the wire contracts
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Failed to decode {shape}: {source}")]
    Decode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {shape}: {source}")]
    Encode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown {universe} role: {value}")]
    UnknownRole {
        universe: &'static str,
        value: String,
    },

    #[error("Schema error: {message}")]
    Schema { message: String },
}

impl ContractError {
    /// Create a decode error for the given shape
    pub fn decode(shape: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { shape, source }
    }

    /// Create an encode error for the given shape
    pub fn encode(shape: &'static str, source: serde_json::Error) -> Self {
        Self::Encode { shape, source }
    }

    /// Create an unknown role error
    pub fn unknown_role(universe: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownRole {
            universe,
            value: value.into(),
        }
    }

    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Name of the shape involved, if the error came from the codec
    pub fn shape(&self) -> Option<&'static str> {
        match self {
            Self::Decode { shape, .. } | Self::Encode { shape, .. } => Some(shape),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_names_universe_and_value() {
        let err = ContractError::unknown_role("firm", "janitor");
        assert_eq!(err.to_string(), "Unknown firm role: janitor");
        assert!(err.shape().is_none());
    }

    #[test]
    fn decode_error_keeps_shape() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ContractError::decode("TaskDTO", source);
        assert_eq!(err.shape(), Some("TaskDTO"));
        assert!(err.to_string().starts_with("Failed to decode TaskDTO"));
    }
}
