//! Error type shared by the raw property set, the unknown bag and the
//! document entry points.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The destination for an extraction cannot receive a value.
    #[error("invalid decode target for field `{key}`")]
    InvalidTarget { key: String },
    /// A blob could not be decoded. `key` is `None` when the failure is at
    /// document level (e.g. the payload is not a JSON object).
    #[error("failed to decode {}: {source}", field_label(.key))]
    Decode {
        key: Option<String>,
        source: serde_json::Error,
    },
    #[error("failed to encode {}: {source}", field_label(.key))]
    Encode {
        key: Option<String>,
        source: serde_json::Error,
    },
}

impl Error {
    /// Field name the error is attached to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::InvalidTarget { key } => Some(key),
            Error::Decode { key, .. } | Error::Encode { key, .. } => key.as_deref(),
        }
    }

    pub fn is_invalid_target(&self) -> bool {
        matches!(self, Error::InvalidTarget { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, Error::Encode { .. })
    }

    pub(crate) fn decode(key: Option<&str>, source: serde_json::Error) -> Self {
        Error::Decode {
            key: key.map(str::to_owned),
            source,
        }
    }

    pub(crate) fn encode(key: Option<&str>, source: serde_json::Error) -> Self {
        Error::Encode {
            key: key.map(str::to_owned),
            source,
        }
    }
}

fn field_label(key: &Option<String>) -> String {
    match key {
        Some(key) => format!("field `{key}`"),
        None => "document".to_string(),
    }
}
