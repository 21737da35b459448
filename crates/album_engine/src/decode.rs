use serde::Deserialize;

use crate::{FailureKind, FetchError};

/// One album as served by the data source. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlbumRecord {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("album payload is not valid: {message}")]
    InvalidPayload { message: String },
}

impl From<DecodeError> for FetchError {
    fn from(err: DecodeError) -> Self {
        FetchError::new(FailureKind::Malformed, err.to_string())
    }
}

/// Decode a JSON array of album objects.
pub fn decode_albums(bytes: &[u8]) -> Result<Vec<AlbumRecord>, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidPayload {
        message: err.to_string(),
    })
}
