/// Failure of a call to one of the backend services or of audio playback.
///
/// None of these are fatal; every call site falls back to a degraded path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("response body could not be decoded: {0}")]
    Decode(String),
    #[error("response contained no data")]
    Empty,
    #[error("audio playback failed: {0}")]
    Playback(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
