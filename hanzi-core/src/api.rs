//! Wire formats of the backend endpoints and the decode step for each.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::catalog::{CharacterList, CharacterRecord};
use crate::error::ApiError;
use crate::progress::{ProgressMap, ProgressUpdate};

pub const CHARACTERS_PATH: &str = "api/characters";
pub const PROGRESS_PATH: &str = "api/progress";
pub const TTS_PATH: &str = "api/tts";

/// Map a non-success HTTP status to an error.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// Decode `GET /api/characters`. An empty list is an error so the caller
/// falls back to the built-in characters.
pub fn decode_characters(body: &str) -> Result<Vec<CharacterRecord>, ApiError> {
    let list: CharacterList = serde_json::from_str(body)?;
    if list.characters.is_empty() {
        return Err(ApiError::Empty);
    }
    Ok(list.characters)
}

pub fn decode_progress(body: &str) -> Result<ProgressMap, ApiError> {
    Ok(serde_json::from_str(body)?)
}

pub fn encode_progress_update(update: &ProgressUpdate) -> Result<String, ApiError> {
    Ok(serde_json::to_string(update)?)
}

/// Query string for the TTS endpoint. `cache_buster` forces a fresh
/// response for feedback phrases.
pub fn tts_query(text: &str, cache_buster: Option<u64>) -> String {
    let text = utf8_percent_encode(text, NON_ALPHANUMERIC);
    match cache_buster {
        Some(t) => format!("{}?text={}&t={}", TTS_PATH, text, t),
        None => format!("{}?text={}", TTS_PATH, text),
    }
}
