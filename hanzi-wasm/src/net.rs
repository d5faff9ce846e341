//! Calls to the character, progress and speech services.
//!
//! Each call returns `Result<_, ApiError>`; the fallback policy lives at
//! the call site in `controller`.

use hanzi_core::api::{
    CHARACTERS_PATH, PROGRESS_PATH, decode_characters, decode_progress, encode_progress_update,
    tts_query,
};
use hanzi_core::{ApiError, AppConfig, CharacterRecord, ProgressMap, ProgressUpdate};
use web_sys::Window;

use crate::utils::{fetch_text, post_json};

/// Fallback: built-in character list.
pub async fn load_characters(
    window: &Window,
    config: &AppConfig,
) -> Result<Vec<CharacterRecord>, ApiError> {
    let body = fetch_text(window, &config.endpoint(CHARACTERS_PATH)).await?;
    decode_characters(&body)
}

/// Fallback: empty progress map.
pub async fn load_progress(window: &Window, config: &AppConfig) -> Result<ProgressMap, ApiError> {
    let body = fetch_text(window, &config.endpoint(PROGRESS_PATH)).await?;
    decode_progress(&body)
}

/// Fallback: none; the optimistic local update stands.
pub async fn persist_progress(
    window: &Window,
    config: &AppConfig,
    update: &ProgressUpdate,
) -> Result<(), ApiError> {
    let body = encode_progress_update(update)?;
    post_json(window, &config.endpoint(PROGRESS_PATH), &body).await
}

/// URL of the spoken form of `text`. Feedback phrases pass a cache buster
/// so a fresh clip is fetched each time.
pub fn tts_url(config: &AppConfig, text: &str, cache_buster: Option<u64>) -> String {
    config.endpoint(&tts_query(text, cache_buster))
}
