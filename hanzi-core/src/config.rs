use crate::session::Mode;

/// Delay between showing the result popup and speaking the verdict (ms).
pub const FEEDBACK_SPEECH_DELAY_MS: u32 = 200;

pub const DEFAULT_SPEECH_LANG: &str = "zh-CN";

/// Runtime settings read from the host page at start-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for every endpoint; always ends with `/`.
    pub base_url: String,
    pub initial_mode: Mode,
    /// Language tag for the speech-synthesis fallback.
    pub speech_lang: String,
    /// Suppress spoken feedback after checks.
    pub mute_feedback: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            base_url: "/".to_string(),
            initial_mode: Mode::Learn,
            speech_lang: DEFAULT_SPEECH_LANG.to_string(),
            mute_feedback: false,
        }
    }
}

impl AppConfig {
    /// Build from `window.__BASE_URL` (if set) and `location.search`.
    ///
    /// Recognised query keys: `mode=review`, `lang=<bcp47>`, `mute=1`.
    pub fn from_page(base_url: Option<String>, search: &str) -> Self {
        let mut cfg = AppConfig::default();
        if let Some(base) = base_url.filter(|b| !b.trim().is_empty()) {
            cfg.base_url = if base.ends_with('/') {
                base
            } else {
                format!("{}/", base)
            };
        }
        if let Some(mode) = get_query_param(search, "mode") {
            cfg.initial_mode = Mode::from_review(mode.eq_ignore_ascii_case("review"));
        }
        if let Some(lang) = get_query_param(search, "lang").filter(|l| !l.is_empty()) {
            cfg.speech_lang = lang;
        }
        if let Some(m) = get_query_param(search, "mute") {
            cfg.mute_feedback = matches!(m.as_str(), "1" | "true" | "yes");
        }
        cfg
    }

    /// Absolute URL for an endpoint path. Absolute inputs pass through.
    pub fn endpoint(&self, path: &str) -> String {
        let p = path.trim();
        if p.starts_with("http://") || p.starts_with("https://") || p.starts_with("data:") {
            return p.to_string();
        }
        format!("{}{}", self.base_url, p.trim_start_matches('/'))
    }
}

/// Simple query string lookup for `?a=b&c=d`.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}
