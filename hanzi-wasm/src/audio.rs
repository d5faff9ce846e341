use std::cell::RefCell;
use std::rc::Rc;

use hanzi_core::ApiError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, SpeechSynthesisUtterance, Url, Window};

use crate::utils::{fetch_blob, js_error, log, warn};

/// A clip on the channel and the object URL backing it.
struct Clip {
    el: HtmlAudioElement,
    url: String,
}

/// The single audio channel shared by pronunciation and spoken feedback.
/// Cloning yields another handle to the same channel.
#[derive(Clone)]
pub struct AudioPlayer {
    window: Window,
    current: Rc<RefCell<Option<Clip>>>,
    lang: String,
}

impl AudioPlayer {
    pub fn new(window: Window, lang: &str) -> Self {
        AudioPlayer {
            window,
            current: Rc::new(RefCell::new(None)),
            lang: lang.to_string(),
        }
    }

    /// Silence the channel: rewind and release the current clip and cancel
    /// synthesis. A clip cut short never fires `ended`, so its object URL is
    /// revoked here.
    pub fn stop(&self) {
        if let Some(clip) = self.current.take() {
            if !clip.el.paused() {
                let _ = clip.el.pause();
                clip.el.set_current_time(0.0);
            }
            let _ = Url::revoke_object_url(&clip.url);
        }
        if let Ok(synth) = self.window.speech_synthesis()
            && (synth.speaking() || synth.pending())
        {
            synth.cancel();
        }
    }

    /// Play the clip at `url`; fall back to built-in synthesis of `text`
    /// when the service or playback fails.
    pub async fn say(&self, url: &str, text: &str) {
        match self.play_url(url).await {
            Ok(()) => log(&format!("playing audio for '{}'", text)),
            Err(e) => {
                warn(&format!("audio for '{}' unavailable ({}), using speech synthesis", text, e));
                self.synthesize(text);
            }
        }
    }

    async fn play_url(&self, url: &str) -> Result<(), ApiError> {
        let blob = fetch_blob(&self.window, url).await?;
        let object_url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| ApiError::Playback(js_error(&e)))?;
        let el = HtmlAudioElement::new_with_src(&object_url)
            .map_err(|e| ApiError::Playback(js_error(&e)))?;

        let on_end_url = object_url.clone();
        let onended = Closure::once_into_js(move || {
            let _ = Url::revoke_object_url(&on_end_url);
        });
        el.set_onended(Some(onended.unchecked_ref()));
        let on_err_url = object_url.clone();
        let onerror = Closure::once_into_js(move || {
            let _ = Url::revoke_object_url(&on_err_url);
        });
        el.set_onerror(Some(onerror.unchecked_ref()));

        // Another request may have started playing while this one was in
        // flight; only one clip is ever audible.
        self.adopt(el.clone(), object_url.clone());
        let promise = el.play().map_err(|e| ApiError::Playback(js_error(&e)))?;
        if let Err(e) = JsFuture::from(promise).await {
            let _ = Url::revoke_object_url(&object_url);
            return Err(ApiError::Playback(js_error(&e)));
        }
        Ok(())
    }

    /// Make `el` the channel's clip, stopping whatever held it.
    fn adopt(&self, el: HtmlAudioElement, url: String) {
        self.stop();
        self.current.replace(Some(Clip { el, url }));
    }

    fn synthesize(&self, text: &str) {
        // A clip that started after the last stop() must not overlap.
        self.stop();
        let synth = match self.window.speech_synthesis() {
            Ok(s) => s,
            Err(_) => {
                warn("speech synthesis not available");
                return;
            }
        };
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_lang(&self.lang);
                synth.speak(&utterance);
            }
            Err(e) => warn(&format!("failed to create utterance: {}", js_error(&e))),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::Blob;

    wasm_bindgen_test_configure!(run_in_browser);

    impl AudioPlayer {
        fn is_idle(&self) -> bool {
            self.current.borrow().is_none()
        }
    }

    fn player() -> AudioPlayer {
        let window = web_sys::window().expect("window");
        AudioPlayer::new(window, "zh-CN")
    }

    fn clip() -> (HtmlAudioElement, String) {
        let blob = Blob::new().expect("blob");
        let url = Url::create_object_url_with_blob(&blob).expect("object url");
        let el = HtmlAudioElement::new_with_src(&url).expect("audio element");
        (el, url)
    }

    #[wasm_bindgen_test]
    fn stop_releases_the_clip() {
        let audio = player();
        let (el, url) = clip();
        audio.adopt(el.clone(), url);
        assert!(!audio.is_idle());
        audio.stop();
        assert!(audio.is_idle());
        assert!(el.paused());
    }

    #[wasm_bindgen_test]
    fn adopting_a_clip_replaces_the_previous_one() {
        let audio = player();
        let (first, first_url) = clip();
        let (second, second_url) = clip();
        audio.adopt(first, first_url.clone());
        audio.adopt(second, second_url.clone());
        let held = audio.current.borrow().as_ref().map(|c| c.url.clone());
        assert_eq!(held, Some(second_url));
        assert_ne!(held, Some(first_url));
    }

    #[wasm_bindgen_test]
    fn synthesis_fallback_silences_the_clip() {
        let audio = player();
        let (el, url) = clip();
        audio.adopt(el.clone(), url);
        audio.synthesize("一");
        assert!(audio.is_idle());
        assert!(el.paused());
    }
}
