//! Popup text, emoji and spoken phrase for a graded attempt.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::judge::Verdict;

/// Spoken after a successful attempt.
pub const SPEECH_SUCCESS: &str = "太棒了写对了";
/// Spoken after any unsuccessful attempt.
pub const SPEECH_RETRY: &str = "不对哦继续加油";
/// Spoken when the grid is empty at check time.
pub const SPEECH_EMPTY: &str = "请在田字格中写一写这个汉字吧";

const EMPTY_MESSAGE: &str = "还没有写字呢！";
const EMPTY_SUB_MESSAGE: &str = "请在田字格中写一写这个汉字吧！";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Correct,
    Almost,
    Incorrect,
}

impl Tone {
    pub fn of(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Unconstrained { .. } | Verdict::Correct { .. } => Tone::Correct,
            Verdict::Almost { .. } => Tone::Almost,
            Verdict::TooFew { .. } | Verdict::TooMany { .. } => Tone::Incorrect,
        }
    }

    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Tone::Correct => &["太棒了", "真厉害", "写得真好", "做得漂亮", "你真聪明"],
            Tone::Almost => &["接近了", "差一点点", "快对了", "再仔细看看", "很不错哦"],
            Tone::Incorrect => &["再试一次", "不要着急", "你可以的", "慢慢来", "多练习一下"],
        }
    }

    pub fn emojis(self) -> &'static [&'static str] {
        match self {
            Tone::Correct => &["🎉", "👏", "🌟", "😊", "🥳", "👍", "💯"],
            Tone::Almost => &["🙂", "👌", "🔍", "💪", "🤔", "👀"],
            Tone::Incorrect => &["💪", "🧐", "🔄", "✏️", "📝", "🤗", "🌈"],
        }
    }
}

/// Pick one element of `pool`; `None` only for an empty pool.
pub fn pick_random<'a, T, R: Rng + ?Sized>(pool: &'a [T], rng: &mut R) -> Option<&'a T> {
    pool.choose(rng)
}

/// Everything the popup and the voice need for one check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub success: bool,
    pub tone: Tone,
    pub icon: String,
    pub message: String,
    pub sub_message: String,
    pub speech: &'static str,
}

impl Feedback {
    /// CSS modifier class for the popup.
    pub fn css_class(&self) -> &'static str {
        if self.success { "correct" } else { "incorrect" }
    }

    /// Label for the popup's dismiss button.
    pub fn button_label(&self) -> &'static str {
        if self.success { "太棒了！继续" } else { "再试一次" }
    }

    /// Feedback for a check with nothing drawn.
    pub fn nothing_written<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let tone = Tone::Incorrect;
        Feedback {
            success: false,
            tone,
            icon: pick(tone.emojis(), rng),
            message: EMPTY_MESSAGE.to_string(),
            sub_message: EMPTY_SUB_MESSAGE.to_string(),
            speech: SPEECH_EMPTY,
        }
    }

    pub fn for_verdict<R: Rng + ?Sized>(glyph: &str, verdict: Verdict, rng: &mut R) -> Self {
        let tone = Tone::of(verdict);
        let success = verdict.is_success();
        Feedback {
            success,
            tone,
            icon: pick(tone.emojis(), rng),
            message: format!("{}！", pick(tone.phrases(), rng)),
            sub_message: sub_message(glyph, verdict),
            speech: if success { SPEECH_SUCCESS } else { SPEECH_RETRY },
        }
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
    pick_random(pool, rng).copied().unwrap_or_default().to_string()
}

fn sub_message(glyph: &str, verdict: Verdict) -> String {
    match verdict {
        Verdict::Unconstrained { actual } => format!("你写了{}笔，继续加油！", actual),
        Verdict::Correct { expected } => format!("\"{}\"正好是{}笔，你写对了！", glyph, expected),
        Verdict::Almost { expected, actual } => format!(
            "\"{}\"应该是{}笔，你写了{}笔，再仔细看看？",
            glyph, expected, actual
        ),
        Verdict::TooFew { expected, actual } => format!(
            "\"{}\"应该是{}笔，你只写了{}笔，再写写看？",
            glyph, expected, actual
        ),
        Verdict::TooMany { expected, actual } => format!(
            "\"{}\"应该是{}笔，你写了{}笔，再试试看？",
            glyph, expected, actual
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pick_random_is_deterministic_for_a_seed() {
        let pool = [1, 2, 3, 4, 5];
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..10).map(|_| *pick_random(&pool, &mut rng).unwrap()).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..10).map(|_| *pick_random(&pool, &mut rng).unwrap()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn pick_random_on_empty_pool() {
        let pool: [u8; 0] = [];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_random(&pool, &mut rng).is_none());
    }

    #[test]
    fn every_tone_has_five_phrases() {
        for t in [Tone::Correct, Tone::Almost, Tone::Incorrect] {
            assert_eq!(t.phrases().len(), 5);
            assert!(!t.emojis().is_empty());
        }
    }

    #[test]
    fn almost_uses_almost_pools_but_retry_speech() {
        let mut rng = StdRng::seed_from_u64(3);
        let v = Verdict::Almost {
            expected: 3,
            actual: 2,
        };
        let f = Feedback::for_verdict("三", v, &mut rng);
        assert!(!f.success);
        assert_eq!(f.tone, Tone::Almost);
        assert!(Tone::Almost.emojis().contains(&f.icon.as_str()));
        let head = f.message.trim_end_matches('！');
        assert!(Tone::Almost.phrases().contains(&head));
        assert_eq!(f.speech, SPEECH_RETRY);
        assert_eq!(f.css_class(), "incorrect");
        assert_eq!(f.sub_message, "\"三\"应该是3笔，你写了2笔，再仔细看看？");
    }

    #[test]
    fn correct_feedback_names_glyph_and_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let f = Feedback::for_verdict("三", Verdict::Correct { expected: 3 }, &mut rng);
        assert!(f.success);
        assert_eq!(f.speech, SPEECH_SUCCESS);
        assert_eq!(f.button_label(), "太棒了！继续");
        assert_eq!(f.sub_message, "\"三\"正好是3笔，你写对了！");
    }
}
