use rand::Rng;

use crate::catalog::{CharacterRecord, StrokeTable};
use crate::feedback::Feedback;
use crate::judge::{Verdict, classify};
use crate::progress::{ProgressEntry, ProgressMap, ProgressSummary, ProgressUpdate};

/// Traversal mode. Both walk the same list; only the UI emphasis differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Learn,
    Review,
}

impl Mode {
    pub fn from_review(is_review: bool) -> Self {
        if is_review { Mode::Review } else { Mode::Learn }
    }

    pub fn is_review(self) -> bool {
        self == Mode::Review
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The grid was empty at check time.
    NothingWritten,
    Graded(Verdict),
}

/// What a check produced: the feedback to show and, when the glyph became
/// learned, the update to send to the progress service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    pub glyph: String,
    pub outcome: Outcome,
    pub feedback: Feedback,
    pub persist: Option<ProgressUpdate>,
}

/// Practice session: character list, cursor, mode and the local progress
/// cache. Local progress is the source of truth for the UI.
#[derive(Clone, Debug, Default)]
pub struct Session {
    characters: Vec<CharacterRecord>,
    index: usize,
    mode: Mode,
    progress: ProgressMap,
    strokes: StrokeTable,
}

impl Session {
    pub fn new(strokes: StrokeTable) -> Self {
        Session {
            strokes,
            ..Default::default()
        }
    }

    /// Replace the character list and move back to its first entry.
    pub fn set_characters(&mut self, characters: Vec<CharacterRecord>) {
        self.characters = characters;
        self.index = 0;
    }

    /// Fold server progress into the local cache. Server entries win for
    /// glyphs present in both.
    pub fn merge_progress(&mut self, progress: ProgressMap) {
        self.progress.extend(progress);
    }

    pub fn characters(&self) -> &[CharacterRecord] {
        &self.characters
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    pub fn stroke_table_mut(&mut self) -> &mut StrokeTable {
        &mut self.strokes
    }

    pub fn current(&self) -> Option<&CharacterRecord> {
        self.characters.get(self.index)
    }

    pub fn is_learned(&self, glyph: &str) -> bool {
        self.progress.get(glyph).is_some_and(|e| e.learned)
    }

    pub fn set_mode(&mut self, is_review: bool) {
        self.mode = Mode::from_review(is_review);
        self.index = 0;
    }

    /// Advance circularly. No-op on an empty list.
    pub fn next(&mut self) {
        if !self.characters.is_empty() {
            self.index = (self.index + 1) % self.characters.len();
        }
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::compute(&self.characters, &self.progress)
    }

    /// Grade `actual` completed strokes for the current character.
    ///
    /// A success on a glyph that is not yet learned marks it learned with
    /// `now` before returning, and the report carries the update to persist.
    /// Returns `None` when no character is selected.
    pub fn check<R: Rng + ?Sized>(
        &mut self,
        actual: usize,
        rng: &mut R,
        now: &str,
    ) -> Option<CheckReport> {
        let glyph = self.current()?.character.clone();
        if actual == 0 {
            return Some(CheckReport {
                glyph,
                outcome: Outcome::NothingWritten,
                feedback: Feedback::nothing_written(rng),
                persist: None,
            });
        }
        let actual = u32::try_from(actual).unwrap_or(u32::MAX);
        let verdict = classify(self.strokes.expected(&glyph), actual);
        let feedback = Feedback::for_verdict(&glyph, verdict, rng);
        let persist = if verdict.is_success() {
            self.mark_learned(&glyph, now)
        } else {
            None
        };
        Some(CheckReport {
            glyph,
            outcome: Outcome::Graded(verdict),
            feedback,
            persist,
        })
    }

    /// Mark `glyph` learned at `now`. Returns the update to persist, or
    /// `None` when it was already learned and nothing changed.
    pub fn mark_learned(&mut self, glyph: &str, now: &str) -> Option<ProgressUpdate> {
        if self.is_learned(glyph) {
            return None;
        }
        self.progress.insert(
            glyph.to_string(),
            ProgressEntry {
                learned: true,
                last_reviewed: Some(now.to_string()),
            },
        );
        Some(ProgressUpdate {
            character: glyph.to_string(),
            learned: true,
        })
    }
}
