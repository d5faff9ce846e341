use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A practice character and its pinyin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub character: String,
    pub pinyin: String,
}

impl CharacterRecord {
    pub fn new(character: &str, pinyin: &str) -> Self {
        CharacterRecord {
            character: character.to_string(),
            pinyin: pinyin.to_string(),
        }
    }
}

/// Body of `GET /api/characters`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CharacterList {
    #[serde(default)]
    pub characters: Vec<CharacterRecord>,
}

/// Characters used when the character service is unreachable.
pub fn fallback_characters() -> Vec<CharacterRecord> {
    vec![
        CharacterRecord::new("一", "yī"),
        CharacterRecord::new("二", "èr"),
        CharacterRecord::new("三", "sān"),
    ]
}

const BUILTIN_STROKES: [(&str, u32); 20] = [
    ("一", 1),
    ("二", 2),
    ("三", 3),
    ("人", 2),
    ("口", 3),
    ("日", 4),
    ("月", 4),
    ("山", 3),
    ("水", 4),
    ("火", 4),
    ("木", 4),
    ("土", 3),
    ("大", 3),
    ("小", 3),
    ("中", 4),
    ("上", 3),
    ("下", 3),
    ("子", 3),
    ("手", 4),
    ("足", 7),
];

/// Expected stroke counts per glyph.
#[derive(Clone, Debug)]
pub struct StrokeTable {
    counts: HashMap<String, u32>,
}

impl Default for StrokeTable {
    fn default() -> Self {
        let counts = BUILTIN_STROKES
            .iter()
            .map(|(g, n)| (g.to_string(), *n))
            .collect();
        StrokeTable { counts }
    }
}

impl StrokeTable {
    pub fn empty() -> Self {
        StrokeTable {
            counts: HashMap::new(),
        }
    }

    pub fn insert(&mut self, glyph: &str, strokes: u32) {
        self.counts.insert(glyph.to_string(), strokes);
    }

    /// Expected count, or `None` when the glyph is unconstrained (absent or
    /// recorded as 0).
    pub fn expected(&self, glyph: &str) -> Option<u32> {
        self.counts.get(glyph).copied().filter(|n| *n > 0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
