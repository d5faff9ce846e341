use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::CharacterRecord;

/// Learning state of one glyph as stored by the progress service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub learned: bool,
    /// ISO 8601 timestamp of the last successful review.
    #[serde(default)]
    pub last_reviewed: Option<String>,
}

/// Accept `true`/`false`, `null`, numbers and `"true"`/`"1"` strings, so one
/// odd row does not fail the whole progress map.
fn lenient_bool<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        _ => false,
    })
}

/// Body of `GET /api/progress`: glyph → entry.
pub type ProgressMap = HashMap<String, ProgressEntry>;

/// Body of `POST /api/progress`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub character: String,
    pub learned: bool,
}

/// Numbers behind the progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSummary {
    pub learned: usize,
    pub total: usize,
}

impl ProgressSummary {
    /// Count learned glyphs that belong to `characters`. Entries for glyphs
    /// outside the list never push the bar past 100%.
    pub fn compute(characters: &[CharacterRecord], progress: &ProgressMap) -> Self {
        let learned = characters
            .iter()
            .filter(|c| progress.get(&c.character).is_some_and(|e| e.learned))
            .count();
        ProgressSummary {
            learned,
            total: characters.len(),
        }
    }

    /// Percentage in `[0, 100]`; 0 for an empty list.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.learned as f64 / self.total as f64 * 100.0
    }

    pub fn label(&self) -> String {
        format!("已学习: {}/{}", self.learned, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(gs: &[&str]) -> Vec<CharacterRecord> {
        gs.iter().map(|g| CharacterRecord::new(g, "")).collect()
    }

    #[test]
    fn server_entry_without_timestamp_parses() {
        let body = r#"{"一":{"learned":true,"last_reviewed":null},"二":{"learned":false}}"#;
        let map: ProgressMap = serde_json::from_str(body).unwrap();
        assert!(map["一"].learned);
        assert_eq!(map["二"].last_reviewed, None);
    }

    #[test]
    fn odd_learned_values_do_not_fail_the_map() {
        let body = r#"{
            "一":{"learned":null},
            "二":{"learned":1},
            "三":{"learned":"true"},
            "人":{"learned":0,"last_reviewed":"2026-10-01T00:00:00Z"},
            "口":{"learned":true}
        }"#;
        let map: ProgressMap = serde_json::from_str(body).unwrap();
        assert_eq!(map.len(), 5);
        assert!(!map["一"].learned);
        assert!(map["二"].learned);
        assert!(map["三"].learned);
        assert!(!map["人"].learned);
        assert!(map["口"].learned);
    }

    #[test]
    fn glyphs_outside_the_list_are_not_counted() {
        let mut map = ProgressMap::new();
        map.insert(
            "龙".into(),
            ProgressEntry {
                learned: true,
                last_reviewed: None,
            },
        );
        let s = ProgressSummary::compute(&chars(&["一"]), &map);
        assert_eq!(s.learned, 0);
        assert_eq!(s.percent(), 0.0);
    }

    #[test]
    fn empty_list_reads_zero() {
        let s = ProgressSummary::compute(&[], &ProgressMap::new());
        assert_eq!(s.percent(), 0.0);
        assert_eq!(s.label(), "已学习: 0/0");
    }
}
