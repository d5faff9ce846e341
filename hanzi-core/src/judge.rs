//! Stroke-count heuristic used to grade a drawing.

/// Result of comparing drawn strokes against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Glyph has no table entry; any count is accepted.
    Unconstrained { actual: u32 },
    Correct { expected: u32 },
    /// Off by exactly one. Shown separately but not a success.
    Almost { expected: u32, actual: u32 },
    TooFew { expected: u32, actual: u32 },
    TooMany { expected: u32, actual: u32 },
}

impl Verdict {
    pub fn is_success(self) -> bool {
        matches!(self, Verdict::Unconstrained { .. } | Verdict::Correct { .. })
    }
}

/// Grade `actual` strokes against `expected` (`None` = unconstrained).
/// Checks run in priority order: unconstrained, exact, off by one, too few,
/// too many.
pub fn classify(expected: Option<u32>, actual: u32) -> Verdict {
    let Some(expected) = expected.filter(|e| *e > 0) else {
        return Verdict::Unconstrained { actual };
    };
    if actual == expected {
        Verdict::Correct { expected }
    } else if actual.abs_diff(expected) == 1 {
        Verdict::Almost { expected, actual }
    } else if actual < expected {
        Verdict::TooFew { expected, actual }
    } else {
        Verdict::TooMany { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_grid() {
        for e in 1..=8u32 {
            for a in 0..=12u32 {
                let v = classify(Some(e), a);
                match v {
                    Verdict::Correct { .. } => assert_eq!(a, e),
                    Verdict::Almost { .. } => assert_eq!(a.abs_diff(e), 1),
                    Verdict::TooFew { .. } => assert!(a < e && e - a > 1),
                    Verdict::TooMany { .. } => assert!(a > e && a - e > 1),
                    Verdict::Unconstrained { .. } => panic!("table entry present"),
                }
                assert_eq!(v.is_success(), a == e);
            }
        }
    }

    #[test]
    fn missing_or_zero_entry_always_passes() {
        for a in 0..20 {
            assert!(classify(None, a).is_success());
            assert!(classify(Some(0), a).is_success());
        }
    }
}
