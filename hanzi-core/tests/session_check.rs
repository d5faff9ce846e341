// Session behaviour on the host: grading, progress bookkeeping and
// navigation. Randomness is seeded so feedback text is reproducible.

use hanzi_core::feedback::{SPEECH_EMPTY, SPEECH_RETRY, SPEECH_SUCCESS};
use hanzi_core::{
    CharacterRecord, Mode, Outcome, ProgressEntry, ProgressMap, Session, StrokeTable, Verdict,
    fallback_characters,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const NOW: &str = "2026-10-19T08:00:00.000Z";
const LATER: &str = "2026-10-19T09:30:00.000Z";

fn session_on(glyphs: &[(&str, &str)]) -> Session {
    let mut s = Session::new(StrokeTable::default());
    s.set_characters(glyphs.iter().map(|(g, p)| CharacterRecord::new(g, p)).collect());
    s
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn san_with_three_strokes_is_learned() {
    let mut s = session_on(&[("三", "sān")]);
    let report = s.check(3, &mut rng(), NOW).unwrap();
    assert_eq!(report.outcome, Outcome::Graded(Verdict::Correct { expected: 3 }));
    assert!(report.feedback.success);
    assert_eq!(report.feedback.speech, SPEECH_SUCCESS);
    let update = report.persist.expect("first success persists");
    assert_eq!(update.character, "三");
    assert!(update.learned);
    assert!(s.is_learned("三"));
    assert_eq!(s.progress()["三"].last_reviewed.as_deref(), Some(NOW));
}

#[test]
fn san_with_two_strokes_is_almost_and_not_learned() {
    let mut s = session_on(&[("三", "sān")]);
    let report = s.check(2, &mut rng(), NOW).unwrap();
    assert_eq!(
        report.outcome,
        Outcome::Graded(Verdict::Almost {
            expected: 3,
            actual: 2
        })
    );
    assert!(!report.feedback.success);
    assert_eq!(report.feedback.speech, SPEECH_RETRY);
    assert_eq!(report.persist, None);
    assert!(!s.is_learned("三"));
}

#[test]
fn san_with_five_strokes_is_too_many() {
    let mut s = session_on(&[("三", "sān")]);
    let report = s.check(5, &mut rng(), NOW).unwrap();
    assert_eq!(
        report.outcome,
        Outcome::Graded(Verdict::TooMany {
            expected: 3,
            actual: 5
        })
    );
    assert_eq!(
        report.feedback.sub_message,
        "\"三\"应该是3笔，你写了5笔，再试试看？"
    );
    assert!(s.progress().is_empty());
}

#[test]
fn too_few_names_the_shortfall() {
    let mut s = session_on(&[("足", "zú")]);
    let report = s.check(2, &mut rng(), NOW).unwrap();
    assert_eq!(
        report.outcome,
        Outcome::Graded(Verdict::TooFew {
            expected: 7,
            actual: 2
        })
    );
    assert_eq!(
        report.feedback.sub_message,
        "\"足\"应该是7笔，你只写了2笔，再写写看？"
    );
}

#[test]
fn empty_grid_never_reaches_classification() {
    let mut s = session_on(&[("龙", "lóng")]);
    let report = s.check(0, &mut rng(), NOW).unwrap();
    assert_eq!(report.outcome, Outcome::NothingWritten);
    assert_eq!(report.feedback.speech, SPEECH_EMPTY);
    assert_eq!(report.feedback.message, "还没有写字呢！");
    assert_eq!(report.persist, None);
}

#[test]
fn glyph_missing_from_table_accepts_any_count() {
    for n in [1usize, 4, 30] {
        let mut s = session_on(&[("龙", "lóng")]);
        let report = s.check(n, &mut rng(), NOW).unwrap();
        assert!(report.feedback.success, "{n} strokes");
        assert_eq!(report.feedback.sub_message, format!("你写了{}笔，继续加油！", n));
    }
}

#[test]
fn second_success_does_not_persist_again() {
    let mut s = session_on(&[("三", "sān")]);
    assert!(s.check(3, &mut rng(), NOW).unwrap().persist.is_some());
    let again = s.check(3, &mut rng(), LATER).unwrap();
    assert!(again.feedback.success);
    assert_eq!(again.persist, None);
    assert_eq!(s.progress()["三"].last_reviewed.as_deref(), Some(NOW));
}

#[test]
fn explicit_mark_is_idempotent() {
    let mut s = session_on(&[("一", "yī")]);
    assert!(s.mark_learned("一", NOW).is_some());
    assert!(s.mark_learned("一", LATER).is_none());
}

#[test]
fn check_without_characters_is_a_no_op() {
    let mut s = Session::new(StrokeTable::default());
    assert!(s.check(3, &mut rng(), NOW).is_none());
}

#[test]
fn next_wraps_around_after_count_steps() {
    let mut s = Session::new(StrokeTable::default());
    s.set_characters(fallback_characters());
    let start = s.index();
    let n = s.characters().len();
    for _ in 0..n {
        s.next();
    }
    assert_eq!(s.index(), start);
    s.next();
    assert_eq!(s.current().unwrap().character, "二");
}

#[test]
fn next_on_empty_list_stays_put() {
    let mut s = Session::new(StrokeTable::default());
    s.next();
    assert_eq!(s.index(), 0);
    assert!(s.current().is_none());
}

#[test]
fn set_mode_resets_to_first_character() {
    let mut s = session_on(&[("一", "yī"), ("二", "èr")]);
    s.next();
    s.set_mode(true);
    assert_eq!(s.mode(), Mode::Review);
    assert_eq!(s.index(), 0);
    s.set_mode(false);
    assert_eq!(s.mode(), Mode::Learn);
}

#[test]
fn one_of_three_learned_reads_a_third() {
    let mut s = session_on(&[("一", "yī"), ("二", "èr"), ("三", "sān")]);
    let mut server = ProgressMap::new();
    server.insert(
        "二".into(),
        ProgressEntry {
            learned: true,
            last_reviewed: Some(NOW.into()),
        },
    );
    s.merge_progress(server);
    let summary = s.summary();
    assert!((summary.percent() - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(summary.label(), "已学习: 1/3");
}

#[test]
fn success_updates_summary_before_persisting() {
    let mut s = session_on(&[("一", "yī"), ("二", "èr")]);
    let report = s.check(1, &mut rng(), NOW).unwrap();
    assert!(report.persist.is_some());
    assert_eq!(s.summary().learned, 1);
    assert_eq!(s.summary().percent(), 50.0);
}

#[test]
fn late_server_progress_overwrites_local_entry() {
    let mut s = session_on(&[("一", "yī")]);
    s.check(1, &mut rng(), NOW);
    let mut stale = ProgressMap::new();
    stale.insert("一".into(), ProgressEntry::default());
    s.merge_progress(stale);
    assert!(!s.is_learned("一"));
}

#[test]
fn extended_table_constrains_new_glyph() {
    let mut s = session_on(&[("王", "wáng")]);
    s.stroke_table_mut().insert("王", 4);
    let report = s.check(4, &mut rng(), NOW).unwrap();
    assert_eq!(report.outcome, Outcome::Graded(Verdict::Correct { expected: 4 }));
}
