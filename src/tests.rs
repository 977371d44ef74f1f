//! Unit tests for the `brain_stack` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical session; different seeds → varied sampling |
//! | Sampling | Size = min(count, pool); no repeated templates; correct text present once |
//! | Fallback | Unknown topic → placeholders + diagnostic, no panic |
//! | Scoring | Score = 100 × correct answers; double submit scores once |
//! | Placement | Lateral spread ≤ 1; tie-break order; central ranks |
//! | Leaderboard | Final score merged into the default roster |

use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    leaderboard, start_session, QuestionBank, QuestionTemplate, SessionPhase, SessionRequest,
    SubmitOutcome, TowerId, POINTS_PER_CORRECT,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// A bank with one topic of `n` distinct templates.
fn bank(topic: &str, n: usize) -> QuestionBank {
    let templates = (0..n)
        .map(|i| QuestionTemplate {
            id: format!("{topic}-{i}"),
            question_text: format!("Question {i} of {topic}?"),
            options: [
                format!("A{i}"),
                format!("B{i}"),
                format!("C{i}"),
                format!("D{i}"),
            ],
            correct_index: i % 4,
        })
        .collect();
    let mut bank = QuestionBank::new();
    bank.insert_topic(topic, templates).unwrap();
    bank
}

fn req(topic: &str, count: usize, seed: u64) -> SessionRequest {
    SessionRequest::new(topic).with_count(count).with_seed(seed)
}

/// Seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Pick a wrong option for the current question.
fn wrong_option(session: &crate::GameSession) -> String {
    let q = session.current_question().unwrap();
    q.options.iter().find(|o| **o != q.correct_answer_text).unwrap().clone()
}

fn right_option(session: &crate::GameSession) -> String {
    session.current_question().unwrap().correct_answer_text.clone()
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_session() {
    let bank = bank("HISTORIA_UNIVERSAL", 30);
    let a = start_session(&bank, req("HISTORIA_UNIVERSAL", 10, 12345));
    let b = start_session(&bank, req("HISTORIA_UNIVERSAL", 10, 12345));
    assert_eq!(a.session_id(), b.session_id());
    assert_eq!(a.questions(), b.questions());
}

#[test]
fn different_seeds_produce_varied_selections() {
    let bank = bank("HISTORIA_UNIVERSAL", 30);
    let mut same = 0;
    for seed in 0..40u64 {
        let a = start_session(&bank, req("HISTORIA_UNIVERSAL", 10, seed));
        let b = start_session(&bank, req("HISTORIA_UNIVERSAL", 10, seed + 500));
        if a.questions() == b.questions() {
            same += 1;
        }
    }
    assert_eq!(same, 0, "identical selections across different seeds");
}

#[test]
fn entropy_seed_produces_a_valid_session() {
    let bank = bank("MATEMATICAS", 12);
    let s = start_session(&bank, SessionRequest::new("MATEMATICAS"));
    assert_eq!(s.questions().len(), 10);
    assert_eq!(s.phase(), SessionPhase::Answering);
}

// ── sampling ─────────────────────────────────────────────────────────────────

#[test]
fn scenario_a_ten_unique_questions_from_thirty() {
    let bank = bank("HISTORIA_UNIVERSAL", 30);
    for seed in SEEDS {
        let s = start_session(&bank, req("HISTORIA_UNIVERSAL", 10, seed));
        assert_eq!(s.questions().len(), 10);

        let ids: HashSet<&str> = s.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), 10, "repeated template for seed={seed}");

        for q in s.questions() {
            let hits = q.options.iter().filter(|o| **o == q.correct_answer_text).count();
            assert_eq!(hits, 1, "{} seed={seed}", q.id);
        }
        assert!(s.diagnostic().is_none());
    }
}

#[test]
fn sample_size_is_min_of_count_and_topic_size() {
    for (pool, count) in [(5, 10), (10, 10), (25, 20), (1, 15)] {
        let bank = bank("T", pool);
        let s = start_session(&bank, req("T", count, 3));
        assert_eq!(s.questions().len(), count.min(pool), "pool={pool} count={count}");
    }
}

#[test]
fn correct_text_matches_the_authored_option() {
    let bank = bank("T", 20);
    let s = start_session(&bank, req("T", 20, 8));
    let authored = bank.topic("T").unwrap();
    for q in s.questions() {
        let t = authored.iter().find(|t| t.id == q.id).unwrap();
        assert_eq!(q.correct_answer_text, t.correct_text());
        assert_eq!(q.question_text, t.question_text);
    }
}

#[test]
fn full_draw_covers_every_ordering_of_a_small_topic() {
    // Statistical: with count == N == 3 all 6 orderings must turn up.
    let bank = bank("T", 3);
    let mut orderings = HashSet::new();
    for seed in 0..300u64 {
        let s = start_session(&bank, req("T", 3, seed));
        orderings.insert(s.questions().iter().map(|q| q.id.clone()).collect::<Vec<_>>());
    }
    assert_eq!(orderings.len(), 6);
}

// ── fallback ─────────────────────────────────────────────────────────────────

#[test]
fn scenario_b_unknown_topic_uses_placeholders() {
    let bank = bank("HISTORIA_UNIVERSAL", 30);
    let s = start_session(&bank, req("DOES_NOT_EXIST", 12, 1));
    assert_eq!(s.questions().len(), 12);
    let diag = s.diagnostic().expect("fallback diagnostic");
    assert!(diag.to_string().contains("DOES_NOT_EXIST"));
    assert_eq!(s.phase(), SessionPhase::Answering);
    for q in s.questions() {
        assert!(q.id.starts_with("MOCK-"));
        assert!(q.question_text.ends_with("about General Knowledge"));
        assert!(q.options.contains(&q.correct_answer_text));
    }
}

#[test]
fn fallback_session_can_be_played_to_the_end() {
    let mut s = start_session(&QuestionBank::new(), req("PROGRAMACION", 10, 2));
    while !s.is_finished() {
        let answer = right_option(&s);
        s.submit_answer(&answer);
        s.advance();
    }
    assert_eq!(s.final_score(), Some(1000));
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn score_tracks_correct_submissions() {
    let bank = bank("T", 20);
    let mut rng = StdRng::seed_from_u64(31);
    for seed in SEEDS {
        let mut s = start_session(&bank, req("T", 15, seed));
        let mut correct = 0;
        for _ in 0..15 {
            let answer = if rng.gen_bool(0.5) {
                correct += 1;
                right_option(&s)
            } else {
                wrong_option(&s)
            };
            s.submit_answer(&answer);
            assert_eq!(s.score(), POINTS_PER_CORRECT * correct);
            s.advance();
        }
        assert_eq!(s.final_score(), Some(POINTS_PER_CORRECT * correct));
    }
}

#[test]
fn double_submit_leaves_score_and_index_alone() {
    let bank = bank("T", 10);
    let mut s = start_session(&bank, req("T", 10, 4));
    let answer = right_option(&s);
    s.submit_answer(&answer);
    let (score, index) = (s.score(), s.current_index());

    assert!(matches!(s.submit_answer(&answer), SubmitOutcome::Ignored(_)));
    assert_eq!((s.score(), s.current_index()), (score, index));
}

#[test]
fn unknown_option_text_is_just_wrong() {
    let bank = bank("T", 10);
    let mut s = start_session(&bank, req("T", 10, 4));
    let outcome = s.submit_answer("not an option at all");
    assert!(!outcome.placement().unwrap().is_correct);
    assert_eq!(s.score(), 0);
}

// ── placement ────────────────────────────────────────────────────────────────

#[test]
fn scenario_c_correct_wrong_correct() {
    let bank = bank("T", 3);
    let mut s = start_session(&bank, req("T", 3, 9));

    let mut placed = Vec::new();
    for right in [true, false, true] {
        let answer = if right { right_option(&s) } else { wrong_option(&s) };
        let record = s.submit_answer(&answer).placement().cloned().unwrap();
        placed.push(record);
        s.advance();
    }

    assert_eq!(s.final_score(), Some(200));
    assert_eq!((placed[0].tower_id, placed[0].rank), (TowerId::Center, 0));
    assert!(placed[1].tower_id.is_lateral());
    assert_eq!(placed[1].rank, 0);
    assert_eq!((placed[2].tower_id, placed[2].rank), (TowerId::Center, 1));
    let indices: Vec<usize> = placed.iter().map(|p| p.question_index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn scenario_d_eight_wrong_answers_balance_out() {
    let bank = bank("T", 8);
    let mut s = start_session(&bank, req("T", 8, 10));
    let mut towers = Vec::new();
    for _ in 0..8 {
        let answer = wrong_option(&s);
        towers.push(s.submit_answer(&answer).placement().unwrap().tower_id);
        s.advance();
    }

    assert_eq!(&towers[..4], &TowerId::LATERAL);
    assert_eq!(s.tower_counts().as_array(), [2, 2, 2, 2]);
    for t in TowerId::LATERAL {
        assert_eq!(towers.iter().filter(|x| **x == t).count(), 2);
    }
}

#[test]
fn lateral_spread_stays_within_one_across_random_sessions() {
    let bank = bank("T", 20);
    let mut rng = StdRng::seed_from_u64(123);
    for seed in 0..25u64 {
        let mut s = start_session(&bank, req("T", 20, seed));
        while !s.is_finished() {
            let answer = if rng.gen_bool(0.3) { right_option(&s) } else { wrong_option(&s) };
            s.submit_answer(&answer);
            assert!(s.tower_counts().spread() <= 1);
            s.advance();
        }
        let correct = s.placements().iter().filter(|p| p.is_correct).count() as u32;
        assert_eq!(s.center_height(), correct);
        assert_eq!(s.tower_counts().total() + correct, 20);
    }
}

// ── leaderboard ──────────────────────────────────────────────────────────────

#[test]
fn finished_session_score_lands_on_the_leaderboard() {
    let bank = bank("T", 12);
    let mut s = start_session(&bank, req("T", 12, 77));
    while !s.is_finished() {
        let answer = right_option(&s);
        s.submit_answer(&answer);
        s.advance();
    }
    let score = s.final_score().unwrap();
    let ranked = leaderboard::merge(&leaderboard::default_roster(), leaderboard::LOCAL_PLAYER_NAME, score);
    assert_eq!(ranked[0].name, "You");
    assert_eq!(ranked[0].score, 1200);
    // Ana García also has 1200 but comes later in the roster.
    assert_eq!(ranked[1].name, "Ana García");
}

#[test]
fn retry_replays_the_same_selection() {
    let bank = bank("T", 20);
    let first = start_session(&bank, req("T", 14, 1));
    let again = start_session(&bank, SessionRequest::from(first.retry_config()).with_seed(2));
    assert_eq!(again.questions().len(), 14);
    assert_eq!(again.config(), first.config());
}
