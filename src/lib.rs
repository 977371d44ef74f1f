//! # brain_stack
//!
//! A single-player quiz session engine with a "book stack" scoreboard.
//!
//! Given a topic and a question count, the engine samples questions from a
//! topic-keyed bank, walks the player through them one at a time, scores each
//! answer, and places a book for every answer: correct answers stack on a
//! central tower, wrong ones are spread evenly over four lateral towers.
//!
//! ## How it works
//!
//! 1. Load a [`QuestionBank`] (JSON, keyed by topic).
//! 2. Build a [`SessionRequest`] with a topic key, count, and optional RNG seed.
//! 3. Call [`start_session`]: the engine shuffles the topic's questions, takes
//!    the first `count`, and shuffles each question's four options. An unknown
//!    topic falls back to placeholder questions instead of failing.
//! 4. Drive the [`GameSession`] with `submit_answer` and `advance`, or hand it
//!    to a [`SessionRunner`] which advances after the cooldown on its own and
//!    reports [`SessionEvent`]s on a channel.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the same questions,
//!   option order and book jitter every time.
//! - **Double-submit safe**: one scored answer per question; repeats during
//!   the cooldown are ignored.
//! - **Balanced towers**: lateral towers never differ by more than one book.
//!
//! ## Quick start
//!
//! ```rust
//! use brain_stack::{start_session, QuestionBank, SessionRequest, SubmitOutcome};
//!
//! let bank = QuestionBank::from_json_str(r#"{
//!     "MATEMATICAS": [
//!         { "id": "m1", "questionText": "2 + 2?", "options": ["3", "4", "5", "22"], "correctIndex": 1 }
//!     ]
//! }"#).unwrap();
//!
//! let mut session = start_session(&bank, SessionRequest::new("MATEMATICAS").with_seed(42));
//! let answer = session.current_question().unwrap().correct_answer_text.clone();
//!
//! if let SubmitOutcome::Placed(book) = session.submit_answer(&answer) {
//!     println!("book on {} at height {}", book.tower_id, book.rank);
//! }
//! session.advance();
//! assert_eq!(session.final_score(), Some(100));
//! ```

pub mod client_view;
pub mod quiz_engine;

// Convenience re-exports so callers can use `brain_stack::start_session`
// directly without reaching into `quiz_engine::`.
pub use client_view::to_client_view;
pub use quiz_engine::{
    leaderboard, start_session, Advance, BankError, GameSession, IgnoreReason,
    LeaderboardEntry, PlacementRecord, QuestionBank, QuestionTemplate, SamplerDiagnostic,
    SessionConfig, SessionEvent, SessionPhase, SessionQuestion, SessionRequest, SessionRunner,
    SubmitOutcome, TowerCounts, TowerId,
};

#[cfg(test)]
mod tests;
