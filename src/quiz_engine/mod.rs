//! Core quiz engine: question sampling, the session state machine, and
//! book-stack placement.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: templates, session questions, config, towers, placements |
//! | `bank`        | Topic-keyed question bank, loaded and validated from JSON |
//! | `shuffle`     | Fisher-Yates shuffle and sampling without replacement |
//! | `catalog`     | Subjects and academic stages offered by the menu |
//! | `sampler`     | Picks a session's questions and shuffles their options |
//! | `placement`   | Tower selection with lateral load balancing |
//! | `session`     | `GameSession` state machine: submit, score, advance, dispose |
//! | `generator`   | Single entry point `start_session()` |
//! | `runner`      | Async cooldown timer that drives `advance` and emits events |
//! | `leaderboard` | Merges a final score into the roster |

pub mod bank;
pub mod catalog;
pub mod generator;
pub mod leaderboard;
pub mod models;
pub mod placement;
pub mod runner;
pub mod sampler;
pub mod session;
pub mod shuffle;

// Re-export the public API surface so callers can use
// `quiz_engine::start_session` without reaching into sub-modules.
pub use bank::{BankError, QuestionBank};
pub use generator::start_session;
pub use models::{
    LeaderboardEntry, PlacementRecord, QuestionTemplate, SessionConfig, SessionQuestion,
    SessionRequest, TowerId, DEFAULT_COOLDOWN, DEFAULT_QUESTION_COUNT, QUESTION_COUNT_RANGE,
};
pub use placement::{PlacementEngine, TowerCounts};
pub use runner::SessionRunner;
pub use sampler::{SampledQuestions, SamplerDiagnostic};
pub use session::{
    Advance, GameSession, IgnoreReason, SessionEvent, SessionPhase, SubmitOutcome,
    POINTS_PER_CORRECT,
};
