//! One playthrough: question progression, scoring and completion.
//!
//! ```text
//!             submit_answer                advance (more questions)
//! Answering ───────────────▶ Cooldown ─────────────────────────────▶ Answering
//!                               │
//!                               │ advance (last question)
//!                               ▼
//!                            Finished
//!
//! any non-terminal phase ── dispose ──▶ Disposed
//! ```
//!
//! `submit_answer` is the only call that scores. While the session sits in
//! `Cooldown` a second submission is ignored, so a double-fired input can
//! never score twice. `advance` is meant to be driven by a timer (see
//! [`runner`](super::runner)); once the session is `Disposed` it does nothing,
//! so a stale timer cannot act on an abandoned session.

use std::time::Duration;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::quiz_engine::{
    models::{PlacementRecord, SessionConfig, SessionQuestion},
    placement::{PlacementEngine, TowerCounts},
    sampler::SamplerDiagnostic,
};

/// Points for a correct answer. No partial credit, no time bonus.
pub const POINTS_PER_CORRECT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for an answer to the current question.
    Answering,
    /// An answer was scored and is on display; submissions are ignored.
    Cooldown,
    Finished,
    Disposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AwaitingAdvance,
    Finished,
    Disposed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Placed(PlacementRecord),
    Ignored(IgnoreReason),
}

impl SubmitOutcome {
    pub fn placement(&self) -> Option<&PlacementRecord> {
        match self {
            SubmitOutcome::Placed(p) => Some(p),
            SubmitOutcome::Ignored(_) => None,
        }
    }
}

/// Result of the post-cooldown transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next(usize),
    /// The last answer's cooldown elapsed; carries the final score.
    Finished(u32),
    /// Nothing was waiting to advance.
    Idle,
}

/// Notifications a session produces for its caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    AnswerPlaced(PlacementRecord),
    Finished { score: u32 },
}

#[derive(Debug, Clone)]
pub struct GameSession {
    session_id: String,
    config: SessionConfig,
    cooldown: Duration,
    questions: Vec<SessionQuestion>,
    current_index: usize,
    score: u32,
    phase: SessionPhase,
    selected: Option<String>,
    placement: PlacementEngine,
    diagnostic: Option<SamplerDiagnostic>,
    rng: StdRng,
}

impl GameSession {
    /// A session over `questions`. With no questions at all it starts `Finished`.
    pub fn new(
        session_id: String,
        config: SessionConfig,
        questions: Vec<SessionQuestion>,
        rng: StdRng,
        cooldown: Duration,
    ) -> Self {
        let phase = if questions.is_empty() { SessionPhase::Finished } else { SessionPhase::Answering };
        Self {
            session_id,
            config,
            cooldown,
            questions,
            current_index: 0,
            score: 0,
            phase,
            selected: None,
            placement: PlacementEngine::new(),
            diagnostic: None,
            rng,
        }
    }

    pub(crate) fn with_diagnostic(mut self, diagnostic: Option<SamplerDiagnostic>) -> Self {
        self.diagnostic = diagnostic;
        self
    }

    /// Score the current question. Ignored unless the session is `Answering`.
    pub fn submit_answer(&mut self, selected: &str) -> SubmitOutcome {
        match self.phase {
            SessionPhase::Answering => {}
            SessionPhase::Cooldown => return SubmitOutcome::Ignored(IgnoreReason::AwaitingAdvance),
            SessionPhase::Finished => return SubmitOutcome::Ignored(IgnoreReason::Finished),
            SessionPhase::Disposed => return SubmitOutcome::Ignored(IgnoreReason::Disposed),
        }
        self.phase = SessionPhase::Cooldown;

        let index = self.current_index;
        let is_correct = self.questions[index].is_correct(selected);
        if is_correct {
            self.score += POINTS_PER_CORRECT;
        }
        self.selected = Some(selected.to_string());
        debug!(session = %self.session_id, index, is_correct, score = self.score, "answer scored");

        SubmitOutcome::Placed(self.placement.place(&mut self.rng, index, is_correct))
    }

    /// Leave the cooldown: next question, or `Finished` after the last one.
    pub fn advance(&mut self) -> Advance {
        if self.phase != SessionPhase::Cooldown {
            return Advance::Idle;
        }
        self.selected = None;

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.phase = SessionPhase::Answering;
            debug!(session = %self.session_id, index = self.current_index, "next question");
            Advance::Next(self.current_index)
        } else {
            self.phase = SessionPhase::Finished;
            info!(session = %self.session_id, score = self.score, "session finished");
            Advance::Finished(self.score)
        }
    }

    /// Abandon the session. Any later submit or advance is a no-op.
    pub fn dispose(&mut self) {
        if matches!(self.phase, SessionPhase::Answering | SessionPhase::Cooldown) {
            debug!(session = %self.session_id, "session disposed");
            self.phase = SessionPhase::Disposed;
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Config to start a fresh replay of the same selection.
    pub fn retry_config(&self) -> SessionConfig {
        self.config.clone()
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn awaiting_advance(&self) -> bool {
        self.phase == SessionPhase::Cooldown
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// `None` once finished or disposed.
    pub fn current_question(&self) -> Option<&SessionQuestion> {
        match self.phase {
            SessionPhase::Answering | SessionPhase::Cooldown => self.questions.get(self.current_index),
            SessionPhase::Finished | SessionPhase::Disposed => None,
        }
    }

    /// `(1-based question number, total)`.
    pub fn progress(&self) -> (usize, usize) {
        ((self.current_index + 1).min(self.questions.len()), self.questions.len())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn final_score(&self) -> Option<u32> {
        self.is_finished().then_some(self.score)
    }

    /// The answer on display during the cooldown.
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn placements(&self) -> &[PlacementRecord] {
        self.placement.records()
    }

    pub fn tower_counts(&self) -> TowerCounts {
        self.placement.tower_counts()
    }

    pub fn center_height(&self) -> u32 {
        self.placement.center_height()
    }

    pub fn diagnostic(&self) -> Option<&SamplerDiagnostic> {
        self.diagnostic.as_ref()
    }
}
