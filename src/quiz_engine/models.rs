use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question data
// ---------------------------------------------------------------------------

/// A question as authored in the bank. Immutable once loaded.
///
/// Precondition: exactly four distinct options and `correct_index < 4`.
/// [`QuestionBank`](crate::quiz_engine::bank::QuestionBank) enforces this on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionTemplate {
    pub id: String,
    #[serde(alias = "question", alias = "question_text")]
    pub question_text: String,
    pub options: [String; 4],
    #[serde(alias = "answerIndex", alias = "correct_index")]
    pub correct_index: usize,
}

impl QuestionTemplate {
    /// Text of the correct option, as authored.
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// A question ready to be played: options shuffled, correct answer kept by text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionQuestion {
    pub id: String,
    pub question_text: String,
    pub options: [String; 4],
    /// Literal text of the correct option, copied before shuffling.
    pub correct_answer_text: String,
    /// Post-shuffle position of `correct_answer_text`. Display only.
    pub correct_index: usize,
}

impl SessionQuestion {
    /// Correctness is resolved by text equality, never by position.
    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.correct_answer_text
    }
}

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const QUESTION_COUNT_RANGE: std::ops::RangeInclusive<usize> = 10..=20;
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1500);

/// What the player picked: a topic and how many questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub topic_key: String,
    pub count: usize,
}

impl SessionConfig {
    pub fn new(topic_key: impl Into<String>, count: usize) -> Self {
        Self { topic_key: topic_key.into(), count }
    }

    /// Resolve a menu subject id (e.g. `"history"`) to its topic key.
    pub fn from_selection(subject_id: &str, count: usize) -> Option<Self> {
        crate::quiz_engine::catalog::subject_by_id(subject_id)
            .map(|s| Self::new(s.topic_key, count))
    }

    /// `count` pulled into the selector's 10..=20 range.
    pub fn clamped_count(&self) -> usize {
        self.count
            .clamp(*QUESTION_COUNT_RANGE.start(), *QUESTION_COUNT_RANGE.end())
    }
}

/// Everything needed to start a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub config: SessionConfig,
    /// `Some(seed)` reproduces the exact same session; `None` uses entropy.
    pub rng_seed: Option<u64>,
    /// Display window after each answer before the session advances.
    #[serde(default = "default_cooldown")]
    pub cooldown: Duration,
}

fn default_cooldown() -> Duration {
    DEFAULT_COOLDOWN
}

impl SessionRequest {
    /// Minimal constructor: default count, entropy seed, default cooldown.
    pub fn new(topic_key: impl Into<String>) -> Self {
        Self {
            config: SessionConfig::new(topic_key, DEFAULT_QUESTION_COUNT),
            rng_seed: None,
            cooldown: DEFAULT_COOLDOWN,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.config.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl From<SessionConfig> for SessionRequest {
    fn from(config: SessionConfig) -> Self {
        Self { config, rng_seed: None, cooldown: DEFAULT_COOLDOWN }
    }
}

// ---------------------------------------------------------------------------
// Towers and placements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TowerId {
    Center,
    LeftOuter,
    LeftInner,
    RightInner,
    RightOuter,
}

impl TowerId {
    /// Lateral towers in tie-break precedence, left to right.
    pub const LATERAL: [TowerId; 4] = [
        TowerId::LeftOuter,
        TowerId::LeftInner,
        TowerId::RightInner,
        TowerId::RightOuter,
    ];

    /// Slot in [`TowerId::LATERAL`]; `None` for the central tower.
    pub fn lateral_index(self) -> Option<usize> {
        match self {
            TowerId::Center     => None,
            TowerId::LeftOuter  => Some(0),
            TowerId::LeftInner  => Some(1),
            TowerId::RightInner => Some(2),
            TowerId::RightOuter => Some(3),
        }
    }

    pub fn is_lateral(self) -> bool {
        self != TowerId::Center
    }
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TowerId::Center     => "CENTER",
            TowerId::LeftOuter  => "LEFT_OUTER",
            TowerId::LeftInner  => "LEFT_INNER",
            TowerId::RightInner => "RIGHT_INNER",
            TowerId::RightOuter => "RIGHT_OUTER",
        };
        write!(f, "{}", s)
    }
}

/// Where one answered question's book lands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub question_index: usize,
    pub is_correct: bool,
    pub tower_id: TowerId,
    /// 0-based height within the tower.
    pub rank: u32,
    /// Cosmetic, in px.
    pub horizontal_jitter: f32,
    /// Cosmetic, in degrees.
    pub rotation_jitter: f32,
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self { name: name.into(), score, avatar: None }
    }
}
