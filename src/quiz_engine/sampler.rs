//! Draws the questions for one session.
//!
//! Two independent shuffles happen here: one over the topic's templates to
//! pick which questions are asked, and one per picked question over its four
//! options. Both use the unbiased shuffle in [`shuffle`](super::shuffle).
//!
//! A missing or empty topic never fails the session. Placeholder questions
//! are synthesized instead and a [`SamplerDiagnostic`] is returned (and
//! logged) so the caller can tell.

use std::fmt;

use rand::Rng;
use tracing::{debug, warn};

use crate::quiz_engine::{
    bank::QuestionBank,
    catalog,
    models::{QuestionTemplate, SessionQuestion},
    shuffle::{sample_without_replacement, shuffle},
};

/// Non-fatal notice produced while sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamplerDiagnostic {
    /// The topic was absent or empty; `generated` placeholder questions were used.
    TopicNotFound { topic_key: String, generated: usize },
}

impl fmt::Display for SamplerDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerDiagnostic::TopicNotFound { topic_key, generated } => write!(
                f,
                "no questions for topic {topic_key}, using {generated} fallback questions"
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SampledQuestions {
    pub questions: Vec<SessionQuestion>,
    pub diagnostic: Option<SamplerDiagnostic>,
}

impl SampledQuestions {
    pub fn used_fallback(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Options of every placeholder question; the first one is correct.
const FALLBACK_OPTIONS: [&str; 4] = ["Correct Answer", "Option B", "Option C", "Option D"];

/// Sample up to `count` questions from `topic_key`, each with shuffled options.
///
/// Returns `min(count, topic size)` questions, or `count` placeholders when
/// the topic is absent or empty.
pub fn sample<R: Rng>(
    rng: &mut R,
    bank: &QuestionBank,
    topic_key: &str,
    count: usize,
) -> SampledQuestions {
    let templates = match bank.topic(topic_key) {
        Some(t) if !t.is_empty() => t,
        _ => {
            let diagnostic = SamplerDiagnostic::TopicNotFound {
                topic_key: topic_key.to_string(),
                generated: count,
            };
            warn!(topic = topic_key, count, "{diagnostic}");
            return SampledQuestions {
                questions: fallback_questions(rng, topic_key, count),
                diagnostic: Some(diagnostic),
            };
        }
    };

    let picked = sample_without_replacement(rng, templates, count);
    debug!(topic = topic_key, requested = count, pool = templates.len(), picked = picked.len(), "sampled questions");

    SampledQuestions {
        questions: picked.iter().map(|t| shuffle_options(rng, t)).collect(),
        diagnostic: None,
    }
}

/// Turn a template into a playable question with its options reordered.
pub fn shuffle_options<R: Rng>(rng: &mut R, template: &QuestionTemplate) -> SessionQuestion {
    let correct_answer_text = template.correct_text().to_string();
    let mut options = template.options.clone();
    shuffle(rng, &mut options);
    let correct_index = options
        .iter()
        .position(|o| *o == correct_answer_text)
        .unwrap_or(template.correct_index);

    SessionQuestion {
        id: template.id.clone(),
        question_text: template.question_text.clone(),
        options,
        correct_answer_text,
        correct_index,
    }
}

fn fallback_questions<R: Rng>(rng: &mut R, topic_key: &str, count: usize) -> Vec<SessionQuestion> {
    let label = catalog::topic_label(topic_key);
    (0..count)
        .map(|i| {
            let template = QuestionTemplate {
                id: format!("MOCK-{i}"),
                question_text: format!("Simulated question {} about {}", i + 1, label),
                options: FALLBACK_OPTIONS.map(String::from),
                correct_index: 0,
            };
            shuffle_options(rng, &template)
        })
        .collect()
}
