//! Topic-keyed question source.
//!
//! The bank is read-only once built. Sessions only ever look topics up; they
//! never mutate it, so one bank can back any number of sessions.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::quiz_engine::models::QuestionTemplate;

/// Errors raised while loading a bank. Sessions never see these.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed question {id} in topic {topic}: {reason}")]
    MalformedTemplate {
        topic: String,
        id: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    topics: HashMap<String, Vec<QuestionTemplate>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-validated topic lists.
    pub fn from_topics(
        topics: impl IntoIterator<Item = (String, Vec<QuestionTemplate>)>,
    ) -> Result<Self, BankError> {
        let bank = Self { topics: topics.into_iter().collect() };
        bank.validate()?;
        Ok(bank)
    }

    /// Parse the `{ "TOPIC": [ {id, questionText, options, correctIndex}, ... ] }` shape.
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let bank: Self = serde_json::from_str(json)?;
        bank.validate()?;
        debug!(topics = bank.topics.len(), "question bank loaded");
        Ok(bank)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BankError> {
        let bank: Self = serde_json::from_reader(reader)?;
        bank.validate()?;
        debug!(topics = bank.topics.len(), "question bank loaded");
        Ok(bank)
    }

    /// Add or replace a topic.
    pub fn insert_topic(
        &mut self,
        topic_key: impl Into<String>,
        templates: Vec<QuestionTemplate>,
    ) -> Result<(), BankError> {
        let topic_key = topic_key.into();
        for t in &templates {
            check_template(&topic_key, t)?;
        }
        self.topics.insert(topic_key, templates);
        Ok(())
    }

    /// Templates for a topic in authored order. `None` when the topic is unknown.
    pub fn topic(&self, topic_key: &str) -> Option<&[QuestionTemplate]> {
        self.topics.get(topic_key).map(Vec::as_slice)
    }

    pub fn topic_keys(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    fn validate(&self) -> Result<(), BankError> {
        for (topic, templates) in &self.topics {
            for t in templates {
                check_template(topic, t)?;
            }
        }
        Ok(())
    }
}

fn check_template(topic: &str, t: &QuestionTemplate) -> Result<(), BankError> {
    let malformed = |reason: String| BankError::MalformedTemplate {
        topic: topic.to_string(),
        id: t.id.clone(),
        reason,
    };

    if t.correct_index >= t.options.len() {
        return Err(malformed(format!(
            "correct index {} out of range",
            t.correct_index
        )));
    }
    let distinct: HashSet<&str> = t.options.iter().map(String::as_str).collect();
    if distinct.len() != t.options.len() {
        return Err(malformed("options are not distinct".to_string()));
    }
    Ok(())
}
