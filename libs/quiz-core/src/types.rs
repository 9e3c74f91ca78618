//! Core types for the quiz library.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parsed multiple-choice question.
///
/// Fields may be empty: the parser keeps partially written records
/// (no options, no answer) rather than rejecting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
    /// Option text -> explanation. Keys need not cover every option.
    pub explanations: BTreeMap<String, String>,
}

impl Question {
    /// Create a question with only its text set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Check a selected option against the answer (exact match).
    pub fn is_correct(&self, selected: &str) -> bool {
        self.answer == selected
    }

    /// Explanation recorded for an option, if any.
    pub fn explanation_for(&self, option: &str) -> Option<&str> {
        self.explanations.get(option).map(String::as_str)
    }
}

/// A named list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }
}

/// What the front end shows for the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    /// Zero-based position within the session.
    pub index: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<String>,
}

/// Position of a session: either a question to answer or the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Step {
    Question(QuestionView),
    Finished { score: u32 },
}

impl Step {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

/// Verdict for a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub selected: String,
    pub correct_answer: String,
    /// Explanation for the selected option.
    pub explanation: String,
    /// Explanation for the correct option.
    pub correct_explanation: String,
    /// Running score after this answer.
    pub score: u32,
}
