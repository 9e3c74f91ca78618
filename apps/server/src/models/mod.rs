//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::types::{AnswerOutcome, QuestionView, Step};

/// GET /api/topics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicListResponse {
    pub topics: Vec<String>,
}

/// POST /api/session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub topic: String,
}

/// POST /api/session/answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub option: String,
}

/// Current state of the session, returned by every session endpoint
/// except answer submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub topic: String,
    pub score: u32,
    pub step: Step,
}
