//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised when a session is driven out of order.
///
/// Parsing never fails; malformed records are absorbed by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    #[error("no active session")]
    NoActiveSession,

    #[error("session already finished")]
    SessionFinished,

    #[error("current question already answered")]
    AlreadyAnswered,

    #[error("current question not answered yet")]
    NotAnswered,
}
