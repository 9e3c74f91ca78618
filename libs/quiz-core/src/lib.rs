//! Core quiz library shared by the server and any other front end.
//!
//! Provides:
//! - Plain-text parser for quiz files (`TOPIC:` / `Q:` / `ANS:` records)
//! - Catalog of topics with last-writer-wins merging across files
//! - Seedable Fisher-Yates shuffle
//! - Quiz session and a command/event controller on top of it

pub mod catalog;
pub mod controller;
pub mod error;
pub mod parser;
pub mod session;
pub mod shuffle;
pub mod types;

pub use catalog::{parse_index, Catalog};
pub use controller::{Command, Event, QuizController};
pub use error::{QuizError, Result};
pub use parser::{parse, tokenize};
pub use session::{Session, NO_EXPLANATION, POINTS_PER_CORRECT};
pub use shuffle::{shuffle, shuffled};
pub use types::{AnswerOutcome, Question, QuestionView, Step, Topic};
