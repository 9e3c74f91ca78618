//! Plain-text parser for quiz files.
//!
//! # Format
//! ```text
//! TOPIC: Rust
//! Q: Which keyword declares an immutable binding?
//! - let
//! - mut
//! ANS: let
//! EXPLAIN:
//! -let > Bindings are immutable unless marked `mut`.
//! -mut > `mut` makes a binding mutable.
//! ---
//! ```
//!
//! Both explanation dialects are accepted: an explicit `EXPLAIN:` marker, or
//! explanation lines directly after `ANS:`. Unrecognized lines are skipped and
//! a record missing its terminator is kept at end of input.

use crate::catalog::Catalog;
use crate::types::Question;

/// Split raw text into trimmed lines. Handles both `\n` and `\r\n`.
///
/// Empty lines are kept; the record parser skips them.
pub fn tokenize(content: &str) -> Vec<&str> {
    content.split('\n').map(str::trim).collect()
}

/// Parse quiz text into a catalog.
///
/// Never fails: missing options, answers or explanations leave the
/// corresponding fields empty.
pub fn parse(content: &str) -> Catalog {
    let mut parser = Parser::new();

    for line in tokenize(content) {
        parser.process_line(line);
    }

    parser.finalize()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    OutsideTopic,
    AwaitingRecord,
    InOptions,
    InExplanation,
}

enum LineType<'a> {
    Topic(&'a str),
    Question(&'a str),
    Answer(&'a str),
    ExplainMarker,
    Terminator,
    Dash(&'a str),
    Empty,
    Other,
}

struct Parser {
    catalog: Catalog,
    /// Position of the open topic in the catalog.
    topic: Option<usize>,
    current: Option<Question>,
    state: State,
}

impl Parser {
    fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            topic: None,
            current: None,
            state: State::OutsideTopic,
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        if line.is_empty() {
            LineType::Empty
        } else if let Some(rest) = line.strip_prefix("TOPIC:") {
            LineType::Topic(rest.trim())
        } else if let Some(rest) = line.strip_prefix("Q:") {
            LineType::Question(rest.trim())
        } else if let Some(rest) = line.strip_prefix("ANS:") {
            LineType::Answer(rest.trim())
        } else if line.starts_with("EXPLAIN:") {
            LineType::ExplainMarker
        } else if line == "---" {
            LineType::Terminator
        } else if let Some(rest) = line.strip_prefix('-') {
            LineType::Dash(rest)
        } else {
            LineType::Other
        }
    }

    fn process_line(&mut self, line: &str) {
        match Self::parse_line(line) {
            LineType::Topic(name) => self.handle_topic(name),
            LineType::Question(text) => self.handle_question(text),
            LineType::Answer(answer) => self.handle_answer(answer),
            LineType::ExplainMarker => self.handle_explain_marker(),
            LineType::Terminator => self.flush(),
            LineType::Dash(body) => self.handle_dash(body),
            LineType::Empty | LineType::Other => {}
        }
    }

    fn handle_topic(&mut self, name: &str) {
        self.flush();
        self.topic = Some(self.catalog.insert_topic(name));
        self.state = State::AwaitingRecord;
    }

    fn handle_question(&mut self, text: &str) {
        self.flush();
        self.current = Some(Question::new(text));
        self.state = State::InOptions;
    }

    fn handle_answer(&mut self, answer: &str) {
        if let Some(ref mut question) = self.current {
            question.answer = answer.to_string();
            self.state = State::InExplanation;
        }
    }

    fn handle_explain_marker(&mut self) {
        if self.current.is_some() {
            self.state = State::InExplanation;
        }
    }

    /// `- text` is an option before the answer; `-key > text` is an
    /// explanation after it.
    fn handle_dash(&mut self, body: &str) {
        let Some(ref mut question) = self.current else {
            return;
        };

        match self.state {
            State::InOptions => {
                if let Some(text) = body.strip_prefix(' ') {
                    question.options.push(text.trim().to_string());
                }
            }
            State::InExplanation => {
                if let Some((key, value)) = body.split_once('>') {
                    question
                        .explanations
                        .insert(key.trim().to_string(), value.trim().to_string());
                }
            }
            State::OutsideTopic | State::AwaitingRecord => {}
        }
    }

    /// Push the open question onto the current topic and close it.
    ///
    /// No-op until a topic is open. Questions without text are dropped.
    fn flush(&mut self) {
        let Some(topic) = self.topic else {
            return;
        };
        let Some(question) = self.current.take() else {
            return;
        };

        if !question.text.is_empty() {
            self.catalog.push_question(topic, question);
        }
        self.state = State::AwaitingRecord;
    }

    fn finalize(mut self) -> Catalog {
        self.flush();
        self.catalog
    }
}
