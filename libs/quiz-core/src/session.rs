//! A single playthrough of one topic.

use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::shuffle::{shuffle, shuffled};
use crate::types::{AnswerOutcome, Question, QuestionView, Step};
use rand::Rng;

/// Points awarded for each correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Shown when an option has no explanation.
pub const NO_EXPLANATION: &str = "No explanation provided.";

/// Per-topic quiz state: shuffled questions, cursor and score.
///
/// Holds its own copy of the questions, so the catalog is never touched.
#[derive(Debug, Clone)]
pub struct Session {
    topic: String,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    answered: bool,
}

impl Session {
    /// Start a session on `topic` with questions and options shuffled.
    pub fn start<R: Rng + ?Sized>(catalog: &Catalog, topic: &str, rng: &mut R) -> Result<Self> {
        let source = catalog
            .questions(topic)
            .ok_or_else(|| QuizError::UnknownTopic(topic.to_string()))?;

        let mut questions = shuffled(source, rng);
        for question in &mut questions {
            shuffle(&mut question.options, rng);
        }

        Ok(Self {
            topic: topic.to_string(),
            questions,
            current: 0,
            score: 0,
            answered: false,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Whether the current question has been answered.
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn current_question(&self) -> Step {
        match self.questions.get(self.current) {
            Some(question) => Step::Question(QuestionView {
                index: self.current,
                total: self.questions.len(),
                text: question.text.clone(),
                options: question.options.clone(),
            }),
            None => Step::Finished { score: self.score },
        }
    }

    /// Check `selected` against the current question's answer.
    ///
    /// Only one submission per question is accepted.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerOutcome> {
        let question = self
            .questions
            .get(self.current)
            .ok_or(QuizError::SessionFinished)?;

        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }

        let is_correct = question.is_correct(selected);
        let explanation = explanation_or_default(question, selected);
        let correct_explanation = explanation_or_default(question, &question.answer);
        let correct_answer = question.answer.clone();

        if is_correct {
            self.score += POINTS_PER_CORRECT;
        }
        self.answered = true;

        Ok(AnswerOutcome {
            is_correct,
            selected: selected.to_string(),
            correct_answer,
            explanation,
            correct_explanation,
            score: self.score,
        })
    }

    /// Move to the next question once the current one is answered.
    pub fn advance(&mut self) -> Result<Step> {
        if self.is_finished() {
            return Err(QuizError::SessionFinished);
        }
        if !self.answered {
            return Err(QuizError::NotAnswered);
        }

        self.current += 1;
        self.answered = false;
        Ok(self.current_question())
    }
}

fn explanation_or_default(question: &Question, option: &str) -> String {
    question
        .explanation_for(option)
        .unwrap_or(NO_EXPLANATION)
        .to_string()
}
