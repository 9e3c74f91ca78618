//! Command/event interface between a front end and the quiz session.

use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::session::Session;
use crate::types::{AnswerOutcome, Step};
use rand::Rng;

/// User intents coming from the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    TopicSelected(String),
    OptionChosen(String),
    NextRequested,
}

/// What the front end should render after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Step(Step),
    Answered(AnswerOutcome),
}

/// Owns a loaded catalog, the active session and the shuffle RNG.
///
/// Only constructible from a finished catalog, so topics cannot be listed
/// while loading is still in progress.
pub struct QuizController<R> {
    catalog: Catalog,
    session: Option<Session>,
    rng: R,
}

impl<R: Rng> QuizController<R> {
    pub fn new(catalog: Catalog, rng: R) -> Self {
        Self {
            catalog,
            session: None,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Topic names in catalog order.
    pub fn topics(&self) -> Vec<&str> {
        self.catalog.topic_names()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Score of the active session.
    pub fn score(&self) -> Result<u32> {
        self.active().map(Session::score)
    }

    pub fn current(&self) -> Result<Step> {
        self.active().map(Session::current_question)
    }

    /// Start (or restart) a session on `name`.
    ///
    /// An unknown topic leaves any running session untouched.
    pub fn on_topic_selected(&mut self, name: &str) -> Result<Step> {
        let session = Session::start(&self.catalog, name, &mut self.rng)?;
        let step = session.current_question();
        self.session = Some(session);
        Ok(step)
    }

    pub fn on_option_chosen(&mut self, option: &str) -> Result<AnswerOutcome> {
        self.active_mut()?.submit_answer(option)
    }

    pub fn on_next_requested(&mut self) -> Result<Step> {
        self.active_mut()?.advance()
    }

    pub fn handle(&mut self, command: Command) -> Result<Event> {
        match command {
            Command::TopicSelected(name) => self.on_topic_selected(&name).map(Event::Step),
            Command::OptionChosen(option) => self.on_option_chosen(&option).map(Event::Answered),
            Command::NextRequested => self.on_next_requested().map(Event::Step),
        }
    }

    fn active(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(QuizError::NoActiveSession)
    }

    fn active_mut(&mut self) -> Result<&mut Session> {
        self.session.as_mut().ok_or(QuizError::NoActiveSession)
    }
}
