//! Topic catalog built from one or more quiz files.

use crate::types::{Question, Topic};
use serde::{Deserialize, Serialize};

/// Topics in the order their names were first declared.
///
/// Redeclaring a topic replaces its question list but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty question list for `name`, discarding any previous one.
    ///
    /// Returns the topic's position, which later inserts never move.
    pub fn insert_topic(&mut self, name: &str) -> usize {
        self.replace_topic(Topic::new(name))
    }

    /// Append a question to the topic at `index`.
    pub(crate) fn push_question(&mut self, index: usize, question: Question) {
        if let Some(topic) = self.topics.get_mut(index) {
            topic.questions.push(question);
        }
    }

    /// Merge another catalog into this one, last writer wins per topic.
    ///
    /// Question lists are never concatenated: a topic present in `other`
    /// fully replaces the one here.
    pub fn merge(&mut self, other: Catalog) {
        for topic in other.topics {
            self.replace_topic(topic);
        }
    }

    /// Questions for a topic, in file order.
    pub fn questions(&self, topic: &str) -> Option<&[Question]> {
        self.topic(topic).map(|t| t.questions.as_slice())
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.topic(name).is_some()
    }

    pub fn topic_names(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of questions across all topics.
    pub fn question_count(&self) -> usize {
        self.topics.iter().map(|t| t.questions.len()).sum()
    }

    fn replace_topic(&mut self, topic: Topic) -> usize {
        match self.topics.iter().position(|t| t.name == topic.name) {
            Some(index) => {
                self.topics[index] = topic;
                index
            }
            None => {
                self.topics.push(topic);
                self.topics.len() - 1
            }
        }
    }
}

impl FromIterator<Catalog> for Catalog {
    fn from_iter<I: IntoIterator<Item = Catalog>>(iter: I) -> Self {
        let mut merged = Catalog::new();
        for catalog in iter {
            merged.merge(catalog);
        }
        merged
    }
}

/// Parse an index file into the list of quiz file names it references.
pub fn parse_index(content: &str) -> Vec<String> {
    crate::parser::tokenize(content)
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
