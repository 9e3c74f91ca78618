//! Common test utilities for integration tests.
//!
//! Quiz files live under `tests/fixtures/`:
//! - `single/questions.txt`: every topic in one file
//! - `multi/topic.txt`: index over several files, `Math` redefined last

pub mod fixtures;

use std::path::PathBuf;

use axum::Router;
use axum_test::TestServer;

use quiz_core::Catalog;
use quiz_server::services::loader::{load_catalog, DirSource, LoadStrategy};
use quiz_server::AppState;

/// Fixed seed so shuffles are repeatable across runs.
pub const TEST_SEED: u64 = 7;

/// Test context holding the loaded catalog and the router built on it.
pub struct TestContext {
    pub catalog: Catalog,
    app: Router,
}

impl TestContext {
    /// Load `single/questions.txt` and build the router.
    pub async fn new() -> Self {
        let strategy = LoadStrategy::Single {
            file: "questions.txt".to_string(),
        };
        let catalog = load_catalog(&DirSource::new(fixtures_dir("single")), &strategy)
            .await
            .expect("Failed to load fixture catalog");

        Self::with_catalog(catalog)
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let app = quiz_server::router(AppState::new(catalog.clone(), Some(TEST_SEED)));
        Self { catalog, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// Correct answer for a question, looked up by its text.
    pub fn answer_for(&self, topic: &str, question: &str) -> String {
        self.catalog
            .questions(topic)
            .and_then(|qs| qs.iter().find(|q| q.text == question))
            .map(|q| q.answer.clone())
            .expect("question not in fixture catalog")
    }

    /// Some option of the question that is not the correct one.
    pub fn wrong_option_for(&self, topic: &str, question: &str) -> String {
        let answer = self.answer_for(topic, question);
        self.catalog
            .questions(topic)
            .and_then(|qs| qs.iter().find(|q| q.text == question))
            .and_then(|q| q.options.iter().find(|o| **o != answer).cloned())
            .expect("question has no wrong option")
    }
}

/// Absolute path of a fixture directory.
pub fn fixtures_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
