pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use quiz_core::{Catalog, QuizController};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, SourceLocation};
use crate::services::loader::{load_catalog, DirSource, HttpSource};

/// Controller type shared by the handlers.
pub type Quiz = QuizController<StdRng>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub quiz: Arc<Mutex<Quiz>>,
}

impl AppState {
    pub fn new(catalog: Catalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            quiz: Arc::new(Mutex::new(QuizController::new(catalog, rng))),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/topics", get(routes::topics::list))
        .route(
            "/api/session",
            get(routes::session::current).post(routes::session::start),
        )
        .route("/api/session/answer", post(routes::session::answer))
        .route("/api/session/next", post(routes::session::next))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // The catalog must be complete before anything is served.
    tracing::info!("Loading quiz catalog from {:?}...", config.source);
    let catalog = match &config.source {
        SourceLocation::Directory(root) => {
            load_catalog(&DirSource::new(root), &config.strategy).await?
        }
        SourceLocation::Http(base_url) => {
            load_catalog(&HttpSource::new(base_url.as_str()), &config.strategy).await?
        }
    };
    tracing::info!(
        "Loaded {} topics with {} questions",
        catalog.len(),
        catalog.question_count()
    );

    let app = router(AppState::new(catalog, config.seed)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
