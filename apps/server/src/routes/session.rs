//! Quiz session endpoints
//!
//! Each handler maps onto one controller command and holds the lock for
//! the duration of that command only.

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::{AppState, Quiz};

/// POST /api/session
/// Starts (or restarts) the session on a topic, matched by exact name
pub async fn start(
    State(state): State<AppState>,
    Json(payload): Json<StartSessionRequest>,
) -> Result<Json<SessionResponse>> {
    let mut quiz = state.quiz.lock().await;
    quiz.on_topic_selected(&payload.topic)?;

    tracing::info!("Started session on topic {:?}", payload.topic);

    session_response(&quiz).map(Json)
}

/// GET /api/session
pub async fn current(State(state): State<AppState>) -> Result<Json<SessionResponse>> {
    let quiz = state.quiz.lock().await;
    session_response(&quiz).map(Json)
}

/// POST /api/session/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAnswerRequest>,
) -> Result<Json<AnswerOutcome>> {
    let mut quiz = state.quiz.lock().await;
    let outcome = quiz.on_option_chosen(&payload.option)?;

    tracing::debug!(
        correct = outcome.is_correct,
        score = outcome.score,
        "Answer submitted"
    );

    Ok(Json(outcome))
}

/// POST /api/session/next
pub async fn next(State(state): State<AppState>) -> Result<Json<SessionResponse>> {
    let mut quiz = state.quiz.lock().await;
    let step = quiz.on_next_requested()?;

    if let Step::Finished { score } = step {
        tracing::info!("Session finished with score {}", score);
    }

    session_response(&quiz).map(Json)
}

fn session_response(quiz: &Quiz) -> Result<SessionResponse> {
    let session = quiz.session().ok_or(quiz_core::QuizError::NoActiveSession)?;
    Ok(SessionResponse {
        topic: session.topic().to_string(),
        score: session.score(),
        step: session.current_question(),
    })
}
