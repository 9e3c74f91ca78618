//! Topic endpoints

use axum::{extract::State, Json};

use crate::models::TopicListResponse;
use crate::AppState;

/// GET /api/topics
pub async fn list(State(state): State<AppState>) -> Json<TopicListResponse> {
    let quiz = state.quiz.lock().await;
    let topics = quiz.topics().into_iter().map(str::to_string).collect();
    Json(TopicListResponse { topics })
}
