//! HTTP routes.

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;

/// The body returned whenever a question cannot be answered.
pub const FALLBACK_ANSWER: &str = "Sorry, I can't process your question right now.";

const INDEX_PAGE: &str = include_str!("../static/index.html");

/// Build the application routes, limiting request bodies to `max_body_bytes`.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask).layer(DefaultBodyLimit::max(max_body_bytes)))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// The raw request body is the question.
async fn ask(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<String> {
    let body = body.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let question = String::from_utf8(body.to_vec())
        .map_err(|_| ServerError::BadRequest("question is not valid UTF-8".to_string()))?;

    state.service.ask_question(&question).await
}

async fn health_check() -> &'static str {
    "OK"
}
