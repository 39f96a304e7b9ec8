use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::session::{ActionResponse, SessionSummary},
    error::AppError,
    services::session_service,
    state::SharedState,
};

/// Summarize the session for the top-level surface.
#[utoipa::path(
    get,
    path = "/session",
    tag = "session",
    responses((status = 200, description = "Session summary", body = SessionSummary))
)]
pub async fn get_session(State(state): State<SharedState>) -> Json<SessionSummary> {
    Json(session_service::summary(&state).await)
}

/// Enter play mode with the authored catalog.
#[utoipa::path(
    post,
    path = "/session/start",
    tag = "session",
    responses(
        (status = 200, description = "Game started", body = SessionSummary),
        (status = 409, description = "Game already in progress")
    )
)]
pub async fn start_game(
    State(state): State<SharedState>,
) -> Result<Json<SessionSummary>, AppError> {
    Ok(Json(session_service::start_game(&state).await?))
}

/// Replace the catalog with the generated set and enter play mode.
#[utoipa::path(
    post,
    path = "/session/generate",
    tag = "session",
    responses(
        (status = 200, description = "Generated game started", body = SessionSummary),
        (status = 409, description = "Game already in progress")
    )
)]
pub async fn generate_game(
    State(state): State<SharedState>,
) -> Result<Json<SessionSummary>, AppError> {
    Ok(Json(session_service::generate_game(&state).await?))
}

/// Tear the session down to the blank authoring state.
#[utoipa::path(
    post,
    path = "/session/reset",
    tag = "session",
    responses((status = 200, description = "Session cleared", body = ActionResponse))
)]
pub async fn reset_game(
    State(state): State<SharedState>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(session_service::reset(&state).await?))
}

/// Configure the session lifecycle routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/session", get(get_session))
        .route("/session/start", post(start_game))
        .route("/session/generate", post(generate_game))
        .route("/session/reset", post(reset_game))
}
