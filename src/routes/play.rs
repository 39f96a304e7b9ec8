use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::{
        play::{PlayView, ResolutionResponse, SelectPlayerRequest, WagerRequest},
        session::ActionResponse,
    },
    error::AppError,
    services::play_service,
    state::SharedState,
};

/// Fetch the open question dialog, if any.
#[utoipa::path(
    get,
    path = "/play",
    tag = "play",
    responses(
        (status = 200, description = "Open question view", body = PlayView),
        (status = 404, description = "No question is open")
    )
)]
pub async fn get_play(State(state): State<SharedState>) -> Result<Json<PlayView>, AppError> {
    Ok(Json(play_service::view(&state).await?))
}

/// Open an unused question for play.
#[utoipa::path(
    post,
    path = "/play/{id}/open",
    tag = "play",
    params(("id" = String, Path, description = "Identifier of the question")),
    responses(
        (status = 200, description = "Question opened", body = PlayView),
        (status = 404, description = "Question not found"),
        (status = 409, description = "Not started, already used, or another question open")
    )
)]
pub async fn open_question(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlayView>, AppError> {
    Ok(Json(play_service::open(&state, id).await?))
}

/// Toggle answer visibility in the open dialog.
#[utoipa::path(
    post,
    path = "/play/reveal",
    tag = "play",
    responses(
        (status = 200, description = "Updated view", body = PlayView),
        (status = 404, description = "No question is open")
    )
)]
pub async fn toggle_reveal(State(state): State<SharedState>) -> Result<Json<PlayView>, AppError> {
    Ok(Json(play_service::toggle_reveal(&state).await?))
}

/// Select or clear the answering contestant.
#[utoipa::path(
    post,
    path = "/play/select",
    tag = "play",
    request_body = SelectPlayerRequest,
    responses(
        (status = 200, description = "Updated view", body = PlayView),
        (status = 400, description = "Index beyond the roster"),
        (status = 404, description = "No question is open")
    )
)]
pub async fn select_player(
    State(state): State<SharedState>,
    Json(request): Json<SelectPlayerRequest>,
) -> Result<Json<PlayView>, AppError> {
    Ok(Json(play_service::select_player(&state, request).await?))
}

/// Record a Final Jeopardy wager from raw text.
#[utoipa::path(
    post,
    path = "/play/wager",
    tag = "play",
    request_body = WagerRequest,
    responses(
        (status = 200, description = "Updated view", body = PlayView),
        (status = 400, description = "Index beyond the roster"),
        (status = 404, description = "No question is open"),
        (status = 409, description = "Not the final question")
    )
)]
pub async fn set_wager(
    State(state): State<SharedState>,
    Json(request): Json<WagerRequest>,
) -> Result<Json<PlayView>, AppError> {
    Ok(Json(play_service::set_wager(&state, request).await?))
}

/// Adjudicate the selected contestant as correct.
#[utoipa::path(
    post,
    path = "/play/correct",
    tag = "play",
    responses(
        (status = 200, description = "Resolution applied", body = ResolutionResponse),
        (status = 404, description = "No question is open"),
        (status = 409, description = "No selection, or missing wager on the final")
    )
)]
pub async fn mark_correct(
    State(state): State<SharedState>,
) -> Result<Json<ResolutionResponse>, AppError> {
    Ok(Json(play_service::correct(&state).await?))
}

/// Adjudicate the selected contestant as incorrect.
#[utoipa::path(
    post,
    path = "/play/incorrect",
    tag = "play",
    responses(
        (status = 200, description = "Penalty applied, question still open", body = ResolutionResponse),
        (status = 404, description = "No question is open"),
        (status = 409, description = "No selection, or missing wager on the final")
    )
)]
pub async fn mark_incorrect(
    State(state): State<SharedState>,
) -> Result<Json<ResolutionResponse>, AppError> {
    Ok(Json(play_service::incorrect(&state).await?))
}

/// Close the question with nobody correct.
#[utoipa::path(
    post,
    path = "/play/close",
    tag = "play",
    responses(
        (status = 200, description = "Question closed", body = ResolutionResponse),
        (status = 404, description = "No question is open")
    )
)]
pub async fn close_question(
    State(state): State<SharedState>,
) -> Result<Json<ResolutionResponse>, AppError> {
    Ok(Json(play_service::close_unanswered(&state).await?))
}

/// Discard the dialog without resolving; the question stays live.
#[utoipa::path(
    post,
    path = "/play/cancel",
    tag = "play",
    responses(
        (status = 200, description = "Dialog dismissed", body = ActionResponse),
        (status = 404, description = "No question is open")
    )
)]
pub async fn cancel_play(
    State(state): State<SharedState>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(play_service::cancel(&state).await?))
}

/// Configure the play routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/play", get(get_play))
        .route("/play/{id}/open", post(open_question))
        .route("/play/reveal", post(toggle_reveal))
        .route("/play/select", post(select_player))
        .route("/play/wager", post(set_wager))
        .route("/play/correct", post(mark_correct))
        .route("/play/incorrect", post(mark_incorrect))
        .route("/play/close", post(close_question))
        .route("/play/cancel", post(cancel_play))
}
