use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};

use crate::{
    dto::player::{PlayerSummary, RenamePlayerRequest, ScoreUpdateResponse, SetScoreRequest},
    error::AppError,
    services::roster_service,
    state::SharedState,
};

/// The scoreboard in roster order. Positions in this list are the indices
/// the other player routes address.
#[utoipa::path(
    get,
    path = "/players",
    tag = "players",
    responses((status = 200, description = "Roster with scores", body = [PlayerSummary]))
)]
pub async fn list_players(State(state): State<SharedState>) -> Json<Vec<PlayerSummary>> {
    Json(roster_service::list_players(&state).await)
}

/// Append a default-named player with a zero score.
#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    responses((status = 201, description = "Player added", body = PlayerSummary))
)]
pub async fn add_player(
    State(state): State<SharedState>,
) -> (StatusCode, Json<PlayerSummary>) {
    let summary = roster_service::add_player(&state).await;
    (StatusCode::CREATED, Json(summary))
}

/// Rename the player at a roster index.
#[utoipa::path(
    put,
    path = "/players/{index}",
    tag = "players",
    params(("index" = usize, Path, description = "Roster index of the player")),
    responses(
        (status = 200, description = "Player renamed", body = PlayerSummary),
        (status = 404, description = "No player at that index")
    )
)]
pub async fn rename_player(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
    Json(request): Json<RenamePlayerRequest>,
) -> Result<Json<PlayerSummary>, AppError> {
    Ok(Json(
        roster_service::rename_player(&state, index, request.name).await?,
    ))
}

/// Remove the player at a roster index. The roster never empties.
#[utoipa::path(
    delete,
    path = "/players/{index}",
    tag = "players",
    params(("index" = usize, Path, description = "Roster index of the player")),
    responses(
        (status = 204, description = "Player removed"),
        (status = 404, description = "No player at that index"),
        (status = 409, description = "Removal would leave the roster empty")
    )
)]
pub async fn remove_player(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, AppError> {
    roster_service::remove_player(&state, index).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Override a score from the scoreboard's raw text field.
#[utoipa::path(
    put,
    path = "/players/{index}/score",
    tag = "players",
    params(("index" = usize, Path, description = "Roster index of the player")),
    responses(
        (status = 200, description = "Score updated", body = ScoreUpdateResponse),
        (status = 404, description = "No player at that index")
    )
)]
pub async fn set_score(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
    Json(request): Json<SetScoreRequest>,
) -> Result<Json<ScoreUpdateResponse>, AppError> {
    Ok(Json(
        roster_service::set_score(&state, index, &request.score).await?,
    ))
}

/// Configure the player routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/players", get(list_players).post(add_player))
        .route(
            "/players/{index}",
            put(rename_player).delete(remove_player),
        )
        .route("/players/{index}/score", put(set_score))
}
