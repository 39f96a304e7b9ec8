use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::board::BoardView, services::session_service, state::SharedState};

/// Project the question catalog into the board grid.
#[utoipa::path(
    get,
    path = "/board",
    tag = "board",
    responses((status = 200, description = "Board layout", body = BoardView))
)]
pub async fn get_board(State(state): State<SharedState>) -> Json<BoardView> {
    Json(session_service::board_view(&state).await)
}

/// Configure the board routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/board", get(get_board))
}
