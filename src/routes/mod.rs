use axum::Router;

use crate::state::SharedState;

/// Board grid projection routes.
pub mod board;
/// Swagger UI and OpenAPI document routes.
pub mod docs;
/// Health check routes.
pub mod health;
/// Question play and adjudication routes.
pub mod play;
/// Roster and scoreboard routes.
pub mod players;
/// Question authoring routes.
pub mod questions;
/// Game lifecycle routes.
pub mod session;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(board::router())
        .merge(session::router())
        .merge(players::router())
        .merge(questions::router())
        .merge(play::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
