//! Business logic behind the player setup surface and the scoreboard's
//! manual score overrides.

use crate::{
    dto::player::{PlayerSummary, ScoreUpdateResponse},
    error::ServiceError,
    services::session_service,
    state::{SharedState, roster},
};

/// The scoreboard in roster order.
pub async fn list_players(state: &SharedState) -> Vec<PlayerSummary> {
    let session = state.session().read().await;
    session.players.iter().map(Into::into).collect()
}

/// Append a default-named player with a zero score.
pub async fn add_player(state: &SharedState) -> PlayerSummary {
    let summary = {
        let mut session = state.session().write().await;
        PlayerSummary::from(roster::add(&mut session.players))
    };
    session_service::persist_players(state).await;
    summary
}

/// Rename the player at `index`.
pub async fn rename_player(
    state: &SharedState,
    index: usize,
    name: String,
) -> Result<PlayerSummary, ServiceError> {
    let summary = {
        let mut session = state.session().write().await;
        roster::rename(&mut session.players, index, name)?;
        PlayerSummary::from(&session.players[index])
    };
    session_service::persist_players(state).await;
    Ok(summary)
}

/// Remove the player at `index`; removal always leaves at least one player.
pub async fn remove_player(state: &SharedState, index: usize) -> Result<(), ServiceError> {
    {
        let mut session = state.session().write().await;
        roster::remove(&mut session.players, index)?;
    }
    session_service::persist_players(state).await;
    Ok(())
}

/// Override a player's score from the scoreboard's raw text field.
pub async fn set_score(
    state: &SharedState,
    index: usize,
    raw: &str,
) -> Result<ScoreUpdateResponse, ServiceError> {
    let score = {
        let mut session = state.session().write().await;
        roster::set_score(&mut session.players, index, raw)?
    };
    session_service::persist_players(state).await;
    Ok(ScoreUpdateResponse { index, score })
}
