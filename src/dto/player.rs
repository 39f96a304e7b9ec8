use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::game::Player;

/// Public projection of a roster entry. Roster order defines the index
/// used by the positional player routes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerSummary {
    /// Stable identifier for the player.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Running total; may be negative.
    pub score: i64,
}

/// Request to rename a roster entry.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RenamePlayerRequest {
    /// New display name.
    pub name: String,
}

/// Request to override a score from the scoreboard's raw text field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetScoreRequest {
    /// Raw text as typed; unparseable input counts as zero.
    pub score: String,
}

/// Result of a score mutation, returning the updated tally.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreUpdateResponse {
    /// Roster index of the affected player.
    pub index: usize,
    /// Score after the mutation.
    pub score: i64,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            score: player.score,
        }
    }
}
