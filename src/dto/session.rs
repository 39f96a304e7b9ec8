use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::player::PlayerSummary;

/// Top-level session summary backing the title bar and scoreboard panel.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionSummary {
    /// True once the board has entered play mode; the authoring controls
    /// hide when set.
    pub started: bool,
    /// Scoreboard in roster order.
    pub players: Vec<PlayerSummary>,
    /// Number of catalog entries, the final question included.
    pub question_count: usize,
    /// Whether a Final Jeopardy question exists.
    pub has_final: bool,
}

/// Generic action acknowledgement used by lifecycle endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Human readable acknowledgement.
    pub message: String,
}

impl ActionResponse {
    /// Acknowledge an action with a short message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
