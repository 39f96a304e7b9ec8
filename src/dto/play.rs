use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::player::PlayerSummary;

/// Current adjudication dialog state exposed to the play surface.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayView {
    /// Id of the opened question.
    pub question_id: Uuid,
    /// Category header of the dialog.
    pub category: String,
    /// Fixed point value; the stake for non-final questions.
    pub value: i64,
    /// Whether this is the Final Jeopardy round.
    pub is_final: bool,
    /// Prompt text.
    pub prompt: String,
    /// Resolved image URL, if the question carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Resolved audio URL, if the question carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Whether the answer is currently shown.
    pub revealed: bool,
    /// Canonical answer; present only while revealed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Acceptable answers list; present only while revealed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<String>>,
    /// Selected contestant index, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    /// Wagers entered so far, keyed by roster index (Final Jeopardy only).
    #[schema(value_type = Object)]
    pub wagers: BTreeMap<usize, i64>,
}

/// Request to select or clear the answering contestant.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectPlayerRequest {
    /// Roster index to select, or `null` to clear the selection.
    pub player: Option<usize>,
}

/// Request to record a Final Jeopardy wager.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WagerRequest {
    /// Roster index of the wagering contestant.
    pub player: usize,
    /// Raw wager text as typed; unparseable input counts as zero.
    pub amount: String,
}

/// Outcome of an adjudication action.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResolutionResponse {
    /// Whether the dialog session closed.
    pub closed: bool,
    /// Whether the question is now marked used.
    pub question_used: bool,
    /// Scoreboard after applying the awards, in roster order.
    pub scores: Vec<PlayerSummary>,
}
