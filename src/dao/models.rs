use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Question representation stored in the `questions` slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionEntity {
    /// Stable identifier for the question.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Category grouping the board column.
    pub category: String,
    /// Point value; `0` renders as a blank placeholder cell.
    pub value: i64,
    /// Prompt text shown when the question is opened.
    pub prompt: String,
    /// Single canonical answer, absent when `answers` is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// List of acceptable answers, absent when `answer` is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<String>>,
    /// Marks the single Final Jeopardy question.
    #[serde(default)]
    pub is_final: bool,
    /// Whether the question has already been resolved this game.
    #[serde(default)]
    pub used: bool,
    /// Optional image reference (URL or relative path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Optional audio reference (URL or relative path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// Player representation stored in the `players` slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerEntity {
    /// Stable identifier for the player.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Running score; may be negative.
    pub score: i64,
}
