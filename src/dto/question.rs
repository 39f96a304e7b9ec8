use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::game::Question;

/// Raw authoring form fields for creating or editing a question.
///
/// Fields arrive as typed in the form; the authoring service trims,
/// normalizes, and validates them into a catalog entry.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct QuestionInput {
    /// Category the question belongs to.
    #[serde(default)]
    pub category: String,
    /// Prompt text.
    #[serde(default)]
    pub prompt: String,
    /// Point value as entered.
    #[serde(default)]
    pub value: i64,
    /// Single-answer field.
    #[serde(default)]
    pub answer: String,
    /// Multi-answer field, one acceptable answer per line. When non-empty
    /// after normalization it takes precedence over `answer`.
    #[serde(default)]
    pub answers_text: String,
    /// Optional image URL, used verbatim.
    #[serde(default)]
    pub image: String,
    /// Optional audio file name, namespaced under the audio assets path.
    #[serde(default)]
    pub audio_file: String,
    /// Create the entry as the Final Jeopardy question. Ignored when
    /// editing; the edited question keeps its marker.
    #[serde(default)]
    pub create_as_final: bool,
}

/// Full authoring projection of a catalog entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionSummary {
    /// Stable identifier.
    pub id: Uuid,
    /// Category the question belongs to.
    pub category: String,
    /// Point value.
    pub value: i64,
    /// Prompt text.
    pub prompt: String,
    /// Single canonical answer, absent when `answers` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Acceptable answers, absent when `answer` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<String>>,
    /// Whether this is the Final Jeopardy question.
    pub is_final: bool,
    /// Whether the question has been resolved this game.
    pub used: bool,
    /// Stored image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Audio file name with the assets namespace stripped, as the form
    /// expects it back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
}

impl From<&Question> for QuestionSummary {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            category: question.category.clone(),
            value: question.value,
            prompt: question.prompt.clone(),
            answer: question.answer.clone(),
            answers: question.answers.clone(),
            is_final: question.is_final,
            used: question.used,
            image: question.image.clone(),
            audio_file: question
                .audio
                .as_deref()
                .map(|audio| audio.trim_start_matches("/audio/").to_owned()),
        }
    }
}
