use uuid::Uuid;

use crate::dao::models::{PlayerEntity, QuestionEntity};

/// A trivia prompt assigned to a board cell or the Final Jeopardy round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Stable identifier, assigned at creation and used for every lookup.
    pub id: Uuid,
    /// Category grouping the board column.
    pub category: String,
    /// Point value at stake for non-final questions.
    pub value: i64,
    /// Prompt text.
    pub prompt: String,
    /// Single canonical answer; exclusive with `answers`.
    pub answer: Option<String>,
    /// Alternative list of acceptable answers; exclusive with `answer`.
    pub answers: Option<Vec<String>>,
    /// Marks the single Final Jeopardy question.
    pub is_final: bool,
    /// True once the question has been resolved; never transitions back.
    pub used: bool,
    /// Optional image reference.
    pub image: Option<String>,
    /// Optional audio reference.
    pub audio: Option<String>,
}

/// A contestant on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable identifier for the player.
    pub id: Uuid,
    /// Display name, defaults to `Player N` on creation.
    pub name: String,
    /// Running total; may be negative.
    pub score: i64,
}

impl Player {
    /// Build a player with the default name derived from the roster size.
    pub fn numbered(position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: format!("Player {position}"),
            score: 0,
        }
    }
}

/// Process-wide session state: roster, catalog, and the started flag.
///
/// Every mutation of any field is mirrored into the session store by the
/// service layer; `Reset` drops all three back to these defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    /// Ordered contestant roster.
    pub players: Vec<Player>,
    /// Full question catalog for the game.
    pub questions: Vec<Question>,
    /// True once the board has entered play mode.
    pub started: bool,
}

impl From<QuestionEntity> for Question {
    fn from(value: QuestionEntity) -> Self {
        Self {
            id: value.id,
            category: value.category,
            value: value.value,
            prompt: value.prompt,
            answer: value.answer,
            answers: value.answers,
            is_final: value.is_final,
            used: value.used,
            image: value.image,
            audio: value.audio,
        }
    }
}

impl From<Question> for QuestionEntity {
    fn from(value: Question) -> Self {
        Self {
            id: value.id,
            category: value.category,
            value: value.value,
            prompt: value.prompt,
            answer: value.answer,
            answers: value.answers,
            is_final: value.is_final,
            used: value.used,
            image: value.image,
            audio: value.audio,
        }
    }
}

impl From<PlayerEntity> for Player {
    fn from(value: PlayerEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            score: value.score,
        }
    }
}

impl From<Player> for PlayerEntity {
    fn from(value: Player) -> Self {
        Self {
            id: value.id,
            name: value.name,
            score: value.score,
        }
    }
}
