use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::{catalog::BoardLayout, game::Question};

/// One selectable cell of the board grid.
#[derive(Debug, Serialize, ToSchema)]
pub struct CellView {
    /// Question behind the cell.
    pub id: Uuid,
    /// Point value; `0` means the cell renders as a blank placeholder.
    pub value: i64,
    /// True once resolved; used cells are inert during play.
    pub used: bool,
}

/// One category column with its five rank slots.
#[derive(Debug, Serialize, ToSchema)]
pub struct BoardColumn {
    /// Category header.
    pub category: String,
    /// Rank slots ordered by ascending value; `null` renders empty.
    pub cells: Vec<Option<CellView>>,
}

/// Summary of the Final Jeopardy entry shown below the grid.
#[derive(Debug, Serialize, ToSchema)]
pub struct FinalCellView {
    /// Question behind the final round.
    pub id: Uuid,
    /// Category announced for the final round.
    pub category: String,
    /// True once the final round has been resolved.
    pub used: bool,
}

/// Full board projection: at most five columns of five ranks plus the
/// optional Final Jeopardy row.
#[derive(Debug, Serialize, ToSchema)]
pub struct BoardView {
    /// Category columns in first-seen catalog order.
    pub columns: Vec<BoardColumn>,
    /// Final Jeopardy entry, if the catalog holds one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_round: Option<FinalCellView>,
}

impl From<&Question> for CellView {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            value: question.value,
            used: question.used,
        }
    }
}

impl From<BoardLayout<'_>> for BoardView {
    fn from(layout: BoardLayout<'_>) -> Self {
        let columns = layout
            .columns
            .into_iter()
            .map(|(category, cells)| BoardColumn {
                category: category.to_owned(),
                cells: cells.into_iter().map(|c| c.map(Into::into)).collect(),
            })
            .collect();

        Self {
            columns,
            final_round: layout.final_question.map(|q| FinalCellView {
                id: q.id,
                category: q.category.clone(),
                used: q.used,
            }),
        }
    }
}
