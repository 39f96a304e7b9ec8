//! Question catalog operations: board layout derivation and id-keyed
//! catalog mutation.

use indexmap::IndexMap;
use uuid::Uuid;

use crate::state::game::Question;

/// Number of category columns the board presents.
pub const BOARD_CATEGORIES: usize = 5;
/// Number of value ranks per category column.
pub const BOARD_RANKS: usize = 5;

/// Derived 5×5 board projection of a catalog.
///
/// Columns preserve the first-seen category order of the catalog. Every
/// column holds exactly [`BOARD_RANKS`] slots; categories with fewer
/// questions leave the trailing ranks empty.
#[derive(Debug)]
pub struct BoardLayout<'a> {
    /// Category name → ordered rank slots.
    pub columns: IndexMap<&'a str, Vec<Option<&'a Question>>>,
    /// The unique Final Jeopardy entry, if the catalog holds one.
    pub final_question: Option<&'a Question>,
}

/// Project a catalog onto the board grid.
///
/// Categories beyond the first [`BOARD_CATEGORIES`] distinct names are
/// silently dropped, as are questions beyond [`BOARD_RANKS`] within a
/// category. Within a column, questions sort by ascending value; the sort
/// is stable so equal values keep catalog order.
pub fn layout(questions: &[Question]) -> BoardLayout<'_> {
    let mut grouped: IndexMap<&str, Vec<&Question>> = IndexMap::new();
    for question in questions.iter().filter(|q| !q.is_final) {
        grouped
            .entry(question.category.as_str())
            .or_default()
            .push(question);
    }
    grouped.truncate(BOARD_CATEGORIES);

    let columns = grouped
        .into_iter()
        .map(|(category, mut entries)| {
            entries.sort_by_key(|q| q.value);
            let cells = (0..BOARD_RANKS)
                .map(|rank| entries.get(rank).copied())
                .collect();
            (category, cells)
        })
        .collect();

    BoardLayout {
        columns,
        final_question: find_final(questions),
    }
}

/// The catalog's unique `is_final` entry, if any.
pub fn find_final(questions: &[Question]) -> Option<&Question> {
    questions.iter().find(|q| q.is_final)
}

/// Look up a question by id.
pub fn find(questions: &[Question], id: Uuid) -> Option<&Question> {
    questions.iter().find(|q| q.id == id)
}

/// Mark the matching question used. Idempotent; no-op when absent.
pub fn mark_used(questions: &mut [Question], id: Uuid) {
    if let Some(question) = questions.iter_mut().find(|q| q.id == id) {
        question.used = true;
    }
}

/// Replace the entry matching `previous` in place, or append `next` when
/// no previous id is given or it no longer exists.
pub fn upsert(questions: &mut Vec<Question>, previous: Option<Uuid>, next: Question) {
    match previous.and_then(|id| questions.iter().position(|q| q.id == id)) {
        Some(index) => questions[index] = next,
        None => questions.push(next),
    }
}

/// Remove the matching entry. No-op when absent.
pub fn remove(questions: &mut Vec<Question>, id: Uuid) {
    questions.retain(|q| q.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(category: &str, value: i64) -> Question {
        Question {
            id: Uuid::new_v4(),
            category: category.into(),
            value,
            prompt: format!("{category} for {value}"),
            answer: Some("answer".into()),
            answers: None,
            is_final: false,
            used: false,
            image: None,
            audio: None,
        }
    }

    fn final_question() -> Question {
        Question {
            is_final: true,
            ..question("Finale", 0)
        }
    }

    #[test]
    fn layout_caps_categories_at_five_in_first_seen_order() {
        let questions: Vec<Question> = ["A", "B", "C", "D", "E", "F", "G"]
            .iter()
            .map(|c| question(c, 100))
            .collect();

        let board = layout(&questions);
        let names: Vec<&str> = board.columns.keys().copied().collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn layout_caps_ranks_at_five_sorted_by_value() {
        let questions: Vec<Question> = [500, 100, 300, 200, 400, 600, 700]
            .iter()
            .map(|v| question("Anime", *v))
            .collect();

        let board = layout(&questions);
        let column = &board.columns["Anime"];
        assert_eq!(column.len(), BOARD_RANKS);
        let values: Vec<i64> = column.iter().map(|c| c.unwrap().value).collect();
        assert_eq!(values, vec![100, 200, 300, 400, 500]);
    }

    #[test]
    fn layout_pads_sparse_categories_with_empty_ranks() {
        let questions = vec![question("Anime", 200), question("Anime", 100)];
        let board = layout(&questions);
        let column = &board.columns["Anime"];
        assert_eq!(column.len(), BOARD_RANKS);
        assert!(column[0].is_some() && column[1].is_some());
        assert!(column[2..].iter().all(Option::is_none));
    }

    #[test]
    fn layout_excludes_final_from_columns() {
        let questions = vec![question("Anime", 100), final_question()];
        let board = layout(&questions);
        assert_eq!(board.columns.len(), 1);
        assert_eq!(board.final_question.map(|q| q.category.as_str()), Some("Finale"));
    }

    #[test]
    fn mark_used_is_idempotent() {
        let mut questions = vec![question("Anime", 100)];
        let id = questions[0].id;

        mark_used(&mut questions, id);
        let once = questions.clone();
        mark_used(&mut questions, id);

        assert!(questions[0].used);
        assert_eq!(questions, once);
    }

    #[test]
    fn mark_used_ignores_unknown_ids() {
        let mut questions = vec![question("Anime", 100)];
        mark_used(&mut questions, Uuid::new_v4());
        assert!(!questions[0].used);
    }

    #[test]
    fn upsert_replaces_in_place_and_preserves_position() {
        let mut questions = vec![question("A", 100), question("B", 200), question("C", 300)];
        let target = questions[1].id;

        let replacement = question("B", 250);
        upsert(&mut questions, Some(target), replacement.clone());

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1], replacement);
    }

    #[test]
    fn upsert_appends_when_previous_is_missing() {
        let mut questions = vec![question("A", 100)];
        upsert(&mut questions, Some(Uuid::new_v4()), question("B", 200));
        upsert(&mut questions, None, question("C", 300));
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[2].category, "C");
    }

    #[test]
    fn remove_is_a_no_op_for_unknown_ids() {
        let mut questions = vec![question("A", 100)];
        remove(&mut questions, Uuid::new_v4());
        assert_eq!(questions.len(), 1);

        let id = questions[0].id;
        remove(&mut questions, id);
        assert!(questions.is_empty());
    }
}
