//! Per-question adjudication session.
//!
//! Opening a question during play creates a [`PlaySession`]; adjudication
//! produces a pure [`Resolution`] describing score deltas and whether the
//! question closes, which the service layer applies to the roster and
//! catalog. The session itself never touches shared state, so the whole
//! sub-protocol is testable without any HTTP surface.

use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

use crate::state::game::Question;

/// Error raised when an adjudication action is not currently available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Correct/Incorrect require a selected contestant.
    #[error("no contestant is selected")]
    NoSelection,
    /// Final Jeopardy requires a nonzero wager for the selected
    /// contestant; zero and unset both block adjudication.
    #[error("contestant {player} has no wager entered")]
    MissingWager {
        /// Roster index of the contestant lacking a wager.
        player: usize,
    },
}

/// A score delta produced by an adjudication action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    /// Roster index of the affected contestant.
    pub player: usize,
    /// Amount added to the contestant's score; may be negative.
    pub delta: i64,
}

/// Outcome of an adjudication action, applied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Score deltas to apply, in roster order.
    pub awards: Vec<ScoreDelta>,
    /// Whether the question transitions to used.
    pub mark_used: bool,
    /// Whether the session closes.
    pub close: bool,
}

/// Dialog-session state for one opened question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySession {
    /// Id of the opened question.
    pub question_id: Uuid,
    /// Whether this is the Final Jeopardy question.
    pub is_final: bool,
    /// Fixed point value, the stake for non-final questions.
    pub value: i64,
    /// Whether the answer is currently shown.
    pub revealed: bool,
    /// Selected contestant, if any.
    pub selected: Option<usize>,
    /// Wagers entered so far, keyed by roster index. Final Jeopardy only.
    pub wagers: BTreeMap<usize, i64>,
}

impl PlaySession {
    /// Open a session for `question` with nothing revealed, nobody
    /// selected, and no wagers entered.
    pub fn open(question: &Question) -> Self {
        Self {
            question_id: question.id,
            is_final: question.is_final,
            value: question.value,
            revealed: false,
            selected: None,
            wagers: BTreeMap::new(),
        }
    }

    /// Toggle answer visibility.
    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Select a contestant, or clear the selection with `None`.
    pub fn select(&mut self, player: Option<usize>) {
        self.selected = player;
    }

    /// Record a wager for a contestant.
    pub fn set_wager(&mut self, player: usize, amount: i64) {
        self.wagers.insert(player, amount);
    }

    /// The amount at stake for `player`: their wager for Final Jeopardy,
    /// the fixed question value otherwise.
    pub fn effective_value(&self, player: usize) -> i64 {
        if self.is_final {
            self.wagers.get(&player).copied().unwrap_or(0)
        } else {
            self.value
        }
    }

    /// Award the selected contestant the effective value, mark the
    /// question used, and close the session.
    pub fn correct(&self) -> Result<Resolution, PlayError> {
        let player = self.adjudicable()?;
        Ok(Resolution {
            awards: vec![ScoreDelta {
                player,
                delta: self.effective_value(player),
            }],
            mark_used: true,
            close: true,
        })
    }

    /// Penalize the selected contestant by the effective value and clear
    /// the selection. The question stays open and unused so another
    /// contestant can attempt it.
    pub fn incorrect(&mut self) -> Result<Resolution, PlayError> {
        let player = self.adjudicable()?;
        self.selected = None;
        Ok(Resolution {
            awards: vec![ScoreDelta {
                player,
                delta: -self.effective_value(player),
            }],
            mark_used: false,
            close: false,
        })
    }

    /// Close the question with nobody correct. Final Jeopardy burns every
    /// positive wager; a regular question closes with no score changes.
    pub fn close_unanswered(&self) -> Resolution {
        let awards = if self.is_final {
            self.wagers
                .iter()
                .filter(|(_, wager)| **wager > 0)
                .map(|(player, wager)| ScoreDelta {
                    player: *player,
                    delta: -wager,
                })
                .collect()
        } else {
            Vec::new()
        };

        Resolution {
            awards,
            mark_used: true,
            close: true,
        }
    }

    /// Validate that Correct/Incorrect are available and return who for.
    fn adjudicable(&self) -> Result<usize, PlayError> {
        let player = self.selected.ok_or(PlayError::NoSelection)?;
        if self.is_final && self.wagers.get(&player).copied().unwrap_or(0) == 0 {
            return Err(PlayError::MissingWager { player });
        }
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular_question(value: i64) -> Question {
        Question {
            id: Uuid::new_v4(),
            category: "Anime".into(),
            value,
            prompt: "X".into(),
            answer: Some("Y".into()),
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
            category: "Finale".into(),
            ..regular_question(0)
        }
    }

    #[test]
    fn opening_resets_dialog_state() {
        let session = PlaySession::open(&regular_question(200));
        assert!(!session.revealed);
        assert!(session.selected.is_none());
        assert!(session.wagers.is_empty());
    }

    #[test]
    fn correct_awards_value_and_marks_used() {
        let mut session = PlaySession::open(&regular_question(200));
        session.select(Some(0));

        let resolution = session.correct().unwrap();
        assert_eq!(resolution.awards, vec![ScoreDelta { player: 0, delta: 200 }]);
        assert!(resolution.mark_used);
        assert!(resolution.close);
    }

    #[test]
    fn incorrect_penalizes_and_leaves_question_open() {
        let mut session = PlaySession::open(&regular_question(200));
        session.select(Some(0));

        let resolution = session.incorrect().unwrap();
        assert_eq!(resolution.awards, vec![ScoreDelta { player: 0, delta: -200 }]);
        assert!(!resolution.mark_used);
        assert!(!resolution.close);
        // Selection clears so another contestant can attempt it.
        assert!(session.selected.is_none());
    }

    #[test]
    fn adjudication_requires_a_selection() {
        let mut session = PlaySession::open(&regular_question(200));
        assert_eq!(session.correct(), Err(PlayError::NoSelection));
        assert_eq!(session.incorrect(), Err(PlayError::NoSelection));
    }

    #[test]
    fn final_effective_value_is_the_wager() {
        let mut session = PlaySession::open(&final_question());
        session.set_wager(0, 500);
        assert_eq!(session.effective_value(0), 500);
        assert_eq!(session.effective_value(1), 0);
    }

    #[test]
    fn final_adjudication_blocks_on_unset_or_zero_wager() {
        let mut session = PlaySession::open(&final_question());
        session.select(Some(0));
        assert_eq!(session.correct(), Err(PlayError::MissingWager { player: 0 }));

        session.set_wager(0, 0);
        assert_eq!(session.correct(), Err(PlayError::MissingWager { player: 0 }));

        session.set_wager(0, 300);
        let resolution = session.correct().unwrap();
        assert_eq!(resolution.awards, vec![ScoreDelta { player: 0, delta: 300 }]);
    }

    #[test]
    fn closing_a_final_burns_positive_wagers() {
        let mut session = PlaySession::open(&final_question());
        session.set_wager(0, 500);
        session.set_wager(1, 300);
        session.set_wager(2, -100);

        let resolution = session.close_unanswered();
        assert_eq!(
            resolution.awards,
            vec![
                ScoreDelta { player: 0, delta: -500 },
                ScoreDelta { player: 1, delta: -300 },
            ]
        );
        assert!(resolution.mark_used);
        assert!(resolution.close);
    }

    #[test]
    fn closing_a_regular_question_changes_no_scores() {
        let session = PlaySession::open(&regular_question(400));
        let resolution = session.close_unanswered();
        assert!(resolution.awards.is_empty());
        assert!(resolution.mark_used);
    }
}
