use thiserror::Error;

/// High-level phases the board can be in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardPhase {
    /// Authoring mode: the catalog and roster can be edited, clicking a
    /// cell opens the question for editing.
    #[default]
    NotStarted,
    /// Play mode: clicking an unused cell opens it for adjudication, used
    /// cells are inert, authoring is locked.
    InProgress,
}

/// Events that can be applied to the board state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// Replace the catalog with the generated question set and start.
    GenerateGame,
    /// Start play mode with the current catalog as-is.
    StartGame,
    /// Tear the session down: clears roster, catalog, and the started flag.
    Reset,
}

/// Error returned when attempting to apply an invalid transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transition: {event:?} cannot be applied while in {from:?}")]
pub struct InvalidTransition {
    /// The phase the state machine was in when the invalid event was received.
    pub from: BoardPhase,
    /// The event that cannot be applied from this phase.
    pub event: BoardEvent,
}

/// State machine governing the not-started / in-progress board lifecycle.
///
/// Question resolution lives in [`crate::state::play::PlaySession`] and is
/// a self-loop on [`BoardPhase::InProgress`]: resolving a question never
/// changes the top-level phase.
#[derive(Debug, Clone, Default)]
pub struct BoardStateMachine {
    phase: BoardPhase,
}

impl BoardStateMachine {
    /// Create a state machine initialised in the not-started phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate the machine from the persisted started flag.
    pub fn from_started(started: bool) -> Self {
        Self {
            phase: if started {
                BoardPhase::InProgress
            } else {
                BoardPhase::NotStarted
            },
        }
    }

    /// Inspect the current phase.
    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    /// Whether the board is in play mode.
    pub fn is_started(&self) -> bool {
        self.phase == BoardPhase::InProgress
    }

    /// Apply an event, moving the machine to the next phase.
    ///
    /// There is exactly one actor, so transitions are validated and applied
    /// in one synchronous step.
    pub fn apply(&mut self, event: BoardEvent) -> Result<BoardPhase, InvalidTransition> {
        self.phase = self.compute_transition(event)?;
        Ok(self.phase)
    }

    /// Compute a transition from an event if the transition is valid.
    fn compute_transition(&self, event: BoardEvent) -> Result<BoardPhase, InvalidTransition> {
        let next = match (self.phase, event) {
            (BoardPhase::NotStarted, BoardEvent::StartGame) => BoardPhase::InProgress,
            (BoardPhase::NotStarted, BoardEvent::GenerateGame) => BoardPhase::InProgress,
            // Reset is the only teardown path and is accepted from any phase.
            (_, BoardEvent::Reset) => BoardPhase::NotStarted,
            (from, event) => return Err(InvalidTransition { from, event }),
        };

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_not_started() {
        let sm = BoardStateMachine::new();
        assert_eq!(sm.phase(), BoardPhase::NotStarted);
        assert!(!sm.is_started());
    }

    #[test]
    fn start_game_enters_play_mode() {
        let mut sm = BoardStateMachine::new();
        assert_eq!(sm.apply(BoardEvent::StartGame), Ok(BoardPhase::InProgress));
        assert!(sm.is_started());
    }

    #[test]
    fn generate_game_enters_play_mode() {
        let mut sm = BoardStateMachine::new();
        assert_eq!(sm.apply(BoardEvent::GenerateGame), Ok(BoardPhase::InProgress));
    }

    #[test]
    fn starting_twice_is_rejected() {
        let mut sm = BoardStateMachine::new();
        sm.apply(BoardEvent::StartGame).unwrap();

        let err = sm.apply(BoardEvent::StartGame).unwrap_err();
        assert_eq!(err.from, BoardPhase::InProgress);
        assert_eq!(err.event, BoardEvent::StartGame);
    }

    #[test]
    fn reset_is_accepted_from_both_phases() {
        let mut sm = BoardStateMachine::new();
        assert_eq!(sm.apply(BoardEvent::Reset), Ok(BoardPhase::NotStarted));

        sm.apply(BoardEvent::StartGame).unwrap();
        assert_eq!(sm.apply(BoardEvent::Reset), Ok(BoardPhase::NotStarted));
    }

    #[test]
    fn rehydrates_from_persisted_flag() {
        assert!(BoardStateMachine::from_started(true).is_started());
        assert!(!BoardStateMachine::from_started(false).is_started());
    }
}
