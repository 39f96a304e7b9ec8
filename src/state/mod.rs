/// Question catalog operations and board layout derivation.
pub mod catalog;
/// Domain types for questions, players, and the game session.
pub mod game;
/// Per-question adjudication session.
pub mod play;
/// Player roster operations.
pub mod roster;
/// Board lifecycle state machine.
pub mod state_machine;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::RwLock;

use crate::{
    config::AppConfig,
    dao::session_store::SessionStore,
    state::{game::GameSession, play::PlaySession, state_machine::BoardStateMachine},
};

pub use self::state_machine::{BoardEvent, BoardPhase, InvalidTransition};

/// Shared handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state owned by the single top-level controller.
///
/// Every component receives the session through this handle rather than
/// ambient globals, so persistence-on-change stays centralized in the
/// service layer.
pub struct AppState {
    config: AppConfig,
    store: Arc<dyn SessionStore>,
    session: RwLock<GameSession>,
    machine: RwLock<BoardStateMachine>,
    play: RwLock<Option<PlaySession>>,
    degraded: AtomicBool,
}

impl AppState {
    /// Wrap a store and a loaded session into a shareable state handle.
    ///
    /// The state machine rehydrates from the persisted started flag so a
    /// reloaded session resumes in the phase it was left in.
    pub fn new(config: AppConfig, store: Arc<dyn SessionStore>, session: GameSession) -> SharedState {
        let machine = BoardStateMachine::from_started(session.started);
        Arc::new(Self {
            config,
            store,
            session: RwLock::new(session),
            machine: RwLock::new(machine),
            play: RwLock::new(None),
            degraded: AtomicBool::new(false),
        })
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle to the session store.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// The mutable game session (roster, catalog, started flag).
    pub fn session(&self) -> &RwLock<GameSession> {
        &self.session
    }

    /// The currently open adjudication session, if any.
    pub fn play(&self) -> &RwLock<Option<PlaySession>> {
        &self.play
    }

    /// Snapshot the current board phase.
    pub async fn phase(&self) -> BoardPhase {
        self.machine.read().await.phase()
    }

    /// Apply a lifecycle event to the board state machine.
    pub async fn apply_event(&self, event: BoardEvent) -> Result<BoardPhase, InvalidTransition> {
        let mut machine = self.machine.write().await;
        machine.apply(event)
    }

    /// Record whether the last store write succeeded. Durability loss never
    /// interrupts the in-memory session; it only flips the health flag.
    pub fn set_degraded(&self, value: bool) {
        self.degraded.store(value, Ordering::Relaxed);
    }

    /// Whether a store write has failed since the last successful one.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }
}
