//! Session lifecycle: loading from the store at startup, mirroring every
//! committed mutation back into it, and the start / generate / reset
//! transitions.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::{
    dao::{
        models::{PlayerEntity, QuestionEntity},
        session_store::{PLAYERS_SLOT, QUESTIONS_SLOT, STARTED_SLOT, SessionStore},
    },
    dto::{
        board::BoardView,
        session::{ActionResponse, SessionSummary},
    },
    error::ServiceError,
    services::generated,
    state::{BoardEvent, SharedState, catalog, game::GameSession},
};

/// Rebuild the session from the persisted slots, substituting defaults
/// for missing or malformed content. Never fails: a corrupt store yields
/// a fresh session.
pub async fn load_session(store: &Arc<dyn SessionStore>) -> GameSession {
    let players: Vec<PlayerEntity> = read_slot(store, PLAYERS_SLOT).await.unwrap_or_default();
    let questions: Vec<QuestionEntity> = read_slot(store, QUESTIONS_SLOT).await.unwrap_or_default();
    let started: bool = read_slot(store, STARTED_SLOT).await.unwrap_or_default();

    GameSession {
        players: players.into_iter().map(Into::into).collect(),
        questions: questions.into_iter().map(Into::into).collect(),
        started,
    }
}

/// Summarize the session for the top-level surface.
pub async fn summary(state: &SharedState) -> SessionSummary {
    let session = state.session().read().await;
    SessionSummary {
        started: session.started,
        players: session.players.iter().map(Into::into).collect(),
        question_count: session.questions.len(),
        has_final: catalog::find_final(&session.questions).is_some(),
    }
}

/// Project the catalog into the grid layout the board renders from.
pub async fn board_view(state: &SharedState) -> BoardView {
    let session = state.session().read().await;
    catalog::layout(&session.questions).into()
}

/// Enter play mode with the current catalog as-is.
pub async fn start_game(state: &SharedState) -> Result<SessionSummary, ServiceError> {
    state.apply_event(BoardEvent::StartGame).await?;
    {
        let mut session = state.session().write().await;
        session.started = true;
    }
    persist_started(state).await;
    info!("game started with the authored catalog");
    Ok(summary(state).await)
}

/// Replace the catalog with the generated question set and enter play
/// mode in one transition.
pub async fn generate_game(state: &SharedState) -> Result<SessionSummary, ServiceError> {
    state.apply_event(BoardEvent::GenerateGame).await?;

    let catalog_entries = generated::generated_catalog(state.config());
    {
        let mut session = state.session().write().await;
        session.questions = catalog_entries;
        session.started = true;
    }
    persist_questions(state).await;
    persist_started(state).await;
    info!("generated game loaded and started");
    Ok(summary(state).await)
}

/// Tear the session down: clears roster, catalog, and the started flag,
/// and removes all three persisted slots. The only teardown path.
pub async fn reset(state: &SharedState) -> Result<ActionResponse, ServiceError> {
    state.apply_event(BoardEvent::Reset).await?;

    {
        let mut session = state.session().write().await;
        *session = GameSession::default();
    }
    {
        let mut play = state.play().write().await;
        play.take();
    }

    for slot in [PLAYERS_SLOT, QUESTIONS_SLOT, STARTED_SLOT] {
        if let Err(err) = state.store().remove(slot).await {
            warn!(slot, error = %err, "failed to clear persisted slot during reset");
            state.set_degraded(true);
        }
    }

    info!("session reset");
    Ok(ActionResponse::new("reset"))
}

/// Mirror the roster into its store slot.
pub async fn persist_players(state: &SharedState) {
    let entities: Vec<PlayerEntity> = {
        let session = state.session().read().await;
        session.players.iter().cloned().map(Into::into).collect()
    };
    write_slot(state, PLAYERS_SLOT, &entities).await;
}

/// Mirror the catalog into its store slot.
pub async fn persist_questions(state: &SharedState) {
    let entities: Vec<QuestionEntity> = {
        let session = state.session().read().await;
        session.questions.iter().cloned().map(Into::into).collect()
    };
    write_slot(state, QUESTIONS_SLOT, &entities).await;
}

/// Mirror the started flag into its store slot.
pub async fn persist_started(state: &SharedState) {
    let started = state.session().read().await.started;
    write_slot(state, STARTED_SLOT, &started).await;
}

/// Write one slot, degrading on failure instead of surfacing an error:
/// the in-memory session stays usable for the rest of the session even if
/// durability is lost.
async fn write_slot<T: Serialize>(state: &SharedState, slot: &str, value: &T) {
    let payload = match serde_json::to_value(value) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(slot, error = %err, "failed to encode slot payload");
            state.set_degraded(true);
            return;
        }
    };

    match state.store().set(slot, payload).await {
        Ok(()) => state.set_degraded(false),
        Err(err) => {
            warn!(slot, error = %err, "failed to persist slot; continuing in memory");
            state.set_degraded(true);
        }
    }
}

async fn read_slot<T: DeserializeOwned>(store: &Arc<dyn SessionStore>, slot: &str) -> Option<T> {
    let value = store.get(slot).await?;
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(slot, error = %err, "persisted slot does not match its schema; using defaults");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::session_store::file::FileSessionStore,
        state::{AppState, BoardPhase, game::Player},
    };

    async fn store_in(dir: &std::path::Path) -> Arc<dyn SessionStore> {
        Arc::new(FileSessionStore::open(dir).await.unwrap())
    }

    #[tokio::test]
    async fn empty_store_loads_a_default_session() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path()).await;

        let session = load_session(&store).await;
        assert_eq!(session, GameSession::default());
    }

    #[tokio::test]
    async fn malformed_questions_slot_yields_empty_catalog() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path()).await;

        store.set(QUESTIONS_SLOT, json!({"not": "a list"})).await.unwrap();
        store.set(STARTED_SLOT, json!(true)).await.unwrap();

        let session = load_session(&store).await;
        assert!(session.questions.is_empty());
        assert!(session.started);
    }

    #[tokio::test]
    async fn players_round_trip_through_the_store() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path()).await;

        let entities = vec![PlayerEntity {
            id: uuid::Uuid::new_v4(),
            name: "A".into(),
            score: -200,
        }];
        store
            .set(PLAYERS_SLOT, serde_json::to_value(&entities).unwrap())
            .await
            .unwrap();

        let session = load_session(&store).await;
        assert_eq!(session.players.len(), 1);
        assert_eq!(session.players[0].name, "A");
        assert_eq!(session.players[0].score, -200);
    }

    #[tokio::test]
    async fn reset_restores_defaults_and_clears_all_slots() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path()).await;
        let state = AppState::new(
            AppConfig::default(),
            store,
            GameSession {
                players: vec![Player::numbered(1), Player::numbered(2)],
                questions: generated::generated_catalog(&AppConfig::default()),
                started: true,
            },
        );

        persist_players(&state).await;
        persist_questions(&state).await;
        persist_started(&state).await;
        for slot in [PLAYERS_SLOT, QUESTIONS_SLOT, STARTED_SLOT] {
            assert!(state.store().get(slot).await.is_some());
        }

        reset(&state).await.unwrap();

        assert_eq!(*state.session().read().await, GameSession::default());
        assert_eq!(state.phase().await, BoardPhase::NotStarted);
        for slot in [PLAYERS_SLOT, QUESTIONS_SLOT, STARTED_SLOT] {
            assert!(state.store().get(slot).await.is_none());
        }
    }
}
