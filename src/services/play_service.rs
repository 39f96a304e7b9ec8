//! Business logic for the question play/adjudication dialog: opening an
//! unused question, toggling the answer, selecting contestants, wagering,
//! and applying resolutions to the roster and catalog.

use tracing::warn;
use uuid::Uuid;

use crate::{
    dto::{
        play::{PlayView, ResolutionResponse, SelectPlayerRequest, WagerRequest},
        session::ActionResponse,
    },
    error::ServiceError,
    services::{media, session_service},
    state::{
        BoardPhase, SharedState, catalog,
        play::{PlaySession, Resolution},
        roster,
    },
};

/// Open an unused question for adjudication.
///
/// Requires play mode, no other open dialog, and an unused question; a
/// used question is inert.
pub async fn open(state: &SharedState, id: Uuid) -> Result<PlayView, ServiceError> {
    if state.phase().await != BoardPhase::InProgress {
        return Err(ServiceError::InvalidState(
            "questions open for play only after the game has started".into(),
        ));
    }

    let session = {
        let game = state.session().read().await;
        let question = catalog::find(&game.questions, id)
            .ok_or_else(|| ServiceError::NotFound(format!("question `{id}` not found")))?;
        if question.used {
            return Err(ServiceError::InvalidState(
                "question has already been played".into(),
            ));
        }
        PlaySession::open(question)
    };

    {
        let mut play = state.play().write().await;
        if play.is_some() {
            return Err(ServiceError::InvalidState(
                "another question is already open".into(),
            ));
        }
        *play = Some(session);
    }

    view(state).await
}

/// Project the open dialog for the play surface. Answers are included
/// only while revealed.
pub async fn view(state: &SharedState) -> Result<PlayView, ServiceError> {
    let session = required_session(state).await?;
    let game = state.session().read().await;
    let question = catalog::find(&game.questions, session.question_id)
        .ok_or_else(|| ServiceError::NotFound("the open question no longer exists".into()))?;

    let base = &state.config().media_base_url;
    Ok(PlayView {
        question_id: question.id,
        category: question.category.clone(),
        value: question.value,
        is_final: question.is_final,
        prompt: question.prompt.clone(),
        image_url: question
            .image
            .as_deref()
            .map(|image| media::resolve_media_url(image, base)),
        audio_url: question
            .audio
            .as_deref()
            .map(|audio| media::resolve_media_url(audio, base)),
        revealed: session.revealed,
        answer: session.revealed.then(|| question.answer.clone()).flatten(),
        answers: session.revealed.then(|| question.answers.clone()).flatten(),
        selected: session.selected,
        wagers: session.wagers,
    })
}

/// Toggle answer visibility.
pub async fn toggle_reveal(state: &SharedState) -> Result<PlayView, ServiceError> {
    {
        let mut play = state.play().write().await;
        let session = play
            .as_mut()
            .ok_or_else(|| ServiceError::NotFound("no question is open".into()))?;
        session.toggle_reveal();
    }
    view(state).await
}

/// Select the answering contestant, or clear the selection.
pub async fn select_player(
    state: &SharedState,
    request: SelectPlayerRequest,
) -> Result<PlayView, ServiceError> {
    if let Some(index) = request.player {
        let roster_len = state.session().read().await.players.len();
        if index >= roster_len {
            return Err(ServiceError::InvalidInput(format!(
                "no player at index {index}"
            )));
        }
    }

    {
        let mut play = state.play().write().await;
        let session = play
            .as_mut()
            .ok_or_else(|| ServiceError::NotFound("no question is open".into()))?;
        session.select(request.player);
    }
    view(state).await
}

/// Record a Final Jeopardy wager from raw text input.
pub async fn set_wager(
    state: &SharedState,
    request: WagerRequest,
) -> Result<PlayView, ServiceError> {
    let roster_len = state.session().read().await.players.len();
    if request.player >= roster_len {
        return Err(ServiceError::InvalidInput(format!(
            "no player at index {}",
            request.player
        )));
    }

    {
        let mut play = state.play().write().await;
        let session = play
            .as_mut()
            .ok_or_else(|| ServiceError::NotFound("no question is open".into()))?;
        if !session.is_final {
            return Err(ServiceError::InvalidState(
                "only the Final Jeopardy question takes wagers".into(),
            ));
        }
        session.set_wager(request.player, roster::parse_amount(&request.amount));
    }
    view(state).await
}

/// Award the selected contestant, mark the question used, and close the
/// dialog.
pub async fn correct(state: &SharedState) -> Result<ResolutionResponse, ServiceError> {
    let resolution = {
        let play = state.play().read().await;
        let session = play
            .as_ref()
            .ok_or_else(|| ServiceError::NotFound("no question is open".into()))?;
        session.correct()?
    };
    apply_resolution(state, resolution).await
}

/// Penalize the selected contestant and clear the selection, leaving the
/// question open and unused for another attempt.
pub async fn incorrect(state: &SharedState) -> Result<ResolutionResponse, ServiceError> {
    let resolution = {
        let mut play = state.play().write().await;
        let session = play
            .as_mut()
            .ok_or_else(|| ServiceError::NotFound("no question is open".into()))?;
        session.incorrect()?
    };
    apply_resolution(state, resolution).await
}

/// Close the question with nobody correct: Final Jeopardy burns every
/// positive wager, a regular question just becomes used.
pub async fn close_unanswered(state: &SharedState) -> Result<ResolutionResponse, ServiceError> {
    let resolution = {
        let play = state.play().read().await;
        let session = play
            .as_ref()
            .ok_or_else(|| ServiceError::NotFound("no question is open".into()))?;
        session.close_unanswered()
    };
    apply_resolution(state, resolution).await
}

/// Discard the dialog without resolving. The question stays unused and
/// selectable; this is the only penalty-free exit.
pub async fn cancel(state: &SharedState) -> Result<ActionResponse, ServiceError> {
    let mut play = state.play().write().await;
    if play.take().is_none() {
        return Err(ServiceError::NotFound("no question is open".into()));
    }
    Ok(ActionResponse::new("dismissed"))
}

/// Apply a resolution to the roster and catalog, persist the touched
/// slots, and close the dialog when the resolution says so.
async fn apply_resolution(
    state: &SharedState,
    resolution: Resolution,
) -> Result<ResolutionResponse, ServiceError> {
    let question_id = {
        let play = state.play().read().await;
        play.as_ref().map(|session| session.question_id)
    };

    let scores = {
        let mut game = state.session().write().await;
        for award in &resolution.awards {
            // A contestant removed mid-dialog makes the index stale; the
            // award degrades to a no-op rather than failing the action.
            if roster::award(&mut game.players, award.player, award.delta).is_err() {
                warn!(player = award.player, "award targets a removed player; skipping");
            }
        }
        if resolution.mark_used {
            if let Some(id) = question_id {
                catalog::mark_used(&mut game.questions, id);
            }
        }
        game.players.iter().map(Into::into).collect()
    };

    if !resolution.awards.is_empty() {
        session_service::persist_players(state).await;
    }
    if resolution.mark_used {
        session_service::persist_questions(state).await;
    }
    if resolution.close {
        let mut play = state.play().write().await;
        play.take();
    }

    Ok(ResolutionResponse {
        closed: resolution.close,
        question_used: resolution.mark_used,
        scores,
    })
}

async fn required_session(state: &SharedState) -> Result<PlaySession, ServiceError> {
    let play = state.play().read().await;
    play.clone()
        .ok_or_else(|| ServiceError::NotFound("no question is open".into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::{TempDir, tempdir};
    use uuid::Uuid;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::session_store::file::FileSessionStore,
        state::{AppState, game::{GameSession, Player, Question}},
    };

    // The TempDir guard rides along so the store's directory outlives
    // the assertions.
    async fn play_state(questions: Vec<Question>, players: Vec<Player>) -> (SharedState, TempDir) {
        let dir = tempdir().unwrap();
        let store = Arc::new(FileSessionStore::open(dir.path()).await.unwrap());
        let state = AppState::new(
            AppConfig::default(),
            store,
            GameSession {
                players,
                questions,
                started: true,
            },
        );
        (state, dir)
    }

    fn question(value: i64) -> Question {
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
            ..question(0)
        }
    }

    fn player(name: &str) -> Player {
        Player {
            id: Uuid::new_v4(),
            name: name.into(),
            score: 0,
        }
    }

    #[tokio::test]
    async fn correct_awards_value_marks_used_and_closes() {
        let q = question(200);
        let id = q.id;
        let (state, _dir) = play_state(vec![q], vec![player("A")]).await;

        open(&state, id).await.unwrap();
        select_player(&state, SelectPlayerRequest { player: Some(0) })
            .await
            .unwrap();
        let outcome = correct(&state).await.unwrap();

        assert!(outcome.closed);
        assert!(outcome.question_used);
        assert_eq!(outcome.scores[0].score, 200);
        assert!(state.session().read().await.questions[0].used);
        assert!(state.play().read().await.is_none());
    }

    #[tokio::test]
    async fn incorrect_penalizes_and_leaves_question_selectable() {
        let q = question(200);
        let id = q.id;
        let (state, _dir) = play_state(vec![q], vec![player("A")]).await;

        open(&state, id).await.unwrap();
        select_player(&state, SelectPlayerRequest { player: Some(0) })
            .await
            .unwrap();
        let outcome = incorrect(&state).await.unwrap();

        assert!(!outcome.closed);
        assert!(!outcome.question_used);
        assert_eq!(outcome.scores[0].score, -200);
        assert!(!state.session().read().await.questions[0].used);
        // The dialog is still open with the selection cleared.
        let view = view(&state).await.unwrap();
        assert_eq!(view.selected, None);
    }

    #[tokio::test]
    async fn closing_a_final_burns_positive_wagers() {
        let q = final_question();
        let id = q.id;
        let (state, _dir) = play_state(vec![q], vec![player("A"), player("B")]).await;

        open(&state, id).await.unwrap();
        set_wager(&state, WagerRequest { player: 0, amount: "500".into() })
            .await
            .unwrap();
        set_wager(&state, WagerRequest { player: 1, amount: "300".into() })
            .await
            .unwrap();

        let outcome = close_unanswered(&state).await.unwrap();
        assert!(outcome.closed && outcome.question_used);
        assert_eq!(outcome.scores[0].score, -500);
        assert_eq!(outcome.scores[1].score, -300);
    }

    #[tokio::test]
    async fn final_adjudication_requires_a_nonzero_wager() {
        let q = final_question();
        let id = q.id;
        let (state, _dir) = play_state(vec![q], vec![player("A")]).await;

        open(&state, id).await.unwrap();
        select_player(&state, SelectPlayerRequest { player: Some(0) })
            .await
            .unwrap();
        assert!(correct(&state).await.is_err());

        set_wager(&state, WagerRequest { player: 0, amount: "nonsense".into() })
            .await
            .unwrap();
        assert!(correct(&state).await.is_err());

        set_wager(&state, WagerRequest { player: 0, amount: "400".into() })
            .await
            .unwrap();
        let outcome = correct(&state).await.unwrap();
        assert_eq!(outcome.scores[0].score, 400);
    }

    #[tokio::test]
    async fn used_questions_are_inert() {
        let mut q = question(100);
        q.used = true;
        let id = q.id;
        let (state, _dir) = play_state(vec![q], vec![player("A")]).await;

        assert!(open(&state, id).await.is_err());
    }

    #[tokio::test]
    async fn cancel_discards_without_touching_scores() {
        let q = question(100);
        let id = q.id;
        let (state, _dir) = play_state(vec![q], vec![player("A")]).await;

        open(&state, id).await.unwrap();
        cancel(&state).await.unwrap();

        let game = state.session().read().await;
        assert!(!game.questions[0].used);
        assert_eq!(game.players[0].score, 0);
        // A fresh open succeeds because the question is still unused.
        drop(game);
        assert!(open(&state, id).await.is_ok());
    }

    #[tokio::test]
    async fn answers_are_hidden_until_revealed() {
        let q = question(100);
        let id = q.id;
        let (state, _dir) = play_state(vec![q], vec![player("A")]).await;

        let opened = open(&state, id).await.unwrap();
        assert_eq!(opened.answer, None);

        let revealed = toggle_reveal(&state).await.unwrap();
        assert_eq!(revealed.answer.as_deref(), Some("Y"));
    }

    #[tokio::test]
    async fn only_one_dialog_at_a_time() {
        let q1 = question(100);
        let q2 = question(200);
        let (id1, id2) = (q1.id, q2.id);
        let (state, _dir) = play_state(vec![q1, q2], vec![player("A")]).await;

        open(&state, id1).await.unwrap();
        assert!(open(&state, id2).await.is_err());
    }
}
