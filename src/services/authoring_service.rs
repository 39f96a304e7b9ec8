//! Question authoring: validating and normalizing raw form fields into
//! catalog entries, and the edit/delete flow gated to authoring mode.

use uuid::Uuid;

use crate::{
    dto::question::{QuestionInput, QuestionSummary},
    error::ServiceError,
    services::session_service,
    state::{BoardPhase, SharedState, catalog, game::Question},
};

/// Path prefix under which uploaded audio clips are served.
const AUDIO_ASSETS_PATH: &str = "/audio";

/// Fetch the full authoring payload for a question, as the edit form
/// expects it.
pub async fn get_question(state: &SharedState, id: Uuid) -> Result<QuestionSummary, ServiceError> {
    let session = state.session().read().await;
    catalog::find(&session.questions, id)
        .map(Into::into)
        .ok_or_else(|| ServiceError::NotFound(format!("question `{id}` not found")))
}

/// Validate and append a new question to the catalog.
pub async fn create_question(
    state: &SharedState,
    input: QuestionInput,
) -> Result<QuestionSummary, ServiceError> {
    ensure_authoring_mode(state).await?;

    let summary = {
        let mut session = state.session().write().await;
        let question = build_question(&input, None)?;
        ensure_single_final(&session.questions, &question)?;
        let summary = QuestionSummary::from(&question);
        catalog::upsert(&mut session.questions, None, question);
        summary
    };

    session_service::persist_questions(state).await;
    Ok(summary)
}

/// Validate and replace an existing question in place.
pub async fn update_question(
    state: &SharedState,
    id: Uuid,
    input: QuestionInput,
) -> Result<QuestionSummary, ServiceError> {
    ensure_authoring_mode(state).await?;

    let summary = {
        let mut session = state.session().write().await;
        let existing = catalog::find(&session.questions, id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("question `{id}` not found")))?;

        let question = build_question(&input, Some(&existing))?;
        let summary = QuestionSummary::from(&question);
        catalog::upsert(&mut session.questions, Some(id), question);
        summary
    };

    session_service::persist_questions(state).await;
    Ok(summary)
}

/// Delete a question from the catalog. Available only while editing, i.e.
/// before the game has started.
pub async fn delete_question(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    ensure_authoring_mode(state).await?;

    {
        let mut session = state.session().write().await;
        if catalog::find(&session.questions, id).is_none() {
            return Err(ServiceError::NotFound(format!("question `{id}` not found")));
        }
        catalog::remove(&mut session.questions, id);
    }

    session_service::persist_questions(state).await;
    Ok(())
}

/// Normalize raw form fields into a catalog entry.
///
/// Rejected when the category or prompt is blank, or when both answer
/// fields are blank. The multi-answer field splits on newlines with blank
/// lines dropped; a non-empty result wins over the single answer so
/// exactly one of the two is ever present.
fn build_question(
    input: &QuestionInput,
    editing: Option<&Question>,
) -> Result<Question, ServiceError> {
    let category = input.category.trim();
    let prompt = input.prompt.trim();
    let single_answer = input.answer.trim();
    let answers: Vec<String> = input
        .answers_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    if category.is_empty() || prompt.is_empty() || (single_answer.is_empty() && answers.is_empty())
    {
        return Err(ServiceError::InvalidInput(
            "category, question, and an answer are required".into(),
        ));
    }

    let (answer, answers) = if answers.is_empty() {
        (Some(single_answer.to_owned()), None)
    } else {
        (None, Some(answers))
    };

    let image = Some(input.image.trim())
        .filter(|image| !image.is_empty())
        .map(str::to_owned);
    let audio = Some(input.audio_file.trim())
        .filter(|audio| !audio.is_empty())
        .map(|file| format!("{AUDIO_ASSETS_PATH}/{file}"));

    Ok(Question {
        id: editing.map(|q| q.id).unwrap_or_else(Uuid::new_v4),
        category: category.to_owned(),
        value: input.value,
        prompt: prompt.to_owned(),
        answer,
        answers,
        is_final: editing.map(|q| q.is_final).unwrap_or(input.create_as_final),
        used: editing.map(|q| q.used).unwrap_or(false),
        image,
        audio,
    })
}

/// At most one question in the catalog carries the final marker.
fn ensure_single_final(questions: &[Question], next: &Question) -> Result<(), ServiceError> {
    if !next.is_final {
        return Ok(());
    }
    match catalog::find_final(questions) {
        Some(existing) if existing.id != next.id => Err(ServiceError::InvalidInput(
            "a Final Jeopardy question already exists".into(),
        )),
        _ => Ok(()),
    }
}

/// Catalog edits are locked once the game has started, preserving the
/// integrity of an in-progress board.
async fn ensure_authoring_mode(state: &SharedState) -> Result<(), ServiceError> {
    match state.phase().await {
        BoardPhase::NotStarted => Ok(()),
        BoardPhase::InProgress => Err(ServiceError::InvalidState(
            "the catalog cannot be edited once the game has started".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(category: &str, prompt: &str, answer: &str) -> QuestionInput {
        QuestionInput {
            category: category.into(),
            prompt: prompt.into(),
            answer: answer.into(),
            value: 100,
            ..QuestionInput::default()
        }
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        assert!(build_question(&input("", "prompt", "a"), None).is_err());
        assert!(build_question(&input("cat", "  ", "a"), None).is_err());
        assert!(build_question(&input("cat", "prompt", "  "), None).is_err());
    }

    #[test]
    fn multi_answer_text_takes_precedence_over_single_answer() {
        let mut fields = input("Anime", "Name them all", "single");
        fields.answers_text = "one\n\n  two  \nthree\n".into();

        let question = build_question(&fields, None).unwrap();
        assert_eq!(question.answer, None);
        assert_eq!(
            question.answers,
            Some(vec!["one".into(), "two".into(), "three".into()])
        );
    }

    #[test]
    fn single_answer_is_used_when_multi_answer_is_blank() {
        let question = build_question(&input("Anime", "Who?", "  Luffy  "), None).unwrap();
        assert_eq!(question.answer.as_deref(), Some("Luffy"));
        assert_eq!(question.answers, None);
    }

    #[test]
    fn audio_file_is_namespaced_and_image_kept_verbatim() {
        let mut fields = input("Anime", "Listen", "op");
        fields.audio_file = " clip1.mp3 ".into();
        fields.image = "https://cdn.example/still.png".into();

        let question = build_question(&fields, None).unwrap();
        assert_eq!(question.audio.as_deref(), Some("/audio/clip1.mp3"));
        assert_eq!(question.image.as_deref(), Some("https://cdn.example/still.png"));
    }

    #[test]
    fn blank_media_fields_stay_absent() {
        let question = build_question(&input("Anime", "Who?", "Luffy"), None).unwrap();
        assert_eq!(question.image, None);
        assert_eq!(question.audio, None);
    }

    #[test]
    fn final_marker_is_inherited_from_the_edited_question() {
        let mut fields = input("Finale", "Last one", "answer");
        fields.create_as_final = false;

        let existing = build_question(
            &QuestionInput {
                create_as_final: true,
                ..input("Finale", "Original", "answer")
            },
            None,
        )
        .unwrap();

        let edited = build_question(&fields, Some(&existing)).unwrap();
        assert!(edited.is_final);
        assert_eq!(edited.id, existing.id);
    }

    #[test]
    fn second_final_is_rejected() {
        let first = build_question(
            &QuestionInput {
                create_as_final: true,
                ..input("Finale", "Original", "answer")
            },
            None,
        )
        .unwrap();
        let second = build_question(
            &QuestionInput {
                create_as_final: true,
                ..input("Finale", "Another", "answer")
            },
            None,
        )
        .unwrap();

        let questions = vec![first.clone()];
        assert!(ensure_single_final(&questions, &second).is_err());
        // Re-saving the existing final is fine.
        assert!(ensure_single_final(&questions, &first).is_ok());
    }
}
