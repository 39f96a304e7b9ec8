use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::question::{QuestionInput, QuestionSummary},
    error::AppError,
    services::authoring_service,
    state::SharedState,
};

/// Fetch a question in its authoring form for the edit dialog.
#[utoipa::path(
    get,
    path = "/questions/{id}",
    tag = "questions",
    params(("id" = String, Path, description = "Identifier of the question")),
    responses(
        (status = 200, description = "Question", body = QuestionSummary),
        (status = 404, description = "Question not found")
    )
)]
pub async fn get_question(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionSummary>, AppError> {
    Ok(Json(authoring_service::get_question(&state, id).await?))
}

/// Create a question from raw authoring form fields.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    request_body = QuestionInput,
    responses(
        (status = 201, description = "Question created", body = QuestionSummary),
        (status = 400, description = "Missing category, prompt, or answer"),
        (status = 409, description = "Editing closed or duplicate final question")
    )
)]
pub async fn create_question(
    State(state): State<SharedState>,
    Json(input): Json<QuestionInput>,
) -> Result<(StatusCode, Json<QuestionSummary>), AppError> {
    let summary = authoring_service::create_question(&state, input).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Edit a question in place, keeping its identity and used flag.
#[utoipa::path(
    put,
    path = "/questions/{id}",
    tag = "questions",
    params(("id" = String, Path, description = "Identifier of the question")),
    request_body = QuestionInput,
    responses(
        (status = 200, description = "Question updated", body = QuestionSummary),
        (status = 400, description = "Missing category, prompt, or answer"),
        (status = 404, description = "Question not found"),
        (status = 409, description = "Editing closed")
    )
)]
pub async fn update_question(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(input): Json<QuestionInput>,
) -> Result<Json<QuestionSummary>, AppError> {
    Ok(Json(
        authoring_service::update_question(&state, id, input).await?,
    ))
}

/// Delete a question from the catalog.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(("id" = String, Path, description = "Identifier of the question")),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 404, description = "Question not found"),
        (status = 409, description = "Editing closed")
    )
)]
pub async fn delete_question(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    authoring_service::delete_question(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Configure the question authoring routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/questions", post(create_question))
        .route(
            "/questions/{id}",
            get(get_question)
                .put(update_question)
                .delete(delete_question),
        )
}
