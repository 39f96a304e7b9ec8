use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Jeopardy Board Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::board::get_board,
        crate::routes::session::get_session,
        crate::routes::session::start_game,
        crate::routes::session::generate_game,
        crate::routes::session::reset_game,
        crate::routes::players::list_players,
        crate::routes::players::add_player,
        crate::routes::players::rename_player,
        crate::routes::players::remove_player,
        crate::routes::players::set_score,
        crate::routes::questions::get_question,
        crate::routes::questions::create_question,
        crate::routes::questions::update_question,
        crate::routes::questions::delete_question,
        crate::routes::play::get_play,
        crate::routes::play::open_question,
        crate::routes::play::toggle_reveal,
        crate::routes::play::select_player,
        crate::routes::play::set_wager,
        crate::routes::play::mark_correct,
        crate::routes::play::mark_incorrect,
        crate::routes::play::close_question,
        crate::routes::play::cancel_play,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::board::BoardView,
            crate::dto::board::BoardColumn,
            crate::dto::board::CellView,
            crate::dto::board::FinalCellView,
            crate::dto::session::SessionSummary,
            crate::dto::session::ActionResponse,
            crate::dto::player::PlayerSummary,
            crate::dto::player::RenamePlayerRequest,
            crate::dto::player::SetScoreRequest,
            crate::dto::player::ScoreUpdateResponse,
            crate::dto::question::QuestionInput,
            crate::dto::question::QuestionSummary,
            crate::dto::play::PlayView,
            crate::dto::play::SelectPlayerRequest,
            crate::dto::play::WagerRequest,
            crate::dto::play::ResolutionResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "board", description = "Board grid projection"),
        (name = "session", description = "Game lifecycle and session summary"),
        (name = "players", description = "Roster and scoreboard management"),
        (name = "questions", description = "Question authoring"),
        (name = "play", description = "Question play and adjudication"),
    )
)]
pub struct ApiDoc;
