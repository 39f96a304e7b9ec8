use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the current health payload. The service degrades rather
/// than failing when the session store rejects writes, and this is where
/// that condition surfaces.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    if state.is_degraded() {
        HealthResponse::degraded()
    } else {
        HealthResponse::ok()
    }
}
