/// Board grid projections.
pub mod board;
/// Health response payload.
pub mod health;
/// Adjudication dialog payloads.
pub mod play;
/// Roster payloads.
pub mod player;
/// Authoring payloads.
pub mod question;
/// Session lifecycle payloads.
pub mod session;
