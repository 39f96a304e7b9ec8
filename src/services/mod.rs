/// Question authoring: normalization, validation, and catalog edits.
pub mod authoring_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Builtin generated question set and its file override.
pub mod generated;
/// Health check service.
pub mod health_service;
/// Media reference resolution for question assets.
pub mod media;
/// Question play dialog: reveal, selection, wagers, adjudication.
pub mod play_service;
/// Roster management and score mutations.
pub mod roster_service;
/// Session lifecycle and persistence mirroring.
pub mod session_service;
