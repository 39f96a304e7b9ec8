/// Persisted slot model definitions.
pub mod models;
/// Session slot storage and retrieval operations.
pub mod session_store;
/// Storage abstraction error types.
pub mod storage;
