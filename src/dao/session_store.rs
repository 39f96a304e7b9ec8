pub mod file;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::dao::storage::StorageResult;

/// Slot holding the persisted player roster.
pub const PLAYERS_SLOT: &str = "players";
/// Slot holding the persisted question catalog.
pub const QUESTIONS_SLOT: &str = "questions";
/// Slot holding the persisted started flag.
pub const STARTED_SLOT: &str = "gameStarted";

/// Abstraction over the persistence layer for named session slots.
///
/// A slot holds one JSON document. Readers must tolerate missing and
/// malformed slots by yielding `None`; the caller substitutes its own
/// default, never an error.
pub trait SessionStore: Send + Sync {
    /// Read the value stored in `slot`, or `None` when absent or unreadable.
    fn get(&self, slot: &str) -> BoxFuture<'static, Option<Value>>;
    /// Replace the value stored in `slot`.
    fn set(&self, slot: &str, value: Value) -> BoxFuture<'static, StorageResult<()>>;
    /// Delete `slot`. Deleting an absent slot is not an error.
    fn remove(&self, slot: &str) -> BoxFuture<'static, StorageResult<()>>;
}
