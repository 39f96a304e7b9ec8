//! File-backed session store keeping one JSON file per slot.

use std::path::{Path, PathBuf};

use futures::future::BoxFuture;
use serde_json::Value;
use tokio::fs;
use tracing::warn;

use crate::dao::{
    session_store::SessionStore,
    storage::{StorageError, StorageResult},
};

/// Session store persisting each slot as `<dir>/<slot>.json`.
///
/// Slots are a handful of small named documents, written after every
/// committed mutation and read once at startup.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Open a store rooted at `dir`, creating the directory when missing.
    pub async fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|source| {
            StorageError::unavailable("*", format!("creating {}", dir.display()), source)
        })?;
        Ok(Self { dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, slot: &str) -> BoxFuture<'static, Option<Value>> {
        let path = self.slot_path(slot);
        let slot = slot.to_owned();
        Box::pin(async move { read_slot(&path, &slot).await })
    }

    fn set(&self, slot: &str, value: Value) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.slot_path(slot);
        let slot = slot.to_owned();
        Box::pin(async move {
            let payload = serde_json::to_vec_pretty(&value)
                .map_err(|source| StorageError::Encode {
                    slot: slot.clone(),
                    source,
                })?;
            fs::write(&path, payload).await.map_err(|source| {
                StorageError::unavailable(slot, format!("writing {}", path.display()), source)
            })
        })
    }

    fn remove(&self, slot: &str) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.slot_path(slot);
        let slot = slot.to_owned();
        Box::pin(async move {
            match fs::remove_file(&path).await {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(source) => Err(StorageError::unavailable(
                    slot,
                    format!("removing {}", path.display()),
                    source,
                )),
            }
        })
    }
}

/// Read and parse a slot file, degrading missing or corrupt content to `None`.
async fn read_slot(path: &Path, slot: &str) -> Option<Value> {
    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(slot, path = %path.display(), error = %err, "failed to read slot; treating as absent");
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(slot, path = %path.display(), error = %err, "slot holds malformed JSON; treating as absent");
            None
        }
    }
}
