use std::sync::Arc;

use crate::forum::{
    error::{ForumError, decode_error, internal_error, storage_error},
    ports::{KeyValueStore, SnapshotSink, SnapshotSource},
    state::ForumState,
};

pub const DEFAULT_STORAGE_KEY: &str = "forumData";

/// Reads and writes the whole forum state as one JSON blob under a single
/// key. The blob carries no version; any change to the entity shapes is a
/// breaking change for previously saved data.
#[derive(Clone)]
pub struct ForumPersistence {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ForumPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn with_default_key(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn encode(state: &ForumState) -> Result<String, ForumError> {
        serde_json::to_string(state)
            .map_err(|err| internal_error(format!("failed to serialize forum state: {err}")))
    }

    pub fn decode(blob: &str) -> Result<ForumState, ForumError> {
        serde_json::from_str(blob)
            .map_err(|err| decode_error(format!("failed to parse forum state: {err}")))
    }
}

impl SnapshotSource for ForumPersistence {
    fn load(&self) -> Result<Option<ForumState>, ForumError> {
        let blob = self.store.read(&self.key).map_err(|err| {
            storage_error(format!("failed to read forum state '{}': {err}", self.key))
        })?;
        blob.as_deref().map(Self::decode).transpose()
    }
}

impl SnapshotSink for ForumPersistence {
    fn save(&self, state: &ForumState) -> Result<(), ForumError> {
        let blob = Self::encode(state)?;
        self.store.write(&self.key, &blob).map_err(|err| {
            storage_error(format!("failed to write forum state '{}': {err}", self.key))
        })
    }
}
