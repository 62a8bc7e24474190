use crate::forum::{error::ForumError, state::ForumState, store::StoreError};

/// Flat key-value storage holding serialized blobs.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}

/// Where a previously saved forum state is read from on activation.
pub trait SnapshotSource: Send + Sync {
    fn load(&self) -> Result<Option<ForumState>, ForumError>;
}

/// Save callback invoked with the full state after every accepted mutation.
pub trait SnapshotSink: Send + Sync {
    fn save(&self, state: &ForumState) -> Result<(), ForumError>;
}
