use crate::forum::{error::ForumError, ports::SnapshotSink, state::ForumState};

#[derive(Debug, Clone, Default)]
pub struct NoopSnapshotSink;

impl SnapshotSink for NoopSnapshotSink {
    fn save(&self, _state: &ForumState) -> Result<(), ForumError> {
        Ok(())
    }
}
