pub mod clock;
pub mod engine;
pub mod error;
pub mod noop;
pub mod persistence;
pub mod ports;
pub mod query;
pub mod seed;
pub mod session;
pub mod state;
pub mod store;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock, time_ago};
pub use engine::{DEFAULT_AUTHOR_NAME, ForumEngine, LoadOutcome};
pub use error::{ForumError, ForumErrorKind};
pub use noop::NoopSnapshotSink;
pub use persistence::{DEFAULT_STORAGE_KEY, ForumPersistence};
pub use ports::{KeyValueStore, SnapshotSink, SnapshotSource};
pub use query::{filter_categories, filter_posts, parse_tags};
pub use session::{ComposeDraft, ForumSession, ForumView};
pub use state::ForumState;
pub use store::{FileKeyValueStore, MemoryKeyValueStore, StoreError};
pub use types::{
    Author, Category, CategoryId, Comment, CreatePostRequest, Post, PostId, TimestampMs,
};
