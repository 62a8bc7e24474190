use std::sync::Arc;

use crate::forum::{
    clock::{Clock, SystemClock, time_ago},
    error::ForumError,
    noop::NoopSnapshotSink,
    ports::{SnapshotSink, SnapshotSource},
    query::{filter_categories, filter_posts},
    seed::seed_state,
    session::{ForumSession, ForumView},
    state::ForumState,
    types::{Author, Category, Comment, CreatePostRequest, Post, TimestampMs},
};

pub const DEFAULT_AUTHOR_NAME: &str = "You";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A saved blob replaced the in-memory collections.
    Restored,
    /// Nothing saved under the key; seed data kept.
    Absent,
    /// The saved blob could not be read or parsed; seed data kept.
    Rejected,
}

/// Owns the forum collections and the screen session, and applies the save
/// policy: the sink receives the full state after every accepted mutation.
pub struct ForumEngine {
    state: ForumState,
    session: ForumSession,
    sink: Box<dyn SnapshotSink>,
    clock: Arc<dyn Clock>,
    author: Author,
}

impl Default for ForumEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ForumEngine {
    pub fn new(
        state: ForumState,
        sink: Box<dyn SnapshotSink>,
        clock: Arc<dyn Clock>,
        author: Author,
    ) -> Self {
        Self {
            state,
            session: ForumSession::new(),
            sink,
            clock,
            author,
        }
    }

    pub fn with_seed(sink: Box<dyn SnapshotSink>, clock: Arc<dyn Clock>) -> Self {
        let state = seed_state(clock.now_ms());
        Self::new(state, sink, clock, Author::new(DEFAULT_AUTHOR_NAME))
    }

    pub fn with_defaults() -> Self {
        Self::with_seed(Box::new(NoopSnapshotSink), Arc::new(SystemClock))
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn state(&self) -> &ForumState {
        &self.state
    }

    pub fn session(&self) -> &ForumSession {
        &self.session
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Replaces the collections wholesale with whatever `source` holds.
    /// Read and parse failures are logged and leave the current state in
    /// place. Activation itself does not write.
    pub fn activate(&mut self, source: &dyn SnapshotSource) -> LoadOutcome {
        match source.load() {
            Ok(Some(state)) => {
                tracing::info!(
                    target: "forum",
                    categories = state.categories.len(),
                    posts = state.posts.len(),
                    comment_threads = state.comments.len(),
                    "forum_state_restored"
                );
                self.state = state;
                LoadOutcome::Restored
            }
            Ok(None) => {
                tracing::debug!(target: "forum", "forum_state_absent");
                LoadOutcome::Absent
            }
            Err(err) => {
                tracing::warn!(
                    target: "forum",
                    kind = ?err.kind,
                    error = %err,
                    "forum_state_rejected"
                );
                LoadOutcome::Rejected
            }
        }
    }

    pub fn create_post(
        &mut self,
        request: &CreatePostRequest,
        category_id: Option<&str>,
    ) -> Result<Post, ForumError> {
        let now = self.clock.now_ms();
        let created = self
            .state
            .create_post(request, category_id, &self.author, now)
            .cloned();

        match created {
            Ok(post) => {
                tracing::info!(
                    target: "forum",
                    post_id = %post.id,
                    category_id = %post.category_id,
                    tags = post.tags.len(),
                    "forum_post_created"
                );
                self.persist();
                Ok(post)
            }
            Err(err) => {
                tracing::debug!(target: "forum", error = %err, "forum_post_rejected");
                Err(err)
            }
        }
    }

    /// Posts the compose draft into the selected category. On success the
    /// modal closes and the draft is cleared; on rejection both stay as-is.
    pub fn submit_compose(&mut self) -> Result<Post, ForumError> {
        let request = self.session.compose.to_request();
        let category_id = self.session.selected_category.clone();
        let post = self.create_post(&request, category_id.as_deref())?;
        self.session.compose.open = false;
        self.session.compose.clear();
        Ok(post)
    }

    pub fn visible_categories(&self) -> Vec<&Category> {
        filter_categories(&self.state.categories, &self.session.search)
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        filter_posts(
            &self.state.posts,
            self.session.selected_category.as_deref(),
            &self.session.search,
        )
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.session
            .selected_category
            .as_deref()
            .and_then(|id| self.state.category(id))
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.session
            .selected_post
            .as_deref()
            .and_then(|id| self.state.post(id))
    }

    pub fn comments_for(&self, post_id: &str) -> &[Comment] {
        self.state.comments_for(post_id)
    }

    pub fn view(&self) -> ForumView {
        self.session.view
    }

    pub fn open_category(&mut self, category_id: &str) {
        self.session.open_category(category_id);
    }

    pub fn open_post(&mut self, post_id: &str) {
        self.session.open_post(post_id);
    }

    pub fn show_categories(&mut self) {
        self.session.show_categories();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.session.set_search(search);
    }

    pub fn open_compose(&mut self) {
        self.session.open_compose();
    }

    pub fn close_compose(&mut self) {
        self.session.close_compose();
    }

    pub fn set_compose_title(&mut self, title: impl Into<String>) {
        self.session.compose.title = title.into();
    }

    pub fn set_compose_content(&mut self, content: impl Into<String>) {
        self.session.compose.content = content.into();
    }

    pub fn set_compose_tags(&mut self, tags: impl Into<String>) {
        self.session.compose.tags = tags.into();
    }

    pub fn handle_back(&mut self) -> bool {
        self.session.handle_back()
    }

    pub fn time_ago(&self, timestamp: TimestampMs) -> String {
        time_ago(timestamp, self.clock.now_ms())
    }

    fn persist(&self) {
        if let Err(err) = self.sink.save(&self.state) {
            tracing::warn!(
                target: "forum",
                kind = ?err.kind,
                error = %err,
                "forum_persist_failed"
            );
        }
    }
}
