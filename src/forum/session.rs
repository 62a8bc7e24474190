use serde::{Deserialize, Serialize};

use crate::forum::types::{CategoryId, CreatePostRequest, PostId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForumView {
    #[default]
    Categories,
    Posts,
    Detail,
}

/// Compose modal state and its in-progress text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    pub open: bool,
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl ComposeDraft {
    pub fn to_request(&self) -> CreatePostRequest {
        CreatePostRequest::new(self.title.clone(), self.content.clone(), self.tags.clone())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.tags.clear();
    }
}

/// Navigation, selection and search state of the forum screen. Holds ids
/// only; the collections stay in `ForumState`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForumSession {
    pub view: ForumView,
    pub selected_category: Option<CategoryId>,
    pub selected_post: Option<PostId>,
    pub search: String,
    pub compose: ComposeDraft,
}

impl ForumSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_category(&mut self, category_id: impl Into<CategoryId>) {
        self.selected_category = Some(category_id.into());
        self.view = ForumView::Posts;
    }

    pub fn open_post(&mut self, post_id: impl Into<PostId>) {
        self.selected_post = Some(post_id.into());
        self.view = ForumView::Detail;
    }

    /// Header back action: returns to the category list but keeps the
    /// selected category and search text, unlike `handle_back`.
    pub fn show_categories(&mut self) {
        self.view = ForumView::Categories;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn open_compose(&mut self) {
        self.compose.open = true;
    }

    pub fn close_compose(&mut self) {
        self.compose.open = false;
    }

    /// Host back-navigation request. Returns whether it was consumed.
    /// Closes compose first, then detail → posts, then posts → categories.
    pub fn handle_back(&mut self) -> bool {
        if self.compose.open {
            self.compose.open = false;
            return true;
        }

        match self.view {
            ForumView::Detail => {
                self.view = ForumView::Posts;
                self.selected_post = None;
                true
            }
            ForumView::Posts => {
                self.view = ForumView::Categories;
                self.selected_category = None;
                self.search.clear();
                true
            }
            ForumView::Categories => false,
        }
    }
}
