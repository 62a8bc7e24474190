use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::forum::{
    error::{ForumError, invalid_input},
    query::parse_tags,
    types::{Author, Category, Comment, CreatePostRequest, Post, PostId, TimestampMs},
};

/// The owned forum collections. Serializes to the persisted blob shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumState {
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
    pub comments: BTreeMap<PostId, Vec<Comment>>,
}

impl ForumState {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn comments_for(&self, post_id: &str) -> &[Comment] {
        self.comments
            .get(post_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Prepends a new post built from `request` and bumps the owning
    /// category's count. The state is untouched when the title or content is
    /// empty or no category is selected.
    ///
    /// The category id is not checked against `categories`; a dangling id
    /// still creates the post and increments nothing.
    pub fn create_post(
        &mut self,
        request: &CreatePostRequest,
        category_id: Option<&str>,
        author: &Author,
        now: TimestampMs,
    ) -> Result<&Post, ForumError> {
        if request.title.is_empty() {
            return Err(invalid_input("post title is empty"));
        }
        if request.content.is_empty() {
            return Err(invalid_input("post content is empty"));
        }
        let Some(category_id) = category_id else {
            return Err(invalid_input("no category selected"));
        };

        let post = Post {
            id: now.to_string(),
            title: request.title.clone(),
            content: request.content.clone(),
            author: author.clone(),
            category_id: category_id.to_string(),
            created_at: now,
            likes: 0,
            views: 0,
            pinned: false,
            tags: parse_tags(&request.tags),
        };

        self.posts.insert(0, post);
        if let Some(category) = self
            .categories
            .iter_mut()
            .find(|category| category.id == category_id)
        {
            category.post_count = category.post_count.saturating_add(1);
        }

        Ok(&self.posts[0])
    }
}
