use std::collections::BTreeMap;

use crate::forum::{
    state::ForumState,
    types::{Author, Category, Post, TimestampMs},
};

const WELCOME_POST_AGE_MS: TimestampMs = 2 * 60 * 60 * 1000;

pub fn seed_categories() -> Vec<Category> {
    [
        (
            "1",
            "General Discussion",
            "Talk about anything and everything",
            "💬",
            "#DBEAFE",
            234,
        ),
        (
            "2",
            "Help & Support",
            "Get help with technical issues",
            "🆘",
            "#DCFCE7",
            156,
        ),
        (
            "3",
            "Feature Requests",
            "Share ideas for improvements",
            "💡",
            "#FEF9C3",
            89,
        ),
        (
            "4",
            "Show & Tell",
            "Showcase your projects",
            "🎨",
            "#F3E8FF",
            124,
        ),
        (
            "5",
            "News & Updates",
            "Latest announcements",
            "📰",
            "#FEE2E2",
            67,
        ),
        (
            "6",
            "Community Events",
            "Meetups and gatherings",
            "🎉",
            "#FCE7F3",
            45,
        ),
    ]
    .into_iter()
    .map(|(id, name, description, icon, color, post_count)| Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        post_count,
    })
    .collect()
}

/// The pinned welcome post, dated two hours before `now`.
pub fn seed_posts(now: TimestampMs) -> Vec<Post> {
    vec![Post {
        id: "1".to_string(),
        title: "Welcome to the forum!".to_string(),
        content: "Introduce yourself here.".to_string(),
        author: Author::new("Admin"),
        category_id: "1".to_string(),
        created_at: now - WELCOME_POST_AGE_MS,
        likes: 20,
        views: 120,
        pinned: true,
        tags: vec!["welcome".to_string()],
    }]
}

pub fn seed_state(now: TimestampMs) -> ForumState {
    ForumState {
        categories: seed_categories(),
        posts: seed_posts(now),
        comments: BTreeMap::new(),
    }
}
