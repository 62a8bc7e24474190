use crate::forum::types::{Category, Post};

/// Categories whose name or description contains `search`, ignoring case.
/// Order is preserved; an empty search keeps everything.
pub fn filter_categories<'a>(categories: &'a [Category], search: &str) -> Vec<&'a Category> {
    let needle = search.to_lowercase();
    categories
        .iter()
        .filter(|category| {
            contains_folded(&category.name, &needle)
                || contains_folded(&category.description, &needle)
        })
        .collect()
}

/// Posts in `category_id` (or all posts when `None`) matching `search` in
/// title, content, author name or any tag. Pinned posts come first; the sort
/// is stable so ties keep their collection order.
pub fn filter_posts<'a>(
    posts: &'a [Post],
    category_id: Option<&str>,
    search: &str,
) -> Vec<&'a Post> {
    let needle = search.to_lowercase();
    let mut matched: Vec<&Post> = posts
        .iter()
        .filter(|post| category_id.is_none_or(|id| post.category_id == id))
        .filter(|post| post_matches(post, &needle))
        .collect();
    matched.sort_by_key(|post| !post.pinned);
    matched
}

/// Splits compose tag text on commas and trims each piece. Empty pieces are
/// kept, so `""` yields `[""]`.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

fn post_matches(post: &Post, needle: &str) -> bool {
    contains_folded(&post.title, needle)
        || contains_folded(&post.content, needle)
        || contains_folded(&post.author.name, needle)
        || post.tags.iter().any(|tag| contains_folded(tag, needle))
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || haystack.to_lowercase().contains(folded_needle)
}
