use std::sync::Arc;

use forum_state::forum::{
    Author, CreatePostRequest, FixedClock, ForumEngine, ForumErrorKind, ForumPersistence,
    ForumView, LoadOutcome, MemoryKeyValueStore,
};

use super::{FailingSink, NOW, RecordingSink, engine_with_sink};

#[test]
fn accepted_post_is_saved_once_and_rejected_ones_never() {
    let sink = RecordingSink::default();
    let (mut engine, _clock) = engine_with_sink(sink.clone());

    for (title, content, category) in [("", "b", Some("1")), ("t", "", Some("1")), ("t", "b", None)]
    {
        let err = engine
            .create_post(&CreatePostRequest::new(title, content, "x"), category)
            .expect_err("invalid input must be rejected");
        assert_eq!(err.kind, ForumErrorKind::InvalidInput);
    }
    assert!(sink.saved().is_empty());

    let post = engine
        .create_post(&CreatePostRequest::new("Hello", "World", "a, b ,c"), Some("3"))
        .expect("post should be created");

    let saved = sink.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(&saved[0], engine.state());
    assert_eq!(post.id, NOW.to_string());
    assert_eq!(post.author.name, "You");
    assert_eq!(engine.state().posts[0], post);
    assert_eq!(engine.state().category("3").map(|c| c.post_count), Some(90));
}

#[test]
fn failing_sink_does_not_fail_the_mutation() {
    let clock = Arc::new(FixedClock::new(NOW));
    let mut engine = ForumEngine::with_seed(Box::new(FailingSink), clock);

    let post = engine
        .create_post(&CreatePostRequest::new("t", "b", ""), Some("1"))
        .expect("save failures are not surfaced");
    assert_eq!(engine.state().posts[0].id, post.id);
}

#[test]
fn configured_author_is_stamped_on_new_posts() {
    let sink = RecordingSink::default();
    let (engine, _clock) = engine_with_sink(sink);
    let mut engine = engine.with_author(Author::new("Guest"));

    let post = engine
        .create_post(&CreatePostRequest::new("t", "b", ""), Some("1"))
        .expect("post should be created");
    assert_eq!(post.author.name, "Guest");
}

#[test]
fn compose_flow_posts_into_selected_category_and_resets_draft() {
    let sink = RecordingSink::default();
    let (mut engine, clock) = engine_with_sink(sink.clone());

    engine.open_category("2");
    engine.open_compose();
    engine.set_compose_title("Build fails");
    engine.set_compose_tags("build, ci");

    let err = engine.submit_compose().expect_err("missing content must be rejected");
    assert_eq!(err.kind, ForumErrorKind::InvalidInput);
    assert!(engine.session().compose.open);
    assert_eq!(engine.session().compose.title, "Build fails");

    engine.set_compose_content("linker error on main");
    clock.advance(1_000);
    let post = engine.submit_compose().expect("draft should post");

    assert_eq!(post.category_id, "2");
    assert_eq!(post.tags, vec!["build", "ci"]);
    assert_eq!(post.created_at, NOW + 1_000);
    assert!(!engine.session().compose.open);
    assert!(engine.session().compose.title.is_empty());
    assert_eq!(sink.saved().len(), 1);

    let visible: Vec<&str> = engine.visible_posts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(visible, vec![post.id.as_str()]);
}

#[test]
fn header_back_keeps_category_for_later_compose() {
    let sink = RecordingSink::default();
    let (mut engine, _clock) = engine_with_sink(sink.clone());

    engine.open_category("3");
    engine.set_search("ideas");
    engine.show_categories();
    assert_eq!(engine.view(), ForumView::Categories);
    assert_eq!(engine.selected_category().map(|c| c.id.as_str()), Some("3"));
    assert_eq!(engine.session().search, "ideas");
    assert_eq!(engine.visible_categories().len(), 1);

    engine.open_compose();
    engine.set_compose_title("Interview tips");
    engine.set_compose_content("What do you ask?");
    let post = engine.submit_compose().expect("kept category should accept the post");
    assert_eq!(post.category_id, "3");
    assert_eq!(sink.saved().len(), 1);
}

#[test]
fn compose_without_selected_category_is_rejected() {
    let (mut engine, _clock) = engine_with_sink(RecordingSink::default());
    engine.open_compose();
    engine.set_compose_title("t");
    engine.set_compose_content("b");

    let err = engine.submit_compose().expect_err("no category selected");
    assert_eq!(err.kind, ForumErrorKind::InvalidInput);
    assert_eq!(engine.state().posts.len(), 1);
}

#[test]
fn search_drives_visible_categories_and_resets_on_back() {
    let (mut engine, _clock) = engine_with_sink(RecordingSink::default());

    engine.set_search("events");
    let names: Vec<&str> = engine.visible_categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Community Events"]);

    engine.open_category("1");
    engine.set_search("welcome");
    assert_eq!(engine.view(), ForumView::Posts);
    assert_eq!(engine.visible_posts().len(), 1);
    assert_eq!(engine.selected_category().map(|c| c.name.as_str()), Some("General Discussion"));

    engine.open_post("1");
    assert_eq!(engine.view(), ForumView::Detail);
    assert_eq!(engine.selected_post().map(|p| p.title.as_str()), Some("Welcome to the forum!"));
    assert!(engine.comments_for("1").is_empty());

    assert!(engine.handle_back());
    assert_eq!(engine.view(), ForumView::Posts);
    assert!(engine.selected_post().is_none());

    assert!(engine.handle_back());
    assert_eq!(engine.view(), ForumView::Categories);
    assert!(engine.session().search.is_empty());
    assert_eq!(engine.visible_categories().len(), 6);

    assert!(!engine.handle_back());
}

#[test]
fn time_ago_uses_engine_clock() {
    let (engine, clock) = engine_with_sink(RecordingSink::default());
    let welcome_created = engine.state().posts[0].created_at;
    assert_eq!(engine.time_ago(welcome_created), "2 hrs ago");

    clock.advance(2 * 86_400_000);
    assert_eq!(engine.time_ago(welcome_created), "2 days ago");
}

#[test]
fn activation_does_not_write() {
    let sink = RecordingSink::default();
    let (mut engine, _clock) = engine_with_sink(sink.clone());
    let persistence = ForumPersistence::with_default_key(Arc::new(MemoryKeyValueStore::new()));

    assert_eq!(engine.activate(&persistence), LoadOutcome::Absent);
    assert!(sink.saved().is_empty());
}
