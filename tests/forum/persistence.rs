use std::{collections::BTreeMap, fs, sync::Arc};

use forum_state::forum::{
    Author, Comment, CreatePostRequest, FileKeyValueStore, FixedClock, ForumEngine,
    ForumPersistence, ForumState, KeyValueStore, LoadOutcome, MemoryKeyValueStore,
    SnapshotSink, SnapshotSource,
};
use uuid::Uuid;

use super::{NOW, category, post, seeded};

fn persistence_over(store: Arc<dyn KeyValueStore>) -> ForumPersistence {
    ForumPersistence::with_default_key(store)
}

#[test]
fn save_then_load_preserves_every_collection() {
    let mut state = seeded();
    state.posts.push(post("p2", "4", "Side project", false, &["demo", ""]));
    state.comments.insert(
        "1".to_string(),
        vec![Comment {
            id: "c1".to_string(),
            author: Author::new("Member"),
            content: "Hi all".to_string(),
            created_at: NOW,
            likes: 3,
        }],
    );

    let persistence = persistence_over(Arc::new(MemoryKeyValueStore::new()));
    persistence.save(&state).expect("save");
    let loaded = persistence.load().expect("load").expect("present");
    assert_eq!(loaded, state);
}

#[test]
fn empty_saved_state_replaces_seed_without_merging() {
    let blob = r#"{"categories":[],"posts":[],"comments":{}}"#;
    let persistence =
        persistence_over(Arc::new(MemoryKeyValueStore::with_entry("forumData", blob)));
    let mut engine = ForumEngine::with_seed(
        Box::new(persistence.clone()),
        Arc::new(FixedClock::new(NOW)),
    );

    assert_eq!(engine.activate(&persistence), LoadOutcome::Restored);
    assert_eq!(engine.state(), &ForumState::default());
    assert!(engine.visible_categories().is_empty());
}

#[test]
fn corrupt_blob_keeps_seed_data() {
    let persistence = persistence_over(Arc::new(MemoryKeyValueStore::with_entry(
        "forumData",
        r#"{"categories": [{"id": 1}]}"#,
    )));
    let mut engine =
        ForumEngine::with_seed(Box::new(persistence.clone()), Arc::new(FixedClock::new(NOW)));

    assert_eq!(engine.activate(&persistence), LoadOutcome::Rejected);
    assert_eq!(engine.state(), &seeded());
}

#[test]
fn restores_blob_written_by_mobile_client() {
    let blob = r##"{
      "categories": [
        {"id":"9","name":"Jobs","description":"Hiring","icon":"💼","color":"#000000","postCount":1}
      ],
      "posts": [
        {"id":"42","title":"Hiring Rust devs","content":"Remote ok","author":{"name":"Ada"},
         "categoryId":"9","createdAt":1699999000000,"likes":2,"views":10,"pinned":false,
         "tags":["jobs"]}
      ],
      "comments": {}
    }"##;
    let persistence =
        persistence_over(Arc::new(MemoryKeyValueStore::with_entry("forumData", blob)));
    let state = persistence.load().expect("load").expect("present");

    let mut expected_category = category("9", "Jobs", "Hiring");
    expected_category.icon = "💼".to_string();
    expected_category.color = "#000000".to_string();
    expected_category.post_count = 1;
    assert_eq!(state.categories, vec![expected_category]);
    assert_eq!(state.posts[0].author.name, "Ada");
    assert_eq!(state.posts[0].created_at, 1_699_999_000_000);
    assert_eq!(state.comments, BTreeMap::new());
}

#[test]
fn file_backed_engine_survives_restart() {
    let dir = std::env::temp_dir().join(format!("forum-persistence-test-{}", Uuid::now_v7()));
    let clock = Arc::new(FixedClock::new(NOW));

    let persistence = persistence_over(Arc::new(FileKeyValueStore::new(&dir)));
    let mut first = ForumEngine::with_seed(Box::new(persistence.clone()), clock.clone());
    assert_eq!(first.activate(&persistence), LoadOutcome::Absent);
    first
        .create_post(&CreatePostRequest::new("Persist me", "please", "io"), Some("5"))
        .expect("post should be created");
    assert!(dir.join("forumData.json").exists());

    clock.advance(60_000);
    let reopened = persistence_over(Arc::new(FileKeyValueStore::new(&dir)));
    let mut second = ForumEngine::with_seed(Box::new(reopened.clone()), clock);
    assert_eq!(second.activate(&reopened), LoadOutcome::Restored);
    assert_eq!(second.state(), first.state());
    assert_eq!(second.state().posts[0].title, "Persist me");
    assert_eq!(second.state().category("5").map(|c| c.post_count), Some(68));

    let _ = fs::remove_dir_all(&dir);
}
