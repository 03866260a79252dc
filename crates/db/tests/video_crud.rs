//! Integration tests for video repository operations.
//!
//! Exercises the repository layer against a real database:
//! - Create and fetch by id
//! - Insertion-ordered listing
//! - Whole-record overwrite on update
//! - Delete, including missing ids

use sqlx::SqlitePool;
use vidbits_core::video::VideoFields;
use vidbits_db::models::video::{CreateVideo, UpdateVideo};
use vidbits_db::repositories::VideoRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_video(title: &str, url: &str, description: &str) -> CreateVideo {
    let valid = VideoFields::new(title, url, description).validated().unwrap();
    CreateVideo::from(&valid)
}

fn overwrite(title: &str, url: &str, description: Option<&str>) -> UpdateVideo {
    let valid = VideoFields {
        title: Some(title.to_string()),
        url: Some(url.to_string()),
        description: description.map(str::to_string),
    }
    .validated()
    .unwrap();
    UpdateVideo::from(&valid)
}

// ---------------------------------------------------------------------------
// Test: create then fetch returns identical fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: SqlitePool) {
    let created = VideoRepo::create(&pool, &new_video("T", "http://u", "D"))
        .await
        .unwrap();

    let found = VideoRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created video should be found");

    assert_eq!(found.id, created.id);
    assert_eq!(found.title, "T");
    assert_eq!(found.url, "http://u");
    assert_eq!(found.description.as_deref(), Some("D"));
    assert_eq!(found.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: SqlitePool) {
    let found = VideoRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Test: list returns all rows in insertion order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_in_insertion_order(pool: SqlitePool) {
    assert!(VideoRepo::list(&pool).await.unwrap().is_empty());

    let first = VideoRepo::create(&pool, &new_video("First", "http://a", ""))
        .await
        .unwrap();
    let second = VideoRepo::create(&pool, &new_video("Second", "http://b", ""))
        .await
        .unwrap();

    let videos = VideoRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = videos.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

// ---------------------------------------------------------------------------
// Test: update overwrites every field
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_record(pool: SqlitePool) {
    let created = VideoRepo::create(&pool, &new_video("Old", "http://old", "old desc"))
        .await
        .unwrap();

    let updated = VideoRepo::update(&pool, created.id, &overwrite("New", "http://new", None))
        .await
        .unwrap()
        .expect("existing video should update");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.url, "http://new");
    assert!(updated.description.is_none());
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(VideoRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: SqlitePool) {
    let result = VideoRepo::update(&pool, 42, &overwrite("T", "http://u", None))
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: delete removes the record
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete(pool: SqlitePool) {
    let keep = VideoRepo::create(&pool, &new_video("Keep", "http://k", ""))
        .await
        .unwrap();
    let gone = VideoRepo::create(&pool, &new_video("Gone", "http://g", ""))
        .await
        .unwrap();

    assert!(VideoRepo::delete(&pool, gone.id).await.unwrap());
    assert!(VideoRepo::find_by_id(&pool, gone.id).await.unwrap().is_none());

    let remaining = VideoRepo::list(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    // Deleting again is a no-op.
    assert!(!VideoRepo::delete(&pool, gone.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_tracks_inserts_and_deletes(pool: SqlitePool) {
    assert_eq!(VideoRepo::count(&pool).await.unwrap(), 0);

    let first = VideoRepo::create(&pool, &new_video("A", "http://a", ""))
        .await
        .unwrap();
    VideoRepo::create(&pool, &new_video("B", "http://b", ""))
        .await
        .unwrap();
    assert_eq!(VideoRepo::count(&pool).await.unwrap(), 2);

    VideoRepo::delete(&pool, first.id).await.unwrap();
    assert_eq!(VideoRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fields_round_trip_for_edit_form(pool: SqlitePool) {
    let created = VideoRepo::create(&pool, &new_video("T", "http://u", "D"))
        .await
        .unwrap();
    assert_eq!(created.fields(), VideoFields::new("T", "http://u", "D"));
}
