use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use revforge_core::models::SentenceRecord;
use revforge_db::{DocumentRepository, Error};

async fn repo() -> DocumentRepository {
    // A single connection keeps the in-memory database alive and shared.
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");
    let repo = DocumentRepository::new(pool);
    repo.init_schema().await.expect("schema");
    repo
}

fn records(base: DateTime<Utc>, n: i64) -> Vec<SentenceRecord> {
    (0..n)
        .map(|i| SentenceRecord {
            position: i,
            text: format!("Sentence {}.", i),
            created_at: base + Duration::seconds(i * 60),
            modified_at: base + Duration::seconds(i * 60),
            author: "Writer".into(),
            revision_id: i + 1,
        })
        .collect()
}

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
}

#[tokio::test]
async fn create_and_fetch_roundtrip() {
    let repo = repo().await;
    let created = repo
        .create_document("essay.docx", &records(base(), 3), "Writer")
        .await
        .unwrap();

    let fetched = repo.get_by_filename("essay.docx").await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.sentences.len(), 3);
    assert_eq!(fetched.created_at, base());
    assert_eq!(fetched.last_modified, base() + Duration::seconds(120));
    assert_eq!(
        fetched.sentences.iter().map(|s| s.position).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    let by_id = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.filename, "essay.docx");
}

#[tokio::test]
async fn recreating_a_filename_replaces_the_record_set() {
    let repo = repo().await;
    repo.create_document("doc.docx", &records(base(), 5), "Writer")
        .await
        .unwrap();
    repo.create_document("doc.docx", &records(base(), 2), "Writer")
        .await
        .unwrap();

    let doc = repo.get_by_filename("doc.docx").await.unwrap().unwrap();
    assert_eq!(doc.sentences.len(), 2);
}

#[tokio::test]
async fn edit_timestamp_touches_exactly_one_sentence() {
    let repo = repo().await;
    let doc = repo
        .create_document("doc.docx", &records(base(), 3), "Writer")
        .await
        .unwrap();

    let new_instant = Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap();
    let updated = repo
        .update_sentence_timestamp(doc.id, 1, new_instant)
        .await
        .unwrap();
    assert_eq!(updated.modified_at, new_instant);
    assert_eq!(updated.revision_id, 2);

    let doc = repo.get_by_filename("doc.docx").await.unwrap().unwrap();
    // Neighbors untouched, order and ids stable.
    assert_eq!(doc.sentences[0].modified_at, base());
    assert_eq!(doc.sentences[1].modified_at, new_instant);
    assert_eq!(doc.sentences[2].modified_at, base() + Duration::seconds(120));
    assert_eq!(
        doc.sentences.iter().map(|s| s.revision_id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    // Document invariant: last_modified is the max sentence timestamp.
    assert_eq!(doc.last_modified, new_instant);
}

#[tokio::test]
async fn editing_a_missing_position_is_an_error() {
    let repo = repo().await;
    let doc = repo
        .create_document("doc.docx", &records(base(), 2), "Writer")
        .await
        .unwrap();

    let err = repo
        .update_sentence_timestamp(doc.id, 9, Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::SentenceNotFound { position: 9, .. }
    ));
}

#[tokio::test]
async fn delete_cascades_to_sentences() {
    let repo = repo().await;
    let doc = repo
        .create_document("doc.docx", &records(base(), 3), "Writer")
        .await
        .unwrap();

    assert!(repo.delete_document("doc.docx").await.unwrap());
    assert!(repo.get_by_filename("doc.docx").await.unwrap().is_none());
    assert!(repo.get_by_id(doc.id).await.unwrap().is_none());
    // Second delete is a no-op.
    assert!(!repo.delete_document("doc.docx").await.unwrap());
}
