//! The single source of truth for sentence records. Package generation is
//! always a pure function of what this store returns.

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

use revforge_core::models::{DocumentRecord, SentenceRecord};

use crate::error::{Error, Result};

const SCHEMA: &str = include_str!("../schema/001_tables.sql");

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: i64,
    filename: String,
    created_at: DateTime<Utc>,
    last_modified: DateTime<Utc>,
    author: String,
    last_modified_by: String,
}

#[derive(sqlx::FromRow)]
struct SentenceRow {
    position: i64,
    sentence_text: String,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    author: String,
    revision_id: i64,
}

impl SentenceRow {
    fn into_record(self) -> SentenceRecord {
        SentenceRecord {
            position: self.position,
            text: self.sentence_text,
            created_at: self.created_at,
            modified_at: self.modified_at,
            author: self.author,
            revision_id: self.revision_id,
        }
    }
}

pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if necessary) the SQLite file at `path` and apply the
    /// schema. Foreign keys are enabled on every pooled connection so the
    /// document -> sentences cascade actually fires.
    pub async fn connect(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        let repo = Self::new(pool);
        repo.init_schema().await?;
        Ok(repo)
    }

    pub async fn init_schema(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Persist a document and all of its sentence records in one
    /// transaction. A previous record set under the same filename is
    /// replaced: the generated package is a projection of this store, so
    /// stale sentences must not linger.
    pub async fn create_document(
        &self,
        filename: &str,
        records: &[SentenceRecord],
        author: &str,
    ) -> Result<DocumentRecord> {
        let created_at = records
            .first()
            .map(|r| r.created_at)
            .unwrap_or_else(Utc::now);
        let last_modified = records
            .iter()
            .map(|r| r.modified_at)
            .max()
            .unwrap_or(created_at);

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM documents WHERE filename = ?")
            .bind(filename)
            .execute(&mut *tx)
            .await?;

        let document_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO documents (filename, created_at, last_modified, author, last_modified_by)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(filename)
        .bind(created_at)
        .bind(last_modified)
        .bind(author)
        .bind(author)
        .fetch_one(&mut *tx)
        .await?;

        for record in records {
            sqlx::query(
                r#"
                INSERT INTO sentences
                    (document_id, position, sentence_text, created_at, modified_at, author, revision_id)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(document_id)
            .bind(record.position)
            .bind(&record.text)
            .bind(record.created_at)
            .bind(record.modified_at)
            .bind(&record.author)
            .bind(record.revision_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(DocumentRecord {
            id: document_id,
            filename: filename.to_string(),
            created_at,
            last_modified,
            author: author.to_string(),
            last_modified_by: author.to_string(),
            sentences: records.to_vec(),
        })
    }

    pub async fn get_by_filename(&self, filename: &str) -> Result<Option<DocumentRecord>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, filename, created_at, last_modified, author, last_modified_by
             FROM documents WHERE filename = ?",
        )
        .bind(filename)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<DocumentRecord>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, filename, created_at, last_modified, author, last_modified_by
             FROM documents WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn hydrate(&self, row: DocumentRow) -> Result<DocumentRecord> {
        let sentences = sqlx::query_as::<_, SentenceRow>(
            "SELECT position, sentence_text, created_at, modified_at, author, revision_id
             FROM sentences WHERE document_id = ? ORDER BY position",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(DocumentRecord {
            id: row.id,
            filename: row.filename,
            created_at: row.created_at,
            last_modified: row.last_modified,
            author: row.author,
            last_modified_by: row.last_modified_by,
            sentences: sentences.into_iter().map(SentenceRow::into_record).collect(),
        })
    }

    /// Record a new edit instant for exactly one sentence, then restore the
    /// document-level invariant `last_modified == max(sentence timestamps)`.
    /// Positions, ordering and revision ids are never touched.
    pub async fn update_sentence_timestamp(
        &self,
        document_id: i64,
        position: i64,
        new_instant: DateTime<Utc>,
    ) -> Result<SentenceRecord> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, SentenceRow>(
            r#"
            UPDATE sentences SET modified_at = ?
            WHERE document_id = ? AND position = ?
            RETURNING position, sentence_text, created_at, modified_at, author, revision_id
            "#,
        )
        .bind(new_instant)
        .bind(document_id)
        .bind(position)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(Error::SentenceNotFound {
            document_id,
            position,
        })?;

        // Recompute the max in Rust rather than trusting lexicographic
        // ordering of serialized timestamps.
        let stamps: Vec<DateTime<Utc>> = sqlx::query_scalar(
            "SELECT modified_at FROM sentences WHERE document_id = ?",
        )
        .bind(document_id)
        .fetch_all(&mut *tx)
        .await?;

        if let Some(max) = stamps.into_iter().max() {
            sqlx::query("UPDATE documents SET last_modified = ? WHERE id = ?")
                .bind(max)
                .bind(document_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(updated.into_record())
    }

    /// Remove a document; the schema cascades the delete to its sentences.
    pub async fn delete_document(&self, filename: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE filename = ?")
            .bind(filename)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
