//! Message repository: the SQLite-backed message log.
//!
//! Uses SqlitePoolManager and the models (MessageRecord, NewMessage,
//! MessageQuery). Append-only by construction: the only statement that
//! changes data is the INSERT in [`MessageRepository::insert`]; rows are
//! never updated or deleted.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};
use tracing::info;

use crate::error::StorageError;
use crate::models::{MessageQuery, MessageRecord, NewMessage, SortOrder};
use crate::repository::MessageLog;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating message log table if not exists");

        let pool = self.pool_manager.pool();

        // AUTOINCREMENT keeps ids strictly increasing for the lifetime of the
        // log (rowids are never reused), which the (sent_at, id) tie-break
        // relies on.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                sender_id TEXT NOT NULL,
                receiver_id TEXT NOT NULL,
                kind TEXT NOT NULL,
                body TEXT NOT NULL,
                decision TEXT,
                sent_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_messages_sender_id ON messages(sender_id);
            CREATE INDEX IF NOT EXISTS idx_messages_receiver_id ON messages(receiver_id);
            CREATE INDEX IF NOT EXISTS idx_messages_kind ON messages(kind);
            CREATE INDEX IF NOT EXISTS idx_messages_sent_at ON messages(sent_at);
            "#,
        )
        .execute(pool)
        .await?;

        info!("Message log table ready");
        Ok(())
    }

    /// Appends a message; the log assigns `id` and, when the payload carries
    /// none, `sent_at`.
    pub async fn insert(&self, message: &NewMessage) -> Result<MessageRecord, sqlx::Error> {
        let pool = self.pool_manager.pool();
        let sent_at = message.sent_at.unwrap_or_else(Utc::now);

        let result = sqlx::query(
            r#"
            INSERT INTO messages (sender_id, receiver_id, kind, body, decision, sent_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.sender_id)
        .bind(&message.receiver_id)
        .bind(&message.kind)
        .bind(&message.body)
        .bind(&message.decision)
        .bind(sent_at)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();

        info!(
            "Appended message: id={}, kind={}, from={}, to={}",
            id, message.kind, message.sender_id, message.receiver_id
        );

        Ok(MessageRecord {
            id,
            sender_id: message.sender_id.clone(),
            receiver_id: message.receiver_id.clone(),
            kind: message.kind.clone(),
            body: message.body.clone(),
            decision: message.decision.clone(),
            sent_at,
        })
    }

    /// Runs a filtered, ordered, optionally paginated read of the log.
    ///
    /// `after`/`before` are strict bounds in the `(sent_at, id)` composite
    /// order, so messages sharing a timestamp are still cut deterministically.
    pub async fn fetch(&self, query: &MessageQuery) -> Result<Vec<MessageRecord>, sqlx::Error> {
        let pool = self.pool_manager.pool();

        let mut sql: QueryBuilder<'_, Sqlite> = QueryBuilder::new("SELECT * FROM messages WHERE 1=1");

        if let Some(participant) = &query.participant {
            sql.push(" AND (sender_id = ")
                .push_bind(participant.as_str())
                .push(" OR receiver_id = ")
                .push_bind(participant.as_str())
                .push(")");
        }
        if let Some(sender_id) = &query.sender_id {
            sql.push(" AND sender_id = ").push_bind(sender_id.as_str());
        }
        if let Some(receiver_id) = &query.receiver_id {
            sql.push(" AND receiver_id = ")
                .push_bind(receiver_id.as_str());
        }
        if let Some(kind) = &query.kind {
            sql.push(" AND kind = ").push_bind(kind.as_str());
        }
        if let Some(after) = query.after {
            sql.push(" AND (sent_at > ")
                .push_bind(after.sent_at)
                .push(" OR (sent_at = ")
                .push_bind(after.sent_at)
                .push(" AND id > ")
                .push_bind(after.id)
                .push("))");
        }
        if let Some(before) = query.before {
            sql.push(" AND (sent_at < ")
                .push_bind(before.sent_at)
                .push(" OR (sent_at = ")
                .push_bind(before.sent_at)
                .push(" AND id < ")
                .push_bind(before.id)
                .push("))");
        }

        match query.order {
            SortOrder::Ascending => sql.push(" ORDER BY sent_at ASC, id ASC"),
            SortOrder::Descending => sql.push(" ORDER BY sent_at DESC, id DESC"),
        };

        if let Some(limit) = query.limit {
            sql.push(" LIMIT ").push_bind(limit);
            if let Some(offset) = query.offset {
                sql.push(" OFFSET ").push_bind(offset);
            }
        }

        let messages: Vec<MessageRecord> = sql.build_query_as().fetch_all(pool).await?;

        info!("Retrieved {} messages", messages.len());
        Ok(messages)
    }

    /// Point lookup by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<MessageRecord>, sqlx::Error> {
        let pool = self.pool_manager.pool();

        let message = sqlx::query_as::<_, MessageRecord>("SELECT * FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(message)
    }

    /// `(received, sent)` scout counts for one user, computed fresh.
    pub async fn count_scouts(&self, user_id: &str) -> Result<(i64, i64), sqlx::Error> {
        let pool = self.pool_manager.pool();

        let received: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM messages WHERE kind = 'scout' AND receiver_id = ?",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        let sent: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM messages WHERE kind = 'scout' AND sender_id = ?",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok((received.0, sent.0))
    }
}

#[async_trait]
impl MessageLog for MessageRepository {
    async fn fetch_messages(
        &self,
        query: &MessageQuery,
    ) -> Result<Vec<MessageRecord>, StorageError> {
        Ok(self.fetch(query).await?)
    }

    async fn insert_message(&self, message: &NewMessage) -> Result<MessageRecord, StorageError> {
        Ok(self.insert(message).await?)
    }

    async fn find_message(&self, id: i64) -> Result<Option<MessageRecord>, StorageError> {
        Ok(self.find_by_id(id).await?)
    }

    async fn scout_counts(&self, user_id: &str) -> Result<(i64, i64), StorageError> {
        Ok(self.count_scouts(user_id).await?)
    }
}
