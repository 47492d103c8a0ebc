//! MessageLog port: the append-only message log as seen by the engine.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{MessageQuery, MessageRecord, NewMessage};

/// Read and append capabilities of the message log.
///
/// The log is append-only: implementations expose no update and no delete.
/// `insert_message` assigns `id` and, when the payload carries none,
/// `sent_at`; everything else in the engine is a read.
#[async_trait]
pub trait MessageLog: Send + Sync {
    /// Runs a filtered, ordered, optionally paginated read of the log.
    async fn fetch_messages(
        &self,
        query: &MessageQuery,
    ) -> Result<Vec<MessageRecord>, StorageError>;

    /// Appends one message and returns it with the assigned `id`/`sent_at`.
    async fn insert_message(&self, message: &NewMessage) -> Result<MessageRecord, StorageError>;

    /// Point lookup by id.
    async fn find_message(&self, id: i64) -> Result<Option<MessageRecord>, StorageError>;

    /// `(received, sent)` scout counts for one user, computed fresh.
    async fn scout_counts(&self, user_id: &str) -> Result<(i64, i64), StorageError>;
}
