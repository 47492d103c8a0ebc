//! Message record model for persistence.
//!
//! Maps to the `messages` table; the only entity this engine persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the append-only message log.
///
/// Rows are immutable once written. `id` is assigned by the log at insert
/// and is strictly increasing; `(sent_at, id)` is the total order over
/// messages, with `id` breaking ties between equal timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: i64,
    pub sender_id: String,
    pub receiver_id: String,
    /// `"scout"` (cold outreach) or `"chat"` at rest.
    pub kind: String,
    pub body: String,
    /// Typed outcome (`"accepted"` | `"declined"`) written by the scout
    /// response path; `None` for scouts and for legacy free-text replies.
    pub decision: Option<String>,
    pub sent_at: DateTime<Utc>,
}

impl MessageRecord {
    /// Position of this message in the `(sent_at, id)` total order.
    pub fn position(&self) -> LogPosition {
        LogPosition {
            sent_at: self.sent_at,
            id: self.id,
        }
    }
}

/// A point in the `(sent_at, id)` total order, used for strict after/before
/// bounds in queries. Field order matters: the derived `Ord` compares
/// `sent_at` first, then `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogPosition {
    pub sent_at: DateTime<Utc>,
    pub id: i64,
}
