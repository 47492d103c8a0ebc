//! Insert payload for the message log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message to append.
///
/// `id` is always assigned by the log. `sent_at` is normally assigned too;
/// migration and seed-import jobs may supply a historical timestamp instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender_id: String,
    pub receiver_id: String,
    /// `"scout"` or `"chat"`.
    pub kind: String,
    pub body: String,
    /// Typed outcome for generated scout replies; `None` otherwise.
    #[serde(default)]
    pub decision: Option<String>,
    /// `None` means the log assigns the current time at insert.
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

impl NewMessage {
    /// Creates a payload with log-assigned timestamp and no typed decision.
    pub fn new(sender_id: String, receiver_id: String, kind: String, body: String) -> Self {
        Self {
            sender_id,
            receiver_id,
            kind,
            body,
            decision: None,
            sent_at: None,
        }
    }
}
