//! Query parameters for listing/filtering messages.
//!
//! Used by MessageRepository::fetch and the MessageLog port.

use serde::{Deserialize, Serialize};

use super::message_record::LogPosition;

/// Sort direction over the `(sent_at, id)` composite order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Filter for log reads; unset fields do not constrain the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageQuery {
    /// Matches either side of a message (sender or receiver).
    pub participant: Option<String>,
    pub sender_id: Option<String>,
    pub receiver_id: Option<String>,
    pub kind: Option<String>,
    /// Strictly after this position in `(sent_at, id)` order.
    pub after: Option<LogPosition>,
    /// Strictly before this position in `(sent_at, id)` order.
    pub before: Option<LogPosition>,
    pub order: SortOrder,
    pub limit: Option<i64>,
    /// Pagination offset (applied only together with `limit`).
    pub offset: Option<i64>,
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self {
            participant: None,
            sender_id: None,
            receiver_id: None,
            kind: None,
            after: None,
            before: None,
            order: SortOrder::Descending,
            limit: None,
            offset: None,
        }
    }
}
