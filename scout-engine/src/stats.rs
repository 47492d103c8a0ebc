//! Per-user scout statistics.
//!
//! Counters are recomputed from the log on every request; nothing is
//! maintained incrementally, so the counts can never drift from the message
//! history.

use scout_core::{EngineError, MessageKind, ReplyScope, Result, ScoutStatus};
use serde::Serialize;
use storage::{MessageLog, MessageQuery, SortOrder};

use crate::resolver;

/// Scout counters for one user.
///
/// `unread_count` is the deterministic scout/pending portion of the unread
/// figure; read markers live outside this engine.
#[derive(Debug, Clone, Serialize)]
pub struct ScoutStats {
    pub received_count: i64,
    pub sent_count: i64,
    pub pending_count: i64,
    pub accepted_count: i64,
    pub declined_count: i64,
    pub unread_count: i64,
}

/// Computes fresh scout statistics for `user_id` by resolving every scout
/// the user has received.
pub async fn compute_stats(
    log: &dyn MessageLog,
    user_id: &str,
    scope: ReplyScope,
) -> Result<ScoutStats> {
    let (received_count, sent_count) = log
        .scout_counts(user_id)
        .await
        .map_err(|e| EngineError::Storage(e.to_string()))?;

    let query = MessageQuery {
        receiver_id: Some(user_id.to_string()),
        kind: Some(MessageKind::Scout.as_str().to_string()),
        order: SortOrder::Ascending,
        ..Default::default()
    };
    let scouts = log
        .fetch_messages(&query)
        .await
        .map_err(|e| EngineError::Storage(e.to_string()))?;

    let mut pending_count = 0;
    let mut accepted_count = 0;
    let mut declined_count = 0;
    for scout in &scouts {
        match resolver::resolve_status(scout, log, scope).await? {
            ScoutStatus::Pending => pending_count += 1,
            ScoutStatus::Accepted => accepted_count += 1,
            ScoutStatus::Declined => declined_count += 1,
        }
    }

    Ok(ScoutStats {
        received_count,
        sent_count,
        pending_count,
        accepted_count,
        declined_count,
        unread_count: pending_count,
    })
}
