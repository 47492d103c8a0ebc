//! Conversation aggregation.
//!
//! A conversation is the unordered pair of two participants; every message
//! between them, in either direction, belongs to that one conversation. The
//! views here are derived per request from the log and never stored.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use scout_core::{EngineError, Page, Result};
use serde::Serialize;
use storage::{MessageLog, MessageQuery, MessageRecord, SortOrder};

/// One conversation in a user's inbox, summarized by its latest message.
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub counterpart_id: String,
    pub last_message: MessageRecord,
    pub last_sent_at: DateTime<Utc>,
}

/// The other participant of a message, from `user_id`'s point of view.
pub fn counterpart_of<'a>(message: &'a MessageRecord, user_id: &str) -> &'a str {
    if message.sender_id == user_id {
        &message.receiver_id
    } else {
        &message.sender_id
    }
}

/// Lists a user's conversations, most recently active first.
///
/// One row per counterpart regardless of who sent what: the user's messages
/// are walked newest first, and the first message seen for a counterpart is
/// by construction the pair's latest, which also fixes the row order.
pub async fn list_conversations(
    log: &dyn MessageLog,
    user_id: &str,
    page: Page,
) -> Result<Vec<Conversation>> {
    let query = MessageQuery {
        participant: Some(user_id.to_string()),
        order: SortOrder::Descending,
        ..Default::default()
    };
    let messages = log
        .fetch_messages(&query)
        .await
        .map_err(|e| EngineError::Storage(e.to_string()))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut conversations = Vec::new();
    for message in messages {
        let counterpart_id = counterpart_of(&message, user_id).to_string();
        if seen.insert(counterpart_id.clone()) {
            conversations.push(Conversation {
                counterpart_id,
                last_sent_at: message.sent_at,
                last_message: message,
            });
        }
    }

    Ok(page.apply(conversations))
}

/// Fetches the two-way thread between two users, most recent first.
///
/// Newest-first like every other view, so a `Page` limit returns the most
/// recent messages rather than the start of the thread.
pub async fn fetch_thread(
    log: &dyn MessageLog,
    user_id: &str,
    counterpart_id: &str,
    page: Page,
) -> Result<Vec<MessageRecord>> {
    let query = MessageQuery {
        participant: Some(user_id.to_string()),
        order: SortOrder::Descending,
        ..Default::default()
    };
    let messages = log
        .fetch_messages(&query)
        .await
        .map_err(|e| EngineError::Storage(e.to_string()))?;

    let thread: Vec<MessageRecord> = messages
        .into_iter()
        .filter(|message| {
            (message.sender_id == user_id && message.receiver_id == counterpart_id)
                || (message.sender_id == counterpart_id && message.receiver_id == user_id)
        })
        .collect();

    Ok(page.apply(thread))
}
