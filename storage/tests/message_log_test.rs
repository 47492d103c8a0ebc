//! Integration tests for [`storage::MessageRepository`] behind the
//! [`storage::MessageLog`] port.
//!
//! Covers appending, querying, point lookup, and scout counting through the
//! trait object the engine consumes, plus persistence across reopens for a
//! file-backed database.

use std::sync::Arc;

use storage::{MessageLog, MessageQuery, MessageRepository, NewMessage, SortOrder};

async fn create_log() -> Arc<dyn MessageLog> {
    let repo = MessageRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository");
    Arc::new(repo)
}

fn chat(sender: &str, receiver: &str, body: &str) -> NewMessage {
    NewMessage::new(
        sender.to_string(),
        receiver.to_string(),
        "chat".to_string(),
        body.to_string(),
    )
}

fn scout(sender: &str, receiver: &str, body: &str) -> NewMessage {
    NewMessage::new(
        sender.to_string(),
        receiver.to_string(),
        "scout".to_string(),
        body.to_string(),
    )
}

/// **Test: Append and read back messages through the port.**
///
/// **Setup:** In-memory DB behind an `Arc<dyn MessageLog>`.
/// **Action:** `insert_message` twice, then `fetch_messages` ascending.
/// **Expected:** Both messages come back in send order with assigned ids.
#[tokio::test]
async fn test_insert_and_fetch_through_port() {
    let log = create_log().await;

    let first = log
        .insert_message(&chat("alice", "bob", "hello"))
        .await
        .expect("Failed to insert message");
    let second = log
        .insert_message(&chat("bob", "alice", "hi"))
        .await
        .expect("Failed to insert message");

    let query = MessageQuery {
        order: SortOrder::Ascending,
        ..Default::default()
    };
    let messages = log
        .fetch_messages(&query)
        .await
        .expect("Failed to fetch messages");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, first.id);
    assert_eq!(messages[1].id, second.id);
    assert_eq!(messages[0].body, "hello");
    assert_eq!(messages[1].body, "hi");
}

/// **Test: Point lookup through the port.**
///
/// **Setup:** In-memory DB with one appended message.
/// **Action:** `find_message` with the assigned id and with an unknown id.
/// **Expected:** `Some(record)` for the assigned id, `None` for the unknown one.
#[tokio::test]
async fn test_find_message_through_port() {
    let log = create_log().await;

    let inserted = log
        .insert_message(&scout("company-acme", "cfo-tanaka", "join us"))
        .await
        .expect("Failed to insert message");

    let found = log
        .find_message(inserted.id)
        .await
        .expect("Failed to find message");
    assert!(found.is_some());
    assert_eq!(found.expect("Message should exist").body, "join us");

    let missing = log
        .find_message(inserted.id + 1000)
        .await
        .expect("Failed to query message");
    assert!(missing.is_none());
}

/// **Test: Scout counts through the port.**
///
/// **Setup:** Two scouts to one user, one scout from that user, one chat.
/// **Action:** `scout_counts("cfo-tanaka")`.
/// **Expected:** `(2, 1)`; the chat message is not counted.
#[tokio::test]
async fn test_scout_counts_through_port() {
    let log = create_log().await;

    log.insert_message(&scout("company-acme", "cfo-tanaka", "scout 1"))
        .await
        .expect("Failed to insert message");
    log.insert_message(&scout("company-beta", "cfo-tanaka", "scout 2"))
        .await
        .expect("Failed to insert message");
    log.insert_message(&scout("cfo-tanaka", "company-gamma", "reverse"))
        .await
        .expect("Failed to insert message");
    log.insert_message(&chat("company-acme", "cfo-tanaka", "hello"))
        .await
        .expect("Failed to insert message");

    let (received, sent) = log
        .scout_counts("cfo-tanaka")
        .await
        .expect("Failed to count scouts");

    assert_eq!(received, 2);
    assert_eq!(sent, 1);
}

/// **Test: File-backed database persists across reopen.**
///
/// **Setup:** Temp directory; repository created with a `sqlite:` file URL.
/// **Action:** Insert one message, drop the repository, open a new one on the
/// same file, `find_message` with the assigned id.
/// **Expected:** The message survives the reopen with its content intact.
#[tokio::test]
async fn test_file_backed_database_persists() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let database_url = format!("sqlite:{}", dir.path().join("scout.db").display());

    let inserted = {
        let repo = MessageRepository::new(&database_url)
            .await
            .expect("Failed to create repository");
        repo.insert(&chat("alice", "bob", "durable"))
            .await
            .expect("Failed to insert message")
    };

    let reopened = MessageRepository::new(&database_url)
        .await
        .expect("Failed to reopen repository");
    let found = reopened
        .find_by_id(inserted.id)
        .await
        .expect("Failed to find message")
        .expect("Message should persist");

    assert_eq!(found.body, "durable");
}
