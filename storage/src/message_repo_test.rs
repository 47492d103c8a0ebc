//! Unit tests for MessageRepository
//!
//! Each test runs against a fresh in-memory SQLite database, so tests are
//! independent and need no cleanup.

use chrono::{DateTime, Utc};

use crate::message_repo::MessageRepository;
use crate::models::{LogPosition, MessageQuery, NewMessage, SortOrder};

async fn create_test_repo() -> MessageRepository {
    MessageRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create test repository")
}

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp
        .parse::<DateTime<Utc>>()
        .expect("Failed to parse test timestamp")
}

fn chat_at(sender: &str, receiver: &str, body: &str, sent_at: &str) -> NewMessage {
    let mut message = NewMessage::new(
        sender.to_string(),
        receiver.to_string(),
        "chat".to_string(),
        body.to_string(),
    );
    message.sent_at = Some(at(sent_at));
    message
}

fn scout_at(sender: &str, receiver: &str, body: &str, sent_at: &str) -> NewMessage {
    let mut message = NewMessage::new(
        sender.to_string(),
        receiver.to_string(),
        "scout".to_string(),
        body.to_string(),
    );
    message.sent_at = Some(at(sent_at));
    message
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let repo = create_test_repo().await;

    let first = repo
        .insert(&chat_at("alice", "bob", "hello", "2024-06-01T09:00:00Z"))
        .await
        .expect("Failed to insert first message");
    let second = repo
        .insert(&chat_at("bob", "alice", "hi", "2024-06-01T09:01:00Z"))
        .await
        .expect("Failed to insert second message");
    let third = repo
        .insert(&chat_at("alice", "bob", "how are you", "2024-06-01T09:02:00Z"))
        .await
        .expect("Failed to insert third message");

    assert!(first.id < second.id);
    assert!(second.id < third.id);
}

#[tokio::test]
async fn test_insert_fills_sent_at_when_missing() {
    let repo = create_test_repo().await;

    let before = Utc::now();
    let message = NewMessage::new(
        "alice".to_string(),
        "bob".to_string(),
        "chat".to_string(),
        "hello".to_string(),
    );
    let record = repo.insert(&message).await.expect("Failed to insert message");
    let after = Utc::now();

    assert!(record.sent_at >= before);
    assert!(record.sent_at <= after);
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = create_test_repo().await;

    let inserted = repo
        .insert(&scout_at(
            "company-acme",
            "cfo-tanaka",
            "We would like to scout you",
            "2024-06-01T09:00:00Z",
        ))
        .await
        .expect("Failed to insert message");

    let found = repo
        .find_by_id(inserted.id)
        .await
        .expect("Failed to find message")
        .expect("Message should exist");

    assert_eq!(found.id, inserted.id);
    assert_eq!(found.sender_id, "company-acme");
    assert_eq!(found.receiver_id, "cfo-tanaka");
    assert_eq!(found.kind, "scout");
    assert_eq!(found.body, "We would like to scout you");
    assert_eq!(found.decision, None);
    assert_eq!(found.sent_at, at("2024-06-01T09:00:00Z"));
}

#[tokio::test]
async fn test_find_by_id_returns_none_for_unknown() {
    let repo = create_test_repo().await;

    let found = repo.find_by_id(9999).await.expect("Failed to query message");

    assert!(found.is_none());
}

#[tokio::test]
async fn test_fetch_filters_by_participant() {
    let repo = create_test_repo().await;

    repo.insert(&chat_at("alice", "bob", "to bob", "2024-06-01T09:00:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&chat_at("bob", "alice", "to alice", "2024-06-01T09:01:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&chat_at("carol", "dave", "unrelated", "2024-06-01T09:02:00Z"))
        .await
        .expect("Failed to insert message");

    let query = MessageQuery {
        participant: Some("alice".to_string()),
        ..Default::default()
    };
    let messages = repo.fetch(&query).await.expect("Failed to fetch messages");

    assert_eq!(messages.len(), 2);
    assert!(messages
        .iter()
        .all(|m| m.sender_id == "alice" || m.receiver_id == "alice"));
}

#[tokio::test]
async fn test_fetch_filters_by_sender_receiver_and_kind() {
    let repo = create_test_repo().await;

    repo.insert(&scout_at("company-acme", "cfo-tanaka", "scout", "2024-06-01T09:00:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&chat_at("company-acme", "cfo-tanaka", "chat", "2024-06-01T09:01:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&scout_at("company-beta", "cfo-tanaka", "scout", "2024-06-01T09:02:00Z"))
        .await
        .expect("Failed to insert message");

    let query = MessageQuery {
        sender_id: Some("company-acme".to_string()),
        receiver_id: Some("cfo-tanaka".to_string()),
        kind: Some("scout".to_string()),
        ..Default::default()
    };
    let messages = repo.fetch(&query).await.expect("Failed to fetch messages");

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_id, "company-acme");
    assert_eq!(messages[0].kind, "scout");
}

#[tokio::test]
async fn test_fetch_after_bound_is_strict_and_breaks_ties_by_id() {
    let repo = create_test_repo().await;

    // Three messages sharing one timestamp; only the id separates them.
    let first = repo
        .insert(&chat_at("alice", "bob", "first", "2024-06-01T09:00:00Z"))
        .await
        .expect("Failed to insert message");
    let second = repo
        .insert(&chat_at("alice", "bob", "second", "2024-06-01T09:00:00Z"))
        .await
        .expect("Failed to insert message");
    let third = repo
        .insert(&chat_at("alice", "bob", "third", "2024-06-01T09:00:00Z"))
        .await
        .expect("Failed to insert message");

    let query = MessageQuery {
        after: Some(LogPosition {
            sent_at: first.sent_at,
            id: first.id,
        }),
        order: SortOrder::Ascending,
        ..Default::default()
    };
    let messages = repo.fetch(&query).await.expect("Failed to fetch messages");

    let ids: Vec<i64> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![second.id, third.id]);
}

#[tokio::test]
async fn test_fetch_before_bound_is_strict() {
    let repo = create_test_repo().await;

    repo.insert(&chat_at("alice", "bob", "first", "2024-06-01T09:00:00Z"))
        .await
        .expect("Failed to insert message");
    let second = repo
        .insert(&chat_at("alice", "bob", "second", "2024-06-01T09:01:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&chat_at("alice", "bob", "third", "2024-06-01T09:02:00Z"))
        .await
        .expect("Failed to insert message");

    let query = MessageQuery {
        before: Some(second.position()),
        order: SortOrder::Ascending,
        ..Default::default()
    };
    let messages = repo.fetch(&query).await.expect("Failed to fetch messages");

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "first");
}

#[tokio::test]
async fn test_fetch_orders_by_sent_at_then_id() {
    let repo = create_test_repo().await;

    // Inserted out of chronological order on purpose.
    repo.insert(&chat_at("alice", "bob", "late", "2024-06-01T10:00:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&chat_at("alice", "bob", "early", "2024-06-01T09:00:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&chat_at("alice", "bob", "middle", "2024-06-01T09:30:00Z"))
        .await
        .expect("Failed to insert message");

    let ascending = repo
        .fetch(&MessageQuery {
            order: SortOrder::Ascending,
            ..Default::default()
        })
        .await
        .expect("Failed to fetch messages");
    let bodies: Vec<&str> = ascending.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, vec!["early", "middle", "late"]);

    let descending = repo
        .fetch(&MessageQuery::default())
        .await
        .expect("Failed to fetch messages");
    let bodies: Vec<&str> = descending.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, vec!["late", "middle", "early"]);
}

#[tokio::test]
async fn test_fetch_limit_and_offset() {
    let repo = create_test_repo().await;

    for i in 0..5 {
        repo.insert(&chat_at(
            "alice",
            "bob",
            &format!("message {}", i),
            &format!("2024-06-01T09:0{}:00Z", i),
        ))
        .await
        .expect("Failed to insert message");
    }

    let query = MessageQuery {
        order: SortOrder::Ascending,
        limit: Some(2),
        offset: Some(1),
        ..Default::default()
    };
    let messages = repo.fetch(&query).await.expect("Failed to fetch messages");

    let bodies: Vec<&str> = messages.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, vec!["message 1", "message 2"]);
}

#[tokio::test]
async fn test_count_scouts() {
    let repo = create_test_repo().await;

    repo.insert(&scout_at("company-acme", "cfo-tanaka", "scout 1", "2024-06-01T09:00:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&scout_at("company-beta", "cfo-tanaka", "scout 2", "2024-06-01T09:01:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&scout_at("cfo-tanaka", "company-gamma", "reverse scout", "2024-06-01T09:02:00Z"))
        .await
        .expect("Failed to insert message");
    repo.insert(&chat_at("company-acme", "cfo-tanaka", "not a scout", "2024-06-01T09:03:00Z"))
        .await
        .expect("Failed to insert message");

    let (received, sent) = repo
        .count_scouts("cfo-tanaka")
        .await
        .expect("Failed to count scouts");

    assert_eq!(received, 2);
    assert_eq!(sent, 1);
}
