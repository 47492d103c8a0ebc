//! Subcommand handlers: build the engine against the configured message log,
//! run one operation, print the result as a table or as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use scout_core::{Decision, MessageKind, Page, ReplyScope};
use scout_engine::{Mailbox, ScoutEngine};
use storage::{MessageRecord, MessageRepository, NewMessage};

use crate::config::AppConfig;

const BODY_PREVIEW_LEN: usize = 60;

async fn build_engine(config: &AppConfig) -> Result<ScoutEngine> {
    let repo = MessageRepository::new(&config.database_url)
        .await
        .context("Open message log database (check DATABASE_URL)")?;
    Ok(ScoutEngine::new(Arc::new(repo)))
}

/// Table timestamp: seconds precision, UTC.
fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One-line body preview. Counts characters, not bytes, so multibyte text is
/// never cut mid-character.
fn preview(body: &str) -> String {
    let flat = body.replace('\n', " ");
    if flat.chars().count() <= BODY_PREVIEW_LEN {
        flat
    } else {
        let truncated: String = flat.chars().take(BODY_PREVIEW_LEN).collect();
        format!("{}...", truncated)
    }
}

pub async fn handle_resolve(
    config: &AppConfig,
    scout_id: i64,
    until_next_scout: bool,
    json: bool,
) -> Result<()> {
    let engine = build_engine(config).await?;
    let scope = if until_next_scout {
        ReplyScope::UntilNextScout
    } else {
        ReplyScope::Unbounded
    };

    let status = engine.resolve_status_with_scope(scout_id, scope).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("Scout {} is {}", scout_id, status.as_str());
    }
    Ok(())
}

pub async fn handle_conversations(
    config: &AppConfig,
    user: &str,
    page: Page,
    json: bool,
) -> Result<()> {
    let engine = build_engine(config).await?;
    let conversations = engine.list_conversations(user, page).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversations)?);
        return Ok(());
    }

    if conversations.is_empty() {
        println!("No conversations for {}.", user);
        return Ok(());
    }

    println!("{} conversation(s) for {}:\n", conversations.len(), user);
    println!(
        "{:<20} {:<20} {:<6} {}",
        "counterpart", "last activity", "kind", "last message"
    );
    println!("{}", "-".repeat(100));
    for conversation in &conversations {
        println!(
            "{:<20} {:<20} {:<6} {}",
            conversation.counterpart_id,
            format_ts(&conversation.last_sent_at),
            conversation.last_message.kind,
            preview(&conversation.last_message.body)
        );
    }
    Ok(())
}

pub async fn handle_thread(
    config: &AppConfig,
    user: &str,
    counterpart: &str,
    page: Page,
    json: bool,
) -> Result<()> {
    let engine = build_engine(config).await?;
    let thread = engine.fetch_thread(user, counterpart, page).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&thread)?);
        return Ok(());
    }

    if thread.is_empty() {
        println!("No messages between {} and {}.", user, counterpart);
        return Ok(());
    }

    println!(
        "{} message(s) between {} and {}:\n",
        thread.len(),
        user,
        counterpart
    );
    print_message_table(&thread);
    Ok(())
}

pub async fn handle_scouts(
    config: &AppConfig,
    user: &str,
    mailbox: &str,
    page: Page,
    json: bool,
) -> Result<()> {
    let mailbox = Mailbox::parse(mailbox)
        .with_context(|| format!("Unknown mailbox '{}', expected received | sent", mailbox))?;

    let engine = build_engine(config).await?;
    let scouts = engine.list_scouts(user, mailbox, page).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scouts)?);
        return Ok(());
    }

    if scouts.is_empty() {
        println!("No scouts for {}.", user);
        return Ok(());
    }

    println!("{} scout(s) for {}:\n", scouts.len(), user);
    println!(
        "{:<6} {:<20} {:<20} {:<10} {}",
        "id", "sent at", "counterpart", "status", "body"
    );
    println!("{}", "-".repeat(100));
    for summary in &scouts {
        let counterpart = match mailbox {
            Mailbox::Received => &summary.scout.sender_id,
            Mailbox::Sent => &summary.scout.receiver_id,
        };
        println!(
            "{:<6} {:<20} {:<20} {:<10} {}",
            summary.scout.id,
            format_ts(&summary.scout.sent_at),
            counterpart,
            summary.status.as_str(),
            preview(&summary.scout.body)
        );
    }
    Ok(())
}

pub async fn handle_stats(config: &AppConfig, user: &str, json: bool) -> Result<()> {
    let engine = build_engine(config).await?;
    let stats = engine.compute_stats(user).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Scout stats for {}:", user);
    println!("  received: {}", stats.received_count);
    println!("  sent:     {}", stats.sent_count);
    println!("  pending:  {}", stats.pending_count);
    println!("  accepted: {}", stats.accepted_count);
    println!("  declined: {}", stats.declined_count);
    println!("  unread:   {}", stats.unread_count);
    Ok(())
}

pub async fn handle_respond(
    config: &AppConfig,
    scout_id: i64,
    responder: &str,
    decision: &str,
    note: Option<&str>,
    json: bool,
) -> Result<()> {
    let decision = Decision::parse(decision)
        .with_context(|| format!("Unknown decision '{}', expected accepted | declined", decision))?;

    let engine = build_engine(config).await?;
    let reply = engine
        .respond_to_scout(scout_id, responder, decision, note)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        println!(
            "Reply {} appended: scout {} {} by {}",
            reply.id,
            scout_id,
            decision.as_str(),
            responder
        );
    }
    Ok(())
}

pub async fn handle_send(
    config: &AppConfig,
    from: &str,
    to: &str,
    body: &str,
    kind: &str,
    json: bool,
) -> Result<()> {
    let kind = MessageKind::parse(kind)
        .with_context(|| format!("Unknown message kind '{}', expected chat | scout", kind))?;

    let engine = build_engine(config).await?;
    let message = NewMessage::new(
        from.to_string(),
        to.to_string(),
        kind.as_str().to_string(),
        body.to_string(),
    );
    let inserted = engine.append_message(&message).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&inserted)?);
    } else {
        println!(
            "Message {} ({}) sent from {} to {}",
            inserted.id, inserted.kind, inserted.sender_id, inserted.receiver_id
        );
    }
    Ok(())
}

/// Checks every payload's kind and decision against the log vocabulary
/// before anything is appended, so a bad file imports nothing.
fn validate_import(messages: &[NewMessage]) -> Result<()> {
    for (index, message) in messages.iter().enumerate() {
        MessageKind::parse(&message.kind).with_context(|| {
            format!(
                "Message {} has unknown kind '{}', expected chat | scout",
                index, message.kind
            )
        })?;
        if let Some(decision) = &message.decision {
            Decision::parse(decision).with_context(|| {
                format!(
                    "Message {} has unknown decision '{}', expected accepted | declined",
                    index, decision
                )
            })?;
        }
    }
    Ok(())
}

pub async fn handle_import(config: &AppConfig, file: Option<PathBuf>) -> Result<()> {
    let messages: Vec<NewMessage> = match &file {
        Some(path) => {
            let reader = std::fs::File::open(path)
                .with_context(|| format!("Open import file {}", path.display()))?;
            serde_json::from_reader(reader)
                .with_context(|| format!("Parse JSON messages from {}", path.display()))?
        }
        None => serde_json::from_reader(std::io::stdin()).context("Parse JSON messages from stdin")?,
    };
    validate_import(&messages)?;

    let engine = build_engine(config).await?;
    let mut imported = 0;
    for message in &messages {
        engine.append_message(message).await?;
        imported += 1;
    }

    println!("Imported {} message(s)", imported);
    Ok(())
}

fn print_message_table(messages: &[MessageRecord]) {
    println!(
        "{:<6} {:<20} {:<20} {:<6} {}",
        "id", "sent at", "sender", "kind", "body"
    );
    println!("{}", "-".repeat(100));
    for message in messages {
        println!(
            "{:<6} {:<20} {:<20} {:<6} {}",
            message.id,
            format_ts(&message.sent_at),
            message.sender_id,
            message.kind,
            preview(&message.body)
        );
    }
}
