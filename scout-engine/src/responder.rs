//! Reply emitter: the only write path in the engine.
//!
//! A decision reply is an ordinary chat message from the addressee back to
//! the scout's sender. It carries the typed decision and a body built from
//! the canonical template, so both the typed path and the text classifier
//! recognize it later. The scout message itself is never touched.

use scout_core::{Decision, EngineError, MessageKind, Result};
use storage::{MessageLog, MessageRecord, NewMessage};
use tracing::{error, info, instrument};

use crate::classifier;

/// Builds the reply body: the canonical template for the decision, with the
/// optional note appended on its own line.
pub fn reply_body(decision: Decision, note: Option<&str>) -> String {
    let template = match decision {
        Decision::Accepted => classifier::ACCEPT_TEMPLATE,
        Decision::Declined => classifier::DECLINE_TEMPLATE,
    };
    match note {
        Some(note) if !note.trim().is_empty() => format!("{}\n{}", template, note.trim()),
        _ => template.to_string(),
    }
}

/// Appends `responder_id`'s decision reply for `scout`.
///
/// Only the scout's addressee may respond; anyone else is rejected before
/// anything is written. The caller is expected to have resolved `scout` from
/// the log already.
#[instrument(skip(scout, log, note))]
pub async fn respond_to_scout(
    scout: &MessageRecord,
    log: &dyn MessageLog,
    responder_id: &str,
    decision: Decision,
    note: Option<&str>,
) -> Result<MessageRecord> {
    if responder_id != scout.receiver_id {
        return Err(EngineError::NotAddressee {
            scout_id: scout.id,
            responder_id: responder_id.to_string(),
        });
    }

    let mut reply = NewMessage::new(
        scout.receiver_id.clone(),
        scout.sender_id.clone(),
        MessageKind::Chat.as_str().to_string(),
        reply_body(decision, note),
    );
    reply.decision = Some(decision.as_str().to_string());

    let inserted = log.insert_message(&reply).await.map_err(|e| {
        error!(error = %e, scout_id = scout.id, "Failed to append scout reply");
        EngineError::Storage(e.to_string())
    })?;

    info!(
        scout_id = scout.id,
        reply_id = inserted.id,
        decision = decision.as_str(),
        "Scout reply appended"
    );

    Ok(inserted)
}
