//! Scout status resolver.
//!
//! A scout's status is derived from its reply sub-log on every call and never
//! stored, so it cannot drift from the message history. Candidates are
//! scanned newest first and the first explicit verdict wins; a later
//! correction ("accept, then decline after all") therefore overrides the
//! earlier reply.

use std::cmp::Reverse;

use scout_core::{Decision, EngineError, MessageKind, ReplyScope, Result, ScoutStatus, Verdict};
use storage::{LogPosition, MessageLog, MessageQuery, MessageRecord, SortOrder};
use tracing::{instrument, warn};

use crate::classifier;

/// Query selecting a scout's candidate replies: chat messages from the
/// scout's receiver back to its sender, strictly after the scout in
/// `(sent_at, id)` order, newest first.
pub fn candidate_query(scout: &MessageRecord) -> MessageQuery {
    MessageQuery {
        sender_id: Some(scout.receiver_id.clone()),
        receiver_id: Some(scout.sender_id.clone()),
        kind: Some(MessageKind::Chat.as_str().to_string()),
        after: Some(scout.position()),
        order: SortOrder::Descending,
        ..Default::default()
    }
}

/// Verdict of a single candidate reply.
///
/// A typed `decision` value wins outright; free-text classification is the
/// compatibility path for replies recorded before decisions were typed.
fn candidate_verdict(reply: &MessageRecord) -> Verdict {
    if let Some(decision) = &reply.decision {
        match Decision::parse(decision) {
            Some(Decision::Accepted) => return Verdict::Accepted,
            Some(Decision::Declined) => return Verdict::Declined,
            None => {
                warn!(
                    message_id = reply.id,
                    decision = %decision,
                    "Unknown decision value, falling back to text classification"
                );
            }
        }
    }
    classifier::classify(&reply.body)
}

/// Resolves status from an already-fetched candidate set.
///
/// The first candidate, newest first, whose verdict is `Accepted` or
/// `Declined` fixes the result; `Ambiguous` and `None` candidates are
/// skipped. No resolving candidate means `Pending`. Input order does not
/// matter: candidates are re-sorted by `(sent_at, id)` descending before the
/// scan, so the result is a pure function of the set.
pub fn resolve_from_replies(replies: &[MessageRecord]) -> ScoutStatus {
    let mut ordered: Vec<&MessageRecord> = replies.iter().collect();
    ordered.sort_by_key(|reply| Reverse(reply.position()));

    for reply in ordered {
        match candidate_verdict(reply) {
            Verdict::Accepted => return ScoutStatus::Accepted,
            Verdict::Declined => return ScoutStatus::Declined,
            Verdict::Ambiguous | Verdict::None => {}
        }
    }
    ScoutStatus::Pending
}

/// Reports `(sent_at, id)` inversions among the candidates.
///
/// Client clock skew can make a later-appended message carry an earlier
/// timestamp. The composite order absorbs it; the inversion is logged for
/// audit and never corrected.
fn log_clock_skew(replies: &[MessageRecord]) {
    let mut ordered: Vec<&MessageRecord> = replies.iter().collect();
    ordered.sort_by_key(|reply| reply.position());

    for pair in ordered.windows(2) {
        if pair[1].id < pair[0].id {
            warn!(
                earlier_message_id = pair[0].id,
                later_message_id = pair[1].id,
                "sent_at order disagrees with append order, clocks may be skewed"
            );
        }
    }
}

/// Position of the next scout from the same sender to the same receiver, if
/// any. Used as the candidate window's upper bound under
/// [`ReplyScope::UntilNextScout`].
async fn next_scout_position(
    scout: &MessageRecord,
    log: &dyn MessageLog,
) -> Result<Option<LogPosition>> {
    let query = MessageQuery {
        sender_id: Some(scout.sender_id.clone()),
        receiver_id: Some(scout.receiver_id.clone()),
        kind: Some(MessageKind::Scout.as_str().to_string()),
        after: Some(scout.position()),
        order: SortOrder::Ascending,
        limit: Some(1),
        ..Default::default()
    };
    let scouts = log
        .fetch_messages(&query)
        .await
        .map_err(|e| EngineError::Storage(e.to_string()))?;
    Ok(scouts.first().map(|next| next.position()))
}

/// Resolves a scout's lifecycle status against the log.
///
/// With the default [`ReplyScope::Unbounded`] the candidate window is open
/// ended, so a reply meant for a newer scout between the same pair can
/// resolve an older one as well. [`ReplyScope::UntilNextScout`] bounds each
/// scout's window at the next scout of the same pair.
#[instrument(skip(scout, log))]
pub async fn resolve_status(
    scout: &MessageRecord,
    log: &dyn MessageLog,
    scope: ReplyScope,
) -> Result<ScoutStatus> {
    let mut query = candidate_query(scout);
    if scope == ReplyScope::UntilNextScout {
        query.before = next_scout_position(scout, log).await?;
    }

    let replies = log
        .fetch_messages(&query)
        .await
        .map_err(|e| EngineError::Storage(e.to_string()))?;

    log_clock_skew(&replies);
    Ok(resolve_from_replies(&replies))
}
