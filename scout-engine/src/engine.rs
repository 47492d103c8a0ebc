//! Engine facade: one entry point per derived view plus the reply write path.

use std::sync::Arc;

use scout_core::{Decision, EngineError, MessageKind, Page, ReplyScope, Result, ScoutStatus};
use serde::Serialize;
use storage::{MessageLog, MessageQuery, MessageRecord, NewMessage, SortOrder};

use crate::conversations::{self, Conversation};
use crate::resolver;
use crate::responder;
use crate::stats::{self, ScoutStats};

/// Which side of a user's scout traffic to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mailbox {
    Received,
    Sent,
}

impl Mailbox {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "received" => Some(Mailbox::Received),
            "sent" => Some(Mailbox::Sent),
            _ => None,
        }
    }
}

/// A scout message together with its derived status.
#[derive(Debug, Clone, Serialize)]
pub struct ScoutSummary {
    pub scout: MessageRecord,
    pub status: ScoutStatus,
}

/// Facade over one message log.
///
/// Holds only the log handle; every view is derived per call, so the engine
/// is stateless between requests and cheap to clone across tasks.
#[derive(Clone)]
pub struct ScoutEngine {
    log: Arc<dyn MessageLog>,
}

impl ScoutEngine {
    pub fn new(log: Arc<dyn MessageLog>) -> Self {
        Self { log }
    }

    async fn require_scout(&self, scout_id: i64) -> Result<MessageRecord> {
        let message = self
            .log
            .find_message(scout_id)
            .await
            .map_err(|e| EngineError::Storage(e.to_string()))?
            .ok_or(EngineError::ScoutNotFound(scout_id))?;

        if MessageKind::parse(&message.kind) != Some(MessageKind::Scout) {
            return Err(EngineError::NotAScout(scout_id));
        }
        Ok(message)
    }

    /// Derives the scout's current status with the default reply scope.
    pub async fn resolve_status(&self, scout_id: i64) -> Result<ScoutStatus> {
        self.resolve_status_with_scope(scout_id, ReplyScope::default())
            .await
    }

    pub async fn resolve_status_with_scope(
        &self,
        scout_id: i64,
        scope: ReplyScope,
    ) -> Result<ScoutStatus> {
        let scout = self.require_scout(scout_id).await?;
        resolver::resolve_status(&scout, self.log.as_ref(), scope).await
    }

    /// Lists the user's conversations, most recently active first.
    pub async fn list_conversations(&self, user_id: &str, page: Page) -> Result<Vec<Conversation>> {
        conversations::list_conversations(self.log.as_ref(), user_id, page).await
    }

    /// Fetches the two-way thread between two users, most recent first.
    pub async fn fetch_thread(
        &self,
        user_id: &str,
        counterpart_id: &str,
        page: Page,
    ) -> Result<Vec<MessageRecord>> {
        conversations::fetch_thread(self.log.as_ref(), user_id, counterpart_id, page).await
    }

    /// Lists scouts in one of the user's mailboxes with their derived status,
    /// most recent first.
    pub async fn list_scouts(
        &self,
        user_id: &str,
        mailbox: Mailbox,
        page: Page,
    ) -> Result<Vec<ScoutSummary>> {
        let mut query = MessageQuery {
            kind: Some(MessageKind::Scout.as_str().to_string()),
            order: SortOrder::Descending,
            ..Default::default()
        };
        match mailbox {
            Mailbox::Received => query.receiver_id = Some(user_id.to_string()),
            Mailbox::Sent => query.sender_id = Some(user_id.to_string()),
        }

        let scouts = self
            .log
            .fetch_messages(&query)
            .await
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        let scouts = page.apply(scouts);

        let mut summaries = Vec::with_capacity(scouts.len());
        for scout in scouts {
            let status =
                resolver::resolve_status(&scout, self.log.as_ref(), ReplyScope::default()).await?;
            summaries.push(ScoutSummary { scout, status });
        }
        Ok(summaries)
    }

    /// Computes fresh scout statistics for the user.
    pub async fn compute_stats(&self, user_id: &str) -> Result<ScoutStats> {
        stats::compute_stats(self.log.as_ref(), user_id, ReplyScope::default()).await
    }

    /// Appends the addressee's decision reply for a scout.
    pub async fn respond_to_scout(
        &self,
        scout_id: i64,
        responder_id: &str,
        decision: Decision,
        note: Option<&str>,
    ) -> Result<MessageRecord> {
        let scout = self.require_scout(scout_id).await?;
        responder::respond_to_scout(&scout, self.log.as_ref(), responder_id, decision, note).await
    }

    /// Appends an ordinary message (scout or chat) to the log. Decision
    /// replies go through [`ScoutEngine::respond_to_scout`] instead.
    pub async fn append_message(&self, message: &NewMessage) -> Result<MessageRecord> {
        self.log
            .insert_message(message)
            .await
            .map_err(|e| EngineError::Storage(e.to_string()))
    }
}
