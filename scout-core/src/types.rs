//! Core domain types: message kind, derived scout status, classifier verdict,
//! reply decision, resolver reply window, and list pagination.

use serde::{Deserialize, Serialize};

/// Kind of a logged message: cold outreach (scout) or ordinary chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Scout,
    Chat,
}

impl MessageKind {
    /// Storage representation (the `messages.kind` column).
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Scout => "scout",
            MessageKind::Chat => "chat",
        }
    }

    /// Parses the storage representation; `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scout" => Some(MessageKind::Scout),
            "chat" => Some(MessageKind::Chat),
            _ => None,
        }
    }
}

/// Derived lifecycle status of a scout. Never stored; recomputed from the
/// message log on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoutStatus {
    Pending,
    Accepted,
    Declined,
}

impl ScoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoutStatus::Pending => "pending",
            ScoutStatus::Accepted => "accepted",
            ScoutStatus::Declined => "declined",
        }
    }
}

/// Classifier verdict for a chat body.
///
/// Only `Accepted` and `Declined` can resolve a scout; `Ambiguous` marks a
/// reply that hints at an outcome without the canonical phrase and exists for
/// analytics and audit, `None` is everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Declined,
    Ambiguous,
    None,
}

/// Explicit outcome the addressee of a scout can reply with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accepted,
    Declined,
}

impl Decision {
    /// Storage representation (the `messages.decision` column).
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accepted => "accepted",
            Decision::Declined => "declined",
        }
    }

    /// Parses the storage representation; `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "accepted" => Some(Decision::Accepted),
            "declined" => Some(Decision::Declined),
            _ => None,
        }
    }
}

impl From<Decision> for ScoutStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Accepted => ScoutStatus::Accepted,
            Decision::Declined => ScoutStatus::Declined,
        }
    }
}

/// Candidate window of the scout status resolver.
///
/// `Unbounded` considers every later reply from the addressee, so a reply
/// meant for a newer scout between the same pair can be attributed to an
/// older one; that matches the observed behavior of the flat log and is the
/// default. `UntilNextScout` bounds the window at the next scout from the
/// same sender to the same receiver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplyScope {
    #[default]
    Unbounded,
    UntilNextScout,
}

/// Offset/limit pagination for list views.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Page {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Page {
    /// Every row: no limit, no offset.
    pub fn all() -> Self {
        Page::default()
    }

    /// Applies offset, then limit, to already-ordered rows.
    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        let offset = self.offset.unwrap_or(0).max(0) as usize;
        let rows = rows.into_iter().skip(offset);
        match self.limit {
            Some(limit) => rows.take(limit.max(0) as usize).collect(),
            None => rows.collect(),
        }
    }
}
