//! Engine error types.
//!
//! Authorization and not-found failures propagate to the caller unchanged;
//! they are not transient and are never retried. Classification ambiguity is
//! not an error anywhere in the engine.

use thiserror::Error;

/// Errors surfaced by the derivation engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Scout not found: {0}")]
    ScoutNotFound(i64),

    #[error("Message {0} is not a scout")]
    NotAScout(i64),

    #[error("User {responder_id} is not the addressee of scout {scout_id}")]
    NotAddressee { scout_id: i64, responder_id: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
