//! # scout-core
//!
//! Core types and errors for the scout message engine: message kind, derived
//! scout status, classifier verdict, reply decision, pagination, and tracing
//! initialization. Storage-agnostic; used by storage, scout-engine, and the CLI.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{EngineError, Result};
pub use logger::init_tracing;
pub use types::{Decision, MessageKind, Page, ReplyScope, ScoutStatus, Verdict};
