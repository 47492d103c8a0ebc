//! # scout-engine
//!
//! Derivation engine over the append-only message log. Every view it serves
//! is computed from the log on each call; nothing derived is ever stored.
//!
//! ## Modules
//!
//! - `classifier`: pure text classifier mapping a reply body to a verdict
//! - `resolver`: derives a scout's lifecycle status from its reply sub-log
//! - `conversations`: groups a user's messages into per-counterpart threads
//! - `stats`: per-user scout counters, recomputed fresh per request
//! - `responder`: the reply write path (accept/decline a scout)
//! - `engine`: facade wiring the above over one message log handle

pub mod classifier;
pub mod conversations;
pub mod engine;
pub mod resolver;
pub mod responder;
pub mod stats;

pub use classifier::classify;
pub use conversations::Conversation;
pub use engine::{Mailbox, ScoutEngine, ScoutSummary};
pub use stats::ScoutStats;
