//! # seed-messages
//!
//! Standalone generator for message-log seed data. Output is a JSON array
//! shaped like the storage insert payload, so it pipes straight into
//! `scout import`.

pub mod generate;

pub use generate::{generate_messages, SeedMessage};
