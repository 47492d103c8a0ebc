//! Storage crate: the append-only message log and its repository.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – MessageRecord, NewMessage, MessageQuery
//! - [`repository`] – MessageLog port
//! - [`message_repo`] – MessageRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod message_repo;
mod models;
mod repository;
mod sqlite_pool;

#[cfg(test)]
mod message_repo_test;

pub use error::StorageError;
pub use message_repo::MessageRepository;
pub use models::{LogPosition, MessageQuery, MessageRecord, NewMessage, SortOrder};
pub use repository::MessageLog;
pub use sqlite_pool::SqlitePoolManager;
