//! Storage models: message record, insert payload, query filter.

mod message_query;
mod message_record;
mod new_message;

pub use message_query::{MessageQuery, SortOrder};
pub use message_record::{LogPosition, MessageRecord};
pub use new_message::NewMessage;
