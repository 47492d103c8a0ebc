//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Scout message engine CLI: resolve, list, respond", long_about = None)]
#[command(version)]
pub struct Cli {
    /// SQLite URL of the message log; overrides DATABASE_URL.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Print results as pretty JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the lifecycle status of one scout.
    Resolve {
        scout_id: i64,
        /// Bound the reply window at the next scout between the same pair.
        #[arg(long)]
        until_next_scout: bool,
    },
    /// List a user's conversations, most recently active first.
    Conversations {
        user: String,
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(long)]
        offset: Option<i64>,
    },
    /// Show the message thread between two users, most recent first.
    Thread {
        user: String,
        /// The other participant.
        #[arg(long = "with")]
        counterpart: String,
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(long)]
        offset: Option<i64>,
    },
    /// List a user's scouts with their derived status.
    Scouts {
        user: String,
        /// Which mailbox to list: received | sent.
        #[arg(short, long, default_value = "received")]
        mailbox: String,
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(long)]
        offset: Option<i64>,
    },
    /// Show scout counters for a user.
    Stats { user: String },
    /// Respond to a scout as its addressee.
    Respond {
        scout_id: i64,
        /// User id of the responder.
        #[arg(long = "as")]
        responder: String,
        /// accepted | declined
        decision: String,
        /// Free-text note appended to the canonical reply body.
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Append a single message to the log.
    Send {
        from: String,
        to: String,
        body: String,
        /// Message kind: chat | scout.
        #[arg(short, long, default_value = "chat")]
        kind: String,
    },
    /// Import messages from a JSON array into the log.
    Import {
        /// Path to the JSON file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
}
