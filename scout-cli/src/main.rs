//! scout CLI: inspect and exercise the message-derived scout engine against
//! a SQLite message log. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use scout_cli::cli::{Cli, Commands};
use scout_cli::commands;
use scout_cli::config::AppConfig;
use scout_core::Page;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.database_url.clone())?;

    scout_core::init_tracing(&config.log_file)?;
    info!(database_url = %config.database_url, "Scout CLI starting");

    match cli.command {
        Commands::Resolve {
            scout_id,
            until_next_scout,
        } => commands::handle_resolve(&config, scout_id, until_next_scout, cli.json).await,
        Commands::Conversations {
            user,
            limit,
            offset,
        } => {
            commands::handle_conversations(&config, &user, Page { limit, offset }, cli.json).await
        }
        Commands::Thread {
            user,
            counterpart,
            limit,
            offset,
        } => {
            commands::handle_thread(&config, &user, &counterpart, Page { limit, offset }, cli.json)
                .await
        }
        Commands::Scouts {
            user,
            mailbox,
            limit,
            offset,
        } => {
            commands::handle_scouts(&config, &user, &mailbox, Page { limit, offset }, cli.json)
                .await
        }
        Commands::Stats { user } => commands::handle_stats(&config, &user, cli.json).await,
        Commands::Respond {
            scout_id,
            responder,
            decision,
            note,
        } => {
            commands::handle_respond(
                &config,
                scout_id,
                &responder,
                &decision,
                note.as_deref(),
                cli.json,
            )
            .await
        }
        Commands::Send {
            from,
            to,
            body,
            kind,
        } => commands::handle_send(&config, &from, &to, &body, &kind, cli.json).await,
        Commands::Import { file } => commands::handle_import(&config, file).await,
    }
}
