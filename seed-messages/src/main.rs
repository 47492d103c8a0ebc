//! Binary: load env, generate messages, write JSON to stdout.
//!
//! The count goes to stderr so stdout stays a clean pipe into
//! `scout import`.

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let messages = seed_messages::generate_messages()?;
    let json = serde_json::to_string_pretty(&messages)?;
    println!("{}", json);
    eprintln!("Generated {} seed messages", messages.len());
    Ok(())
}
