mod scenario;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use murmur_core::store::ChatStore;
use murmur_core::typeahead;
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "murmur-cli")]
#[command(about = "Replay a session scenario and inspect the sidebar state")]
struct Cli {
    /// Path to a JSON scenario file
    #[arg(long, short = 'f')]
    fixture: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the direct-message list
    DmList {
        /// Show the unfiltered, untruncated view
        #[arg(long)]
        zoomed: bool,
    },

    /// Print channel sections in sidebar order
    Channels,

    /// Print recipient suggestions for a query
    Typeahead {
        /// Query text; omit for the empty query
        #[arg(default_value = "")]
        query: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = Scenario::load(&cli.fixture)?.into_store();

    match cli.command {
        Commands::DmList { zoomed } => {
            let info = store.dm_list_info(zoomed);
            for row in &info.conversations_to_be_shown {
                println!(
                    "{:>6}  {:<40} unread {}",
                    row.latest_marker, row.recipients, row.unread_count
                );
            }
            if info.more_conversations_unread_count > 0 {
                println!(
                    "more conversations: {} unread",
                    info.more_conversations_unread_count
                );
            }
        }
        Commands::Channels => {
            let sections = store.channels.sorted_sections();
            print_section("pinned", &sections.pinned, &store);
            print_section("channels", &sections.normal, &store);
            print_section("muted", &sections.muted, &store);
        }
        Commands::Typeahead { query } => {
            for suggestion in typeahead::recipient_suggestions(&store.people, &query) {
                println!("{:>6}  {}", suggestion.user_id, suggestion.label);
            }
        }
    }

    Ok(())
}

fn print_section(title: &str, channel_ids: &[u64], store: &ChatStore) {
    if channel_ids.is_empty() {
        return;
    }
    println!("{title}:");
    for &id in channel_ids {
        if let Some(channel) = store.channels.get(id) {
            println!(
                "  #{:<24} {} subscribers",
                channel.name,
                store.channels.subscriber_count(id, &store.people)
            );
        }
    }
}
