use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::engine::merge::SortOrder;
use crate::engine::social::{FriendsActivityStream, SocialGraph};
use crate::shared::config::{FeedConfig, Settings, load_settings_from};

#[derive(Debug, Parser)]
#[command(name = "socnet_feed")]
#[command(about = "Print the merged status feed of a person's friends", long_about = None)]
pub struct Args {
    /// Path to the social graph JSON document
    #[arg(short, long)]
    pub data: PathBuf,

    /// Person whose friends' updates are shown
    #[arg(short, long)]
    pub person: String,

    /// Number of updates to skip
    #[arg(short, long, default_value = "0")]
    pub offset: usize,

    /// Maximum number of updates to print (defaults to feed.default_page_size)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show the most recent updates first
    #[arg(long, conflicts_with = "oldest_first")]
    pub newest_first: bool,

    /// Show the oldest updates first, overriding feed.newest_first
    #[arg(long)]
    pub oldest_first: bool,

    /// Print one JSON object per update instead of tab-separated columns
    #[arg(long)]
    pub json: bool,

    /// Settings file; falls back to $SOCNET_FEED_CONFIG, then `config`
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    /// Command-line flags win over `feed.newest_first` in either direction.
    pub fn order(&self, feed: &FeedConfig) -> SortOrder {
        if self.newest_first {
            SortOrder::Descending
        } else if self.oldest_first {
            SortOrder::Ascending
        } else {
            SortOrder::from_newest_first(feed.newest_first)
        }
    }

    pub fn limit(&self, feed: &FeedConfig) -> usize {
        self.limit.unwrap_or(feed.default_page_size)
    }

    pub fn config_path(&self) -> String {
        self.config
            .clone()
            .or_else(|| std::env::var("SOCNET_FEED_CONFIG").ok())
            .unwrap_or_else(|| "config".to_string())
    }
}

pub fn load_settings(path: &str) -> anyhow::Result<Settings> {
    load_settings_from(path).with_context(|| format!("failed to load settings from {:?}", path))
}

/// Writes one page of `args.person`'s friends feed to `out` and returns the
/// number of updates written.
pub fn render_feed<G, W>(graph: &G, args: &Args, feed: &FeedConfig, mut out: W) -> anyhow::Result<usize>
where
    G: SocialGraph + ?Sized,
    W: Write,
{
    let limit = args.limit(feed);
    let mut stream = FriendsActivityStream::with_order(graph, &args.person, args.order(feed))
        .inspect_err(|e| e.log_error())?;

    info!(
        target: "socnet_feed::cli",
        person = %args.person,
        offset = args.offset,
        limit = limit,
        "Printing friends feed"
    );

    let page = stream.page(args.offset, limit);
    for update in &page {
        if args.json {
            serde_json::to_writer(&mut out, update)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}\t{}\t{}", update.date, update.author, update.text)?;
        }
    }
    out.flush()?;

    Ok(page.len())
}
