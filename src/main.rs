use clap::Parser;
use socnet_feed::cli::{Args, load_settings, render_feed};
use socnet_feed::engine::social::InMemorySocialGraph;
use socnet_feed::logging;
use std::io::{self, BufWriter};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.config_path())?;
    logging::init(&settings.logging)?;

    let graph = InMemorySocialGraph::from_path(&args.data).inspect_err(|e| e.log_error())?;

    let stdout = io::stdout();
    render_feed(&graph, &args, &settings.feed, BufWriter::new(stdout.lock()))?;

    Ok(())
}
