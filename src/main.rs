use std::fs;

use clap::Parser;
use tracing::Level;

use rrss::cli::{Cli, OutputFormat};
use rrss::config::Config;
use rrss::errors::RrssResult;
use rrss::feedlist;
use rrss::filters::FilterRegistry;
use rrss::render::{BarfRenderer, BlaghRenderer, PlainTextRenderer, Renderer};
use rrss::services::Aggregator;
use rrss::sources::RssAtomSource;
use rrss::storage::FileLedger;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> RrssResult<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli);

    init_logging(config.debug);

    let ledger = FileLedger::new(config.ledger_path());

    let input = fs::read_to_string(&config.feed_file)?;
    let lines = feedlist::parse(&input);

    let aggregator = Aggregator::new(ledger.clone(), RssAtomSource::new(), FilterRegistry::new());
    let articles = aggregator.collect(&lines)?;

    let renderer: Box<dyn Renderer> = match config.format {
        OutputFormat::Plain => Box::new(PlainTextRenderer::new()),
        OutputFormat::Barf => Box::new(BarfRenderer::new(config.barf_dest(), ledger)),
        OutputFormat::Blagh => Box::new(BlaghRenderer::new(config.root.clone(), ledger)),
    };

    renderer.render(&articles)
}

/// Recoverable failures log as warnings, so without `-d` the error stream
/// stays silent unless something fatal happens.
fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::ERROR };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
