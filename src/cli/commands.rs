use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "rrss")]
#[command(about = "Render new RSS/Atom feed items as plain text, barf or blagh trees")]
#[command(version)]
#[command(override_usage = "rrss [-d] [-f barf|blagh] [-r root] <FEED_FILE>")]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Output root directory (required by the barf and blagh formats);
    /// the ledger lives at <ROOT>/links
    #[arg(
        short = 'r',
        long,
        env = "RRSS_ROOT",
        required_if_eq_any = [("format", "barf"), ("format", "blagh")]
    )]
    pub root: Option<PathBuf>,

    /// Feed list file: one `<url> [tag ...]` per line
    pub feed_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Print articles to stdout, without marking them seen
    Plain,
    /// Flat numbered directories under <ROOT>/src
    Barf,
    /// Date-bucketed directories under <ROOT>/YYYY/MM/DD
    Blagh,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Barf => "barf",
            OutputFormat::Blagh => "blagh",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
