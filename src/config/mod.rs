use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};

/// Run configuration, built once from the command line and handed to the
/// components that need paths out of it.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_file: PathBuf,
    pub format: OutputFormat,
    /// Output root. Empty (plain format without `-r`) resolves paths
    /// against the working directory.
    pub root: PathBuf,
    pub debug: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            feed_file: cli.feed_file,
            format: cli.format,
            root: cli.root.unwrap_or_default(),
            debug: cli.debug,
        }
    }

    /// Where the seen-item ledger lives.
    pub fn ledger_path(&self) -> PathBuf {
        self.root.join("links")
    }

    /// Destination directory for the barf format.
    pub fn barf_dest(&self) -> PathBuf {
        self.root.join("src")
    }
}
