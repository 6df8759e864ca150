use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::errors::{RrssError, RrssResult};
use crate::storage::traits::SeenStore;

/// Append-only text ledger with one seen key per line.
///
/// The file is opened fresh for every call, so a ledger value can be cloned
/// freely and shared between the pipeline and a renderer.
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o775);
        }
        options.open(&self.path)
    }
}

impl SeenStore for FileLedger {
    fn is_seen(&self, key: &str) -> bool {
        let file = match self.open() {
            Ok(file) => file,
            Err(_) => return true,
        };

        BufReader::new(file)
            .lines()
            .map_while(Result::ok)
            .any(|line| line == key)
    }

    fn mark_seen(&self, key: &str) -> RrssResult<()> {
        let mut file = self.open().map_err(RrssError::Ledger)?;
        file.write_all(format!("{}\n", key).as_bytes())
            .map_err(RrssError::Ledger)?;
        Ok(())
    }
}
