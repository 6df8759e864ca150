use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Article;
use crate::errors::RrssResult;
use crate::render::traits::Renderer;
use crate::render::write_line;
use crate::storage::SeenStore;

/// Flat directory-sequence backend: each article lands in the next
/// integer-named subdirectory of `dest` as four files (`title`, `link`,
/// `date`, `body`) plus an optional `tags/` directory of empty tag files.
pub struct BarfRenderer<S: SeenStore> {
    dest: PathBuf,
    ledger: S,
}

impl<S: SeenStore> BarfRenderer<S> {
    /// `dest` is the `src` subdirectory of the output root.
    pub fn new(dest: impl Into<PathBuf>, ledger: S) -> Self {
        Self {
            dest: dest.into(),
            ledger,
        }
    }
}

impl<S: SeenStore> Renderer for BarfRenderer<S> {
    fn render(&self, articles: &[Article]) -> RrssResult<()> {
        fs::create_dir_all(&self.dest)?;

        let mut n = last_article(&self.dest)?;
        for article in articles {
            n += 1;
            let dir = self.dest.join(n.to_string());
            fs::create_dir(&dir)?;

            write_line(&dir, "title", &article.title)?;
            write_line(&dir, "link", &article.link)?;
            write_line(&dir, "date", &article.published.to_rfc3339())?;
            write_line(&dir, "body", &article.content)?;

            if !article.tags.is_empty() {
                let tags_dir = dir.join("tags");
                fs::create_dir(&tags_dir)?;
                for tag in &article.tags {
                    fs::File::create(tags_dir.join(tag))?;
                }
            }

            self.ledger.mark_seen(&article.seen_key())?;
        }

        Ok(())
    }
}

/// Highest integer-named entry in `dir`, or 0 when none exist. Gaps in the
/// numbering are preserved, not filled.
fn last_article(dir: &Path) -> RrssResult<u64> {
    let mut last = 0;
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        if let Ok(n) = name.to_string_lossy().parse::<u64>() {
            last = last.max(n);
        }
    }
    Ok(last)
}
