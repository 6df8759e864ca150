use std::io::{self, Write};

use crate::domain::Article;
use crate::errors::RrssResult;
use crate::render::traits::Renderer;

/// Default backend: prints each article as a text block to stdout. A
/// stateless preview, so nothing is committed to the ledger.
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn render(&self, articles: &[Article]) -> RrssResult<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        for article in articles {
            out.write_all(format_block(article).as_bytes())?;
        }
        out.flush()?;

        Ok(())
    }
}

/// One article as a stdout block, blank-line terminated.
fn format_block(article: &Article) -> String {
    format!(
        "title: {}\nlink: {}\ndate: {}\n{}\n\n",
        article.title,
        article.link,
        article.published.to_rfc3339(),
        article.content
    )
}
