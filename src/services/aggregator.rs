use tracing::{debug, warn};

use crate::domain::{seen_key, Article};
use crate::errors::RrssResult;
use crate::feedlist::FeedLine;
use crate::filters::FilterRegistry;
use crate::sources::FeedSource;
use crate::storage::SeenStore;

pub struct Aggregator<S: SeenStore, F: FeedSource> {
    ledger: S,
    source: F,
    filters: FilterRegistry,
}

impl<S: SeenStore, F: FeedSource> Aggregator<S, F> {
    pub fn new(ledger: S, source: F, filters: FilterRegistry) -> Self {
        Self {
            ledger,
            source,
            filters,
        }
    }

    /// Fetch every feed line in order and collect the unseen articles
    /// across all of them, sorted ascending by publication date. The sort
    /// is stable, so equal dates keep feed-list order and unchanged input
    /// renders identically across runs.
    pub fn collect(&self, lines: &[FeedLine]) -> RrssResult<Vec<Article>> {
        let mut articles = Vec::new();

        for line in lines {
            articles.extend(self.load_feed(line)?);
        }

        articles.sort_by_key(|article| article.published);

        Ok(articles)
    }

    /// Fetch one feed and assemble its unseen entries. A feed that fails
    /// to fetch or parse yields nothing and the run moves on; a failing
    /// content filter aborts the run.
    fn load_feed(&self, line: &FeedLine) -> RrssResult<Vec<Article>> {
        debug!("fetching feed '{}'", line.url);

        let entries = match self.source.fetch(&line.url) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("cannot load feed '{}': {}", line.url, e);
                return Ok(Vec::new());
            }
        };

        let mut articles = Vec::new();
        for entry in entries {
            if self.ledger.is_seen(&seen_key(entry.published, &entry.link)) {
                continue;
            }

            let mut article = Article::from_entry(entry, &line.tags);
            if let Some(filter) = self.filters.get(&line.url) {
                filter.apply(&mut article)?;
            }
            articles.push(article);
        }

        debug!("feed '{}': {} new items", line.url, articles.len());

        Ok(articles)
    }
}
