pub mod explosm;

use std::collections::HashMap;

use crate::domain::Article;
use crate::errors::RrssResult;

pub use explosm::{ExplosmFilter, EXPLOSM_FEED_URL};

/// Per-feed transform applied to an article before it joins the pipeline.
pub trait ContentFilter: Send + Sync {
    /// Rewrite `article.content` in place. A feed that registers a filter
    /// is assumed to need it, so errors abort the run.
    fn apply(&self, article: &mut Article) -> RrssResult<()>;
}

/// Maps a feed URL to the filter applied to that feed's articles.
pub struct FilterRegistry {
    filters: HashMap<String, Box<dyn ContentFilter>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(EXPLOSM_FEED_URL, Box::new(ExplosmFilter::new()));

        registry
    }

    /// A registry with nothing in it, for callers that register their own.
    pub fn empty() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    pub fn register(&mut self, feed_url: impl Into<String>, filter: Box<dyn ContentFilter>) {
        self.filters.insert(feed_url.into(), filter);
    }

    /// Find the filter registered for an exact feed URL
    pub fn get(&self, feed_url: &str) -> Option<&dyn ContentFilter> {
        self.filters.get(feed_url).map(|f| f.as_ref())
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    struct UpcaseFilter;

    impl ContentFilter for UpcaseFilter {
        fn apply(&self, article: &mut Article) -> RrssResult<()> {
            article.content = article.content.to_uppercase();
            Ok(())
        }
    }

    fn article() -> Article {
        Article {
            title: "Title".to_string(),
            link: "https://example.com/post".to_string(),
            published: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            content: "body".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_explosm_registered_by_default() {
        let registry = FilterRegistry::new();
        assert!(registry.get(EXPLOSM_FEED_URL).is_some());
    }

    #[test]
    fn test_unknown_feed_has_no_filter() {
        let registry = FilterRegistry::new();
        assert!(registry.get("https://example.com/feed.xml").is_none());
    }

    #[test]
    fn test_registered_filter_rewrites_content() {
        let mut registry = FilterRegistry::empty();
        registry.register("https://example.com/feed.xml", Box::new(UpcaseFilter));

        let mut article = article();
        registry
            .get("https://example.com/feed.xml")
            .unwrap()
            .apply(&mut article)
            .unwrap();

        assert_eq!(article.content, "BODY");
    }
}
