use crate::domain::RawEntry;
use crate::errors::RrssResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    /// Fetch the document at `url` and parse it into feed entries.
    fn fetch(&self, url: &str) -> RrssResult<Vec<RawEntry>>;
}
