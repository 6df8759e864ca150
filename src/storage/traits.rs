use crate::errors::RrssResult;

#[cfg_attr(test, mockall::automock)]
pub trait SeenStore: Send + Sync {
    /// True if `key` is already in the ledger. Storage errors read as seen
    /// (fail closed: skip rather than render twice).
    fn is_seen(&self, key: &str) -> bool;

    /// Record `key` in the ledger. Failure is fatal to the run.
    fn mark_seen(&self, key: &str) -> RrssResult<()>;
}
