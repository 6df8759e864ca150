use crate::domain::Article;
use crate::errors::RrssResult;

/// One output backend. Consumes the sorted article stream; the filesystem
/// backends also commit each rendered article to the seen ledger.
pub trait Renderer {
    fn render(&self, articles: &[Article]) -> RrssResult<()>;
}
