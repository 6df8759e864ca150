pub mod traits;
pub mod plain;
pub mod barf;
pub mod blagh;

pub use traits::Renderer;
pub use plain::PlainTextRenderer;
pub use barf::BarfRenderer;
pub use blagh::BlaghRenderer;

use std::fs;
use std::path::Path;

use crate::errors::RrssResult;

/// Write `content` plus a trailing newline to `dir/filename`.
pub(crate) fn write_line(dir: &Path, filename: &str, content: &str) -> RrssResult<()> {
    fs::write(dir.join(filename), format!("{}\n", content))?;
    Ok(())
}
