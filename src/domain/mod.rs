pub mod article;
pub mod entry;

pub use article::{seen_key, Article};
pub use entry::RawEntry;
