use chrono::{DateTime, Utc};

/// A feed entry as a source returns it, before tags are attached and the
/// body is resolved.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub published: DateTime<Utc>,
    pub content: Option<String>,
    pub summary: Option<String>,
}

impl RawEntry {
    pub fn new(title: String, link: String, published: DateTime<Utc>) -> Self {
        Self {
            title,
            link,
            published,
            content: None,
            summary: None,
        }
    }

    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }
}
