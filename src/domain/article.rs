use chrono::{DateTime, Utc};

use super::RawEntry;

/// The canonical unit flowing through the pipeline. Created once per
/// surviving feed entry per run; only a content filter may rewrite it
/// (in place, before aggregation).
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub published: DateTime<Utc>,
    pub content: String,
    pub tags: Vec<String>,
}

impl Article {
    /// Assemble an article from a fetched entry and the feed line's active
    /// tag set. Tags are fixed here and never re-derived from feed content.
    pub fn from_entry(entry: RawEntry, tags: &[String]) -> Self {
        let body = entry
            .content
            .filter(|c| !c.is_empty())
            .or(entry.summary.filter(|s| !s.is_empty()))
            .unwrap_or_default();

        Self {
            title: entry.title,
            link: entry.link,
            published: entry.published,
            content: html_escape::decode_html_entities(&body).into_owned(),
            tags: tags.to_vec(),
        }
    }

    pub fn seen_key(&self) -> String {
        seen_key(self.published, &self.link)
    }
}

/// Ledger key for an item: `{unix timestamp}_{link}`, with the literal
/// `empty` substituted for a blank link. The lookup before assembly and the
/// commit after rendering both go through here so they cannot diverge.
pub fn seen_key(published: DateTime<Utc>, link: &str) -> String {
    let link = if link.is_empty() { "empty" } else { link };
    format!("{}_{}", published.timestamp(), link)
}
