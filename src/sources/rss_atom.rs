use chrono::{DateTime, Utc};
use feed_rs::parser;
use reqwest::blocking::Client;

use crate::domain::RawEntry;
use crate::errors::{RrssError, RrssResult};
use crate::sources::traits::FeedSource;

/// Sent with every feed request; some hosts refuse clients without a
/// browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; hjdicks)";

pub struct RssAtomSource {
    client: Client,
}

impl RssAtomSource {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_and_parse(&self, url: &str) -> RrssResult<feed_rs::model::Feed> {
        let response = self.client.get(url).send()?;
        let bytes = response.bytes()?;

        Self::parse_bytes(&bytes)
    }

    fn parse_bytes(bytes: &[u8]) -> RrssResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| RrssError::FeedParse(e.to_string()))
    }

    fn entries_from_feed(parsed: feed_rs::model::Feed) -> Vec<RawEntry> {
        parsed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry.title.map(|t| t.content).unwrap_or_default();

                let link = entry
                    .links
                    .into_iter()
                    .next()
                    .map(|l| l.href)
                    .unwrap_or_default();

                // Undated entries sort to the front rather than being dropped.
                let published = entry
                    .published
                    .or(entry.updated)
                    .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

                let content = entry.content.and_then(|c| c.body);
                let summary = entry.summary.map(|s| s.content);

                RawEntry::new(title, link, published)
                    .with_content(content)
                    .with_summary(summary)
            })
            .collect()
    }

    /// Parse entries from raw feed bytes (used for testing)
    #[cfg(test)]
    fn entries_from_bytes(bytes: &[u8]) -> RrssResult<Vec<RawEntry>> {
        Ok(Self::entries_from_feed(Self::parse_bytes(bytes)?))
    }
}

impl Default for RssAtomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for RssAtomSource {
    fn fetch(&self, url: &str) -> RrssResult<Vec<RawEntry>> {
        let parsed = self.fetch_and_parse(url)?;
        Ok(Self::entries_from_feed(parsed))
    }
}
