use std::fs;
use std::path::PathBuf;

use chrono::Datelike;

use crate::domain::Article;
use crate::errors::RrssResult;
use crate::render::traits::Renderer;
use crate::render::write_line;
use crate::storage::SeenStore;

/// Date-bucketed backend: each article lands in
/// `root/YYYY/MM/DD/<N>/index`, where N counts the entries already in that
/// day's bucket.
pub struct BlaghRenderer<S: SeenStore> {
    root: PathBuf,
    ledger: S,
}

impl<S: SeenStore> BlaghRenderer<S> {
    pub fn new(root: impl Into<PathBuf>, ledger: S) -> Self {
        Self {
            root: root.into(),
            ledger,
        }
    }
}

impl<S: SeenStore> Renderer for BlaghRenderer<S> {
    fn render(&self, articles: &[Article]) -> RrssResult<()> {
        for article in articles {
            let date = article.published;
            let bucket = self
                .root
                .join(date.year().to_string())
                .join(format!("{:02}", date.month()))
                .join(format!("{:02}", date.day()));
            fs::create_dir_all(&bucket)?;

            let n = fs::read_dir(&bucket)?.count();
            let dir = bucket.join(n.to_string());
            fs::create_dir(&dir)?;

            write_line(&dir, "index", &format_index(article))?;

            self.ledger.mark_seen(&article.seen_key())?;
        }

        Ok(())
    }
}

/// Heading-plus-body text format of the `index` file.
fn format_index(article: &Article) -> String {
    format!("{}\n===\n\n{}\n", article.title, article.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use tempfile::TempDir;

    use crate::errors::RrssError;
    use crate::storage::traits::MockSeenStore;

    fn article_on(date: &str, link: &str) -> Article {
        Article {
            title: "A post".to_string(),
            link: link.to_string(),
            published: date.parse::<DateTime<Utc>>().unwrap(),
            content: "The body.".to_string(),
            tags: Vec::new(),
        }
    }

    fn accepting_ledger() -> MockSeenStore {
        let mut ledger = MockSeenStore::new();
        ledger.expect_mark_seen().returning(|_| Ok(()));
        ledger
    }

    #[test]
    fn test_bucket_path_zero_padded() {
        let dir = TempDir::new().unwrap();

        let renderer = BlaghRenderer::new(dir.path(), accepting_ledger());
        renderer
            .render(&[article_on("2024-03-05T10:00:00Z", "https://example.com/a")])
            .unwrap();

        let index = dir.path().join("2024/03/05/0/index");
        assert_eq!(
            fs::read_to_string(index).unwrap(),
            "A post\n===\n\nThe body.\n\n"
        );
    }

    #[test]
    fn test_numbering_counts_existing_bucket_entries() {
        let dir = TempDir::new().unwrap();
        let bucket = dir.path().join("2024/01/15");
        fs::create_dir_all(bucket.join("0")).unwrap();
        fs::create_dir_all(bucket.join("1")).unwrap();

        let renderer = BlaghRenderer::new(dir.path(), accepting_ledger());
        renderer
            .render(&[article_on("2024-01-15T08:00:00Z", "https://example.com/a")])
            .unwrap();

        assert!(bucket.join("2").join("index").exists());
    }

    #[test]
    fn test_same_day_articles_number_sequentially() {
        let dir = TempDir::new().unwrap();

        let renderer = BlaghRenderer::new(dir.path(), accepting_ledger());
        renderer
            .render(&[
                article_on("2024-06-01T09:00:00Z", "https://example.com/a"),
                article_on("2024-06-01T18:00:00Z", "https://example.com/b"),
            ])
            .unwrap();

        let bucket = dir.path().join("2024/06/01");
        assert!(bucket.join("0").join("index").exists());
        assert!(bucket.join("1").join("index").exists());
    }

    #[test]
    fn test_articles_spread_across_their_days() {
        let dir = TempDir::new().unwrap();

        let renderer = BlaghRenderer::new(dir.path(), accepting_ledger());
        renderer
            .render(&[
                article_on("2023-12-31T23:00:00Z", "https://example.com/a"),
                article_on("2024-01-01T01:00:00Z", "https://example.com/b"),
            ])
            .unwrap();

        assert!(dir.path().join("2023/12/31/0/index").exists());
        assert!(dir.path().join("2024/01/01/0/index").exists());
    }

    #[test]
    fn test_each_article_committed_to_ledger() {
        let dir = TempDir::new().unwrap();

        let mut ledger = MockSeenStore::new();
        ledger
            .expect_mark_seen()
            .withf(|key| key.ends_with("_https://example.com/a"))
            .times(1)
            .returning(|_| Ok(()));

        let renderer = BlaghRenderer::new(dir.path(), ledger);
        renderer
            .render(&[article_on("2024-03-05T10:00:00Z", "https://example.com/a")])
            .unwrap();
    }

    #[test]
    fn test_ledger_failure_stops_before_next_article() {
        let dir = TempDir::new().unwrap();

        let mut ledger = MockSeenStore::new();
        ledger.expect_mark_seen().times(1).returning(|_| {
            Err(RrssError::Ledger(std::io::Error::other("disk full")))
        });

        let renderer = BlaghRenderer::new(dir.path(), ledger);
        let result = renderer.render(&[
            article_on("2024-03-05T10:00:00Z", "https://example.com/a"),
            article_on("2024-03-06T10:00:00Z", "https://example.com/b"),
        ]);

        assert!(matches!(result, Err(RrssError::Ledger(_))));
        assert!(dir.path().join("2024/03/05/0/index").exists());
        assert!(!dir.path().join("2024/03/06").exists());
    }
}
