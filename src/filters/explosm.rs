use reqwest::blocking::Client;
use scraper::{Html, Selector};

use crate::domain::Article;
use crate::errors::{RrssError, RrssResult};
use crate::filters::ContentFilter;

/// Feed whose entries carry only a teaser; the comic itself lives on the
/// article page.
pub const EXPLOSM_FEED_URL: &str = "http://feeds.feedburner.com/Explosm";

/// Replaces an article's body with the comic `<img>` scraped from the
/// article page.
pub struct ExplosmFilter {
    client: Client,
}

impl ExplosmFilter {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for ExplosmFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentFilter for ExplosmFilter {
    fn apply(&self, article: &mut Article) -> RrssResult<()> {
        let page = self
            .client
            .get(&article.link)
            .send()
            .and_then(|response| response.text())
            .map_err(|e| RrssError::Filter(article.link.clone(), e.to_string()))?;

        if let Some(comic) = extract_comic(&page) {
            article.content = comic;
        }

        Ok(())
    }
}

/// Pull the main comic image out of an article page. Prefers the parsed
/// `main-comic` element; falls back to the first raw line carrying the
/// marker when no such element exists. Returns `None` when the page has
/// no marker at all, leaving the article body as the feed supplied it.
fn extract_comic(page: &str) -> Option<String> {
    let document = Html::parse_document(page);

    let from_dom = Selector::parse("img#main-comic, img.main-comic")
        .ok()
        .and_then(|selector| document.select(&selector).next().map(|img| img.html()));

    let fragment = from_dom.or_else(|| {
        page.lines()
            .find(|line| line.contains("main-comic"))
            .map(str::to_string)
    })?;

    Some(absolutize_src(&fragment))
}

/// The comic page serves protocol-relative image URLs; pin the first one
/// to http so the fragment renders outside a browser context.
fn absolutize_src(fragment: &str) -> String {
    fragment.replacen("src=\"//", "src=\"http://", 1)
}
