/// One parsed feed-list line: a feed URL plus the tag set active for it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedLine {
    pub url: String,
    pub tags: Vec<String>,
}

/// Parse a feed list: one `<url> [tag ...]` per line, whitespace separated.
/// Tags found on a line apply to that line's URL and stay active for the
/// following lines until a line supplies new ones. Blank lines are skipped.
pub fn parse(input: &str) -> Vec<FeedLine> {
    let mut lines = Vec::new();
    let mut tags: Vec<String> = Vec::new();

    for line in input.lines() {
        let mut tokens = line.split_whitespace();
        let url = match tokens.next() {
            Some(url) => url.to_string(),
            None => continue,
        };

        let new_tags: Vec<String> = tokens.map(str::to_string).collect();
        if !new_tags.is_empty() {
            tags = new_tags;
        }

        lines.push(FeedLine {
            url,
            tags: tags.clone(),
        });
    }

    lines
}
