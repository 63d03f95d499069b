//! Leading `key: value` metadata block
//!
//! ```text
//! ---
//! title: Community
//! template: discord.html
//! ---
//! <body>
//! ```
//!
//! The block must open on the very first line. A document without one is not an error: it
//! parses as empty metadata and the whole text is the body.

/// Ordered, case-sensitive key/value metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut frontmatter = Frontmatter::new();
        for (key, value) in iter {
            frontmatter.insert(key, value);
        }
        frontmatter
    }
}

/// Split a document into its metadata and body.
pub fn parse(text: &str) -> (Frontmatter, &str) {
    match split_block(text) {
        Some((block, body)) => (parse_block(block), body),
        None => (Frontmatter::new(), text),
    }
}

/// Prepend `frontmatter` to `body`.
pub fn serialize(frontmatter: &Frontmatter, body: &str) -> String {
    let mut out = String::from("---\n");
    for (key, value) in frontmatter.iter() {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
    out.push_str("---\n");
    out.push_str(body);
    out
}

/// Returns the text between the delimiters and the body after the closing one.
fn split_block(text: &str) -> Option<(&str, &str)> {
    let first_end = text.find('\n')?;
    if !is_delimiter(&text[..first_end]) {
        return None;
    }

    let block_start = first_end + 1;
    let mut offset = block_start;
    loop {
        let rest = &text[offset..];
        if rest.is_empty() {
            return None;
        }
        let (line, consumed) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        if is_delimiter(line) {
            return Some((&text[block_start..offset], &text[offset + consumed..]));
        }
        offset += consumed;
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

fn parse_block(block: &str) -> Frontmatter {
    block
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_block_and_body() {
        let (fm, body) = parse("---\ntitle: Hello\ntemplate: index.html\n---\nbody text\n");
        assert_eq!(fm.get("title"), Some("Hello"));
        assert_eq!(fm.get("template"), Some("index.html"));
        assert_eq!(body, "body text\n");
    }

    #[test]
    fn missing_block_returns_input_unchanged() {
        let text = "## Page Header\n### Title\nWelcome\n";
        let (fm, body) = parse(text);
        assert!(fm.is_empty());
        assert_eq!(body, text);
    }

    #[test]
    fn unterminated_block_is_not_frontmatter() {
        let text = "---\ntitle: Hello\nno closing delimiter\n";
        let (fm, body) = parse(text);
        assert!(fm.is_empty());
        assert_eq!(body, text);
    }

    #[test]
    fn block_must_be_anchored_at_start() {
        let text = "\n---\ntitle: Hello\n---\n";
        let (fm, body) = parse(text);
        assert!(fm.is_empty());
        assert_eq!(body, text);
    }

    #[test]
    fn value_keeps_everything_after_first_colon() {
        let (fm, _) = parse("---\nlink: https://example.com/a:b\n---\n");
        assert_eq!(fm.get("link"), Some("https://example.com/a:b"));
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let (fm, body) = parse("---\ntitle: A\njunk line\n---\nrest");
        assert_eq!(fm.len(), 1);
        assert_eq!(body, "rest");
    }

    #[test]
    fn closing_delimiter_at_end_of_text() {
        let (fm, body) = parse("---\ntitle: A\n---");
        assert_eq!(fm.get("title"), Some("A"));
        assert_eq!(body, "");
    }

    #[test]
    fn keys_are_case_sensitive() {
        let (fm, _) = parse("---\nTitle: Upper\ntitle: lower\n---\n");
        assert_eq!(fm.get("Title"), Some("Upper"));
        assert_eq!(fm.get("title"), Some("lower"));
        assert_eq!(fm.len(), 2);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut fm = Frontmatter::new();
        fm.insert("title", "first");
        fm.insert("template", "index.html");
        fm.insert("title", "second");
        let keys: Vec<_> = fm.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "template"]);
        assert_eq!(fm.get("title"), Some("second"));
    }

    #[test]
    fn serialize_layout() {
        let fm: Frontmatter = [("title", "Hi"), ("template", "discord.html")]
            .into_iter()
            .collect();
        assert_eq!(
            serialize(&fm, "body"),
            "---\ntitle: Hi\ntemplate: discord.html\n---\nbody"
        );
    }

    #[test]
    fn empty_frontmatter_round_trips() {
        let text = serialize(&Frontmatter::new(), "body\n");
        let (fm, body) = parse(&text);
        assert!(fm.is_empty());
        assert_eq!(body, "body\n");
    }
}
