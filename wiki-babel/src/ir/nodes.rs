//! Core data structures of the structured intermediates.

use serde::Serialize;

/// Listing page: a heading and its posts in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    pub page_title: String,
    pub posts: Vec<Post>,
}

/// One post of the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Post {
    pub title: String,
    pub link: String,
    /// Inner markup of the metadata block, verbatim
    pub meta_html: String,
    /// Caption markup: escaped text fragments joined with `<br>`
    pub image_text: String,
    pub excerpt: String,
}

/// Community page: its recognized blocks in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscordPage {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    PageHeader {
        title: String,
        subtitle: String,
    },
    ContentSection(ContentSection),
    /// Legacy "patreon-info" block
    InfoBlock {
        title: String,
        classes: ClassList,
        content: String,
    },
    CommunityInfo {
        classes: ClassList,
        cards: Vec<Card>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentSection {
    pub title: String,
    pub classes: ClassList,
    pub paragraphs: Vec<String>,
    /// Flattened list items, empty when the section has no list
    pub list_items: Vec<String>,
    /// Preview lines joined with `\n`
    pub preview: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub content: String,
}

/// Opaque tool page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolPage {
    /// Pretty-printed container markup
    pub content_html: String,
    /// Body of the first inline script, trimmed
    pub script_js: Option<String>,
}

/// CSS classes of an element, in source order.
///
/// In bodies the list travels as a class annotation at the end of a header line,
/// `{.content-section highlight}`. Parsing accepts a dot on every class or only on the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(classes.into_iter().map(Into::into).collect())
    }

    /// Parse the inside of an annotation, with or without its braces.
    pub fn parse_annotation(annotation: &str) -> Self {
        let inner = annotation
            .trim()
            .trim_start_matches('{')
            .trim_end_matches('}');
        Self::new(
            inner
                .split_whitespace()
                .map(|token| token.trim_start_matches('.'))
                .filter(|token| !token.is_empty()),
        )
    }

    /// `{.a b c}`
    pub fn to_annotation(&self) -> String {
        format!("{{.{}}}", self.0.join(" "))
    }

    /// Value for a `class` attribute
    pub fn to_attr(&self) -> String {
        self.0.join(" ")
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Same classes regardless of order.
    pub fn same_set(&self, other: &ClassList) -> bool {
        self.0.iter().all(|c| other.contains(c)) && other.0.iter().all(|c| self.contains(c))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
