//! Structured intermediates
//!
//! One value type per page variant. They sit between the HTML tree and the body text in both
//! directions: deconstruction builds one from the page and writes it out, reconstruction parses
//! one back from the body and renders it. They are built fresh for every call and never
//! mutated afterwards.
//!
//! All of them serialize to JSON (`wiki inspect --as json`), which is handy when checking what
//! a codec actually recovered from a page.

pub mod nodes;

pub use nodes::{Block, Card, ClassList, ContentSection, DiscordPage, IndexPage, Post, ToolPage};

use crate::codecs::{discord, index, tool};
use crate::variant::PageVariant;
use serde::Serialize;

/// Any variant's intermediate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum Intermediate {
    Index(IndexPage),
    Discord(DiscordPage),
    Tool(ToolPage),
}

impl Intermediate {
    pub fn variant(&self) -> PageVariant {
        match self {
            Intermediate::Index(_) => PageVariant::Index,
            Intermediate::Discord(_) => PageVariant::Discord,
            Intermediate::Tool(_) => PageVariant::Tool,
        }
    }

    /// Body text of the intermediate document (everything after the frontmatter).
    pub fn to_body(&self) -> String {
        match self {
            Intermediate::Index(page) => index::deconstruct::write_body(page),
            Intermediate::Discord(page) => discord::deconstruct::write_body(page),
            Intermediate::Tool(page) => tool::deconstruct::write_body(page),
        }
    }
}
