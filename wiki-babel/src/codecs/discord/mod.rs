//! Community page codec
//!
//! The page is a flat run of sibling blocks next to a `div.page-header`. Each sibling is
//! classified once, by class name, into a [`DiscordCategory`]:
//!
//! | class            | block            | body header                         |
//! |------------------|------------------|-------------------------------------|
//! | `page-header`    | PageHeader       | `## Page Header`                    |
//! | `content-section`| ContentSection   | `## Section: <title> {.<classes>}`  |
//! | `patreon-info`   | InfoBlock        | `## Info: <title> {.<classes>}`     |
//! | `community-info` | CommunityInfo    | `## Community Info {.<classes>}`    |
//!
//! An element carrying several recognized classes gets the first category of the table.
//! Siblings with none of them are dropped.
//!
//! Titles travel as plain text. Prose (paragraphs, list items, the chat preview, info and
//! card content) is regenerated through the markdown inliner.

pub mod deconstruct;
pub mod reconstruct;

use crate::codec::{Fragment, PageCodec};
use crate::common::dom::HtmlPage;
use crate::error::CodecError;
use crate::ir::Intermediate;
use crate::templates::{TemplateNames, TemplateStore};
use crate::variant::PageVariant;

/// Recognized sibling kinds, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscordCategory {
    PageHeader,
    ContentSection,
    InfoBlock,
    CommunityInfo,
}

impl DiscordCategory {
    pub const PRECEDENCE: [DiscordCategory; 4] = [
        DiscordCategory::PageHeader,
        DiscordCategory::ContentSection,
        DiscordCategory::InfoBlock,
        DiscordCategory::CommunityInfo,
    ];

    /// The class that marks an element as this category
    pub fn class_name(self) -> &'static str {
        match self {
            DiscordCategory::PageHeader => "page-header",
            DiscordCategory::ContentSection => "content-section",
            DiscordCategory::InfoBlock => "patreon-info",
            DiscordCategory::CommunityInfo => "community-info",
        }
    }

    /// Leading keyword of the block header line in the body
    pub fn keyword(self) -> &'static str {
        match self {
            DiscordCategory::PageHeader => "Page Header",
            DiscordCategory::ContentSection => "Section:",
            DiscordCategory::InfoBlock => "Info:",
            DiscordCategory::CommunityInfo => "Community Info",
        }
    }

    /// Pick the category of an element from its class list.
    pub fn classify<S: AsRef<str>>(classes: &[S]) -> Option<Self> {
        Self::PRECEDENCE.into_iter().find(|category| {
            classes
                .iter()
                .any(|class| class.as_ref() == category.class_name())
        })
    }

    /// Category of a body block from its header line.
    pub fn from_header(header: &str) -> Option<Self> {
        Self::PRECEDENCE
            .into_iter()
            .find(|category| header.starts_with(category.keyword()))
    }
}

pub struct DiscordCodec {
    template: String,
}

impl DiscordCodec {
    pub fn new(names: &TemplateNames) -> Self {
        Self {
            template: names.discord.clone(),
        }
    }
}

impl Default for DiscordCodec {
    fn default() -> Self {
        Self::new(&TemplateNames::default())
    }
}

impl PageCodec for DiscordCodec {
    fn name(&self) -> &str {
        "discord"
    }

    fn description(&self) -> &str {
        "Community page: header, content sections, info blocks and cards"
    }

    fn variant(&self) -> PageVariant {
        PageVariant::Discord
    }

    fn template(&self) -> &str {
        &self.template
    }

    fn extract(&self, page: &HtmlPage) -> Result<Intermediate, CodecError> {
        deconstruct::extract(page).map(Intermediate::Discord)
    }

    fn reconstruct(&self, body: &str, _templates: &TemplateStore) -> Result<Fragment, CodecError> {
        let page = reconstruct::parse_body(body);
        Ok(Fragment {
            content: reconstruct::render(&page),
            scripts: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_decides_multi_class_elements() {
        assert_eq!(
            DiscordCategory::classify(&["community-info", "content-section"]),
            Some(DiscordCategory::ContentSection)
        );
        assert_eq!(
            DiscordCategory::classify(&["patreon-info", "page-header"]),
            Some(DiscordCategory::PageHeader)
        );
        assert_eq!(DiscordCategory::classify(&["footer", "wide"]), None);
        assert_eq!(DiscordCategory::classify::<&str>(&[]), None);
    }

    #[test]
    fn header_keywords() {
        assert_eq!(
            DiscordCategory::from_header("Section: Rules {.content-section}"),
            Some(DiscordCategory::ContentSection)
        );
        assert_eq!(
            DiscordCategory::from_header("Community Info {.community-info}"),
            Some(DiscordCategory::CommunityInfo)
        );
        assert_eq!(DiscordCategory::from_header("Footer"), None);
    }
}
