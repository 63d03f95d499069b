//! Community page → body text

use super::DiscordCategory;
use crate::common::dom::{self, HtmlPage, Selector};
use crate::common::inline::escape_block_markers;
use crate::error::CodecError;
use crate::ir::{Block, Card, ClassList, ContentSection, DiscordPage};
use crate::variant::PageVariant;
use markup5ever_rcdom::Handle;
use tracing::{debug, trace};

/// Separates blocks in the body. The first block starts with a bare `## `.
pub const BLOCK_MARKER: &str = "\n\n## ";

const PAGE_HEADER: Selector<'static> = Selector::tag("div").with_class("page-header");

pub fn extract(page: &HtmlPage) -> Result<DiscordPage, CodecError> {
    let header = page
        .find(PAGE_HEADER)
        .ok_or_else(|| CodecError::missing(PageVariant::Discord, "div.page-header"))?;
    let container = dom::parent(&header)
        .ok_or_else(|| CodecError::missing(PageVariant::Discord, "parent of div.page-header"))?;

    let mut blocks = Vec::new();
    for child in dom::element_children(&container) {
        let classes = dom::classes(&child);
        let Some(category) = DiscordCategory::classify(&classes) else {
            trace!(?classes, "skipping unrecognized element");
            continue;
        };
        match extract_block(category, &child, ClassList::new(classes)) {
            Some(block) => blocks.push(block),
            None => trace!(?category, "skipping block without heading"),
        }
    }
    debug!(blocks = blocks.len(), "extracted community page");

    Ok(DiscordPage { blocks })
}

fn first_text(node: &Handle, tag: &str) -> String {
    dom::find(node, Selector::tag(tag))
        .map(|found| dom::text(&found))
        .unwrap_or_default()
}

fn extract_block(category: DiscordCategory, element: &Handle, classes: ClassList) -> Option<Block> {
    let block = match category {
        DiscordCategory::PageHeader => Block::PageHeader {
            title: first_text(element, "h1"),
            subtitle: first_text(element, "p"),
        },
        DiscordCategory::ContentSection => {
            let title = dom::find(element, Selector::tag("h2"))?;
            let paragraphs = dom::children_matching(element, Selector::tag("p"))
                .iter()
                .map(dom::text)
                .collect();
            let list_items = match dom::find(element, Selector::tag("ul")) {
                Some(_) => dom::find_all(element, Selector::tag("li"))
                    .iter()
                    .map(dom::text)
                    .collect(),
                None => Vec::new(),
            };
            let preview = dom::find(element, Selector::tag("div").with_class("discord-preview"))
                .map(|preview| dom::text_fragments(&preview, "\n"));

            Block::ContentSection(ContentSection {
                title: dom::text(&title),
                classes,
                paragraphs,
                list_items,
                preview,
            })
        }
        DiscordCategory::InfoBlock => Block::InfoBlock {
            title: first_text(element, "h3"),
            classes,
            content: first_text(element, "p"),
        },
        DiscordCategory::CommunityInfo => Block::CommunityInfo {
            classes,
            cards: dom::find_all(element, Selector::tag("div").with_class("info-card"))
                .iter()
                .map(|card| Card {
                    title: first_text(card, "h3"),
                    content: first_text(card, "p"),
                })
                .collect(),
        },
    };
    Some(block)
}

pub fn write_body(page: &DiscordPage) -> String {
    let mut parts = Vec::new();
    for block in &page.blocks {
        write_block(block, &mut parts);
    }
    parts.join("\n\n")
}

fn write_block(block: &Block, parts: &mut Vec<String>) {
    match block {
        Block::PageHeader { title, subtitle } => parts.push(format!(
            "## Page Header\n### Title\n{title}\n\n### Subtitle\n{subtitle}\n"
        )),
        Block::ContentSection(section) => {
            parts.push(format!(
                "## Section: {} {}",
                section.title,
                section.classes.to_annotation()
            ));
            parts.extend(
                section
                    .paragraphs
                    .iter()
                    .map(|paragraph| escape_block_markers(paragraph)),
            );
            if !section.list_items.is_empty() {
                let items: Vec<_> = section
                    .list_items
                    .iter()
                    .map(|item| format!("* {}", escape_block_markers(item)))
                    .collect();
                parts.push(items.join("\n"));
            }
            if let Some(preview) = &section.preview {
                parts.push(format!("\n### Preview\n{}", escape_block_markers(preview)));
            }
        }
        Block::InfoBlock {
            title,
            classes,
            content,
        } => parts.push(format!(
            "## Info: {title} {}\n{}",
            classes.to_annotation(),
            escape_block_markers(content)
        )),
        Block::CommunityInfo { classes, cards } => {
            parts.push(format!("## Community Info {}", classes.to_annotation()));
            parts.extend(
                cards
                    .iter()
                    .map(|card| {
                        format!(
                            "### Card: {}\n{}",
                            card.title,
                            escape_block_markers(&card.content)
                        )
                    }),
            );
        }
    }
}
