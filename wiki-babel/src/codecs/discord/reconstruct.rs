//! Body text → community page markup
//!
//! Blocks are split on the block marker and dispatched on their header keyword. Inside a
//! section, blank lines separate paragraphs, a chunk made only of `* ` lines is the list and a
//! `### Preview` line starts the chat preview, which runs to the end of the block.

use super::deconstruct::BLOCK_MARKER;
use super::DiscordCategory;
use crate::common::inline::{escape_attr, escape_text, markdown_to_html};
use crate::ir::{Block, Card, ClassList, ContentSection, DiscordPage};
use tracing::trace;

const PREVIEW_LABEL: &str = "### Preview";
const CARD_LABEL: &str = "### Card:";
const TITLE_LABEL: &str = "### Title";
const SUBTITLE_LABEL: &str = "### Subtitle";
const LIST_ITEM: &str = "* ";

pub fn parse_body(body: &str) -> DiscordPage {
    let blocks = body
        .split(BLOCK_MARKER)
        .enumerate()
        .filter_map(|(position, chunk)| {
            let chunk = match position {
                0 => {
                    let chunk = chunk.trim_start();
                    chunk.strip_prefix("## ").unwrap_or(chunk)
                }
                _ => chunk,
            };
            parse_block(chunk)
        })
        .collect();

    DiscordPage { blocks }
}

fn parse_block(chunk: &str) -> Option<Block> {
    if chunk.trim().is_empty() {
        return None;
    }
    let (header, rest) = chunk.split_once('\n').unwrap_or((chunk, ""));
    let Some(category) = DiscordCategory::from_header(header) else {
        trace!(header, "skipping unknown block");
        return None;
    };
    let (title, classes) = split_header(&header[category.keyword().len()..]);
    let classes = if classes.is_empty() {
        ClassList::new([category.class_name()])
    } else {
        classes
    };

    let block = match category {
        DiscordCategory::PageHeader => parse_page_header(rest),
        DiscordCategory::ContentSection => Block::ContentSection(parse_section(title, classes, rest)),
        DiscordCategory::InfoBlock => Block::InfoBlock {
            title,
            classes,
            content: rest.trim().to_string(),
        },
        DiscordCategory::CommunityInfo => Block::CommunityInfo {
            classes,
            cards: parse_cards(rest),
        },
    };
    Some(block)
}

/// `Rules {.content-section highlight}` → title and classes.
fn split_header(header: &str) -> (String, ClassList) {
    let header = header.trim();
    match header.rfind('{') {
        Some(open) if header.ends_with('}') => (
            header[..open].trim().to_string(),
            ClassList::parse_annotation(&header[open..]),
        ),
        _ => (header.to_string(), ClassList::default()),
    }
}

fn parse_page_header(rest: &str) -> Block {
    // [title lines, subtitle lines]
    let mut fields: [Vec<&str>; 2] = Default::default();
    let mut current = None;

    for line in rest.lines() {
        match line.trim_end() {
            TITLE_LABEL => current = Some(0),
            SUBTITLE_LABEL => current = Some(1),
            _ => {
                if let Some(field) = current {
                    fields[field].push(line);
                }
            }
        }
    }

    let [title, subtitle] = fields.map(|lines| lines.join("\n").trim().to_string());
    Block::PageHeader { title, subtitle }
}

fn parse_section(title: String, classes: ClassList, rest: &str) -> ContentSection {
    let (prose, preview) = match rest
        .lines()
        .position(|line| line.trim_end() == PREVIEW_LABEL)
    {
        Some(at) => {
            let lines: Vec<_> = rest.lines().collect();
            (
                lines[..at].join("\n"),
                Some(lines[at + 1..].join("\n").trim().to_string()),
            )
        }
        None => (rest.to_string(), None),
    };

    let mut paragraphs = Vec::new();
    let mut list_items = Vec::new();
    for chunk in blank_line_chunks(&prose) {
        if chunk.iter().all(|line| line.starts_with(LIST_ITEM)) {
            list_items.extend(
                chunk
                    .iter()
                    .map(|line| line[LIST_ITEM.len()..].trim().to_string()),
            );
        } else {
            paragraphs.push(chunk.join("\n"));
        }
    }

    ContentSection {
        title,
        classes,
        paragraphs,
        list_items,
        preview,
    }
}

fn blank_line_chunks(text: &str) -> Vec<Vec<&str>> {
    let mut chunks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn parse_cards(rest: &str) -> Vec<Card> {
    rest.split(CARD_LABEL)
        .skip(1)
        .map(|card| {
            let (title, content) = card.split_once('\n').unwrap_or((card, ""));
            Card {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
            }
        })
        .collect()
}

pub fn render(page: &DiscordPage) -> String {
    page.blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::PageHeader { title, subtitle } => format!(
            "<div class=\"page-header\"><h1>{}</h1><p>{}</p></div>",
            escape_text(title),
            escape_text(subtitle)
        ),
        Block::ContentSection(section) => {
            let mut inner = format!("<h2>{}</h2>", escape_text(&section.title));
            for paragraph in &section.paragraphs {
                inner.push_str(&markdown_to_html(paragraph));
            }
            if !section.list_items.is_empty() {
                let list: Vec<_> = section
                    .list_items
                    .iter()
                    .map(|item| format!("{LIST_ITEM}{item}"))
                    .collect();
                inner.push_str(&markdown_to_html(&list.join("\n")));
            }
            if let Some(preview) = &section.preview {
                inner.push_str("<div class=\"discord-preview\">");
                inner.push_str(&markdown_to_html(preview));
                inner.push_str("</div>");
            }
            format!(
                "<div class=\"{}\">{inner}</div>",
                escape_attr(&section.classes.to_attr())
            )
        }
        Block::InfoBlock {
            title,
            classes,
            content,
        } => format!(
            "<div class=\"{}\"><h3>{}</h3>{}</div>",
            escape_attr(&classes.to_attr()),
            escape_text(title),
            markdown_to_html(content)
        ),
        Block::CommunityInfo { classes, cards } => {
            let cards: String = cards
                .iter()
                .map(|card| {
                    format!(
                        "<div class=\"info-card\"><h3>{}</h3>{}</div>",
                        escape_text(&card.title),
                        markdown_to_html(&card.content)
                    )
                })
                .collect();
            format!(
                "<div class=\"{}\">{cards}</div>",
                escape_attr(&classes.to_attr())
            )
        }
    }
}
