//! Body text → listing markup
//!
//! Post sections are read with the ordered-label field grammar, see
//! [`crate::common::field_grammar`]. A meta value that contains `image_text:` is cut there;
//! existing documents depend on that reading so it is kept.

use super::deconstruct::SECTION_MARKER;
use crate::common::field_grammar::FieldGrammar;
use crate::common::inline::{escape_attr, escape_text};
use crate::ir::{IndexPage, Post};
use crate::templates::substitute;

pub const POST_LABELS: &[&str] = &["## ", "link:", "meta:", "image_text:", "### Excerpt"];
pub const POST_GRAMMAR: FieldGrammar<'static> = FieldGrammar::new(POST_LABELS);

const PAGE_TITLE_LABEL: &str = "page_title:";
const DEFAULT_PAGE_TITLE: &str = "Blog";

pub fn parse_body(body: &str) -> IndexPage {
    let mut chunks = body.split(SECTION_MARKER);
    let page_title = chunks
        .next()
        .and_then(parse_page_title)
        .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string());

    let posts = chunks
        .filter(|chunk| !chunk.trim().is_empty())
        .map(parse_post)
        .collect();

    IndexPage { page_title, posts }
}

fn parse_page_title(chunk: &str) -> Option<String> {
    chunk.lines().find_map(|line| {
        let (_, value) = line.split_once(PAGE_TITLE_LABEL)?;
        Some(value.trim().to_string())
    })
}

pub fn parse_post(chunk: &str) -> Post {
    let mut values = POST_GRAMMAR
        .extract(chunk)
        .into_iter()
        .map(|value| value.unwrap_or_default().to_string());
    let mut next = || values.next().unwrap_or_default();

    Post {
        title: next(),
        link: next(),
        meta_html: next(),
        image_text: next(),
        excerpt: next(),
    }
}

/// Fill the post-item template for one post.
///
/// Title, link and excerpt are plain text and get escaped; meta and image text already are
/// markup and go in as they are.
pub fn render_post(post: &Post, post_item: &str) -> String {
    let title = escape_text(&post.title);
    let link = escape_attr(&post.link);
    let excerpt = escape_text(&post.excerpt);
    substitute(
        post_item,
        &[
            ("title", &title),
            ("link", &link),
            ("meta", &post.meta_html),
            ("image_text", &post.image_text),
            ("excerpt", &excerpt),
            ("Excerpt", &excerpt),
        ],
    )
}

pub fn render(page: &IndexPage, post_item: &str, sidebar: &str) -> String {
    let posts: String = page
        .posts
        .iter()
        .map(|post| render_post(post, post_item))
        .collect();

    format!(
        "\n<div class=\"main-content\">\n    {sidebar}\n    <main class=\"blog-section\">\n        <h2>{}</h2>\n        {posts}\n    </main>\n</div>\n",
        escape_text(&page.page_title)
    )
}
