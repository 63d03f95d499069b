//! Listing page → body text
//!
//! The body starts with the page title line and holds one section per post, each section
//! introduced by the `---` section marker:
//!
//! ```text
//! page_title: Latest posts
//!
//! ---
//!
//! ## Hello World
//! link: /posts/hello
//! meta: <span>Jan 1, 2024</span>
//! image_text: Sunset<br>over the lake
//!
//! ### Excerpt
//! First lines of the post.
//! ```

use crate::common::dom::{self, HtmlPage, Selector};
use crate::common::inline::escape_text;
use crate::error::CodecError;
use crate::ir::{IndexPage, Post};
use crate::variant::PageVariant;
use markup5ever_rcdom::Handle;
use tracing::debug;

/// Separates the title line and the post sections.
pub const SECTION_MARKER: &str = "\n---\n";

const CONTAINER: Selector<'static> = Selector::tag("main").with_class("blog-section");
const POST: Selector<'static> = Selector::tag("article").with_class("blog-post");

pub fn extract(page: &HtmlPage) -> Result<IndexPage, CodecError> {
    let container = page
        .find(CONTAINER)
        .ok_or_else(|| CodecError::missing(PageVariant::Index, "main.blog-section"))?;
    let heading = dom::find(&container, Selector::tag("h2"))
        .ok_or_else(|| CodecError::missing(PageVariant::Index, "h2 in main.blog-section"))?;

    let posts = dom::find_all(&container, POST)
        .iter()
        .map(extract_post)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(posts = posts.len(), "extracted listing");

    Ok(IndexPage {
        page_title: dom::text(&heading),
        posts,
    })
}

/// Missing pieces of a post become empty strings.
fn extract_post(article: &Handle) -> Result<Post, CodecError> {
    let anchor = dom::find(article, Selector::tag("h3"))
        .and_then(|heading| dom::find(&heading, Selector::tag("a")));
    let (title, link) = match anchor {
        Some(anchor) => (
            dom::text(&anchor),
            dom::attr(&anchor, "href").unwrap_or_default(),
        ),
        None => Default::default(),
    };

    let meta_html = match dom::find(article, Selector::tag("div").with_class("blog-meta")) {
        Some(meta) => dom::inner_html(&meta)?.trim().to_string(),
        None => String::new(),
    };

    let image_text = dom::find(article, Selector::tag("div").with_class("blog-image"))
        .map(|image| {
            dom::fragments(&image)
                .iter()
                .map(|fragment| escape_text(fragment))
                .collect::<Vec<_>>()
                .join("<br>")
        })
        .unwrap_or_default();

    let excerpt = dom::find(article, Selector::tag("p").with_class("blog-excerpt"))
        .map(|excerpt| dom::text(&excerpt))
        .unwrap_or_default();

    Ok(Post {
        title,
        link,
        meta_html,
        image_text,
        excerpt,
    })
}

pub fn write_body(page: &IndexPage) -> String {
    let mut parts = Vec::with_capacity(page.posts.len() + 1);
    parts.push(format!("page_title: {}", page.page_title));

    for post in &page.posts {
        parts.push(format!(
            "{SECTION_MARKER}\n## {}\nlink: {}\nmeta: {}\nimage_text: {}\n\n### Excerpt\n{}",
            post.title, post.link, post.meta_html, post.image_text, post.excerpt
        ));
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_container_is_structural_error() {
        let page = HtmlPage::parse("<main><h2>x</h2></main>");
        let err = extract(&page).unwrap_err();
        assert!(matches!(
            err,
            CodecError::StructuralMissingElement {
                variant: PageVariant::Index,
                ..
            }
        ));
    }

    #[test]
    fn missing_heading_is_structural_error() {
        let page = HtmlPage::parse("<main class=\"blog-section\"><article class=\"blog-post\"></article></main>");
        assert!(extract(&page).is_err());
    }

    #[test]
    fn empty_article_yields_empty_fields() {
        let page = HtmlPage::parse(
            "<main class=\"blog-section\"><h2>Blog</h2><article class=\"blog-post\"></article></main>",
        );
        let listing = extract(&page).unwrap();
        assert_eq!(listing.posts, vec![Post::default()]);
    }

    #[test]
    fn body_of_empty_listing_is_title_line() {
        let page = IndexPage {
            page_title: "Blog".into(),
            posts: vec![],
        };
        assert_eq!(write_body(&page), "page_title: Blog");
    }
}
