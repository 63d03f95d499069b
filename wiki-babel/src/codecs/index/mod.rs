//! Listing page codec
//!
//! The listing is a `main.blog-section` holding an `h2` heading and any number of
//! `article.blog-post` elements:
//!
//! ```html
//! <main class="blog-section">
//!     <h2>Latest posts</h2>
//!     <article class="blog-post">
//!         <h3><a href="/posts/hello">Hello World</a></h3>
//!         <div class="blog-meta"><span>Jan 1, 2024</span></div>
//!         <div class="blog-image">Sunset<br>over the lake</div>
//!         <p class="blog-excerpt">First lines of the post.</p>
//!     </article>
//! </main>
//! ```
//!
//! Body layout and the field grammar used to read it back are described in
//! [`deconstruct`] and [`reconstruct`]. On regeneration each post is rendered through the
//! post-item template and the list is wrapped with the optional sidebar template.

pub mod deconstruct;
pub mod reconstruct;

use crate::codec::{Fragment, PageCodec};
use crate::common::dom::HtmlPage;
use crate::error::CodecError;
use crate::ir::Intermediate;
use crate::templates::{TemplateNames, TemplateStore};
use crate::variant::PageVariant;

pub struct IndexCodec {
    template: String,
    post_item: String,
    sidebar: String,
}

impl IndexCodec {
    pub fn new(names: &TemplateNames) -> Self {
        Self {
            template: names.index.clone(),
            post_item: names.post_item.clone(),
            sidebar: names.sidebar.clone(),
        }
    }
}

impl Default for IndexCodec {
    fn default() -> Self {
        Self::new(&TemplateNames::default())
    }
}

impl PageCodec for IndexCodec {
    fn name(&self) -> &str {
        "index"
    }

    fn description(&self) -> &str {
        "Blog listing: page title plus one section per post"
    }

    fn variant(&self) -> PageVariant {
        PageVariant::Index
    }

    fn template(&self) -> &str {
        &self.template
    }

    fn extract(&self, page: &HtmlPage) -> Result<Intermediate, CodecError> {
        deconstruct::extract(page).map(Intermediate::Index)
    }

    fn reconstruct(&self, body: &str, templates: &TemplateStore) -> Result<Fragment, CodecError> {
        let page = reconstruct::parse_body(body);
        let post_item = templates
            .get(&self.post_item)
            .ok_or_else(|| CodecError::MissingTemplate(self.post_item.clone()))?;
        let sidebar = templates.get(&self.sidebar).unwrap_or_default();

        Ok(Fragment {
            content: reconstruct::render(&page, post_item, sidebar),
            scripts: String::new(),
        })
    }
}
