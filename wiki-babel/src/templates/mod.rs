//! Base templates and placeholder substitution
//!
//! Templates are plain HTML files carrying literal `{{name}}` placeholders. They are loaded
//! once into a [`TemplateStore`] and handed to every render call; nothing here keeps global
//! state, so tests can build a store from a handful of strings.
//!
//! - [`store`]: the immutable name → content table.
//! - [`render`]: single-pass substitution and the default template fallback.

pub mod render;
pub mod store;

pub use render::{substitute, PageContext, Rendered, TemplateFallback, TemplateRenderer};
pub use store::TemplateStore;

/// File names of the templates the codecs and renderer use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNames {
    /// Fallback base template
    pub default: String,
    /// Base template of listing pages
    pub index: String,
    /// Base template of community pages
    pub discord: String,
    /// Base template of tool pages
    pub tool: String,
    /// Per-post fragment of listing pages
    pub post_item: String,
    /// Optional sidebar fragment of listing pages
    pub sidebar: String,
}

impl Default for TemplateNames {
    fn default() -> Self {
        Self {
            default: "main_template.html".to_string(),
            index: "index.html".to_string(),
            discord: "discord.html".to_string(),
            tool: "tool_template.html".to_string(),
            post_item: "blog_post_item.html".to_string(),
            sidebar: "sidebar.html".to_string(),
        }
    }
}

impl From<&TemplateNames> for TemplateRenderer {
    fn from(names: &TemplateNames) -> Self {
        TemplateRenderer::new(names.default.clone())
    }
}
