//! Rendering back ends
//!
//! Two independent ways of turning an intermediate document into a page live behind
//! [`SiteBackend`]:
//!
//! - [`TemplateBackend`]: reads the frontmatter, picks the codec owning the declared template,
//!   rebuilds the fragment and fills the named base template.
//! - [`MarkdownBackend`]: renders the whole document as CommonMark into one built-in page
//!   template. It knows nothing about frontmatter or codecs; the title is the file stem.
//!
//! The caller picks one explicitly. Their behaviors are intentionally kept apart.

use crate::common::inline::{escape_text, markdown_to_html};
use crate::error::CodecError;
use crate::frontmatter;
use crate::registry::CodecRegistry;
use crate::templates::{substitute, PageContext, TemplateFallback, TemplateRenderer, TemplateStore};
use crate::variant::PageVariant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const UNTITLED: &str = "Untitled";

/// A generated page, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    /// Base template that was requested, if any
    pub template: Option<String>,
    /// Set when the requested template was missing and the default was used
    pub fallback: Option<TemplateFallback>,
    /// Tool pages are written to their own subdirectory
    pub tool: bool,
}

/// Turns one intermediate document into one HTML page.
pub trait SiteBackend {
    fn name(&self) -> &str;

    /// Render `source` (the full document text). `stem` is the file name without extension.
    fn render(&self, source: &str, stem: &str) -> Result<RenderedPage, CodecError>;
}

/// Selects a back end by name (`template` or `markdown`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Template,
    Markdown,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Template => "template",
            BackendKind::Markdown => "markdown",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "template" => Ok(BackendKind::Template),
            "markdown" => Ok(BackendKind::Markdown),
            other => Err(format!(
                "unknown backend '{other}' (expected 'template' or 'markdown')"
            )),
        }
    }
}

/// Frontmatter-driven generation through the page codecs.
pub struct TemplateBackend {
    registry: CodecRegistry,
    templates: TemplateStore,
    renderer: TemplateRenderer,
}

impl TemplateBackend {
    pub fn new(registry: CodecRegistry, templates: TemplateStore, renderer: TemplateRenderer) -> Self {
        Self {
            registry,
            templates,
            renderer,
        }
    }
}

impl SiteBackend for TemplateBackend {
    fn name(&self) -> &str {
        "template"
    }

    fn render(&self, source: &str, stem: &str) -> Result<RenderedPage, CodecError> {
        let (meta, body) = frontmatter::parse(source);
        let declared = meta.get("template");
        let file_name = format!("{stem}.html");

        let codec = declared
            .and_then(|template| self.registry.for_template(template))
            .or_else(|| self.registry.for_file(&file_name))
            .ok_or_else(|| CodecError::NoCodec(declared.unwrap_or(&file_name).to_string()))?;
        debug!(stem, codec = codec.name(), "reconstructing");

        let fragment = codec.reconstruct(body, &self.templates)?;
        let template = declared.unwrap_or_else(|| codec.template());
        let context = PageContext {
            title: meta.get("title").unwrap_or(UNTITLED).to_string(),
            content: fragment.content,
            scripts: fragment.scripts,
        };
        let rendered = self.renderer.render(&self.templates, template, &context)?;

        Ok(RenderedPage {
            html: rendered.html,
            template: Some(template.to_string()),
            fallback: rendered.fallback,
            tool: codec.variant() == PageVariant::Tool,
        })
    }
}

const MARKDOWN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
</head>
<body>
    <main class="markdown-page">
{{content}}
    </main>
</body>
</html>
"#;

/// Plain CommonMark rendering into a single built-in template.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownBackend;

impl SiteBackend for MarkdownBackend {
    fn name(&self) -> &str {
        "markdown"
    }

    fn render(&self, source: &str, stem: &str) -> Result<RenderedPage, CodecError> {
        let title = escape_text(stem);
        let content = markdown_to_html(source);
        Ok(RenderedPage {
            html: substitute(MARKDOWN_PAGE, &[("title", &title), ("content", &content)]),
            template: None,
            fallback: None,
            tool: false,
        })
    }
}
