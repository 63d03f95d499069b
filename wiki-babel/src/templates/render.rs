//! Placeholder substitution
//!
//! Placeholders are literal `{{key}}` tokens. Substitution is a single left-to-right pass:
//! a substituted value is copied to the output and never scanned again, so a post whose text
//! contains `{{title}}` stays that way. Tokens whose key is not in the supplied set are left in
//! place untouched.

use super::store::TemplateStore;
use super::TemplateNames;
use crate::common::inline::escape_text;
use crate::error::CodecError;
use tracing::warn;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every `{{key}}` whose key is in `values`.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(OPEN) {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + OPEN.len()..];

        let replacement = after_open.find(CLOSE).and_then(|close| {
            let key = &after_open[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + CLOSE.len()..];
            }
            None => {
                out.push_str(OPEN);
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Values for the base template placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Plain text, escaped on substitution
    pub title: String,
    /// HTML fragment
    pub content: String,
    /// HTML fragment, usually a `<script>` element or empty
    pub scripts: String,
}

/// A missing template was replaced by the default one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFallback {
    pub requested: String,
    pub used: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    /// Set when the requested template was not loaded
    pub fallback: Option<TemplateFallback>,
}

/// Fills base templates, falling back to a default template.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    default_template: String,
}

impl TemplateRenderer {
    pub fn new(default_template: impl Into<String>) -> Self {
        Self {
            default_template: default_template.into(),
        }
    }

    pub fn default_template(&self) -> &str {
        &self.default_template
    }

    /// Render `context` into the template called `name`.
    ///
    /// A missing template is not an error as long as the default one is loaded; the returned
    /// [`Rendered::fallback`] records the substitution and must be surfaced by the caller.
    /// Without the default the error names the default template.
    pub fn render(
        &self,
        store: &TemplateStore,
        name: &str,
        context: &PageContext,
    ) -> Result<Rendered, CodecError> {
        let (template, fallback) = match store.get(name) {
            Some(template) => (template, None),
            None => {
                let template = store
                    .get(&self.default_template)
                    .ok_or_else(|| CodecError::MissingTemplate(self.default_template.clone()))?;
                warn!(
                    requested = name,
                    used = %self.default_template,
                    "template not found, using default"
                );
                (
                    template,
                    Some(TemplateFallback {
                        requested: name.to_string(),
                        used: self.default_template.clone(),
                    }),
                )
            }
        };

        let title = escape_text(&context.title);
        let html = substitute(
            template,
            &[
                ("title", &title),
                ("content", &context.content),
                ("scripts", &context.scripts),
            ],
        );

        Ok(Rendered { html, fallback })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::from(&TemplateNames::default())
    }
}
