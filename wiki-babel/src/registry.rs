//! Codec registry for codec selection
//!
//! Deconstruction picks a codec from the file name (see [`VariantRules`]), reconstruction from
//! the `template` frontmatter key written at deconstruction time.

use crate::codec::PageCodec;
use crate::codecs::{DiscordCodec, IndexCodec, ToolCodec};
use crate::common::dom::HtmlPage;
use crate::error::CodecError;
use crate::frontmatter::{self, Frontmatter};
use crate::ir::Intermediate;
use crate::templates::TemplateNames;
use crate::variant::{PageVariant, VariantRules};
use std::collections::HashMap;
use tracing::debug;

/// Registry of page codecs, at most one per variant.
///
/// # Examples
///
/// ```ignore
/// let registry = CodecRegistry::default();
/// let document = registry.deconstruct("index.html", &html)?;
/// ```
pub struct CodecRegistry {
    rules: VariantRules,
    codecs: HashMap<PageVariant, Box<dyn PageCodec>>,
}

impl CodecRegistry {
    /// Create a registry without codecs
    pub fn new(rules: VariantRules) -> Self {
        CodecRegistry {
            rules,
            codecs: HashMap::new(),
        }
    }

    /// Register a codec
    ///
    /// A codec registered for the same variant is replaced.
    pub fn register<C: PageCodec + 'static>(&mut self, codec: C) {
        self.codecs.insert(codec.variant(), Box::new(codec));
    }

    pub fn get(&self, variant: PageVariant) -> Result<&dyn PageCodec, CodecError> {
        self.codecs
            .get(&variant)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| CodecError::NoCodec(variant.to_string()))
    }

    /// Codec whose base template is `template`
    pub fn for_template(&self, template: &str) -> Option<&dyn PageCodec> {
        self.codecs
            .values()
            .find(|codec| codec.template() == template)
            .map(|codec| codec.as_ref())
    }

    /// Codec the routing rules assign to `file_name`
    pub fn for_file(&self, file_name: &str) -> Option<&dyn PageCodec> {
        self.codecs
            .get(&self.rules.classify(file_name))
            .map(|codec| codec.as_ref())
    }

    pub fn rules(&self) -> &VariantRules {
        &self.rules
    }

    /// Registered codecs, sorted by name
    pub fn codecs(&self) -> Vec<&dyn PageCodec> {
        let mut codecs: Vec<_> = self.codecs.values().map(|codec| codec.as_ref()).collect();
        codecs.sort_by(|a, b| a.name().cmp(b.name()));
        codecs
    }

    /// Names of the registered codecs (sorted)
    pub fn list_codecs(&self) -> Vec<String> {
        self.codecs()
            .iter()
            .map(|codec| codec.name().to_string())
            .collect()
    }

    /// Parse an HTML file and extract its intermediate.
    ///
    /// `Ok(None)` when the file name does not route to any codec.
    pub fn extract(
        &self,
        file_name: &str,
        source: &str,
    ) -> Result<Option<Intermediate>, CodecError> {
        let Some(codec) = self.for_file(file_name) else {
            debug!(file_name, "no codec for file");
            return Ok(None);
        };
        codec.extract(&HtmlPage::parse(source)).map(Some)
    }

    /// Turn an HTML file into a complete intermediate document.
    ///
    /// The frontmatter carries the page `<title>` and the codec's base template. `Ok(None)`
    /// when the file name does not route to any codec.
    pub fn deconstruct(&self, file_name: &str, source: &str) -> Result<Option<String>, CodecError> {
        let Some(codec) = self.for_file(file_name) else {
            debug!(file_name, "no codec for file");
            return Ok(None);
        };
        debug!(file_name, codec = codec.name(), "deconstructing");

        let page = HtmlPage::parse(source);
        let body = codec.deconstruct(&page)?;

        let mut meta = Frontmatter::new();
        meta.insert("title", page.title().unwrap_or_default());
        meta.insert("template", codec.template());

        Ok(Some(frontmatter::serialize(&meta, &body)))
    }

    /// Create a registry with the three built-in codecs
    pub fn with_defaults(rules: VariantRules, templates: &TemplateNames) -> Self {
        let mut registry = Self::new(rules);

        registry.register(IndexCodec::new(templates));
        registry.register(DiscordCodec::new(templates));
        registry.register(ToolCodec::new(templates));

        registry
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::with_defaults(VariantRules::default(), &TemplateNames::default())
    }
}
