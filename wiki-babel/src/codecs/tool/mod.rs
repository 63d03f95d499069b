//! Tool page codec
//!
//! Tool pages are interactive and hand written, so nothing inside them is interpreted. The
//! `div.container` goes into the body as a pretty-printed HTML fence and the first inline
//! script as a JavaScript fence; regeneration puts both back unchanged.

pub mod deconstruct;
pub mod reconstruct;

use crate::codec::{Fragment, PageCodec};
use crate::common::dom::HtmlPage;
use crate::error::CodecError;
use crate::ir::Intermediate;
use crate::templates::{TemplateNames, TemplateStore};
use crate::variant::PageVariant;

pub struct ToolCodec {
    template: String,
}

impl ToolCodec {
    pub fn new(names: &TemplateNames) -> Self {
        Self {
            template: names.tool.clone(),
        }
    }
}

impl Default for ToolCodec {
    fn default() -> Self {
        Self::new(&TemplateNames::default())
    }
}

impl PageCodec for ToolCodec {
    fn name(&self) -> &str {
        "tool"
    }

    fn description(&self) -> &str {
        "Tool page: container markup and inline script, kept verbatim"
    }

    fn variant(&self) -> PageVariant {
        PageVariant::Tool
    }

    fn template(&self) -> &str {
        &self.template
    }

    fn extract(&self, page: &HtmlPage) -> Result<Intermediate, CodecError> {
        deconstruct::extract(page).map(Intermediate::Tool)
    }

    fn reconstruct(&self, body: &str, _templates: &TemplateStore) -> Result<Fragment, CodecError> {
        let page = reconstruct::parse_body(body);
        Ok(reconstruct::render(&page))
    }
}
