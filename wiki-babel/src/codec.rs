//! PageCodec trait definition
//!
//! Every page variant implements [`PageCodec`]. A codec works on in-memory values only: the
//! parsed page on the way in, the body text and the loaded templates on the way out.

use crate::common::dom::HtmlPage;
use crate::error::CodecError;
use crate::ir::Intermediate;
use crate::templates::TemplateStore;
use crate::variant::PageVariant;

/// What a codec hands to the base template renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Value for `{{content}}`
    pub content: String,
    /// Value for `{{scripts}}`
    pub scripts: String,
}

/// Bidirectional transcoder for one page variant.
///
/// # Examples
///
/// ```ignore
/// let codec = registry.get(PageVariant::Tool).unwrap();
/// let page = HtmlPage::parse(&html);
/// let body = codec.deconstruct(&page)?;
/// let fragment = codec.reconstruct(&body, &store)?;
/// ```
pub trait PageCodec: Send + Sync {
    /// Short name used in logs and `--help` listings
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// The variant this codec handles
    fn variant(&self) -> PageVariant;

    /// Base template written into the `template` frontmatter key and used on regeneration
    fn template(&self) -> &str;

    /// Pull the structured intermediate out of a parsed page.
    fn extract(&self, page: &HtmlPage) -> Result<Intermediate, CodecError>;

    /// HTML page → body text of the intermediate document.
    fn deconstruct(&self, page: &HtmlPage) -> Result<String, CodecError> {
        Ok(self.extract(page)?.to_body())
    }

    /// Body text → HTML fragment for the base template.
    fn reconstruct(&self, body: &str, templates: &TemplateStore) -> Result<Fragment, CodecError>;
}
