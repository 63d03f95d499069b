//! Page codecs between site HTML and editable wiki documents
//!
//!     This crate turns a handful of known HTML page shapes into a plain text "wiki" document
//!     (frontmatter + a small, line oriented body) and regenerates HTML from those documents.
//!     Content can then be edited without touching markup.
//!
//!     TLDR: For codec authors:
//!         - Every page variant is a codec implementing [`PageCodec`] (./codec.rs).
//!         - Deconstruction is HTML → IR (./ir) → body text, reconstruction is body text → IR → HTML fragment.
//!         - The fragment is dropped into a base template by the renderer (./templates).
//!         - Codecs never read or write files; that lives in ./publish.rs and the cli.
//!
//! Architecture
//!
//!     The shared machinery lives in ./common (DOM queries, the field grammar, markdown inlining)
//!     and ./frontmatter.rs. Variant specific code is kept in ./codecs/<variant>, split in
//!     deconstruct.rs and reconstruct.rs. Which codec handles a page is decided by file name
//!     (./variant.rs) when deconstructing and by the `template` frontmatter key when
//!     reconstructing (./registry.rs).
//!
//!     This is a pure lib: nothing here prints or reads the environment. Diagnostics go through
//!     `tracing`, the caller decides where they end up.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── codec.rs                # PageCodec trait definition
//!     ├── registry.rs             # CodecRegistry for selection by file name or template
//!     ├── variant.rs              # PageVariant + file name routing rules
//!     ├── frontmatter.rs
//!     ├── codecs
//!     │   ├── <variant>
//!     │   │   ├── deconstruct.rs  # HTML → IR → body
//!     │   │   ├── reconstruct.rs  # body → IR → HTML fragment
//!     │   │   └── mod.rs
//!     ├── ir                      # Structured intermediates, one per variant
//!     ├── common                  # DOM helpers, field grammar, inliner
//!     ├── templates               # TemplateStore + renderer
//!     ├── site.rs                 # Rendering back ends
//!     └── publish.rs              # Batch/file level helpers
//!
//! Lossy Conversions
//!
//!     Only the recognized fields survive a round trip. Surrounding markup, whitespace and any
//!     element the codecs do not know about are dropped on deconstruction and regenerated from
//!     templates on reconstruction.
//!
//! Library Choices
//!
//!     HTML is parsed with `html5ever` into a `markup5ever_rcdom` tree, prose is turned back into
//!     HTML with `comrak`. We do not write parsers for either format.
pub mod codec;
pub mod codecs;
pub mod common;
pub mod error;
pub mod frontmatter;
pub mod ir;
pub mod publish;
pub mod registry;
pub mod site;
pub mod templates;
pub mod variant;

pub use codec::{Fragment, PageCodec};
pub use common::dom::HtmlPage;
pub use error::CodecError;
pub use frontmatter::Frontmatter;
pub use ir::Intermediate;
pub use registry::CodecRegistry;
pub use site::{BackendKind, MarkdownBackend, RenderedPage, SiteBackend, TemplateBackend};
pub use templates::{TemplateFallback, TemplateNames, TemplateRenderer, TemplateStore};
pub use variant::{PageVariant, VariantRules};
