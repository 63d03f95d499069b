//! Code shared by every codec
//!
//! - [`dom`]: read-only queries over the parsed HTML tree, plus the canonical pretty printer.
//! - [`field_grammar`]: the ordered-label tokenizer used to recover fields from body text.
//! - [`inline`]: markdown → HTML for prose fields, and HTML escaping.

pub mod dom;
pub mod field_grammar;
pub mod inline;
