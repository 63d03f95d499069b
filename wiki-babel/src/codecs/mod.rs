//! Page codec implementations
//!
//! One directory per page variant. `deconstruct.rs` goes from the parsed page to the
//! structured intermediate and writes its body text, `reconstruct.rs` parses the body back
//! and builds the HTML fragment.

pub mod discord;
pub mod index;
pub mod tool;

pub use discord::DiscordCodec;
pub use index::IndexCodec;
pub use tool::ToolCodec;
