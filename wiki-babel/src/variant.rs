//! Page variants and file name routing
//!
//! Which codec deconstructs a page is decided from its file name alone: two exact names route
//! to the structural codecs, one suffix routes to the opaque tool codec, everything else is
//! unsupported and produces no output.

use serde::Serialize;
use std::fmt;

/// The page shapes this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Blog listing page
    Index,
    /// Multi-section community page
    Discord,
    /// Opaque tool page, passed through verbatim
    Tool,
    /// Anything else; skipped
    Unsupported,
}

impl PageVariant {
    pub fn name(&self) -> &'static str {
        match self {
            PageVariant::Index => "index",
            PageVariant::Discord => "discord",
            PageVariant::Tool => "tool",
            PageVariant::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// File name rules used by [`VariantRules::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRules {
    /// Exact file name of the listing page
    pub index_file: String,
    /// Exact file name of the community page
    pub discord_file: String,
    /// File name suffix of tool pages
    pub tool_suffix: String,
}

impl Default for VariantRules {
    fn default() -> Self {
        Self {
            index_file: "index.html".to_string(),
            discord_file: "discord.html".to_string(),
            tool_suffix: "breadcrumbs.html".to_string(),
        }
    }
}

impl VariantRules {
    /// Classify a file name. Exact matches are checked before the suffix.
    pub fn classify(&self, file_name: &str) -> PageVariant {
        if file_name == self.index_file {
            PageVariant::Index
        } else if file_name == self.discord_file {
            PageVariant::Discord
        } else if !self.tool_suffix.is_empty() && file_name.ends_with(&self.tool_suffix) {
            PageVariant::Tool
        } else {
            PageVariant::Unsupported
        }
    }
}

/// Classify with the default rules.
pub fn classify(file_name: &str) -> PageVariant {
    VariantRules::default().classify(file_name)
}
