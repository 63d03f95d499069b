//! Shared fixtures for the integration tests.

use std::path::PathBuf;
use wiki_babel::TemplateStore;

pub const INDEX_PAGE: &str = include_str!("../fixtures/index.html");
pub const DISCORD_PAGE: &str = include_str!("../fixtures/discord.html");
pub const TOOL_PAGE: &str = include_str!("../fixtures/breadcrumbs.html");

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn template_store() -> TemplateStore {
    TemplateStore::from_dir(fixtures_dir().join("templates")).expect("fixture templates")
}
