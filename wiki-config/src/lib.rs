//! Shared configuration loader for the page wiki tools.
//!
//! `defaults/wiki.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WikiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use wiki_babel::{BackendKind, TemplateNames, TemplateRenderer, VariantRules};

const DEFAULT_TOML: &str = include_str!("../defaults/wiki.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "wiki.toml";

/// Top-level configuration consumed by the wiki tools.
#[derive(Debug, Clone, Deserialize)]
pub struct WikiConfig {
    pub paths: PathsConfig,
    pub routing: RoutingConfig,
    pub templates: TemplatesConfig,
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub wiki_dir: PathBuf,
    pub template_dir: PathBuf,
    pub site_dir: PathBuf,
}

/// File name routing of pages to codecs.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
    pub index_file: String,
    pub discord_file: String,
    pub tool_suffix: String,
}

impl From<&RoutingConfig> for VariantRules {
    fn from(config: &RoutingConfig) -> Self {
        VariantRules {
            index_file: config.index_file.clone(),
            discord_file: config.discord_file.clone(),
            tool_suffix: config.tool_suffix.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    pub default: String,
    pub index: String,
    pub discord: String,
    pub tool: String,
    pub post_item: String,
    pub sidebar: String,
}

impl From<&TemplatesConfig> for TemplateNames {
    fn from(config: &TemplatesConfig) -> Self {
        TemplateNames {
            default: config.default.clone(),
            index: config.index.clone(),
            discord: config.discord.clone(),
            tool: config.tool.clone(),
            post_item: config.post_item.clone(),
            sidebar: config.sidebar.clone(),
        }
    }
}

impl From<&TemplatesConfig> for TemplateRenderer {
    fn from(config: &TemplatesConfig) -> Self {
        TemplateRenderer::from(&TemplateNames::from(config))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateConfig {
    pub backend: BackendKind,
    pub tool_subdir: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WikiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WikiConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.paths.wiki_dir, PathBuf::from("wiki"));
        assert_eq!(config.paths.site_dir, PathBuf::from("website"));
        assert_eq!(config.generate.backend, BackendKind::Template);
        assert_eq!(config.generate.tool_subdir, "tools");
    }

    #[test]
    fn defaults_match_library_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(VariantRules::from(&config.routing), VariantRules::default());
        assert_eq!(
            TemplateNames::from(&config.templates),
            TemplateNames::default()
        );
        assert_eq!(
            TemplateRenderer::from(&config.templates).default_template(),
            "main_template.html"
        );
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("generate.backend", "markdown")
            .expect("override to apply")
            .set_override("routing.tool_suffix", "-tool.html")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.generate.backend, BackendKind::Markdown);
        let rules = VariantRules::from(&config.routing);
        assert_eq!(rules.classify("color-tool.html"), wiki_babel::PageVariant::Tool);
    }

    #[test]
    fn rejects_unknown_backend() {
        let result = Loader::new()
            .set_override("generate.backend", "pdf")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn file_layers_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("wiki.toml");
        fs::write(&path, "[paths]\nsite_dir = \"public\"\n").expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.paths.site_dir, PathBuf::from("public"));
        assert_eq!(config.paths.wiki_dir, PathBuf::from("wiki"));
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/wiki.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.templates.post_item, "blog_post_item.html");
    }
}
