//! Immutable template table

use crate::error::CodecError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Every loaded template, keyed by file name.
///
/// There is no way to add or replace a template once the store is built.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, String>,
}

impl TemplateStore {
    /// Load every `*.html` file directly inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CodecError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| CodecError::io(dir, e))?;

        let mut templates = HashMap::new();
        for entry in entries {
            let path = entry.map_err(|e| CodecError::io(dir, e))?.path();
            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("html") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let content = fs::read_to_string(&path).map_err(|e| CodecError::io(&path, e))?;
            debug!(template = name, "loaded template");
            templates.insert(name.to_string(), content);
        }

        Ok(Self { templates })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(name, content)| (name.into(), content.into()))
                .collect(),
        }
    }
}
