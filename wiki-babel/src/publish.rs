//! File level pipeline.
//!
//! Bridges the codecs and the file system: read a page, deconstruct it and write the
//! intermediate document, or read an intermediate document, render it through a
//! [`SiteBackend`] and write the page.
//!
//! Every function works on one file and returns its own result; the batch helpers collect one
//! [`FileReport`] per input and never stop at the first failure. Nothing here prints; the
//! caller decides how to report.

use crate::error::CodecError;
use crate::registry::CodecRegistry;
use crate::site::SiteBackend;
use crate::templates::TemplateFallback;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of intermediate documents.
pub const DOCUMENT_EXTENSION: &str = "md";

/// What happened to a page handed to [`deconstruct_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeconstructOutcome {
    /// The intermediate document was written here
    Written(PathBuf),
    /// No codec handles this file name
    Skipped,
}

/// A page written by [`generate_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub path: PathBuf,
    pub fallback: Option<TemplateFallback>,
}

#[derive(Debug)]
pub enum FileOutcome {
    Written {
        path: PathBuf,
        fallback: Option<TemplateFallback>,
    },
    Skipped,
    Failed(CodecError),
}

/// Outcome of one file of a batch.
#[derive(Debug)]
pub struct FileReport {
    pub source: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed(_))
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> &str {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
}

fn write_file(path: &Path, contents: &str) -> Result<(), CodecError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CodecError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| CodecError::io(path, e))
}

/// Deconstruct one HTML page into `out_dir/<stem>.md`.
///
/// The file is routed by its file name; unsupported names are skipped without reading them.
pub fn deconstruct_file(
    path: &Path,
    out_dir: &Path,
    registry: &CodecRegistry,
) -> Result<DeconstructOutcome, CodecError> {
    let name = file_name(path);
    if registry.for_file(name).is_none() {
        return Ok(DeconstructOutcome::Skipped);
    }

    let source = fs::read_to_string(path).map_err(|e| CodecError::io(path, e))?;
    let Some(document) = registry.deconstruct(name, &source)? else {
        return Ok(DeconstructOutcome::Skipped);
    };

    let output = out_dir.join(format!("{}.{DOCUMENT_EXTENSION}", file_stem(path)));
    write_file(&output, &document)?;
    debug!(source = %path.display(), output = %output.display(), "wrote document");

    Ok(DeconstructOutcome::Written(output))
}

pub fn deconstruct_batch<P: AsRef<Path>>(
    paths: &[P],
    out_dir: &Path,
    registry: &CodecRegistry,
) -> Vec<FileReport> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let outcome = match deconstruct_file(path, out_dir, registry) {
                Ok(DeconstructOutcome::Written(path)) => FileOutcome::Written {
                    path,
                    fallback: None,
                },
                Ok(DeconstructOutcome::Skipped) => FileOutcome::Skipped,
                Err(err) => FileOutcome::Failed(err),
            };
            FileReport {
                source: path.to_path_buf(),
                outcome,
            }
        })
        .collect()
}

/// Intermediate documents directly inside `dir`, sorted by path.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>, CodecError> {
    let mut documents = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| CodecError::io(dir, e))? {
        let path = entry.map_err(|e| CodecError::io(dir, e))?.path();
        if path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(DOCUMENT_EXTENSION)
        {
            documents.push(path);
        }
    }
    documents.sort();
    Ok(documents)
}

/// Where the page generated from `document` goes.
pub fn output_path(document: &Path, site_dir: &Path, tool: bool, tool_subdir: &str) -> PathBuf {
    let dir = if tool {
        site_dir.join(tool_subdir)
    } else {
        site_dir.to_path_buf()
    };
    dir.join(format!("{}.html", file_stem(document)))
}

/// Render one intermediate document and write the page under `site_dir`.
pub fn generate_file(
    document: &Path,
    site_dir: &Path,
    backend: &dyn SiteBackend,
    tool_subdir: &str,
) -> Result<GeneratedPage, CodecError> {
    let source = fs::read_to_string(document).map_err(|e| CodecError::io(document, e))?;
    let page = backend.render(&source, file_stem(document))?;

    let path = output_path(document, site_dir, page.tool, tool_subdir);
    write_file(&path, &page.html)?;
    debug!(
        document = %document.display(),
        output = %path.display(),
        backend = backend.name(),
        "generated page"
    );

    Ok(GeneratedPage {
        path,
        fallback: page.fallback,
    })
}

/// Generate a page for every intermediate document in `input_dir`.
///
/// Fails only when `input_dir` itself cannot be listed.
pub fn generate_site(
    input_dir: &Path,
    site_dir: &Path,
    backend: &dyn SiteBackend,
    tool_subdir: &str,
) -> Result<Vec<FileReport>, CodecError> {
    let reports = list_documents(input_dir)?
        .into_iter()
        .map(|document| {
            let outcome = match generate_file(&document, site_dir, backend, tool_subdir) {
                Ok(page) => FileOutcome::Written {
                    path: page.path,
                    fallback: page.fallback,
                },
                Err(err) => FileOutcome::Failed(err),
            };
            FileReport {
                source: document,
                outcome,
            }
        })
        .collect();
    Ok(reports)
}
