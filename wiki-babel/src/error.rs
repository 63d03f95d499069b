//! Error types for codec operations

use crate::variant::PageVariant;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while transcoding a single document.
///
/// None of these are fatal for a batch: callers report them per file and move on.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A container or heading the variant requires is absent from the page
    #[error("{variant} page: could not find {element}")]
    StructuralMissingElement {
        variant: PageVariant,
        element: String,
    },
    /// A template is required and neither it nor the default template is loaded
    #[error("template '{0}' not found")]
    MissingTemplate(String),
    /// No codec owns the declared template (or the file name)
    #[error("no codec handles '{0}'")]
    NoCodec(String),
    /// Error while serializing HTML
    #[error("serialization error: {0}")]
    Serialization(String),
    /// File system error in the batch layer
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CodecError {
    pub(crate) fn missing(variant: PageVariant, element: impl Into<String>) -> Self {
        CodecError::StructuralMissingElement {
            variant,
            element: element.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        CodecError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
