use std::io::Read;
use std::path::Path;

use thiserror::Error;

// Re-export the seam so hosts can plug in their own backend
pub use papertext_core::{BackendError, PdfBackend};
#[cfg(feature = "lopdf")]
pub use papertext_lopdf::LopdfBackend;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("PDF extraction error: {0}")]
    Backend(#[from] BackendError),
    #[cfg(not(feature = "lopdf"))]
    #[error("PDF support not compiled in (enable the `lopdf` feature of papertext)")]
    NoBackend,
}

/// Extract the text of a PDF read from `source`.
///
/// Pages are visited in document order; each page's extractable text is
/// collected, pages yielding no text are dropped, and the remainder is
/// joined with a single newline. A zero-page or all-empty document yields
/// `""`. A source that is not a valid PDF fails with the underlying
/// parse error — nothing is retried or swallowed.
pub fn extract_text<R: Read>(source: R) -> Result<String, ExtractError> {
    with_default_backend(source)
}

/// Extract the text of a PDF file on disk.
pub fn extract_text_from_path(path: &Path) -> Result<String, ExtractError> {
    path_with_default_backend(path)
}

#[cfg(feature = "lopdf")]
fn with_default_backend<R: Read>(mut source: R) -> Result<String, ExtractError> {
    Ok(LopdfBackend::new().extract_text(&mut source)?)
}

#[cfg(not(feature = "lopdf"))]
fn with_default_backend<R: Read>(_source: R) -> Result<String, ExtractError> {
    Err(ExtractError::NoBackend)
}

#[cfg(feature = "lopdf")]
fn path_with_default_backend(path: &Path) -> Result<String, ExtractError> {
    Ok(LopdfBackend::new().extract_text_from_path(path)?)
}

#[cfg(not(feature = "lopdf"))]
fn path_with_default_backend(_path: &Path) -> Result<String, ExtractError> {
    Err(ExtractError::NoBackend)
}
