use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to parse PDF document: {0}")]
    Parse(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors wrap a PDF-reading library: open the document from a byte
/// source, walk its pages in physical order, and return the non-empty
/// per-page texts joined by a single newline. A document with zero pages,
/// or whose pages all yield no text, produces an empty string.
///
/// The backend performs no retries and no local recovery — a source that
/// cannot be parsed surfaces as [`BackendError::Parse`], and a page the
/// library fails on surfaces as [`BackendError::Extraction`].
pub trait PdfBackend: Send + Sync {
    /// Extract the full text content of a PDF read from `source`.
    fn extract_text(&self, source: &mut dyn Read) -> Result<String, BackendError>;

    /// Extract the full text content of a PDF file on disk.
    fn extract_text_from_path(&self, path: &Path) -> Result<String, BackendError> {
        let mut file = File::open(path)?;
        self.extract_text(&mut file)
    }
}
