use std::io::Read;

use lopdf::Document;

use papertext_core::{BackendError, PdfBackend};

/// lopdf-based implementation of [`PdfBackend`].
///
/// lopdf is pure Rust and parses from an in-memory buffer, so any byte
/// source works: an uploaded-file buffer, a slice, an open file. The whole
/// source is read before parsing; nothing is persisted or cached beyond
/// the call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn extract_text(&self, source: &mut dyn Read) -> Result<String, BackendError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;

        let document =
            Document::load_mem(&bytes).map_err(|e| BackendError::Parse(e.to_string()))?;

        // get_pages is keyed by 1-based page number, ordered by physical
        // position in the page tree.
        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        tracing::debug!(pages = page_numbers.len(), "document opened");

        let mut pages_text = Vec::new();
        for page_number in page_numbers {
            let text = document
                .extract_text(&[page_number])
                .map_err(|e| BackendError::Extraction(e.to_string()))?;

            // lopdf terminates every page's text with its own newline;
            // strip it so consecutive pages are separated by exactly one.
            let text = text.trim_end_matches('\n');
            if text.is_empty() {
                tracing::debug!(page = page_number, "no extractable text, skipping page");
                continue;
            }
            pages_text.push(text.to_owned());
        }

        Ok(pages_text.join("\n"))
    }
}
