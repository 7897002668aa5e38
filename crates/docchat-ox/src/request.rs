use serde::Serialize;

/// Body of a `POST /answer` call.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    /// The user's question, forwarded verbatim.
    pub query: String,
}

impl QueryRequest {
    /// Wrap a query string in the request body shape.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// A named PDF payload for `POST /uploadpdf`.
///
/// This layer enforces no type or size constraints; the surrounding file
/// picker restricts selection to `.pdf` files before the bytes get here.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    /// File name as chosen by the user.
    pub filename: String,
    /// Raw file bytes.
    pub content: Vec<u8>,
}

impl PdfUpload {
    /// Create an upload payload from a file name and its bytes.
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }

    /// Payload size in kilobytes, as displayed next to the file picker.
    pub fn size_kb(&self) -> f64 {
        self.content.len() as f64 / 1024.0
    }
}
