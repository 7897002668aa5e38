use bon::Builder;

use crate::{
    conversation::QueryBackend,
    error::DocChatRequestError,
    internal::{self, RequestHelper},
    request::{PdfUpload, QueryRequest},
    response::{ChatResponse, UploadResponse},
};

/// Environment variable naming the backend base URL.
pub const ENDPOINT_ENV: &str = "ENDPOINT";

/// MIME type sent with every upload; the contract only carries PDFs.
const PDF_MIME: &str = "application/pdf";

/// Client for the docchat backend.
///
/// Sole mediator of outbound calls: one JSON query endpoint and one
/// multipart upload endpoint, each attempted exactly once per call with
/// no retries. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone, Builder)]
pub struct DocChat {
    /// Base URL of the backend, e.g. `http://localhost:8000`.
    #[builder(into)]
    pub(crate) base_url: String,
    /// Underlying HTTP client; defaults to a fresh pool.
    #[builder(default)]
    pub(crate) client: reqwest::Client,
}

impl DocChat {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from the `ENDPOINT` environment variable.
    ///
    /// Fails with [`DocChatRequestError::MissingEndpoint`] when the
    /// variable is unset or blank, before any request is possible. The
    /// embedding application is expected to refuse to start in that case
    /// rather than run with an unconfigured client.
    pub fn load_from_env() -> Result<Self, DocChatRequestError> {
        Self::from_endpoint_var(std::env::var(ENDPOINT_ENV).ok())
    }

    /// Validate a configured endpoint value and build the client.
    fn from_endpoint_var(value: Option<String>) -> Result<Self, DocChatRequestError> {
        match value {
            Some(endpoint) if !endpoint.trim().is_empty() => Ok(Self::new(endpoint)),
            _ => Err(DocChatRequestError::MissingEndpoint),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create request helper for internal use
    fn request_helper(&self) -> RequestHelper {
        RequestHelper::new(self.client.clone(), &self.base_url)
    }

    /// Submit a user query to `/answer` and decode the response.
    ///
    /// Empty queries are not rejected here; any emptiness policy belongs
    /// to the UI surface. Each failure kind is logged once on the error
    /// channel before being returned, so callers only need to fold the
    /// `Err` into their own "could not complete" handling.
    pub async fn send_query(&self, query: &str) -> Result<ChatResponse, DocChatRequestError> {
        let request = QueryRequest::new(query);
        let outcome = self
            .request_helper()
            .post_json(&internal::ANSWER, &request)
            .await;

        if let Err(err) = &outcome {
            tracing::error!("API error: {}", err);
        }
        outcome
    }

    /// Upload a PDF to `/uploadpdf`.
    ///
    /// A 2xx response decodes into [`UploadResponse`]; whether the
    /// backend actually accepted the file is its `success` flag, which
    /// defaults to `false` when absent. An `Err` means the call could not
    /// complete at all, which callers display the same way as an explicit
    /// rejection.
    pub async fn upload_pdf(
        &self,
        upload: &PdfUpload,
    ) -> Result<UploadResponse, DocChatRequestError> {
        let outcome = self.try_upload(upload).await;

        if let Err(err) = &outcome {
            tracing::error!("PDF upload error: {}", err);
        }
        outcome
    }

    /// Build and send the multipart upload request.
    async fn try_upload(&self, upload: &PdfUpload) -> Result<UploadResponse, DocChatRequestError> {
        let part = reqwest::multipart::Part::bytes(upload.content.clone())
            .file_name(upload.filename.clone())
            .mime_str(PDF_MIME)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        self.request_helper()
            .post_multipart(&internal::UPLOAD_PDF, form)
            .await
    }
}

impl QueryBackend for DocChat {
    async fn send_query(&self, query: &str) -> Result<ChatResponse, DocChatRequestError> {
        DocChat::send_query(self, query).await
    }
}
