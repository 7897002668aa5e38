use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::DocChatRequestError;

/// An endpoint of the docchat backend.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint {
    /// Path relative to the base URL, without a leading slash.
    pub(crate) path: &'static str,
    /// Per-request deadline; expiry surfaces as a transport failure.
    pub(crate) timeout: Duration,
}

/// Query endpoint. Answers are expected well within half a minute.
pub(crate) const ANSWER: Endpoint = Endpoint {
    path: "answer",
    timeout: Duration::from_secs(30),
};

/// Upload endpoint. Uploads are larger and slower than queries, so the
/// deadline is doubled.
pub(crate) const UPLOAD_PDF: Endpoint = Endpoint {
    path: "uploadpdf",
    timeout: Duration::from_secs(60),
};

/// Request helper owning the HTTP client and base URL.
#[derive(Debug, Clone)]
pub(crate) struct RequestHelper {
    /// Shared connection pool.
    client: reqwest::Client,
    /// Backend base URL as configured.
    base_url: String,
}

impl RequestHelper {
    /// Create a helper for the given client and base URL.
    pub(crate) fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Join the base URL and an endpoint path, tolerating a trailing slash
    /// in the configured URL.
    fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path)
    }

    /// Execute a JSON POST and decode the response body.
    pub(crate) async fn post_json<T, B>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<T, DocChatRequestError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let res = self
            .client
            .post(self.url(endpoint))
            .timeout(endpoint.timeout)
            .json(body)
            .send()
            .await?;

        Self::handle_response(res).await
    }

    /// Execute a multipart POST and decode the response body.
    pub(crate) async fn post_multipart<T>(
        &self,
        endpoint: &Endpoint,
        form: reqwest::multipart::Form,
    ) -> Result<T, DocChatRequestError>
    where
        T: DeserializeOwned,
    {
        let res = self
            .client
            .post(self.url(endpoint))
            .timeout(endpoint.timeout)
            .multipart(form)
            .send()
            .await?;

        Self::handle_response(res).await
    }

    /// Split a response into decoded success, status failure, or decode
    /// failure. The body is read exactly once.
    async fn handle_response<T: DeserializeOwned>(
        res: reqwest::Response,
    ) -> Result<T, DocChatRequestError> {
        let status = res.status();
        let bytes = res.bytes().await?;

        if status.is_success() {
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Err(DocChatRequestError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let helper = RequestHelper::new(reqwest::Client::new(), "http://localhost:8000");
        assert_eq!(helper.url(&ANSWER), "http://localhost:8000/answer");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let helper = RequestHelper::new(reqwest::Client::new(), "http://localhost:8000/");
        assert_eq!(helper.url(&UPLOAD_PDF), "http://localhost:8000/uploadpdf");
    }

    #[test]
    fn upload_deadline_is_double_the_query_deadline() {
        assert_eq!(ANSWER.timeout, Duration::from_secs(30));
        assert_eq!(UPLOAD_PDF.timeout, Duration::from_secs(60));
    }
}
