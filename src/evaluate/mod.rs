//! Document evaluation: upload a report, start its analysis, preview backend files.

mod api;
mod model;
mod preview;
mod wire;

pub use model::{
    AnalysisJob, DocumentKind, MAX_UPLOAD_BYTES, UploadReceipt, validate_document,
};

use std::path::Path;

use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig},
};

/// A builder for the evaluation endpoints (`upload`, `start-analysis`, `read-file`).
pub struct EvaluateBuilder {
    client: EsgClient,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl EvaluateBuilder {
    pub fn new(client: &EsgClient) -> Self {
        Self {
            client: client.clone(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the cache mode used by [`Self::read_file`]. Uploads and analysis runs are never cached.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for these calls.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Validates and uploads a local document as multipart field `file`.
    ///
    /// # Errors
    ///
    /// Returns `EsgError::InvalidDocument` before any network I/O when the file type or
    /// size is not accepted, `EsgError::Io` if the file cannot be read, or a request error.
    #[tracing::instrument(skip(self, path), err, fields(path = %path.as_ref().display()))]
    pub async fn upload(self, path: impl AsRef<Path>) -> Result<UploadReceipt, EsgError> {
        api::upload_path(&self.client, path.as_ref(), self.retry_override.as_ref()).await
    }

    /// Uploads an in-memory document. The same checks as [`Self::upload`] apply.
    ///
    /// # Errors
    ///
    /// Returns `EsgError::InvalidDocument` for a rejected document or a request error.
    pub async fn upload_bytes(
        self,
        file_name: &str,
        mime: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<UploadReceipt, EsgError> {
        let kind = validate_document(file_name, mime, bytes.len() as u64)?;
        api::upload_bytes(
            &self.client,
            file_name,
            kind,
            bytes,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Asks the backend to analyze a previously uploaded file.
    ///
    /// # Errors
    ///
    /// Returns an `EsgError` on a failed request or a non-2xx status.
    #[tracing::instrument(skip(self), err)]
    pub async fn start_analysis(self, file: &str) -> Result<AnalysisJob, EsgError> {
        api::start_analysis(&self.client, file, self.retry_override.as_ref()).await
    }

    /// Reads a backend file for the prompt preview. A `.xlsx` path yields the rows of its
    /// first sheet as pretty-printed JSON objects keyed by the header row; any other file
    /// is decoded as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an `EsgError` on a failed request or a non-2xx status, or
    /// `EsgError::Data` when a workbook cannot be parsed.
    #[tracing::instrument(skip(self), err)]
    pub async fn read_file(self, path: &str) -> Result<String, EsgError> {
        api::read_file(
            &self.client,
            path,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
