use std::path::Path;

use serde::Serialize;

use crate::core::{EsgClient, EsgError};
use crate::evaluate::{AnalysisJob, DocumentKind, EvaluateBuilder, UploadReceipt, validate_document};

use super::{LoadTicket, Loadable};

/// A file the user picked, after it passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub kind: DocumentKind,
}

impl SelectedFile {
    /// Size in MiB, as shown next to the file name.
    #[allow(clippy::cast_precision_loss)]
    pub fn size_mib(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum UploadStatus {
    Idle,
    /// The file was refused before upload (wrong type or too large).
    Rejected(String),
    Processing,
    Complete {
        receipt: UploadReceipt,
        /// Present when the backend returned a stored path and analysis was started.
        job: Option<AnalysisJob>,
    },
    Failed(String),
}

/// What a finished submission produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub receipt: UploadReceipt,
    pub job: Option<AnalysisJob>,
}

/// Uploads the document at `path` and, when the backend reports where it stored it,
/// starts its analysis.
///
/// # Errors
///
/// Returns the first failing step's `EsgError`.
pub async fn upload_and_analyze(client: &EsgClient, path: &Path) -> Result<Submission, EsgError> {
    let receipt = EvaluateBuilder::new(client).upload(path).await?;
    let job = match receipt.file_path.as_deref() {
        Some(stored) => Some(EvaluateBuilder::new(client).start_analysis(stored).await?),
        None => None,
    };
    Ok(Submission { receipt, job })
}

/// State of the evaluate page: pick, validate, upload, analyze, preview.
pub struct EvaluatePage {
    client: EsgClient,
    file: Option<SelectedFile>,
    status: UploadStatus,
    /// Bumped on every selection; only the latest submission may complete.
    generation: u64,
    preview: Loadable<String>,
}

impl EvaluatePage {
    pub fn new(client: &EsgClient) -> Self {
        Self {
            client: client.clone(),
            file: None,
            status: UploadStatus::Idle,
            generation: 0,
            preview: Loadable::new(),
        }
    }

    pub const fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub const fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub const fn preview(&self) -> &Loadable<String> {
        &self.preview
    }

    /// Validates a picked file. On rejection the selection is cleared.
    pub fn select_file(&mut self, name: &str, mime: Option<&str>, size: u64) -> bool {
        self.generation += 1;
        match validate_document(name, mime, size) {
            Ok(kind) => {
                self.file = Some(SelectedFile {
                    name: name.to_string(),
                    size,
                    kind,
                });
                self.status = UploadStatus::Idle;
                true
            }
            Err(e) => {
                tracing::info!(file = name, error = %e, "document rejected");
                self.file = None;
                self.status = UploadStatus::Rejected(e.to_string());
                false
            }
        }
    }

    /// Selects the file and moves to `Processing`. Returns `None` when it is rejected.
    pub fn begin_submit(&mut self, name: &str, size: u64) -> Option<LoadTicket> {
        if !self.select_file(name, None, size) {
            return None;
        }
        self.status = UploadStatus::Processing;
        Some(LoadTicket {
            generation: self.generation,
            key: name.to_string(),
        })
    }

    /// Applies a finished submission; results for a superseded selection are dropped.
    pub fn apply(&mut self, ticket: LoadTicket, result: Result<Submission, EsgError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(file = %ticket.key, "dropping stale submission result");
            return false;
        }
        match result {
            Ok(Submission { receipt, job }) => {
                self.status = UploadStatus::Complete { receipt, job };
            }
            Err(e) => self.fail(&e),
        }
        true
    }

    /// Uploads the document at `path` and starts its analysis.
    pub async fn submit(&mut self, path: &Path) {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let size = match tokio::fs::metadata(path).await {
            Ok(meta) => meta.len(),
            Err(e) => {
                self.fail(&EsgError::from(e));
                return;
            }
        };
        let Some(ticket) = self.begin_submit(&name, size) else {
            return;
        };
        let result = upload_and_analyze(&self.client, path).await;
        self.apply(ticket, result);
    }

    /// Loads a backend file for the prompt preview.
    pub async fn load_preview(&mut self, path: &str) {
        let ticket = self.preview.begin(path);
        let result = EvaluateBuilder::new(&self.client).read_file(path).await;
        self.preview.finish(ticket, result);
    }

    fn fail(&mut self, e: &EsgError) {
        tracing::warn!(error = %e, "evaluation failed");
        self.status = UploadStatus::Failed(e.to_string());
    }
}
