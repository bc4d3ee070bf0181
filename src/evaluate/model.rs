use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::core::EsgError;

/// Largest document the backend accepts for evaluation (50 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Document types accepted for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
    Xlsx,
}

impl DocumentKind {
    pub const ALL: [Self; 4] = [Self::Pdf, Self::Doc, Self::Docx, Self::Xlsx];

    pub const fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.split(';').next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|k| k.mime().eq_ignore_ascii_case(mime))
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|k| k.extension().eq_ignore_ascii_case(ext))
    }

    /// Detects the kind from the MIME type when a non-empty one is given; the file
    /// extension is only consulted when there is none.
    pub fn detect(file_name: &str, mime: Option<&str>) -> Option<Self> {
        match mime.map(str::trim).filter(|m| !m.is_empty()) {
            Some(mime) => Self::from_mime(mime),
            None => Self::from_file_name(file_name),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pdf => "PDF",
            Self::Doc => "DOC",
            Self::Docx => "DOCX",
            Self::Xlsx => "XLSX",
        })
    }
}

/// Checks type and size before any upload is attempted.
///
/// # Errors
///
/// Returns `EsgError::InvalidDocument` for an unsupported type or a file larger than
/// [`MAX_UPLOAD_BYTES`].
pub fn validate_document(
    file_name: &str,
    mime: Option<&str>,
    size: u64,
) -> Result<DocumentKind, EsgError> {
    let kind = DocumentKind::detect(file_name, mime).ok_or_else(|| {
        EsgError::InvalidDocument(format!(
            "`{file_name}` is not a PDF, DOC, DOCX or XLSX document"
        ))
    })?;
    if size > MAX_UPLOAD_BYTES {
        return Err(EsgError::InvalidDocument(format!(
            "`{file_name}` is {size} bytes; the limit is {MAX_UPLOAD_BYTES}"
        )));
    }
    Ok(kind)
}

/// Backend acknowledgement of an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    /// Where the backend stored the file; pass it to `start_analysis`.
    pub file_path: Option<String>,
    pub message: Option<String>,
}

/// Backend answer to `start-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisJob {
    pub status: Option<String>,
    pub message: Option<String>,
    /// The full response, for fields not modeled here.
    pub raw: Value,
}
