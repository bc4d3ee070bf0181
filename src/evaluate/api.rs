use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::core::{
    EsgClient, EsgError,
    client::{
        CacheMode, RetryConfig,
        constants::{PATH_READ_FILE, PATH_START_ANALYSIS, PATH_UPLOAD},
    },
    fetch::{self, Get},
    net,
};

use super::preview;
use super::model::{AnalysisJob, DocumentKind, UploadReceipt, validate_document};
use super::wire::{AnalysisResponse, UploadResponse};

pub(super) async fn upload_path(
    client: &EsgClient,
    path: &Path,
    retry_override: Option<&RetryConfig>,
) -> Result<UploadReceipt, EsgError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| EsgError::InvalidDocument(format!("`{}` has no file name", path.display())))?
        .to_string();
    let size = tokio::fs::metadata(path).await?.len();
    let kind = validate_document(&file_name, None, size)?;
    let bytes = tokio::fs::read(path).await?;
    upload_bytes(client, &file_name, kind, bytes, retry_override).await
}

pub(super) async fn upload_bytes(
    client: &EsgClient,
    file_name: &str,
    kind: DocumentKind,
    bytes: Vec<u8>,
    retry_override: Option<&RetryConfig>,
) -> Result<UploadReceipt, EsgError> {
    let url = client.endpoint(PATH_UPLOAD)?;
    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(kind.mime())?;
    let form = Form::new().part("file", part);

    tracing::info!(file = file_name, kind = %kind, %url, "uploading document");
    let req = client.http().post(url.clone()).multipart(form);
    let resp = client.send_with_retry(req, retry_override).await?;
    let resp = fetch::ensure_success(resp, &url, "upload")?;
    let text = net::get_text(resp, "upload", file_name, "json").await?;

    // Some deployments answer a plain-text confirmation instead of JSON.
    Ok(match serde_json::from_str::<UploadResponse>(&text) {
        Ok(body) => UploadReceipt {
            file_path: body.file_path.filter(|p| !p.trim().is_empty()),
            message: body.message,
        },
        Err(_) => UploadReceipt {
            file_path: None,
            message: Some(text.trim().to_string()).filter(|m| !m.is_empty()),
        },
    })
}

pub(super) async fn start_analysis(
    client: &EsgClient,
    file: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<AnalysisJob, EsgError> {
    let get = Get {
        path: PATH_START_ANALYSIS,
        query: &[("file", file)],
        caller: "start_analysis",
        company: file,
    };
    // Starting a job has side effects; never serve it from the cache.
    let text = fetch::fetch_text(client, &get, CacheMode::Bypass, retry_override).await?;

    let raw: Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(_) => {
            return Ok(AnalysisJob {
                status: None,
                message: Some(text.trim().to_string()).filter(|m| !m.is_empty()),
                raw: Value::String(text),
            });
        }
    };
    let body: AnalysisResponse = if raw.is_object() {
        serde_json::from_value(raw.clone())?
    } else {
        AnalysisResponse {
            status: None,
            message: None,
        }
    };
    Ok(AnalysisJob {
        status: body.status,
        message: body.message,
        raw,
    })
}

pub(super) async fn read_file(
    client: &EsgClient,
    path: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<String, EsgError> {
    let get = Get {
        path: PATH_READ_FILE,
        query: &[("path", path)],
        caller: "read_file",
        company: path,
    };
    let ext = if preview::is_spreadsheet(path) { "xlsx" } else { "txt" };
    // The cache holds the converted preview, not the raw body.
    fetch::fetch_cached(client, &get, cache_mode, retry_override, |resp| async move {
        let bytes = net::get_bytes(resp, "read_file", path, ext).await?;
        preview::preview_text(path, &bytes)
    })
    .await
}
