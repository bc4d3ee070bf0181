#[cfg(feature = "test-mode")]
mod fixtures {
    use std::env;
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    fn fixture_dir() -> PathBuf {
        env::var("ESG_FIXDIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
    }

    fn fixture_key(company: &str) -> String {
        if company.is_empty() {
            return "all".to_string();
        }
        company
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }

    fn write_fixture(endpoint: &str, company: &str, ext: &str, body: &[u8]) -> std::io::Result<()> {
        let dir = fixture_dir();
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{endpoint}_{}.{ext}", fixture_key(company)));

        let mut file = fs::File::create(&path)?;
        file.write_all(body)?;
        tracing::debug!(path = %path.display(), "ESG_RECORD: wrote fixture");
        Ok(())
    }

    pub(super) fn record(endpoint: &str, company: &str, ext: &str, body: &[u8]) {
        if env::var("ESG_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = write_fixture(endpoint, company, ext, body)
        {
            tracing::warn!("ESG_RECORD: failed to write fixture for {company}: {e}");
        }
    }
}

/// Read the response body as text.
/// In `test-mode`, if `ESG_RECORD=1`, the body is also saved as a fixture named
/// `{endpoint}_{company}.{ext}`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _company: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    fixtures::record(_endpoint, _company, _ext, text.as_bytes());

    Ok(text)
}

/// Read the response body as raw bytes. Recorded like [`get_text`].
pub(crate) async fn get_bytes(
    resp: reqwest::Response,
    _endpoint: &str,
    _company: &str,
    _ext: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let bytes = resp.bytes().await?.to_vec();

    #[cfg(feature = "test-mode")]
    fixtures::record(_endpoint, _company, _ext, &bytes);

    Ok(bytes)
}
