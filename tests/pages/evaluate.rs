use std::io::Write;

use esg_dashboard::evaluate::MAX_UPLOAD_BYTES;
use esg_dashboard::pages::{EvaluatePage, Submission, UploadStatus, upload_and_analyze};
use esg_dashboard::{DocumentKind, EsgClient, EsgError, UploadReceipt};
use httpmock::Method::{GET, POST};

use crate::common;

#[test]
fn selecting_files_checks_type_and_size() {
    let client = EsgClient::default();
    let mut page = EvaluatePage::new(&client);

    assert!(page.select_file("report.pdf", Some("application/pdf"), 2 * 1024 * 1024));
    let file = page.file().unwrap();
    assert_eq!(file.kind, DocumentKind::Pdf);
    assert!((file.size_mib() - 2.0).abs() < 1e-9);
    assert_eq!(page.status(), &UploadStatus::Idle);

    assert!(!page.select_file("photo.png", Some("image/png"), 10));
    assert!(page.file().is_none());
    assert!(matches!(page.status(), UploadStatus::Rejected(msg) if msg.contains("photo.png")));

    assert!(!page.select_file("big.xlsx", None, MAX_UPLOAD_BYTES + 1));
    assert!(matches!(page.status(), UploadStatus::Rejected(_)));
}

#[tokio::test]
async fn submit_uploads_then_starts_analysis() {
    let server = common::setup_server();
    let upload = server.mock(|when, then| {
        when.method(POST).path("/upload");
        then.status(200)
            .body(r#"{"file_path": "uploads/acme.docx", "message": "ok"}"#);
    });
    let start = server.mock(|when, then| {
        when.method(GET)
            .path("/start-analysis")
            .query_param("file", "uploads/acme.docx");
        then.status(200).body(r#"{"status": "started"}"#);
    });
    let client = common::client_for(&server);

    let mut file = tempfile::Builder::new()
        .prefix("acme")
        .suffix(".docx")
        .tempfile()
        .unwrap();
    file.write_all(b"PK\x03\x04 docx").unwrap();

    let mut page = EvaluatePage::new(&client);
    page.submit(file.path()).await;

    upload.assert();
    start.assert();
    match page.status() {
        UploadStatus::Complete { receipt, job } => {
            assert_eq!(receipt.file_path.as_deref(), Some("uploads/acme.docx"));
            assert_eq!(
                job.as_ref().and_then(|j| j.status.as_deref()),
                Some("started")
            );
        }
        other => panic!("expected Complete, got {other:?}"),
    }
    assert_eq!(page.file().map(|f| f.kind), Some(DocumentKind::Docx));
}

fn receipt(path: &str) -> Submission {
    Submission {
        receipt: UploadReceipt {
            file_path: Some(path.to_string()),
            message: None,
        },
        job: None,
    }
}

#[test]
fn status_is_processing_until_the_submission_is_applied() {
    let client = EsgClient::default();
    let mut page = EvaluatePage::new(&client);

    let ticket = page.begin_submit("acme.pdf", 1024).unwrap();
    assert_eq!(page.status(), &UploadStatus::Processing);
    assert_eq!(ticket.key(), "acme.pdf");

    assert!(page.apply(ticket, Ok(receipt("uploads/acme.pdf"))));
    assert!(matches!(
        page.status(),
        UploadStatus::Complete { receipt, job: None }
            if receipt.file_path.as_deref() == Some("uploads/acme.pdf")
    ));
}

#[test]
fn stale_submission_is_dropped() {
    let client = EsgClient::default();
    let mut page = EvaluatePage::new(&client);

    let first = page.begin_submit("first.pdf", 10).unwrap();
    let second = page.begin_submit("second.xlsx", 10).unwrap();

    assert!(!page.apply(first, Ok(receipt("uploads/first.pdf"))));
    assert_eq!(page.status(), &UploadStatus::Processing);

    assert!(page.apply(second, Err(EsgError::Data("backend unavailable".into()))));
    assert!(matches!(page.status(), UploadStatus::Failed(msg) if msg.contains("backend unavailable")));
    assert_eq!(page.file().map(|f| f.kind), Some(DocumentKind::Xlsx));
}

#[test]
fn new_selection_supersedes_a_running_submission() {
    let client = EsgClient::default();
    let mut page = EvaluatePage::new(&client);

    let ticket = page.begin_submit("acme.pdf", 10).unwrap();
    assert!(page.select_file("other.docx", None, 10));

    assert!(!page.apply(ticket, Ok(receipt("uploads/acme.pdf"))));
    assert_eq!(page.status(), &UploadStatus::Idle);
}

#[test]
fn rejected_submission_has_no_ticket() {
    let client = EsgClient::default();
    let mut page = EvaluatePage::new(&client);

    assert!(page.begin_submit("notes.txt", 10).is_none());
    assert!(matches!(page.status(), UploadStatus::Rejected(_)));
}

#[tokio::test]
async fn upload_and_analyze_skips_analysis_without_stored_path() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/upload");
        then.status(200).body("File uploaded successfully");
    });
    let start = server.mock(|when, then| {
        when.method(GET).path("/start-analysis");
        then.status(200);
    });
    let client = common::client_for(&server);

    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"%PDF").unwrap();

    let submission = upload_and_analyze(&client, file.path()).await.unwrap();

    assert_eq!(submission.job, None);
    assert_eq!(
        submission.receipt.message.as_deref(),
        Some("File uploaded successfully")
    );
    start.assert_calls(0);
}

#[tokio::test]
async fn upload_failure_is_reported() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/upload");
        then.status(500);
    });
    let client = common::client_for(&server);

    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"%PDF").unwrap();

    let mut page = EvaluatePage::new(&client);
    page.submit(file.path()).await;

    assert!(matches!(page.status(), UploadStatus::Failed(msg) if msg.contains("500")));
}

#[tokio::test]
async fn unsupported_file_is_rejected_before_upload() {
    let server = common::setup_server();
    let upload = server.mock(|when, then| {
        when.method(POST).path("/upload");
        then.status(200);
    });
    let client = common::client_for(&server);

    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"plain text").unwrap();

    let mut page = EvaluatePage::new(&client);
    page.submit(file.path()).await;

    assert!(matches!(page.status(), UploadStatus::Rejected(_)));
    upload.assert_calls(0);
}

#[tokio::test]
async fn preview_loads_backend_file() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path("/read-file")
            .query_param("path", "prompts/extract.txt");
        then.status(200).body("Extract the metrics.");
    });
    let client = common::client_for(&server);

    let mut page = EvaluatePage::new(&client);
    page.load_preview("prompts/extract.txt").await;

    assert_eq!(
        page.preview().value().map(String::as_str),
        Some("Extract the metrics.")
    );
}
