use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use esg_dashboard::pages::{
    AnalysisPage, DashboardTab, EvaluatePage, LoadState, UploadStatus, ValidationPage, content,
};
use esg_dashboard::{
    ConfigError, DashboardConfig, EsgClient, EsgError, EvaluateBuilder, Route, render, telemetry,
};
use serde::Serialize;
use thiserror::Error;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "esg-dashboard",
    about = "Browse ESG scores, metrics, insights and report validation from the terminal",
    version
)]
struct Cli {
    /// Print view models as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Override the configured backend base URL
    #[arg(long, global = true)]
    base_url: Option<Url>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the dashboard routes
    Routes,
    /// Show a static content page
    Content {
        #[arg(value_enum)]
        page: ContentPage,
    },
    /// List the companies the backend has scores for
    Companies,
    /// Show one tab of the analysis dashboard for a company
    Analysis {
        company: String,
        /// Overall, Environmental, Social, Governance, Insights or Greenwash
        #[arg(long, default_value = "Overall")]
        tab: DashboardTab,
    },
    /// Show report validation results
    Validation,
    /// Upload a document (PDF, DOC, DOCX, XLSX; max 50 MiB) and start its analysis
    Evaluate { file: PathBuf },
    /// Print a backend file (prompt preview)
    ReadFile { path: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ContentPage {
    Home,
    Model,
    Workflow,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
    #[error(transparent)]
    Esg(#[from] EsgError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Failed(String),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let mut config = DashboardConfig::load()?;
    telemetry::init(&config.log_level)?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    let client = EsgClient::from_config(&config)?;
    tracing::debug!(base_url = %client.base_url(), "client ready");

    match cli.command {
        Command::Routes => {
            if cli.json {
                let routes: Vec<_> = Route::ALL
                    .iter()
                    .map(|r| serde_json::json!({ "path": r.path(), "label": r.label() }))
                    .collect();
                print_json(&routes)?;
            } else {
                print!("{}", render::to_string(|out| render::write_routes(out, Route::Home)));
            }
        }
        Command::Content { page } => {
            let sections = match page {
                ContentPage::Home => content::HOME,
                ContentPage::Model => content::MODEL,
                ContentPage::Workflow => content::WORKFLOW,
            };
            if cli.json {
                print_json(&sections)?;
            } else {
                print!("{}", render::to_string(|out| render::write_sections(out, sections)));
            }
        }
        Command::Companies => {
            let mut page = AnalysisPage::new(&client);
            page.load_companies().await;
            if let LoadState::Failed(msg) = page.companies_state() {
                return Err(CliError::Failed(msg.clone()));
            }
            if cli.json {
                print_json(&page.companies())?;
            } else {
                for name in page.companies() {
                    println!("{name}");
                }
            }
        }
        Command::Analysis { company, tab } => {
            let mut page = AnalysisPage::new(&client);
            page.select_company(&company).await;
            page.select_tab(tab);
            let Some(view) = page.view() else {
                let msg = match page.snapshot_state() {
                    LoadState::Failed(msg) => msg.clone(),
                    _ => format!("no data for {company}"),
                };
                return Err(CliError::Failed(msg));
            };
            if cli.json {
                print_json(&view)?;
            } else {
                print!("{}", render::to_string(|out| render::write_tab(out, &view)));
            }
        }
        Command::Validation => {
            let mut page = ValidationPage::new(&client);
            page.load().await;
            if let LoadState::Failed(msg) = page.state() {
                return Err(CliError::Failed(msg.clone()));
            }
            let view = page.view();
            if cli.json {
                print_json(&view)?;
            } else {
                print!("{}", render::to_string(|out| render::write_validation(out, &view)));
            }
        }
        Command::Evaluate { file } => {
            let mut page = EvaluatePage::new(&client);
            page.submit(&file).await;
            if cli.json {
                print_json(page.status())?;
            } else {
                match page.status() {
                    UploadStatus::Complete { receipt, job } => {
                        println!("Complete");
                        if let Some(path) = &receipt.file_path {
                            println!("  stored as {path}");
                        }
                        if let Some(msg) = &receipt.message {
                            println!("  {msg}");
                        }
                        if let Some(job) = job {
                            println!(
                                "  analysis: {}",
                                job.status.as_deref().or(job.message.as_deref()).unwrap_or("started")
                            );
                        }
                    }
                    UploadStatus::Rejected(msg) | UploadStatus::Failed(msg) => {
                        return Err(CliError::Failed(msg.clone()));
                    }
                    UploadStatus::Idle | UploadStatus::Processing => {}
                }
            }
        }
        Command::ReadFile { path } => {
            let text = EvaluateBuilder::new(&client).read_file(&path).await?;
            if cli.json {
                print_json(&text)?;
            } else {
                print!("{text}");
            }
        }
    }
    Ok(())
}
