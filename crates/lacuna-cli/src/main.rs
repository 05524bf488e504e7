//! lacuna - command-line runner for the knowledge-gap tracker.
//!
//! # Configuration
//!
//! - `HF_TOKEN` - Hugging Face token for classification and summarization
//! - `LACUNA_SEARCH_ENDPOINT` / `LACUNA_SEARCH_API_KEY` - search service
//! - `RUST_LOG` - log filter (logs go to stderr, the report to stdout)

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use lacuna_core::GapOrchestrator;
use lacuna_models::{ClassifierFactory, SummarizerFactory};
use lacuna_search::HttpSearchClient;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cli::{collect_texts, hint_for, load_config, Cli, Command};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        if let Some(hint) = hint_for(&err) {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Config => {
            print!("{}", config.to_toml()?);
        }
        Command::Run {
            texts,
            files,
            labels,
            expected,
        } => {
            let texts = collect_texts(texts, &files)?;
            let labels = if labels.is_empty() {
                config.ingestion.candidate_labels.clone()
            } else {
                labels
            };

            let classifier = ClassifierFactory::create(config.classifier.clone())?;
            let summarizer = SummarizerFactory::create(config.summarizer.clone())?;
            let search = Arc::new(HttpSearchClient::new(config.search.clone())?);

            tracing::info!(
                classifier = classifier.model_name(),
                summarizer = summarizer.model_name(),
                texts = texts.len(),
                "Starting lacuna run"
            );

            let mut orchestrator =
                GapOrchestrator::with_options(classifier, summarizer, search, config.ingestion);
            for gap in expected {
                orchestrator.store_mut().declare_class(gap.domain, gap.class);
            }

            orchestrator.ingest_data(&texts, &labels).await?;
            let report = orchestrator.process_knowledge_gaps().await;

            let store = orchestrator.into_store();
            let output = json!({
                "knowledge": store,
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
