//! Command-line arguments for the `lacuna` binary.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lacuna_core::{Gap, LacunaConfig, LacunaError};

/// Texts ingested when none are given on the command line.
pub const DEMO_TEXTS: [&str; 2] = [
    "Quantum computing is a rapidly evolving field with applications in cryptography.",
    "Machine learning techniques are widely used in healthcare for predictive analysis.",
];

/// Knowledge-gap tracker: classify, summarize, detect and fill gaps.
#[derive(Parser, Debug)]
#[command(name = "lacuna", version, about)]
pub struct Cli {
    /// Config file (.toml, .json or .yaml); defaults to ~/.lacuna/config.toml
    #[arg(short, long, global = true, env = "LACUNA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ingest texts, then try to fill every knowledge gap once
    Run {
        /// Texts to ingest
        texts: Vec<String>,

        /// Read texts from a file, one per non-empty line
        #[arg(short, long = "file")]
        files: Vec<PathBuf>,

        /// Candidate domain label (repeatable); overrides the configured set
        #[arg(short, long = "label")]
        labels: Vec<String>,

        /// Expected DOMAIN/CLASS to track even before it has content
        #[arg(short, long = "expect", value_parser = parse_expected)]
        expected: Vec<Gap>,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Parse `DOMAIN/CLASS`; the class is everything after the first slash.
pub fn parse_expected(value: &str) -> Result<Gap, String> {
    match value.split_once('/') {
        Some((domain, class)) if !domain.trim().is_empty() && !class.trim().is_empty() => {
            Ok(Gap::new(domain.trim(), class.trim()))
        }
        _ => Err(format!("expected DOMAIN/CLASS, got '{}'", value)),
    }
}

/// Load the config file (explicit path or default location), then env overrides.
///
/// Without an explicit path and with no file at the default location the
/// configuration comes from the environment alone.
pub fn load_config(path: Option<&Path>) -> Result<LacunaConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = LacunaConfig::default_path();
            if !default.exists() {
                return Ok(LacunaConfig::from_env());
            }
            default
        }
    };

    let mut config = LacunaConfig::from_file(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    config.apply_env();
    Ok(config)
}

/// Resolution hint for a failed run, when the failure came from lacuna.
pub fn hint_for(err: &anyhow::Error) -> Option<&str> {
    err.downcast_ref::<LacunaError>().and_then(LacunaError::suggestion)
}

/// Collect texts from arguments and files, falling back to the demo texts.
pub fn collect_texts(texts: Vec<String>, files: &[PathBuf]) -> Result<Vec<String>> {
    let mut collected = texts;
    for file in files {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        collected.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    if collected.is_empty() {
        if !files.is_empty() {
            bail!("no texts found in the given files");
        }
        tracing::info!("No texts given; ingesting demo texts");
        collected = DEMO_TEXTS.iter().map(|s| s.to_string()).collect();
    }
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_expected() {
        assert_eq!(
            parse_expected("Healthcare/Diagnostics").unwrap(),
            Gap::new("Healthcare", "Diagnostics")
        );
        assert_eq!(
            parse_expected("Quantum Computing/Error Correction/Surface").unwrap(),
            Gap::new("Quantum Computing", "Error Correction/Surface")
        );
        assert!(parse_expected("Healthcare").is_err());
        assert!(parse_expected("/Diagnostics").is_err());
        assert!(parse_expected("Healthcare/ ").is_err());
    }

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::try_parse_from([
            "lacuna",
            "run",
            "some text",
            "--label",
            "Physics",
            "--expect",
            "Physics/Optics",
        ])
        .unwrap();

        match cli.command {
            Command::Run {
                texts,
                labels,
                expected,
                ..
            } => {
                assert_eq!(texts, vec!["some text"]);
                assert_eq!(labels, vec!["Physics"]);
                assert_eq!(expected, vec![Gap::new("Physics", "Optics")]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_collect_texts_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first text\n\n  second text  \n").unwrap();

        let texts = collect_texts(vec!["arg text".to_string()], &[file.path().to_path_buf()])
            .unwrap();
        assert_eq!(texts, vec!["arg text", "first text", "second text"]);
    }

    #[test]
    fn test_collect_texts_defaults_to_demo() {
        let texts = collect_texts(Vec::new(), &[]).unwrap();
        assert_eq!(texts.len(), DEMO_TEXTS.len());
    }

    #[test]
    fn test_load_config_from_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[ingestion]\ntask_label = \"Digest\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.ingestion.task_label, "Digest");
        assert_eq!(config.ingestion.class_label, "General");
    }

    #[test]
    fn test_load_config_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(dir.path().join("absent.toml").as_path())).is_err());
    }

    #[test]
    fn test_hint_for_lacuna_errors() {
        let err = anyhow::Error::from(LacunaError::from_http_status(
            401,
            "bad token",
            LacunaError::classification,
        ));
        assert_eq!(
            hint_for(&err),
            Some("Please check your API token (HF_TOKEN or api_key in config)")
        );

        let err = anyhow::Error::from(LacunaError::no_labels()).context("ingestion failed");
        assert_eq!(hint_for(&err), Some("Please check your classifier configuration"));

        assert_eq!(hint_for(&anyhow::anyhow!("no texts found")), None);
    }

    #[test]
    fn test_collect_texts_empty_file_is_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(collect_texts(Vec::new(), &[file.path().to_path_buf()]).is_err());
    }
}
