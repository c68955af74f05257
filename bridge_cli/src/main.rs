//! # bridge_cli
//!
//! Evaluates a JSON file of design cases and prints one report per case.
//!
//! ```text
//! bridge_cli cases.json --settings settings.json --pretty
//! ```
//!
//! Exit status: 0 when every case complies, 1 when any check fails or a
//! clause errors, 2 when the input cannot be read.
//!
//! Logs go to stderr and are filtered with `RUST_LOG`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use bridge_core::{evaluate_batch, CalcError, CalcResult, DesignCase, EvaluationSettings};

#[derive(Debug, Parser)]
#[command(name = "bridge_cli", version, about = "Check bridge design cases against IRC 5 and IRC 6")]
struct Args {
    /// JSON file holding an array of design cases
    cases: PathBuf,

    /// JSON evaluation settings (defaults when omitted)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Pretty-print the reports
    #[arg(long)]
    pretty: bool,
}

fn load_cases(path: &Path) -> CalcResult<Vec<DesignCase>> {
    let invalid = |reason: String| CalcError::invalid_input("cases", path.display().to_string(), reason);
    let text = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))
}

fn load_settings(path: Option<&Path>) -> CalcResult<EvaluationSettings> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CalcError::settings(format!("{}: {}", path.display(), e)))?;
            EvaluationSettings::from_json(&text)
        }
        None => Ok(EvaluationSettings::default()),
    }
}

fn run(args: &Args) -> CalcResult<bool> {
    let settings = load_settings(args.settings.as_deref())?;
    let cases = load_cases(&args.cases)?;
    info!(cases = cases.len(), path = %args.cases.display(), "cases loaded");

    let reports = evaluate_batch(&cases, &settings);
    let json = if args.pretty {
        serde_json::to_string_pretty(&reports)
    } else {
        serde_json::to_string(&reports)
    }
    .map_err(|e| CalcError::settings(e.to_string()))?;
    println!("{}", json);

    Ok(reports.iter().all(|r| r.is_compliant()))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!(code = err.error_code(), error = %err, "evaluation aborted");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
        let args = Args::parse_from(["bridge_cli", "cases.json", "-s", "s.json", "--pretty"]);
        assert_eq!(args.cases, PathBuf::from("cases.json"));
        assert_eq!(args.settings, Some(PathBuf::from("s.json")));
        assert!(args.pretty);
    }

    #[test]
    fn test_missing_cases_file_is_input_error() {
        let err = load_cases(Path::new("/nonexistent/cases.json")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_missing_settings_file() {
        let err = load_settings(Some(Path::new("/nonexistent/settings.json"))).unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");
        assert_eq!(load_settings(None).unwrap(), EvaluationSettings::default());
    }
}
