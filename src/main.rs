//! descartes-square CLI
//!
//! Interactive Descartes Square in the terminal.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use descartes_square::config::Config;
use descartes_square::report::format_summary;
use descartes_square::store::Session;
use descartes_square::types::{Language, OutputFormat, Route};

#[derive(Parser)]
#[command(name = "descartes-square")]
#[command(about = "Weigh a decision with the four Descartes Square questions")]
#[command(version)]
struct Cli {
    /// Display language (overrides the config file)
    #[arg(long, value_enum)]
    lang: Option<LanguageArg>,

    /// Initial route: "yes-yes", "yes-no", "no-yes", "no-no", or empty
    /// for the overview. Unrecognized values open the overview.
    #[arg(long, default_value = "")]
    route: String,

    /// Print the answers to stdout after quitting
    #[arg(long, value_enum)]
    summary: Option<OutputFormatArg>,

    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LanguageArg {
    En,
    Ru,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::English,
            LanguageArg::Ru => Language::Russian,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> descartes_square::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let language = config.resolve_language(cli.lang.map(Language::from));
    let route = Route::parse(&cli.route);
    if route == Route::Overview && !cli.route.trim().is_empty() {
        tracing::warn!(route = %cli.route, "Unrecognized route, opening overview");
    }

    let session = descartes_square::tui::run::run(Session::new(language, route))?;

    if let Some(format) = cli.summary {
        print!("{}", format_summary(&session, format.into())?);
    }

    Ok(())
}

// ============================================================================
// LOGGING
// ============================================================================

/// Log to a file; stdout/stderr belong to the TUI.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: prefer no logs over corrupting the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!("Failed to create log dir {}: {e}", parent.display()));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!("Failed to open log file {}: {e}", candidate.display()));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(data_dir) = dirs::data_local_dir() {
        candidates.push(
            data_dir
                .join("descartes-square")
                .join("logs")
                .join("descartes-square.log"),
        );
    }

    // Fallback for constrained environments
    candidates.push(
        PathBuf::from(".descartes-square")
            .join("logs")
            .join("descartes-square.log"),
    );

    candidates
}
