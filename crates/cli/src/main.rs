use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use atrium_audio::{NullSoundtrack, Soundtrack};
use atrium_types::ShellConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

mod config;

#[derive(Debug, Parser)]
#[command(name = "atrium", version, about = "A personal site that lives in your terminal")]
struct Cli {
    /// Location path resolved once at startup (e.g. "/blog").
    #[arg(long, default_value = "/")]
    path: String,

    /// Config file; defaults to the standard config directory.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run without a soundtrack.
    #[arg(long)]
    no_audio: bool,

    /// Log file; defaults to logs/atrium.log in the config directory.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file)?;

    let shell_config = config::load(cli.config.as_deref()).unwrap_or_else(|error| {
        tracing::warn!(error = %error, "Config unreadable; running with the built-in defaults.");
        ShellConfig::default()
    });

    let soundtrack = build_soundtrack(&shell_config, cli.no_audio);
    atrium_tui::run(shell_config, &cli.path, soundtrack).await
}

/// Initializes tracing with a file writer.
///
/// The TUI owns stdout for the whole session, so log output always goes to a
/// file. `RUST_LOG` controls the filter.
fn init_tracing(log_file: Option<PathBuf>) -> Result<()> {
    let path = log_file.unwrap_or_else(config::default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Constructs the soundtrack capability handed to the shell.
///
/// `--no-audio` and an unparseable track URL both degrade to no soundtrack;
/// the shell treats every playback operation as a no-op in that case.
fn build_soundtrack(shell_config: &ShellConfig, no_audio: bool) -> Option<Box<dyn Soundtrack>> {
    if no_audio {
        tracing::info!("Audio disabled by flag.");
        return None;
    }
    match Url::parse(&shell_config.soundtrack.url) {
        Ok(_) => Some(Box::new(NullSoundtrack::new(shell_config.soundtrack.url.clone()))),
        Err(error) => {
            tracing::warn!(error = %error, url = %shell_config.soundtrack.url, "Invalid soundtrack URL; audio disabled.");
            None
        }
    }
}
