use anyhow::Result;
use clap::Parser;
use fsutil::{app::config::Config, cli::{self, Cli}};
use std::path::PathBuf;
use tracing_subscriber::{Registry, filter::LevelFilter, fmt::MakeWriter, prelude::*, reload};

type LevelHandle = reload::Handle<LevelFilter, Registry>;

/// JSON log subscriber whose level can be changed once the config is known
fn json_subscriber<W>(
    writer: W,
    verbose: bool,
) -> (impl tracing::Subscriber + Send + Sync + 'static, LevelHandle)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // Verbose flag decides the level until the config has been read
    let initial_level = if verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    };
    let (level_filter, level_handle) = reload::Layer::new(initial_level);

    let subscriber = tracing_subscriber::registry().with(level_filter).with(
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false),
    );
    (subscriber, level_handle)
}

/// Without --verbose the configured level applies from here on
fn apply_config_level(level_handle: &LevelHandle, config: &Config, verbose: bool) {
    if verbose {
        return;
    }
    if let Some(level) = config.logging.level_filter() {
        if let Err(e) = level_handle.reload(LevelFilter::from_level(level)) {
            tracing::warn!("Failed to apply log level {:?}: {}", level, e);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first to get verbose flag
    let cli = Cli::parse();

    // Set config directory override before anything reads the config dir
    if let Some(ref config_dir) = cli.config {
        fsutil::util::paths::set_config_dir_override(Some(config_dir.clone()));
    }

    // Get logs directory (creates if needed); depends only on the config dir
    let logs_dir = fsutil::util::paths::get_logs_dir().unwrap_or_else(|_| PathBuf::from("."));
    std::fs::create_dir_all(&logs_dir).ok();

    // Set up daily rotating file appender
    let file_appender = tracing_appender::rolling::daily(&logs_dir, "fsutil.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Install logging before the config is read so its load is recorded
    let (subscriber, level_handle) = json_subscriber(non_blocking, cli.verbose);
    subscriber.init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {:#}", e);
            eprintln!("Error: {:#}", e);
            drop(guard);
            std::process::exit(cli::error::INVALID_INPUT);
        }
    };

    apply_config_level(&level_handle, &config, cli.verbose);

    if let Some(ref config_dir) = cli.config {
        tracing::info!("Using config directory override: {:?}", config_dir);
    }
    tracing::trace!("CLI arguments: {:?}", cli);
    tracing::debug!("Config loaded: {:?}", config);

    let exit_code = cli::handler::handle_command(cli.command, config).await;

    // Flush buffered log lines before exiting
    drop(guard);
    std::process::exit(exit_code);
}
