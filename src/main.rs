// Arena Board - sign-up form and live leaderboard for the terminal
//
// Challengers register with a name and an email address. Valid sign-ups
// are seeded with a random score and ranked on an in-memory leaderboard;
// the new top row flashes and its score counts up.
//
// Architecture:
// - Arena: validation, scoring, the leaderboard and its animated display
// - TUI (ratatui): hero, arena and logs views driven by a frame ticker
// - Headless: the same form fed from stdin, board printed at EOF
// - Logging: tracing into an in-memory buffer (TUI) or stderr (headless)

mod arena;
mod cli;
mod config;
mod headless;
mod logging;
mod startup;
mod tui;

use anyhow::Result;
use arena::RandomScore;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Config commands finish on their own
    let Some(opts) = cli::handle_cli() else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();
    let seed = opts.seed.or(config.seed);
    let headless = opts.headless || !config.enable_tui;

    let log_buffer = LogBuffer::new();

    // The guard must live until exit so buffered file logs get flushed
    let _file_guard = init_tracing(&config, &log_buffer, headless);

    let scores = Box::new(RandomScore::from_seed(seed));

    if headless {
        startup::print_startup(&config, seed);
        return headless::run_stdio(scores, opts.json).await;
    }

    startup::log_startup(&config, seed);
    tui::run_tui(log_buffer, &config, scores).await
}

/// Install the global subscriber
///
/// - TUI mode: capture logs to the buffer (keeps the display clean)
/// - Headless mode: human-readable logs on stderr (stdout carries the board)
/// - File logging: optional JSON layer with rotation, on top of either
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
    headless: bool,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("arena_board={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = (!headless).then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer = headless.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let (file_layer, guard) = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Writes happen on a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
