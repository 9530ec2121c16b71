use anyhow::{Context, Result};
use clap::Parser;
use draftgen::cli::Cli;
use draftgen::styles::init_theme;
use draftgen::tui::Tui;
use draftgen::App;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Leave raw mode first so the panic message is readable
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    // The TUI owns stdout, so logs go to a file
    let log_dir = draftgen::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("draftgen.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "draftgen.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config = cli.load_config()?;
    init_theme(config.resolve_theme(cli.theme.as_deref(), cli.colors_disabled()));
    tracing::info!("Starting draftgen {}", env!("CARGO_PKG_VERSION"));

    let mut tui = Tui::new()?;
    let mut app = App::new(config);
    let result = app.run(&mut tui);

    // Flush pending log lines before exiting
    drop(guard);

    result
}
