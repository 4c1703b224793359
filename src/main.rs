use std::io;

mod cli;
use cli::{parse_cli_mode, run_grid_mode, CliMode};
mod tui;
use tui::run_tui;

fn main() -> Result<(), io::Error> {
    setup_logging();

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("Usage: datepick [--grid [YYYY/MM]] [--json] [--millis] [--epoch N] [--theme NAME]");
            return Ok(());
        }
    };

    match cli_mode {
        CliMode::Grid { month, json, millis } => run_grid_mode(month, json, millis),
        CliMode::Tui { epoch, theme, millis } => run_tui(epoch, theme, millis),
    }
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("datepick"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "datepick.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("datepick started");
}
