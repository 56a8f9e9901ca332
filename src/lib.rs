// Tavus Developer Wizard
// Main library entry point

mod api;
mod models;
mod settings;
mod snippet;
mod tui;
mod utils;

use anyhow::Result;
use log::{error, info};
use std::path::PathBuf;

/// Initialize logging system with dual format (JSON + human-readable).
/// File-only: stdout logging would corrupt the terminal UI.
fn init_logging() -> Result<()> {
    let log_dir = resolve_log_folder();
    std::fs::create_dir_all(&log_dir)?;

    let timestamp = chrono::Utc::now().format("%Y-%m-%d-%H%M%S");

    // JSON log file for structured parsing
    let json_log_file = log_dir.join(format!("tavus-wizard-{}.log", timestamp));

    // Human-readable log file (.txt)
    let txt_log_file = log_dir.join(format!("tavus-wizard-{}.txt", timestamp));

    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(
            fern::Dispatch::new()
                .format(move |out, message, record| {
                    let timestamp_utc = chrono::Utc::now().to_rfc3339();
                    let message_str = format!("{}", message);
                    let (phase, step, cleaned_message) =
                        utils::logging::parse_log_metadata(&message_str);
                    let json_line = utils::logging::format_json_log(
                        &timestamp_utc,
                        record.level(),
                        record.target(),
                        &cleaned_message,
                        phase.as_deref(),
                        step.as_deref(),
                    );
                    out.finish(format_args!("{}", json_line));
                })
                .chain(fern::log_file(json_log_file)?),
        )
        .chain(
            fern::Dispatch::new()
                .format(move |out, message, record| {
                    let timestamp_local = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
                    let message_str = format!("{}", message);
                    let (phase, step, cleaned_message) =
                        utils::logging::parse_log_metadata(&message_str);
                    let txt_line = utils::logging::format_human_readable_log(
                        &timestamp_local.to_string(),
                        record.level(),
                        record.target(),
                        &cleaned_message,
                        phase.as_deref(),
                        step.as_deref(),
                    );
                    out.finish(format_args!("{}", txt_line));
                })
                .chain(fern::log_file(txt_log_file)?),
        )
        .apply()?;

    info!(
        "[PHASE: initialization] Logging initialized, log directory: {:?}",
        log_dir
    );
    Ok(())
}

/// Resolve the log folder: <data-local-dir>/tavus-wizard/logs, falling back
/// to ./tavus-wizard-logs when no home directory is available.
fn resolve_log_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("tavus-wizard").join("logs"))
        .unwrap_or_else(|| PathBuf::from("tavus-wizard-logs"))
}

/// Run the interactive wizard.
pub fn run() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!(
        "[PHASE: initialization] Wizard starting at {}",
        chrono::Utc::now()
    );

    let settings = settings::Settings::load();
    if let Err(e) = tui::run(settings) {
        error!("[PHASE: tui] Wizard exited with error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Render a single seeded frame for the given wizard tab and exit.
/// Used by automated checks; does not touch the real terminal.
pub fn run_smoke(target: Option<String>) {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let target = target.unwrap_or_else(|| "replica".to_string());
    if let Err(e) = tui::smoke(&target) {
        eprintln!("Smoke render failed: {}", e);
        std::process::exit(1);
    }
}
