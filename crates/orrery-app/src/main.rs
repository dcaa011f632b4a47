//! Headless ORRERY host.
//!
//! Usage: `orrery [config.json]`. Reads `HostCommand` JSON lines on stdin,
//! writes scene, frame and fact events as JSON lines on stdout, logs to
//! stderr (level from `ORRERY_LOG`).

use std::io::BufRead;
use std::path::PathBuf;

use orrery_app::api;
use orrery_app::config::AppConfig;
use orrery_app::logger;
use orrery_app::sink::JsonLinesSink;
use orrery_app::state::{AppState, HostCommand};
use orrery_app::AppError;
use orrery_facts::{FactService, GeminiSource};

fn main() -> Result<(), AppError> {
    if let Err(e) = logger::init_from_env() {
        eprintln!("logger already installed: {e}");
    }

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    let source = GeminiSource::from_env();
    if !source.has_api_key() {
        log::warn!("no fact API key set; fact requests will return the fallback text");
    }

    let state = AppState::new();
    let handle = api::start_scene(
        &state,
        config,
        JsonLinesSink::new(std::io::stdout()),
        FactService::new(source),
    )?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command: HostCommand = match serde_json::from_str(&line) {
            Ok(command) => command,
            Err(e) => {
                log::warn!("ignoring bad command {line:?}: {e}");
                continue;
            }
        };
        let shutdown = command == HostCommand::Shutdown;
        if api::send_command(&state, command).is_err() || shutdown {
            break;
        }
    }

    // Stdin closed without an explicit shutdown.
    match api::send_command(&state, HostCommand::Shutdown) {
        Ok(()) | Err(AppError::LoopStopped) => {}
        Err(e) => log::debug!("shutdown not delivered: {e}"),
    }

    if handle.join().is_err() {
        log::error!("frame loop panicked");
    }
    Ok(())
}
