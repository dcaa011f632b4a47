//! Host API: start the scene, send commands, poll state.
//!
//! These functions are what a UI layer calls. They bridge requests to the
//! frame loop thread via channels and read back the shared state it
//! publishes.

use std::thread::JoinHandle;

use orrery_core::state::FrameSnapshot;
use orrery_facts::{FactResponse, FactService};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::game_loop::{self, LoopOutputs};
use crate::sink::FrameSink;
use crate::state::{AppState, HostCommand};

/// Start the scene. Spawns the frame loop thread if not already running.
///
/// Once a loop has stopped (shutdown, `max_frames`, closed sink) the scene
/// can be started again on the same state.
pub fn start_scene(
    state: &AppState,
    config: AppConfig,
    sink: impl FrameSink,
    facts: FactService,
) -> Result<JoinHandle<()>, AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::Poisoned)?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let outputs = LoopOutputs {
        latest_snapshot: state.latest_snapshot.clone(),
        latest_fact: state.latest_fact.clone(),
        running: state.running.clone(),
    };
    // The loop clears `running` on exit, which blocks on this guard until
    // the flag below is set.
    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, sink, facts, outputs)?;

    let mut tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(handle)
}

/// Send a command to the frame loop.
pub fn send_command(state: &AppState, command: HostCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| AppError::LoopStopped),
        None => Err(AppError::NotStarted),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<FrameSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
    Ok(lock.clone())
}

/// Get the most recent fact lookup result.
pub fn get_fact(state: &AppState) -> Result<Option<FactResponse>, AppError> {
    let lock = state.latest_fact.lock().map_err(|_| AppError::Poisoned)?;
    Ok(lock.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;

    use orrery_core::commands::ControlCommand;
    use orrery_facts::{FactError, FactSource};

    use crate::sink::HostEvent;

    struct NullSink;

    impl FrameSink for NullSink {
        fn emit(&mut self, _event: &HostEvent<'_>) -> io::Result<()> {
            Ok(())
        }
    }

    struct Offline;

    impl FactSource for Offline {
        fn fetch(&self, _topic: &str) -> Result<Option<String>, FactError> {
            Err(FactError::MissingApiKey)
        }
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = send_command(&state, HostCommand::Shutdown).unwrap_err();
        assert!(matches!(err, AppError::NotStarted));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_restart_after_loop_stops_itself() {
        let state = AppState::new();
        let config = AppConfig {
            max_frames: Some(3),
            ..AppConfig::default()
        };

        let handle = start_scene(
            &state,
            config.clone(),
            NullSink,
            FactService::new(Offline),
        )
        .unwrap();
        handle.join().unwrap();
        assert!(!*state.running.lock().unwrap());
        assert_eq!(get_snapshot(&state).unwrap().unwrap().time.frame, 3);

        let err = send_command(&state, HostCommand::Shutdown).unwrap_err();
        assert!(matches!(err, AppError::LoopStopped));

        let handle = start_scene(&state, config, NullSink, FactService::new(Offline)).unwrap();
        handle.join().unwrap();
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_start_twice_rejected_and_commands_flow() {
        let state = AppState::new();
        let handle = start_scene(
            &state,
            AppConfig::default(),
            NullSink,
            FactService::new(Offline),
        )
        .unwrap();

        let again = start_scene(
            &state,
            AppConfig::default(),
            NullSink,
            FactService::new(Offline),
        );
        assert!(matches!(again, Err(AppError::AlreadyRunning)));

        send_command(
            &state,
            HostCommand::Control {
                command: ControlCommand::SetRotationSpeed { speed: 9.0 },
            },
        )
        .unwrap();
        std::thread::sleep(Duration::from_millis(100));
        send_command(&state, HostCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.controls.rotation_speed(), 5.0);

        // Loop is gone; further sends report it.
        let err = send_command(&state, HostCommand::Shutdown).unwrap_err();
        assert!(matches!(err, AppError::LoopStopped));
    }
}
