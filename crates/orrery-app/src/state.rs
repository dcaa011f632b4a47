//! Application state shared between the host API and the frame loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use orrery_core::commands::ControlCommand;
use orrery_core::state::FrameSnapshot;
use orrery_facts::FactResponse;

/// Commands sent from the host to the frame loop thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// A control surface command to forward to the scene engine.
    Control { command: ControlCommand },
    /// Look up a fact about `topic` in the background.
    RequestFact { topic: String },
    /// Shut down the frame loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that may not exist before the scene starts
/// - `Arc<Mutex<...>>` for values shared with the frame loop thread
pub struct AppState {
    /// Channel sender to forward commands to the frame loop thread.
    /// `None` before the scene is started.
    pub command_tx: Mutex<Option<mpsc::Sender<HostCommand>>>,
    /// Latest snapshot, updated by the frame loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    /// Latest completed fact lookup.
    pub latest_fact: Arc<Mutex<Option<FactResponse>>>,
    /// Whether the frame loop is running. Cleared by the loop thread on exit.
    pub running: Arc<Mutex<bool>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            latest_fact: Arc::new(Mutex::new(None)),
            running: Arc::new(Mutex::new(false)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
