//! Control commands sent from the host to the scene engine.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible control surface actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    /// Set the planet rotation multiplier (clamped to [0, 5]).
    SetRotationSpeed { speed: f32 },
    /// Set the satellite orbit multiplier (clamped to [0, 5]).
    SetOrbitSpeed { speed: f32 },
    /// Show or hide the satellite's orbit ring.
    SetShowOrbits { show: bool },
    /// Freeze rate-based motion.
    Pause,
    /// Unfreeze rate-based motion.
    Resume,
    /// Flip the pause flag.
    TogglePause,
}
