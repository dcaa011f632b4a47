//! Enumeration types used throughout the scene.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a pooled meteor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeteorState {
    /// Invisible, parked at the sentinel, waiting for its spawn time.
    #[default]
    Dormant,
    /// Visible and moving.
    Active,
}

/// How far an active meteor moves per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum MotionMode {
    /// `speed` units per tick regardless of elapsed time.
    /// Visual pacing depends on the host frame rate.
    #[default]
    FrameCoupled,
    /// `speed` units per frame at `reference_fps`, scaled by the elapsed delta.
    TimeScaled { reference_fps: f32 },
}

impl MotionMode {
    /// Multiplier applied to a meteor's `speed` for a frame of `delta_secs`.
    pub fn step_scale(&self, delta_secs: f64) -> f32 {
        match *self {
            MotionMode::FrameCoupled => 1.0,
            MotionMode::TimeScaled { reference_fps } => {
                (delta_secs as f32 * reference_fps).max(0.0)
            }
        }
    }
}
