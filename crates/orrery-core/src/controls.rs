//! Control surface state: user-tunable multipliers and the pause flag.
//!
//! Out-of-range input is clamped, never rejected.

use serde::{Deserialize, Serialize};

use crate::commands::ControlCommand;
use crate::constants::SPEED_MULTIPLIER_MAX;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSurface {
    rotation_speed: f32,
    orbit_speed: f32,
    show_orbits: bool,
    is_paused: bool,
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self {
            rotation_speed: 1.0,
            orbit_speed: 1.0,
            show_orbits: true,
            is_paused: false,
        }
    }
}

/// Clamp a multiplier into `[0, SPEED_MULTIPLIER_MAX]`; NaN and infinities
/// collapse to the nearest sane value (NaN → 0).
pub fn clamp_multiplier(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, SPEED_MULTIPLIER_MAX)
}

impl ControlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn orbit_speed(&self) -> f32 {
        self.orbit_speed
    }

    pub fn show_orbits(&self) -> bool {
        self.show_orbits
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = clamp_multiplier(speed);
    }

    pub fn set_orbit_speed(&mut self, speed: f32) {
        self.orbit_speed = clamp_multiplier(speed);
    }

    pub fn set_show_orbits(&mut self, show: bool) {
        self.show_orbits = show;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    /// Rotation multiplier actually fed to the planet (0 while paused).
    pub fn effective_rotation(&self) -> f32 {
        if self.is_paused {
            0.0
        } else {
            self.rotation_speed
        }
    }

    /// Orbit multiplier actually fed to the satellite (0 while paused).
    pub fn effective_orbit(&self) -> f32 {
        if self.is_paused {
            0.0
        } else {
            self.orbit_speed
        }
    }

    /// Apply a single command.
    pub fn apply(&mut self, command: &ControlCommand) {
        match *command {
            ControlCommand::SetRotationSpeed { speed } => self.set_rotation_speed(speed),
            ControlCommand::SetOrbitSpeed { speed } => self.set_orbit_speed(speed),
            ControlCommand::SetShowOrbits { show } => self.set_show_orbits(show),
            ControlCommand::Pause => self.is_paused = true,
            ControlCommand::Resume => self.is_paused = false,
            ControlCommand::TogglePause => self.is_paused = !self.is_paused,
        }
    }
}
