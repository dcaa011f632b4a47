//! Frame snapshot: the complete animated state handed to the rasterizer each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::controls::ControlSurface;
use crate::enums::MeteorState;
use crate::types::{FrameCount, Rgb};

/// Everything that moves, as of the end of one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: FrameCount,
    /// Wall-clock timestamp the tick was evaluated against (ms).
    pub now_ms: u64,
    pub controls: ControlSurface,
    pub planet: PlanetView,
    pub satellite: SatelliteView,
    /// One entry per meteor slot, in slot order.
    pub meteors: Vec<MeteorView>,
}

impl FrameSnapshot {
    /// Meteors the renderer should actually draw.
    pub fn visible_meteors(&self) -> impl Iterator<Item = &MeteorView> {
        self.meteors.iter().filter(|m| m.visible)
    }
}

/// One meteor slot at the renderer boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeteorView {
    pub position: Vec3,
    pub trail_head: Vec3,
    pub trail_tail: Vec3,
    pub color: Rgb,
    pub state: MeteorState,
    /// False for dormant slots; renderers must skip these.
    pub visible: bool,
}

/// Planet body and cloud layer orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetView {
    /// Spin about the Y axis (radians, [0, τ)).
    pub rotation: f32,
    /// Cloud layer spin about the Y axis (radians, [0, τ)).
    pub cloud_rotation: f32,
}

/// Satellite orbit and spin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SatelliteView {
    /// Pivot angle about the Y axis (radians, [0, τ)).
    pub pivot_angle: f32,
    /// Spin about the satellite's own Y axis (radians, [0, τ)).
    pub spin: f32,
    /// World position of the satellite centre.
    pub position: Vec3,
    /// Whether the orbit ring should be drawn.
    pub show_orbit: bool,
}
