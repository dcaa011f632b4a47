//! Snapshot system: composes planet, satellite and meteor field into one FrameSnapshot.
//!
//! This system is read-only; it never modifies scene state.

use orrery_core::controls::ControlSurface;
use orrery_core::state::FrameSnapshot;
use orrery_core::types::FrameCount;

use crate::field::MeteorField;
use crate::orbit::{Planet, Satellite};

/// Build the snapshot for the frame that just finished.
pub fn build_snapshot(
    time: &FrameCount,
    now_ms: u64,
    controls: &ControlSurface,
    planet: &Planet,
    satellite: &Satellite,
    field: &MeteorField,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        now_ms,
        controls: *controls,
        planet: planet.view(),
        satellite: satellite.view(controls.show_orbits()),
        meteors: field.views(),
    }
}
