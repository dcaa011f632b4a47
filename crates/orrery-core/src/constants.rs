//! Scene constants and tuning parameters.

use crate::types::Rgb;

/// Nominal frame rate of the host loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Default RNG seed when no configuration is supplied.
pub const DEFAULT_SEED: u64 = 42;

// --- Meteor field ---

/// Number of meteor slots in the default pool.
pub const METEOR_COUNT: usize = 30;

/// Per-step distance range of a meteor, `[min, max)`.
pub const METEOR_SPEED_MIN: f32 = 0.8;
pub const METEOR_SPEED_MAX: f32 = 2.3;

/// Trail length range, `[min, max)`.
pub const METEOR_TRAIL_MIN: f32 = 8.0;
pub const METEOR_TRAIL_MAX: f32 = 20.0;

/// Random component of the first spawn delay (ms).
pub const INITIAL_SPAWN_JITTER_MS: u64 = 3_000;

/// Extra first-spawn delay per slot index (ms), staggers the pool.
pub const SPAWN_STAGGER_MS: u64 = 400;

/// Upper bound of the respawn delay drawn on retirement (ms, exclusive).
pub const RESPAWN_JITTER_MS: u64 = 4_000;

/// Radius range of the spawn shell, `[min, max)`.
pub const SPAWN_SHELL_MIN: f32 = 60.0;
pub const SPAWN_SHELL_MAX: f32 = 80.0;

/// Half-width of the cube around the origin that meteors aim into.
pub const TARGET_HALF_WIDTH: f32 = 20.0;

/// A meteor farther than this from the origin is retired.
pub const OUTER_BOUND: f32 = 100.0;

/// A meteor closer than this to the origin is retired.
pub const INNER_BOUND: f32 = 5.0;

/// Parking coordinate for dormant meteors (each axis).
pub const SENTINEL_COORD: f32 = 2_000.0;

/// Anything beyond this distance is not rasterized (fog far plane).
pub const VISIBLE_RADIUS: f32 = 200.0;

/// Meteor colour palette.
pub const METEOR_PALETTE: [Rgb; 4] = [
    Rgb::from_hex(0xffffff),
    Rgb::from_hex(0xaaddff),
    Rgb::from_hex(0xffddee),
    Rgb::from_hex(0xffff99),
];

// --- Planet ---

/// Planet spin rate (radians per second at multiplier 1).
pub const PLANET_SPIN_RATE: f32 = 0.1;

/// Cloud layer spins this much faster than the planet body.
pub const CLOUD_SPIN_FACTOR: f32 = 1.2;

pub const PLANET_RADIUS: f32 = 2.0;
pub const CLOUD_RADIUS: f32 = 2.03;
pub const ATMOSPHERE_RADIUS: f32 = 2.06;
pub const INNER_GLOW_RADIUS: f32 = 2.08;

// --- Satellite ---

/// Orbital angular rate about the pivot (radians per second at multiplier 1).
pub const SATELLITE_ORBIT_RATE: f32 = 0.15;

/// Spin rate about the satellite's own axis (radians per second at multiplier 1).
pub const SATELLITE_SPIN_RATE: f32 = 0.05;

/// Distance from the pivot to the satellite centre.
pub const SATELLITE_DISTANCE: f32 = 9.0;

pub const SATELLITE_RADIUS: f32 = 0.54;

/// Half-width of the orbit ring drawn around the pivot.
pub const ORBIT_RING_HALF_WIDTH: f32 = 0.015;

// --- Starfield ---

/// Number of backdrop stars.
pub const STAR_COUNT: usize = 6_000;

/// Radius range of the star shell, `[min, max)`.
pub const STAR_SHELL_MIN: f32 = 80.0;
pub const STAR_SHELL_MAX: f32 = 200.0;

/// Star colour palette (white, yellowish, bluish, reddish).
pub const STAR_PALETTE: [Rgb; 4] = [
    Rgb::from_hex(0xffffff),
    Rgb::from_hex(0xffe9c4),
    Rgb::from_hex(0xd4e1ff),
    Rgb::from_hex(0xffcfcf),
];

// --- Control surface ---

/// Upper clamp for the rotation and orbit speed multipliers.
pub const SPEED_MULTIPLIER_MAX: f32 = 5.0;

// --- Clock ---

/// Longest elapsed delta a single frame may report (seconds).
pub const MAX_FRAME_DELTA_SECS: f64 = 0.1;
