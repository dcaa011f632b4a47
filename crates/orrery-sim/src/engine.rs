//! Scene engine: owns every animated body and advances them one frame at a time.
//!
//! `SceneEngine` owns the meteor pool, the planet, the satellite and the
//! starfield, applies control commands, advances everything once per frame
//! and produces `FrameSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use orrery_core::commands::ControlCommand;
use orrery_core::constants::{DEFAULT_SEED, METEOR_COUNT, STAR_COUNT};
use orrery_core::controls::ControlSurface;
use orrery_core::enums::MotionMode;
use orrery_core::state::FrameSnapshot;
use orrery_core::types::FrameCount;

use crate::clock::{wall_clock_ms, FrameTime};
use crate::field::MeteorField;
use crate::orbit::{Animate, Planet, Satellite};
use crate::starfield::{self, Star};
use crate::systems;

/// Configuration for building a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RNG seed for determinism. Same seed and clock = same scene.
    pub seed: u64,
    /// Number of meteor slots in the pool.
    pub meteor_count: usize,
    /// Number of backdrop stars.
    pub star_count: usize,
    /// Whether meteor steps follow frames or elapsed time.
    pub motion: MotionMode,
    /// When set, pausing also halts meteor spawning and motion.
    pub pause_freezes_meteors: bool,
    /// Timestamp first spawns are scheduled against; wall clock if `None`.
    pub start_ms: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            meteor_count: METEOR_COUNT,
            star_count: STAR_COUNT,
            motion: MotionMode::default(),
            pause_freezes_meteors: false,
            start_ms: None,
        }
    }
}

/// The scene engine. Owns all animated state.
pub struct SceneEngine {
    rng: ChaCha8Rng,
    time: FrameCount,
    controls: ControlSurface,
    planet: Planet,
    satellite: Satellite,
    field: MeteorField,
    starfield: Vec<Star>,
    motion: MotionMode,
    pause_freezes_meteors: bool,
    command_queue: VecDeque<ControlCommand>,
}

impl SceneEngine {
    /// Create a new scene with the given config.
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let start_ms = config.start_ms.unwrap_or_else(wall_clock_ms);
        let starfield = starfield::generate(config.star_count, &mut rng);
        let field = MeteorField::new(config.meteor_count, start_ms, &mut rng);

        log::info!(
            "scene ready: seed={} meteors={} stars={} motion={:?}",
            config.seed,
            config.meteor_count,
            config.star_count,
            config.motion
        );

        Self {
            rng,
            time: FrameCount::default(),
            controls: ControlSurface::default(),
            planet: Planet::default(),
            satellite: Satellite::default(),
            field,
            starfield,
            motion: config.motion,
            pause_freezes_meteors: config.pause_freezes_meteors,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a control command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ControlCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ControlCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one frame and return the resulting snapshot.
    pub fn tick(&mut self, frame: FrameTime) -> FrameSnapshot {
        self.process_commands();

        let delta_secs = frame.delta_secs.max(0.0);
        self.planet
            .advance(delta_secs, self.controls.effective_rotation());
        self.satellite
            .advance(delta_secs, self.controls.effective_orbit());

        if !(self.controls.is_paused() && self.pause_freezes_meteors) {
            let step_scale = self.motion.step_scale(delta_secs);
            let report = self.field.tick(frame.now_ms, step_scale, &mut self.rng);
            if report.spawned > 0 || report.retired > 0 {
                log::debug!(
                    "frame {}: {} spawned, {} retired, {} active",
                    self.time.frame,
                    report.spawned,
                    report.retired,
                    self.field.active_count()
                );
            }
        }

        self.time.advance(delta_secs);

        systems::snapshot::build_snapshot(
            &self.time,
            frame.now_ms,
            &self.controls,
            &self.planet,
            &self.satellite,
            &self.field,
        )
    }

    /// Get the current frame count.
    pub fn time(&self) -> FrameCount {
        self.time
    }

    /// Get the control surface state.
    pub fn controls(&self) -> &ControlSurface {
        &self.controls
    }

    /// Static backdrop stars, generated once at construction.
    pub fn starfield(&self) -> &[Star] {
        &self.starfield
    }

    /// Get a read-only reference to the meteor pool.
    pub fn field(&self) -> &MeteorField {
        &self.field
    }

    pub fn satellite(&self) -> &Satellite {
        &self.satellite
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    /// Mutable pool access for tests that force meteor state.
    #[cfg(test)]
    pub fn field_mut(&mut self) -> &mut MeteorField {
        &mut self.field
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            log::debug!("control command: {command:?}");
            self.controls.apply(&command);
        }
    }
}
