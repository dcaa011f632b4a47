//! A single pooled meteor: randomized parameters, spawn timer, trajectory and trail.
//!
//! Plain data plus methods. All randomness comes from the caller's RNG so a
//! seeded generator reproduces the same shower.

use glam::Vec3;
use rand::Rng;

use orrery_core::constants::*;
use orrery_core::enums::MeteorState;
use orrery_core::state::MeteorView;
use orrery_core::types::Rgb;

use crate::sampling::{sample_cube, sample_shell};

/// Where dormant meteors are parked, far outside the visible radius.
pub const SENTINEL: Vec3 = Vec3::splat(SENTINEL_COORD);

#[derive(Debug, Clone, PartialEq)]
pub struct Meteor {
    /// Authoritative location in scene space.
    pub position: Vec3,
    /// Unit heading, assigned at spawn. Zero before the first spawn.
    pub direction: Vec3,
    /// Distance covered per step.
    pub speed: f32,
    pub trail_length: f32,
    pub color: Rgb,
    pub state: MeteorState,
    /// Wall-clock time (ms) after which a dormant meteor spawns.
    pub next_spawn_ms: u64,
    pub trail_head: Vec3,
    pub trail_tail: Vec3,
}

/// True when `position` has flown past the outer bound or pierced the inner one.
pub fn out_of_bounds(position: Vec3) -> bool {
    let distance = position.length();
    distance > OUTER_BOUND || distance < INNER_BOUND
}

impl Meteor {
    /// Create the meteor for pool slot `slot`, dormant, with its first spawn
    /// staggered by slot index so the pool doesn't fire all at once.
    pub fn initialize<R: Rng + ?Sized>(slot: usize, now_ms: u64, rng: &mut R) -> Self {
        let speed = rng.gen_range(METEOR_SPEED_MIN..METEOR_SPEED_MAX);
        let trail_length = rng.gen_range(METEOR_TRAIL_MIN..METEOR_TRAIL_MAX);
        let color = METEOR_PALETTE[rng.gen_range(0..METEOR_PALETTE.len())];
        let next_spawn_ms = now_ms
            .saturating_add(rng.gen_range(0..INITIAL_SPAWN_JITTER_MS))
            .saturating_add(slot as u64 * SPAWN_STAGGER_MS);

        Self {
            position: SENTINEL,
            direction: Vec3::ZERO,
            speed,
            trail_length,
            color,
            state: MeteorState::Dormant,
            next_spawn_ms,
            trail_head: SENTINEL,
            trail_tail: SENTINEL,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == MeteorState::Active
    }

    /// Spawn if dormant and `now_ms` is past the scheduled time.
    ///
    /// The new position lies on the spawn shell and the heading points at a
    /// random spot near the centre. Returns whether the meteor spawned.
    pub fn try_spawn<R: Rng + ?Sized>(&mut self, now_ms: u64, rng: &mut R) -> bool {
        if self.state != MeteorState::Dormant || now_ms <= self.next_spawn_ms {
            return false;
        }

        let start = sample_shell(rng, SPAWN_SHELL_MIN, SPAWN_SHELL_MAX);
        let target = sample_cube(rng, TARGET_HALF_WIDTH);
        // |start| >= 60 while |target| <= 20·√3, so the difference is never zero.
        self.direction = (target - start).normalize();
        self.position = start;
        self.state = MeteorState::Active;
        self.update_trail();
        true
    }

    /// Move one step along the heading and recycle if out of bounds.
    ///
    /// `step_scale` multiplies `speed`; it is 1 for frame-coupled motion.
    /// Returns whether the meteor was retired during this call.
    pub fn advance<R: Rng + ?Sized>(&mut self, step_scale: f32, now_ms: u64, rng: &mut R) -> bool {
        if self.state == MeteorState::Dormant {
            return false;
        }

        if out_of_bounds(self.position) {
            self.retire(now_ms, rng);
            return true;
        }

        self.position += self.direction * (self.speed * step_scale);
        self.update_trail();

        if out_of_bounds(self.position) {
            self.retire(now_ms, rng);
            return true;
        }
        false
    }

    /// Park at the sentinel and schedule the next spawn strictly after `now_ms`.
    pub fn retire<R: Rng + ?Sized>(&mut self, now_ms: u64, rng: &mut R) {
        self.state = MeteorState::Dormant;
        self.next_spawn_ms = now_ms.saturating_add(rng.gen_range(1..RESPAWN_JITTER_MS));
        self.position = SENTINEL;
        self.trail_head = SENTINEL;
        self.trail_tail = SENTINEL;
    }

    fn update_trail(&mut self) {
        self.trail_head = self.position;
        self.trail_tail = self.position - self.direction * self.trail_length;
    }

    /// Renderer view of this slot.
    pub fn view(&self) -> MeteorView {
        MeteorView {
            position: self.position,
            trail_head: self.trail_head,
            trail_tail: self.trail_tail,
            color: self.color,
            state: self.state,
            visible: self.is_active(),
        }
    }
}
