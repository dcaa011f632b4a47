//! Meteor field manager: a fixed-size pool of meteors updated once per tick.
//!
//! Slots never interact, so the update is a straight pass over the pool.

use rand::Rng;

use orrery_core::state::MeteorView;

use crate::meteor::Meteor;

/// Counts of lifecycle transitions during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTickReport {
    pub spawned: u32,
    pub retired: u32,
}

#[derive(Debug, Clone)]
pub struct MeteorField {
    meteors: Vec<Meteor>,
}

impl MeteorField {
    /// Build a pool of `count` dormant meteors with first spawns scheduled
    /// relative to `now_ms`.
    pub fn new<R: Rng + ?Sized>(count: usize, now_ms: u64, rng: &mut R) -> Self {
        let meteors = (0..count)
            .map(|slot| Meteor::initialize(slot, now_ms, rng))
            .collect();
        log::debug!("meteor field initialized with {count} slots");
        Self { meteors }
    }

    /// Update every slot: spawn first, then move, so a meteor that spawns
    /// this frame also takes its first step.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        step_scale: f32,
        rng: &mut R,
    ) -> FieldTickReport {
        let mut report = FieldTickReport::default();
        for (slot, meteor) in self.meteors.iter_mut().enumerate() {
            if meteor.try_spawn(now_ms, rng) {
                report.spawned += 1;
                log::trace!("meteor {slot} spawned at {:?}", meteor.position);
            }
            if meteor.advance(step_scale, now_ms, rng) {
                report.retired += 1;
                log::trace!(
                    "meteor {slot} retired, next spawn at {}",
                    meteor.next_spawn_ms
                );
            }
        }
        report
    }

    /// Renderer views, one per slot, in slot order.
    pub fn views(&self) -> Vec<MeteorView> {
        self.meteors.iter().map(Meteor::view).collect()
    }

    pub fn len(&self) -> usize {
        self.meteors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meteors.is_empty()
    }

    /// Number of meteors currently in flight.
    pub fn active_count(&self) -> usize {
        self.meteors.iter().filter(|m| m.is_active()).count()
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    pub fn meteor_mut(&mut self, slot: usize) -> Option<&mut Meteor> {
        self.meteors.get_mut(slot)
    }
}
