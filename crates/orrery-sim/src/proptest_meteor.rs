//! Property-based tests for the meteor lifecycle using proptest.
//!
//! These tests verify pool invariants across arbitrary seeds and run lengths.

use glam::Vec3;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orrery_core::constants::*;
use orrery_core::enums::MeteorState;

use crate::clock::{FrameClock, ManualClock};
use crate::engine::{SceneConfig, SceneEngine};
use crate::meteor::{Meteor, SENTINEL};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Active meteors keep a unit heading; dormant ones stay parked and hidden.
    #[test]
    fn prop_pool_invariants_after_any_run(seed in any::<u64>(), frames in 0usize..1_500) {
        let mut engine = SceneEngine::new(SceneConfig {
            seed,
            star_count: 0,
            start_ms: Some(0),
            ..Default::default()
        });
        let mut clock = ManualClock::at_tick_rate(0);
        for _ in 0..frames {
            engine.tick(clock.next_frame());
        }

        for meteor in engine.field().meteors() {
            match meteor.state {
                MeteorState::Active => {
                    prop_assert!((meteor.direction.length() - 1.0).abs() < 1e-5);
                    prop_assert!(meteor.view().visible);
                }
                MeteorState::Dormant => {
                    prop_assert_eq!(meteor.position, SENTINEL);
                    prop_assert!(meteor.position.length() > VISIBLE_RADIUS);
                    prop_assert!(!meteor.view().visible);
                }
            }
        }
    }

    /// A fresh spawn always lands on the spawn shell.
    #[test]
    fn prop_spawn_lands_on_shell(seed in any::<u64>(), slot in 0usize..64, now in 0u64..1_000_000) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut meteor = Meteor::initialize(slot, 0, &mut rng);
        meteor.next_spawn_ms = 0;
        prop_assert!(meteor.try_spawn(now + 1, &mut rng));

        let r = meteor.position.length();
        prop_assert!(r >= SPAWN_SHELL_MIN - 1e-3 && r < SPAWN_SHELL_MAX + 1e-3, "radius {}", r);
        prop_assert!((meteor.direction.length() - 1.0).abs() < 1e-5);
    }

    /// A meteor that starts a step out of bounds ends that step dormant,
    /// with its next spawn strictly in the future.
    #[test]
    fn prop_out_of_bounds_always_retires(
        seed in any::<u64>(),
        far in prop::bool::ANY,
        radius_frac in 0.0f32..1.0,
        now in 0u64..1_000_000,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut meteor = Meteor::initialize(0, 0, &mut rng);
        let radius = if far {
            OUTER_BOUND + 0.01 + radius_frac * 500.0
        } else {
            radius_frac * (INNER_BOUND - 0.01)
        };
        meteor.state = MeteorState::Active;
        meteor.position = Vec3::new(0.0, radius, 0.0);
        meteor.direction = Vec3::NEG_Y;

        prop_assert!(meteor.advance(1.0, now, &mut rng));
        prop_assert_eq!(meteor.state, MeteorState::Dormant);
        prop_assert_eq!(meteor.position, SENTINEL);
        prop_assert!(meteor.next_spawn_ms > now);
    }
}
