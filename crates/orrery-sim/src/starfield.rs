//! Static starfield backdrop, generated once from the scene RNG.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use orrery_core::constants::{STAR_PALETTE, STAR_SHELL_MAX, STAR_SHELL_MIN};
use orrery_core::types::Rgb;

use crate::sampling::sample_shell;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub position: Vec3,
    pub color: Rgb,
}

/// Scatter `count` stars over the star shell with palette colours.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            position: sample_shell(rng, STAR_SHELL_MIN, STAR_SHELL_MAX),
            color: STAR_PALETTE[rng.gen_range(0..STAR_PALETTE.len())],
        })
        .collect()
}
