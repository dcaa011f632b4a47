//! Scene engine for ORRERY.
//!
//! Owns the meteor pool, the planet and satellite bodies and the starfield,
//! advances them once per frame and produces `FrameSnapshot`s for the
//! rasterizer. Headless and deterministic under a seed.

pub mod clock;
pub mod engine;
pub mod field;
pub mod meteor;
pub mod orbit;
pub mod sampling;
pub mod starfield;
pub mod systems;

pub use engine::{SceneConfig, SceneEngine};
pub use orrery_core as core;

#[cfg(test)]
mod proptest_meteor;
