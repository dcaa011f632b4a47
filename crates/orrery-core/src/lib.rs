//! Core types and definitions for the ORRERY scene.
//!
//! This crate defines the vocabulary shared across all other crates:
//! colours, tuning constants, control commands, the control surface and
//! the per-frame snapshot handed to the rasterizer.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod constants;
pub mod controls;
pub mod enums;
pub mod layout;
pub mod state;
pub mod types;

pub use glam::Vec3;
