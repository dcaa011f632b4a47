//! ORRERY host application.
//!
//! This crate wires the scene engine and the fact service together: a
//! frame loop thread drives the engine, commands arrive over a channel and
//! snapshots leave through a sink.

pub mod api;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod logger;
pub mod sink;
pub mod state;

pub use error::AppError;
pub use orrery_core as core;
