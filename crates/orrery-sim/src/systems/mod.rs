//! Systems that read engine state each tick.
//!
//! Systems are plain functions over borrowed state; they own nothing.

pub mod snapshot;
