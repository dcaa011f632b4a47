//! Fact lookup for ORRERY.
//!
//! A one-shot topic → display-text service. Lookups never fail from the
//! caller's point of view: any error becomes a fixed fallback line. The
//! service shares nothing with the animation engine beyond the text it
//! returns.

pub mod error;
pub mod gemini;
pub mod service;

pub use error::FactError;
pub use gemini::GeminiSource;
pub use service::{FactResponse, FactService, FactSource, PendingFact, EMPTY_TEXT, FALLBACK_TEXT};

#[cfg(test)]
mod tests;
