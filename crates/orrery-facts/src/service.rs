//! Fact service: topic in, display text out, fallback on any failure.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::FactError;

/// Shown when a lookup fails for any reason.
pub const FALLBACK_TEXT: &str = "The stars are currently silent. Please try again later.";

/// Shown when the source answers but has nothing to say.
pub const EMPTY_TEXT: &str = "The cosmos is vast and full of mysteries yet to be discovered.";

/// Something that can produce a fact for a topic. `Ok(None)` means the
/// source answered with no text.
pub trait FactSource: Send + Sync {
    fn fetch(&self, topic: &str) -> Result<Option<String>, FactError>;
}

/// Display text for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactResponse {
    pub topic: String,
    pub text: String,
    /// True when `text` is `FALLBACK_TEXT` substituted for a failure.
    pub is_fallback: bool,
}

impl FactResponse {
    pub fn fallback(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            text: FALLBACK_TEXT.to_string(),
            is_fallback: true,
        }
    }
}

#[derive(Clone)]
pub struct FactService {
    source: Arc<dyn FactSource>,
}

impl FactService {
    pub fn new(source: impl FactSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Fetch synchronously. Errors and panics inside the source both
    /// resolve to the fallback text.
    pub fn lookup(&self, topic: &str) -> FactResponse {
        resolve(self.source.as_ref(), topic)
    }

    /// Fetch on a background thread. Poll or wait on the returned handle.
    pub fn request(&self, topic: impl Into<String>) -> PendingFact {
        let topic = topic.into();
        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        let worker_topic = topic.clone();

        let spawned = std::thread::Builder::new()
            .name("orrery-fact".into())
            .spawn(move || {
                let response = resolve(source.as_ref(), &worker_topic);
                // The caller may have dropped its handle; nothing to do then.
                let _ = tx.send(response);
            });
        if let Err(e) = spawned {
            // `tx` went down with the closure, so the handle resolves to the fallback.
            log::error!("failed to spawn fact worker: {e}");
        }

        PendingFact {
            topic,
            rx: Some(rx),
        }
    }
}

fn resolve(source: &dyn FactSource, topic: &str) -> FactResponse {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| source.fetch(topic)));
    match outcome {
        Ok(Ok(Some(text))) => FactResponse {
            topic: topic.to_string(),
            text,
            is_fallback: false,
        },
        Ok(Ok(None)) => FactResponse {
            topic: topic.to_string(),
            text: EMPTY_TEXT.to_string(),
            is_fallback: false,
        },
        Ok(Err(e)) => {
            log::error!("fact lookup for {topic:?} failed: {e}");
            FactResponse::fallback(topic)
        }
        Err(_) => {
            log::error!("fact source panicked for {topic:?}");
            FactResponse::fallback(topic)
        }
    }
}

/// Handle to an in-flight background lookup.
#[derive(Debug)]
pub struct PendingFact {
    topic: String,
    rx: Option<mpsc::Receiver<FactResponse>>,
}

impl PendingFact {
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// True once the response has been taken.
    pub fn is_done(&self) -> bool {
        self.rx.is_none()
    }

    /// Non-blocking poll. Returns the response exactly once.
    pub fn try_take(&mut self) -> Option<FactResponse> {
        let rx = self.rx.as_ref()?;
        let response = match rx.try_recv() {
            Ok(response) => response,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => FactResponse::fallback(&self.topic),
        };
        self.rx = None;
        Some(response)
    }

    /// Block until the response is ready.
    pub fn wait(mut self) -> FactResponse {
        match self.rx.take() {
            Some(rx) => rx
                .recv()
                .unwrap_or_else(|_| FactResponse::fallback(&self.topic)),
            None => FactResponse::fallback(&self.topic),
        }
    }
}
