//! Host-level failures. The engine itself has none.

use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to spawn frame loop: {0}")]
    LoopSpawn(#[source] io::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("scene already running")]
    AlreadyRunning,

    #[error("scene not started")]
    NotStarted,

    #[error("frame loop has stopped")]
    LoopStopped,

    #[error("shared state lock poisoned")]
    Poisoned,
}
