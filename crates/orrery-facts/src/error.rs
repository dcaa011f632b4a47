//! Failures a fact source can report. None of these reach service callers.

#[derive(thiserror::Error, Debug)]
pub enum FactError {
    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<ureq::Error> for FactError {
    fn from(err: ureq::Error) -> Self {
        FactError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for FactError {
    fn from(err: serde_json::Error) -> Self {
        FactError::Decode(err.to_string())
    }
}
