//! HTTP fact source backed by the Gemini `generateContent` endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FactError;
use crate::service::FactSource;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Prompt sent for `topic`.
pub fn prompt_for(topic: &str) -> String {
    format!(
        "Provide a short, fascinating, and scientific fact about {topic} in the context of our solar system. Keep it under 3 sentences."
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

/// Build the JSON request body for `topic`.
pub fn request_body(topic: &str) -> Result<String, FactError> {
    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt_for(topic),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: 0.8,
            top_p: 0.95,
        },
    };
    Ok(serde_json::to_string(&request)?)
}

/// Pull the generated text out of a response body. `None` when the model
/// returned nothing usable.
pub fn extract_text(body: &str) -> Result<Option<String>, FactError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .first()
        .map(|c| c.content.parts.iter().map(|p| p.text.as_str()).collect())
        .unwrap_or_default();
    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

#[derive(Debug, Clone)]
pub struct GeminiSource {
    api_key: Option<String>,
    model: String,
    agent: ureq::Agent,
}

impl GeminiSource {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            model: DEFAULT_MODEL.to_string(),
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }

    /// Read the key from `GEMINI_API_KEY`, falling back to `API_KEY`.
    pub fn from_env() -> Self {
        let key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();
        Self::new(key)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl FactSource for GeminiSource {
    fn fetch(&self, topic: &str) -> Result<Option<String>, FactError> {
        let key = self.api_key.as_deref().ok_or(FactError::MissingApiKey)?;
        let url = format!("{ENDPOINT}/{}:generateContent", self.model);
        let body = self
            .agent
            .post(&url)
            .set("x-goog-api-key", key)
            .set("Content-Type", "application/json")
            .send_string(&request_body(topic)?)?
            .into_string()
            .map_err(|e| FactError::Http(e.to_string()))?;
        extract_text(&body)
    }
}
