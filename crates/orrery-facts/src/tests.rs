//! Tests for fact lookup, fallback handling and the Gemini wire format.

use std::sync::mpsc;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::FactError;
use crate::gemini::{extract_text, prompt_for, request_body, GeminiSource};
use crate::service::{FactResponse, FactService, FactSource, EMPTY_TEXT, FALLBACK_TEXT};

struct FixedSource(&'static str);

impl FactSource for FixedSource {
    fn fetch(&self, topic: &str) -> Result<Option<String>, FactError> {
        Ok(Some(format!("{topic}: {}", self.0)))
    }
}

struct SilentSource;

impl FactSource for SilentSource {
    fn fetch(&self, _topic: &str) -> Result<Option<String>, FactError> {
        Ok(None)
    }
}

struct FailingSource;

impl FactSource for FailingSource {
    fn fetch(&self, _topic: &str) -> Result<Option<String>, FactError> {
        Err(FactError::Http("connection refused".into()))
    }
}

struct PanickingSource;

impl FactSource for PanickingSource {
    fn fetch(&self, _topic: &str) -> Result<Option<String>, FactError> {
        panic!("source blew up");
    }
}

/// Blocks until the test releases it.
struct GatedSource {
    gate: Mutex<mpsc::Receiver<()>>,
}

impl FactSource for GatedSource {
    fn fetch(&self, topic: &str) -> Result<Option<String>, FactError> {
        let gate = self.gate.lock().map_err(|e| FactError::Http(e.to_string()))?;
        gate.recv().map_err(|e| FactError::Http(e.to_string()))?;
        Ok(Some(format!("{topic} is ready")))
    }
}

// ---- Synchronous lookup ----

#[test]
fn test_lookup_returns_source_text() {
    let service = FactService::new(FixedSource("tidally locked"));
    let response = service.lookup("the Moon");
    assert_eq!(response.topic, "the Moon");
    assert_eq!(response.text, "the Moon: tidally locked");
    assert!(!response.is_fallback);
}

#[test]
fn test_lookup_failure_yields_fallback() {
    let service = FactService::new(FailingSource);
    let response = service.lookup("Earth");
    assert_eq!(response.text, FALLBACK_TEXT);
    assert!(response.is_fallback);
    assert_eq!(response, FactResponse::fallback("Earth"));
}

#[test]
fn test_lookup_panic_yields_fallback() {
    let service = FactService::new(PanickingSource);
    let response = service.lookup("meteors");
    assert_eq!(response.text, FALLBACK_TEXT);
}

#[test]
fn test_empty_answer_yields_placeholder() {
    let service = FactService::new(SilentSource);
    let response = service.lookup("Earth");
    assert_eq!(response.text, EMPTY_TEXT);
    assert!(!response.is_fallback);
}

// ---- Background requests ----

#[test]
fn test_request_wait_success() {
    let service = FactService::new(FixedSource("fast"));
    let pending = service.request("Jupiter");
    assert_eq!(pending.topic(), "Jupiter");
    assert_eq!(pending.wait().text, "Jupiter: fast");
}

#[test]
fn test_request_failure_yields_fallback() {
    let service = FactService::new(FailingSource);
    assert_eq!(service.request("Mars").wait().text, FALLBACK_TEXT);

    let service = FactService::new(PanickingSource);
    assert_eq!(service.request("Mars").wait().text, FALLBACK_TEXT);
}

#[test]
fn test_try_take_polls_until_ready() {
    let (release, gate) = mpsc::channel();
    let service = FactService::new(GatedSource {
        gate: Mutex::new(gate),
    });
    let mut pending = service.request("Saturn");

    assert!(pending.try_take().is_none());
    assert!(!pending.is_done());

    release.send(()).unwrap();
    let mut response = None;
    for _ in 0..200 {
        if let Some(r) = pending.try_take() {
            response = Some(r);
            break;
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    let response = response.expect("response should arrive");
    assert_eq!(response.text, "Saturn is ready");
    assert!(pending.is_done());
    assert!(pending.try_take().is_none(), "response is delivered once");
}

// ---- Gemini wire format ----

#[test]
fn test_missing_key_is_an_error() {
    let source = GeminiSource::new(None);
    assert!(!source.has_api_key());
    assert!(matches!(source.fetch("Earth"), Err(FactError::MissingApiKey)));

    // Empty keys count as missing.
    assert!(!GeminiSource::new(Some(String::new())).has_api_key());

    // And the service turns it into the fallback.
    let service = FactService::new(GeminiSource::new(None));
    assert_eq!(service.lookup("Earth").text, FALLBACK_TEXT);
}

#[test]
fn test_request_body_shape() {
    let body: serde_json::Value = serde_json::from_str(&request_body("the Moon").unwrap()).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], prompt_for("the Moon"));
    assert!(prompt_for("the Moon").contains("about the Moon in the context of our solar system"));
    let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
    let top_p = body["generationConfig"]["topP"].as_f64().unwrap();
    assert!((temperature - 0.8).abs() < 1e-6);
    assert!((top_p - 0.95).abs() < 1e-6);
}

#[test]
fn test_extract_text_joins_parts() {
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"Io has "},{"text":"volcanoes. "}]}}]}"#;
    assert_eq!(extract_text(body).unwrap().as_deref(), Some("Io has volcanoes."));
}

#[test]
fn test_extract_text_empty_and_malformed() {
    assert_eq!(extract_text(r#"{"candidates":[]}"#).unwrap(), None);
    assert_eq!(extract_text("{}").unwrap(), None);
    assert!(matches!(extract_text("not json"), Err(FactError::Decode(_))));
}

#[test]
fn test_with_model_overrides_default() {
    let source = GeminiSource::new(Some("k".into())).with_model("other-model");
    assert_eq!(source.model(), "other-model");
    assert!(source.has_api_key());
}
