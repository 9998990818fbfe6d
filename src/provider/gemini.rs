use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::ProviderFailure;
use super::{Provider, ProviderRequest};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct Gemini {
    api_base: String,
    client: Client,
}

impl Gemini {
    pub fn new(api_base: String) -> Self {
        Self { api_base, client: Client::new() }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base.trim_end_matches('/'), model)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
    temperature: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: String,
}

impl ApiError {
    fn into_failure(self) -> ProviderFailure {
        let code = self
            .status
            .or_else(|| self.code.map(|c| c.to_string()))
            .unwrap_or_else(|| "UNKNOWN".to_string());
        ProviderFailure::Api { code, message: self.message }
    }
}

fn request_body(req: &ProviderRequest) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content { role: "user", parts: vec![Part { text: &req.prompt }] }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: &req.schema,
            temperature: req.temperature,
        },
    }
}

/// Pull the model's text out of a successful `generateContent` body.
/// Multiple parts of the first candidate are concatenated in order.
fn extract_text(body: &str) -> Result<String, ProviderFailure> {
    let parsed: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| ProviderFailure::Api { code: "INVALID_BODY".into(), message: e.to_string() })?;

    if let Some(err) = parsed.error {
        return Err(err.into_failure());
    }
    if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ProviderFailure::Blocked(reason));
    }

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ProviderFailure::Empty);
    }
    Ok(text)
}

/// Error bodies on non-2xx responses usually carry a structured `error`
/// object; prefer it over the raw status when it parses.
fn status_failure(status: u16, body: String) -> ProviderFailure {
    match serde_json::from_str::<GenerateResponse>(&body) {
        Ok(GenerateResponse { error: Some(err), .. }) => err.into_failure(),
        _ => ProviderFailure::Status { status, body },
    }
}

#[async_trait]
impl Provider for Gemini {
    async fn complete(&self, req: &ProviderRequest) -> Result<String, ProviderFailure> {
        let url = self.endpoint(&req.model);
        let body = request_body(req);

        debug!(%url, temperature = req.temperature, prompt_bytes = req.prompt.len(), "POST generateContent");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &req.credential)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        debug!(status = status.as_u16(), body_bytes = text.len(), "generateContent returned");

        if !status.is_success() {
            return Err(status_failure(status.as_u16(), text));
        }
        extract_text(&text)
    }
}
