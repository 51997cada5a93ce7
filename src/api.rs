use crate::config::Config;
use crate::error::ApiError;
use crate::parser::parse_text_response;
use crate::prompt::build_prompt;
use crate::record::{resolve_brand, BrandToneRecord};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

// Every level may be absent or `null`; either reads as "no text".
#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate's first part.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("brand-tone/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.endpoint(), Duration::from_secs(config.ai.timeout_secs))
    }

    /// Generates a tone guide for `brand` with a single request.
    ///
    /// Returns `Ok(None)` without touching the network when `credential` is
    /// absent or blank. Never produces template content itself.
    pub async fn generate(
        &self,
        brand: &str,
        credential: Option<&str>,
    ) -> Result<Option<BrandToneRecord>, ApiError> {
        let Some(credential) = credential.map(str::trim).filter(|c| !c.is_empty()) else {
            info!("No API key configured, skipping remote generation");
            return Ok(None);
        };

        let name = resolve_brand(brand);
        info!("Calling Gemini for brand: {}", name);

        let request = GenerateRequest::from_prompt(build_prompt(name));
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", credential)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!("API response status: {}", status);

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown error").to_string();
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|body| body.message)
                .filter(|m| !m.is_empty())
                .unwrap_or(reason);

            error!("API error response ({}): {}", status.as_u16(), message);
            return Err(ApiError::from_status(status.as_u16(), message));
        }

        let envelope: GenerateResponse = response.json().await?;
        let content = match envelope.first_text() {
            Some(text) if !text.is_empty() => text,
            _ => {
                error!("Empty API response");
                return Err(ApiError::EmptyResponse);
            }
        };
        debug!("Received {} bytes of generated text", content.len());

        let parsed = parse_text_response(content);
        Ok(Some(BrandToneRecord::from_parsed(name, parsed)))
    }
}
