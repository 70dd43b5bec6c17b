// src/vision/gemini.rs
//! Gemini implementation of the vision collaborator.
//!
//! Uses the generateContent API with inline image data. The prompt asks for a
//! strict JSON payload; since the model still occasionally wraps it in prose
//! or markdown fences, we extract the outermost JSON object before parsing.

use super::{VisionAnalysis, VisionAnalyzer, VisionError};
use crate::config::CONFIG;
use crate::season::ColorSeason;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct GeminiVisionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiVisionClient {
    /// Build a client from the global config. Errors if no API key is set so
    /// callers can decide between failing onboarding and skipping the selfie
    /// step entirely.
    pub fn from_config() -> Result<Self, VisionError> {
        if CONFIG.gemini_api_key.is_empty() {
            return Err(VisionError::NotConfigured("GEMINI_API_KEY not set".into()));
        }
        Ok(Self {
            client: Client::new(),
            api_key: CONFIG.gemini_api_key.clone(),
            base_url: CONFIG.gemini_base_url.clone(),
            model: CONFIG.gemini_model.clone(),
            timeout: Duration::from_secs(CONFIG.vision_timeout),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inline_data")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Serialize)]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Prompt & payload extraction
// ============================================================================

fn analysis_prompt(quiz_season: ColorSeason, quiz_confidence: u8) -> String {
    format!(
        r#"You are an expert in Korean Personal Color Analysis (PCA). Analyze this selfie to determine the person's color season.

QUIZ RESULTS (for hybrid validation):
The person's quiz suggested they are: {quiz_season}
Quiz confidence: {quiz_confidence}%

Your task: Analyze the photo and provide detailed color analysis.

OUTPUT FORMAT (JSON only, no markdown):
{{
  "skinUndertone": "warm" or "cool",
  "skinUndertoneConfidence": 0.0 to 1.0,
  "veinAppearance": "description",
  "contrastLevel": "high", "medium", or "low",
  "hairTone": "warm", "cool", or "neutral",
  "eyeColor": "description",
  "recommendedSeason": "warm_spring", "cool_summer", "warm_autumn", or "cool_winter",
  "confidence": 0.0 to 1.0,
  "reasoning": "brief explanation",
  "agreesWithQuiz": true or false
}}

ANALYSIS GUIDELINES:
- Skin undertone: Golden/peachy = warm, Pink/bluish = cool
- Contrast: High contrast = bright season, Low = muted
- Hair tone: Golden/red = warm, Ash/gray = cool
- Eye color: Warm browns/hazels = warm, Gray/cool blue = cool

SEASONS:
- warm_spring: warm undertones + bright/clear coloring
- cool_summer: cool undertones + soft/muted coloring
- warm_autumn: warm undertones + rich/muted coloring
- cool_winter: cool undertones + bright/clear coloring

Return ONLY valid JSON, no markdown formatting."#
    )
}

static JSON_BLOB: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Pull the outermost `{...}` object out of free-form model text.
fn extract_json(text: &str) -> Result<&str, VisionError> {
    JSON_BLOB
        .find(text)
        .map(|m| m.as_str())
        .ok_or_else(|| VisionError::Malformed(format!("no JSON object in response: {text}")))
}

/// Accepts either raw base64 or a `data:image/...;base64,` URL.
fn strip_data_url(image: &str) -> &str {
    image.rsplit(',').next().unwrap_or(image)
}

// ============================================================================
// Analyzer implementation
// ============================================================================

#[async_trait]
impl VisionAnalyzer for GeminiVisionClient {
    async fn analyze(
        &self,
        image_base64: &str,
        quiz_season: ColorSeason,
        quiz_confidence: u8,
    ) -> Result<VisionAnalysis, VisionError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiPart::Text {
                        text: analysis_prompt(quiz_season, quiz_confidence),
                    },
                    GeminiPart::InlineData {
                        inline_data: GeminiInlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: strip_data_url(image_base64).to_string(),
                        },
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Api(format!("{status} - {body}")));
        }

        let api_response: GeminiResponse = response.json().await?;

        if let Some(error) = api_response.error {
            return Err(VisionError::Api(error.message));
        }

        let text = api_response
            .candidates
            .and_then(|c| c.into_iter().next())
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        debug!(chars = text.len(), "gemini vision response received");

        let payload = extract_json(&text)?;
        serde_json::from_str::<VisionAnalysis>(payload)
            .map_err(|e| VisionError::Malformed(format!("{e}: {payload}")))
    }
}
