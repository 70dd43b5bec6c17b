// src/vision/mod.rs
//! External vision-analysis collaborator: the selfie-based second opinion on
//! the quiz season. The resolver only talks to [`VisionAnalyzer`], so the
//! Gemini dependency stays replaceable and mockable.

pub mod gemini;

pub use gemini::GeminiVisionClient;

use crate::season::ColorSeason;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Skin undertone as judged from the selfie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairTone {
    Warm,
    Cool,
    Neutral,
}

/// Structured result of one selfie analysis. Field names mirror the JSON the
/// model is asked to emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionAnalysis {
    pub skin_undertone: Undertone,
    #[serde(default = "neutral_confidence")]
    pub skin_undertone_confidence: f32,
    #[serde(default)]
    pub vein_appearance: Option<String>,
    pub contrast_level: ContrastLevel,
    pub hair_tone: HairTone,
    #[serde(default)]
    pub eye_color: String,
    pub recommended_season: ColorSeason,
    #[serde(default = "neutral_confidence")]
    pub confidence: f32,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub agrees_with_quiz: bool,
}

fn neutral_confidence() -> f32 {
    0.5
}

/// Failure modes of the collaborator. The resolver never surfaces these to
/// its caller; it degrades to the quiz-confirmed season instead.
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("Vision API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed analysis payload: {0}")]
    Malformed(String),

    #[error("Vision client not configured: {0}")]
    NotConfigured(String),
}

/// Trait seam for the selfie analysis call. `quiz_season`/`quiz_confidence`
/// are passed as a hybrid-validation hint, not as ground truth.
#[async_trait]
pub trait VisionAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        image_base64: &str,
        quiz_season: ColorSeason,
        quiz_confidence: u8,
    ) -> Result<VisionAnalysis, VisionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_deserialization() {
        let json = r#"{
            "skinUndertone": "warm",
            "skinUndertoneConfidence": 0.82,
            "veinAppearance": "greenish",
            "contrastLevel": "medium",
            "hairTone": "warm",
            "eyeColor": "amber",
            "recommendedSeason": "warm_autumn",
            "confidence": 0.74,
            "reasoning": "golden skin cast with muted depth",
            "agreesWithQuiz": false
        }"#;
        let analysis: VisionAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.skin_undertone, Undertone::Warm);
        assert_eq!(analysis.recommended_season, ColorSeason::WarmAutumn);
        assert!(!analysis.agrees_with_quiz);
    }

    #[test]
    fn test_missing_optional_fields_get_defaults() {
        let json = r#"{
            "skinUndertone": "cool",
            "contrastLevel": "high",
            "hairTone": "cool",
            "recommendedSeason": "cool_winter"
        }"#;
        let analysis: VisionAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.confidence, 0.5);
        assert_eq!(analysis.skin_undertone_confidence, 0.5);
        assert!(!analysis.agrees_with_quiz);
        assert!(analysis.eye_color.is_empty());
    }

    #[test]
    fn test_unknown_undertone_is_rejected() {
        let json = r#"{
            "skinUndertone": "olive",
            "contrastLevel": "high",
            "hairTone": "cool",
            "recommendedSeason": "cool_winter"
        }"#;
        assert!(serde_json::from_str::<VisionAnalysis>(json).is_err());
    }
}
