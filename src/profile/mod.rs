// src/profile/mod.rs
//! The color profile and its two-phase resolution protocol.
//!
//! Phase one is the pure quiz scorer. Phase two consults the vision
//! collaborator and either finalizes directly (agreement, or vision failure
//! degrading to the quiz season) or hands a conflict back to the caller for
//! user arbitration. Finalizing always fully replaces the stored profile.

pub mod store;

pub use store::ProfileStore;

use crate::season::{ColorSeason, QuizAnswers, QuizResult, SeasonPalette, palette, score_quiz};
use crate::vision::{
    ContrastLevel, HairTone, Undertone, VisionAnalysis, VisionAnalyzer,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// The singleton personal-color profile. At most one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorProfile {
    // Quiz phase
    pub quiz_season: ColorSeason,
    pub quiz_confidence: u8,
    pub quiz_answers: QuizAnswers,

    // Vision phase (absent when the service was unavailable)
    pub vision: Option<VisionAnalysis>,

    // Finalized result
    pub recommended_season: ColorSeason,
    /// 0.0-1.0, carried from the vision analysis (or the neutral fallback).
    pub confidence: f32,
    pub reasoning: String,
    pub best_colors: Vec<String>,
    pub neutral_colors: Vec<String>,
    pub avoid_colors: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Both candidate seasons of an unresolved disagreement, with enough context
/// for the UI to present the choice.
#[derive(Debug, Clone)]
pub struct SeasonConflict {
    pub quiz: QuizResult,
    pub answers: QuizAnswers,
    pub vision: VisionAnalysis,
    pub quiz_palette: &'static SeasonPalette,
    pub vision_palette: &'static SeasonPalette,
}

/// Outcome of one resolution attempt.
#[derive(Debug)]
pub enum Resolution {
    Finalized(ColorProfile),
    Conflict(SeasonConflict),
}

pub struct ColorProfileResolver<V: VisionAnalyzer> {
    vision: V,
    store: ProfileStore,
}

impl<V: VisionAnalyzer> ColorProfileResolver<V> {
    pub fn new(vision: V, store: ProfileStore) -> Self {
        Self { vision, store }
    }

    /// Run phase two against the quiz answers and the captured selfie.
    ///
    /// Any vision failure degrades gracefully: the quiz season is treated as
    /// confirmed and the user is never blocked on the external service.
    pub async fn resolve(&self, answers: QuizAnswers, image_base64: &str) -> Result<Resolution> {
        let quiz = score_quiz(&answers);

        let (analysis, vision_available) = match self
            .vision
            .analyze(image_base64, quiz.season, quiz.confidence)
            .await
        {
            Ok(a) => (a, true),
            Err(e) => {
                warn!(error = %e, season = %quiz.season, "vision analysis failed, confirming quiz season");
                (fallback_analysis(&quiz), false)
            }
        };

        if analysis.recommended_season == quiz.season || analysis.agrees_with_quiz {
            let profile = self
                .finalize(&quiz, &answers, &analysis, vision_available, analysis.recommended_season)
                .await?;
            Ok(Resolution::Finalized(profile))
        } else {
            info!(
                quiz = %quiz.season,
                vision = %analysis.recommended_season,
                "quiz and vision seasons disagree, deferring to user"
            );
            Ok(Resolution::Conflict(SeasonConflict {
                quiz_palette: palette(quiz.season),
                vision_palette: palette(analysis.recommended_season),
                quiz,
                answers,
                vision: analysis,
            }))
        }
    }

    /// Finalize a conflict with the season the user chose.
    pub async fn resolve_conflict(
        &self,
        conflict: &SeasonConflict,
        chosen: ColorSeason,
    ) -> Result<ColorProfile> {
        self.finalize(&conflict.quiz, &conflict.answers, &conflict.vision, true, chosen)
            .await
    }

    /// Build the profile from the palette table and atomically replace any
    /// prior one.
    async fn finalize(
        &self,
        quiz: &QuizResult,
        answers: &QuizAnswers,
        analysis: &VisionAnalysis,
        vision_available: bool,
        season: ColorSeason,
    ) -> Result<ColorProfile> {
        let p = palette(season);
        let now = Utc::now();

        let profile = ColorProfile {
            quiz_season: quiz.season,
            quiz_confidence: quiz.confidence,
            quiz_answers: answers.clone(),
            vision: vision_available.then(|| analysis.clone()),
            recommended_season: season,
            confidence: analysis.confidence,
            reasoning: analysis.reasoning.clone(),
            best_colors: p.best.iter().map(|c| c.to_string()).collect(),
            neutral_colors: p.neutrals.iter().map(|c| c.to_string()).collect(),
            avoid_colors: p.avoid.iter().map(|c| c.to_string()).collect(),
            created_at: now,
            updated_at: now,
        };

        self.store.replace(&profile).await?;
        info!(season = %season, confidence = profile.confidence, "color profile finalized");
        Ok(profile)
    }
}

/// Neutral stand-in when the vision service is down: confirms the quiz season
/// at middling confidence so resolution proceeds without a special case.
fn fallback_analysis(quiz: &QuizResult) -> VisionAnalysis {
    let undertone = match quiz.season {
        ColorSeason::WarmSpring | ColorSeason::WarmAutumn => Undertone::Warm,
        ColorSeason::CoolSummer | ColorSeason::CoolWinter => Undertone::Cool,
    };

    VisionAnalysis {
        skin_undertone: undertone,
        skin_undertone_confidence: 0.5,
        vein_appearance: None,
        contrast_level: ContrastLevel::Medium,
        hair_tone: HairTone::Neutral,
        eye_color: String::new(),
        recommended_season: quiz.season,
        confidence: 0.5,
        reasoning: "Image analysis was unavailable; season confirmed from quiz answers.".to_string(),
        agrees_with_quiz: true,
    }
}
