// src/season/mod.rs
// Color season taxonomy, the static palette table, and the quiz scorer.

pub mod palette;
pub mod quiz;

pub use palette::{SeasonPalette, palette};
pub use quiz::{QuizAnswers, QuizResult, score_quiz};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four personal-color archetypes. The snake_case names are the
/// wire format shared with the vision API and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSeason {
    WarmSpring,
    CoolSummer,
    WarmAutumn,
    CoolWinter,
}

impl ColorSeason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSeason::WarmSpring => "warm_spring",
            ColorSeason::CoolSummer => "cool_summer",
            ColorSeason::WarmAutumn => "warm_autumn",
            ColorSeason::CoolWinter => "cool_winter",
        }
    }

    /// Get all seasons, in palette-table order.
    pub fn all() -> [ColorSeason; 4] {
        [
            ColorSeason::WarmSpring,
            ColorSeason::CoolSummer,
            ColorSeason::WarmAutumn,
            ColorSeason::CoolWinter,
        ]
    }

    /// Human-facing season name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ColorSeason::WarmSpring => "Warm Spring",
            ColorSeason::CoolSummer => "Cool Summer",
            ColorSeason::WarmAutumn => "Warm Autumn",
            ColorSeason::CoolWinter => "Cool Winter",
        }
    }

    /// Short description shown alongside quiz results.
    pub fn description(&self) -> &'static str {
        match self {
            ColorSeason::WarmSpring => {
                "You shine in warm, bright colors! Your coloring is fresh, vibrant, and energetic. Think of a garden in full bloom."
            }
            ColorSeason::CoolSummer => {
                "Your secret weapon is soft, muted colors. You look elegant and ethereal in pastels and dusty tones."
            }
            ColorSeason::WarmAutumn => {
                "You are the queen of earthy, rich colors. Your warm undertones glow in rust, olive, and golden hues."
            }
            ColorSeason::CoolWinter => {
                "You are one of the few who can wear true black and pure white! Your high contrast demands bold, clear colors."
            }
        }
    }
}

impl fmt::Display for ColorSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColorSeason {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warm_spring" => Ok(ColorSeason::WarmSpring),
            "cool_summer" => Ok(ColorSeason::CoolSummer),
            "warm_autumn" => Ok(ColorSeason::WarmAutumn),
            "cool_winter" => Ok(ColorSeason::CoolWinter),
            _ => Err(anyhow::anyhow!("Unknown color season: {}", s)),
        }
    }
}
