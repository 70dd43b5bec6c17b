// src/season/quiz.rs
//! Deterministic quiz scorer: eight answers -> two signed axes -> a season.
//!
//! Each answer option carries a fixed contribution to the warmth axis
//! (warm positive, cool negative) and/or the brightness axis (bright/high
//! contrast positive, muted/low contrast negative). Unknown answer values
//! contribute zero rather than being rejected.

use super::ColorSeason;
use serde::{Deserialize, Serialize};

/// The eight quiz answers. Values are the option keys from [`QUIZ_QUESTIONS`];
/// anything else is treated as "unsure" and weighs nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub veins: String,
    pub jewelry: String,
    pub white_shade: String,
    pub sun_reaction: String,
    pub hair: String,
    pub eyes: String,
    pub contrast: String,
    pub color_family: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub season: ColorSeason,
    /// 0-100, how decisively the answers pointed at one quadrant.
    pub confidence: u8,
    pub warmth: i32,
    pub brightness: i32,
}

/// Score the quiz. Pure and deterministic: identical answers always yield an
/// identical result.
pub fn score_quiz(answers: &QuizAnswers) -> QuizResult {
    let mut warmth: i32 = 0;
    let mut brightness: i32 = 0;
    let mut answered: i32 = 0;

    // Q1: vein color
    match answers.veins.as_str() {
        "green" => warmth += 2,
        "blue" => warmth -= 2,
        _ => {}
    }
    answered += 1;

    // Q2: jewelry metal
    match answers.jewelry.as_str() {
        "gold" => warmth += 2,
        "silver" => warmth -= 2,
        _ => {}
    }
    answered += 1;

    // Q3: white shade
    match answers.white_shade.as_str() {
        "ivory" => warmth += 1,
        "pure" => warmth -= 1,
        _ => {}
    }
    answered += 1;

    // Q4: sun reaction. Unrecognized values leave the question uncounted,
    // matching the shipped scorer (it shifts the confidence denominator).
    match answers.sun_reaction.as_str() {
        "tan" => {
            warmth += 1;
            brightness += 1;
            answered += 1;
        }
        "burn_tan" => answered += 1,
        "burn" => {
            warmth -= 1;
            brightness -= 1;
            answered += 1;
        }
        _ => {}
    }

    // Q5: natural hair color
    match answers.hair.as_str() {
        "golden" => warmth += 2,
        "ash" => warmth -= 2,
        "black" => brightness += 1,
        _ => {}
    }
    answered += 1;

    // Q6: eye color
    match answers.eyes.as_str() {
        "warm_brown" => warmth += 1,
        "cool_blue" => warmth -= 1,
        "dark" => brightness += 1,
        _ => {}
    }
    answered += 1;

    // Q7: skin/hair/eye contrast
    match answers.contrast.as_str() {
        "high" => brightness += 2,
        "low" => brightness -= 2,
        _ => {}
    }
    answered += 1;

    // Q8: which color family makes you glow. Same uncounted-when-unknown
    // behavior as Q4.
    match answers.color_family.as_str() {
        "warm_bright" => {
            warmth += 2;
            brightness += 2;
            answered += 1;
        }
        "cool_soft" => {
            warmth -= 2;
            brightness -= 2;
            answered += 1;
        }
        "warm_rich" => {
            warmth += 2;
            brightness -= 2;
            answered += 1;
        }
        "cool_bright" => {
            warmth -= 2;
            brightness += 2;
            answered += 1;
        }
        _ => {}
    }

    let season = classify(warmth, brightness);

    // Confidence: fraction of the maximum attainable axis magnitude.
    let max_possible = answered * 2;
    let actual = warmth.abs() + brightness.abs();
    let confidence = if max_possible > 0 {
        (((actual as f64 / max_possible as f64) * 100.0).round() as i64).min(100) as u8
    } else {
        0
    };

    QuizResult {
        season,
        confidence,
        warmth,
        brightness,
    }
}

/// Quadrant classification with the zero-axis tie-break.
///
/// Known asymmetry, kept deliberately: the tie-break can never produce
/// `WarmAutumn`. A zero warmth axis falls through to the brightness branch,
/// which only chooses between `CoolWinter` and `CoolSummer`.
fn classify(warmth: i32, brightness: i32) -> ColorSeason {
    if warmth > 0 && brightness > 0 {
        ColorSeason::WarmSpring
    } else if warmth < 0 && brightness < 0 {
        ColorSeason::CoolSummer
    } else if warmth > 0 && brightness < 0 {
        ColorSeason::WarmAutumn
    } else if warmth < 0 && brightness > 0 {
        ColorSeason::CoolWinter
    } else if warmth.abs() > brightness.abs() {
        if warmth > 0 {
            ColorSeason::WarmSpring
        } else {
            ColorSeason::CoolSummer
        }
    } else if brightness > 0 {
        ColorSeason::CoolWinter
    } else {
        ColorSeason::CoolSummer
    }
}

/// One selectable option of a quiz question.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A quiz question with its fixed option set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [QuizOption],
}

/// The onboarding quiz, in presentation order.
pub static QUIZ_QUESTIONS: [QuizQuestion; 8] = [
    QuizQuestion {
        id: "veins",
        question: "Look at your wrist veins in natural light. What color are they?",
        options: &[
            QuizOption { value: "green", label: "Green/olive" },
            QuizOption { value: "blue", label: "Blue/purple" },
            QuizOption { value: "both", label: "Both/hard to tell" },
        ],
    },
    QuizQuestion {
        id: "jewelry",
        question: "Which metal jewelry looks best on you?",
        options: &[
            QuizOption { value: "gold", label: "Gold/rose gold/copper" },
            QuizOption { value: "silver", label: "Silver/white gold/platinum" },
            QuizOption { value: "both", label: "Both equally" },
        ],
    },
    QuizQuestion {
        id: "white_shade",
        question: "Which white shade looks better on you?",
        options: &[
            QuizOption { value: "ivory", label: "Ivory/cream/off-white" },
            QuizOption { value: "pure", label: "Pure white/bright white" },
            QuizOption { value: "unsure", label: "Not sure" },
        ],
    },
    QuizQuestion {
        id: "sun_reaction",
        question: "How does your skin react to sun exposure?",
        options: &[
            QuizOption { value: "tan", label: "Tan easily to golden/bronze" },
            QuizOption { value: "burn_tan", label: "Burn first then may tan" },
            QuizOption { value: "burn", label: "Burn easily, rarely tan" },
        ],
    },
    QuizQuestion {
        id: "hair",
        question: "What is your natural hair color?",
        options: &[
            QuizOption { value: "golden", label: "Golden blonde/auburn/warm brown with gold tones" },
            QuizOption { value: "ash", label: "Ash blonde/brown (no gold)" },
            QuizOption { value: "black", label: "Black/very dark brown" },
            QuizOption { value: "medium", label: "Medium brown" },
        ],
    },
    QuizQuestion {
        id: "eyes",
        question: "What is your eye color?",
        options: &[
            QuizOption { value: "warm_brown", label: "Warm brown/amber/hazel with gold/warm blue" },
            QuizOption { value: "cool_blue", label: "Gray/blue-gray/cool blue/soft brown" },
            QuizOption { value: "dark", label: "Dark brown/black" },
            QuizOption { value: "green", label: "Green/hazel" },
        ],
    },
    QuizQuestion {
        id: "contrast",
        question: "What is the contrast between your skin, hair, and eyes?",
        options: &[
            QuizOption { value: "high", label: "High contrast (very different tones)" },
            QuizOption { value: "low", label: "Low contrast (similar tones)" },
            QuizOption { value: "medium", label: "Medium contrast" },
        ],
    },
    QuizQuestion {
        id: "color_family",
        question: "Which colors make you glow?",
        options: &[
            QuizOption { value: "warm_bright", label: "Warm bright: coral/peach/turquoise" },
            QuizOption { value: "cool_soft", label: "Cool soft: lavender/dusty rose/mauve" },
            QuizOption { value: "warm_rich", label: "Warm rich: rust/olive/mustard" },
            QuizOption { value: "cool_bright", label: "Cool bright: royal blue/magenta/emerald" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_warm_bright() -> QuizAnswers {
        QuizAnswers {
            veins: "green".into(),
            jewelry: "gold".into(),
            white_shade: "ivory".into(),
            sun_reaction: "tan".into(),
            hair: "golden".into(),
            eyes: "warm_brown".into(),
            contrast: "high".into(),
            color_family: "warm_bright".into(),
        }
    }

    #[test]
    fn test_deterministic() {
        let answers = all_warm_bright();
        let a = score_quiz(&answers);
        let b = score_quiz(&answers);
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_warm_bright_is_full_confidence_spring() {
        let result = score_quiz(&all_warm_bright());
        assert_eq!(result.season, ColorSeason::WarmSpring);
        // warmth 2+2+1+1+2+1+2 = 11, brightness 1+2+2 = 5: 16 of max 16
        assert_eq!(result.warmth, 11);
        assert_eq!(result.brightness, 5);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_all_cool_muted() {
        let answers = QuizAnswers {
            veins: "blue".into(),
            jewelry: "silver".into(),
            white_shade: "pure".into(),
            sun_reaction: "burn".into(),
            hair: "ash".into(),
            eyes: "cool_blue".into(),
            contrast: "low".into(),
            color_family: "cool_soft".into(),
        };
        let result = score_quiz(&answers);
        assert_eq!(result.season, ColorSeason::CoolSummer);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_confidence_bounds() {
        let result = score_quiz(&QuizAnswers::default());
        assert!(result.confidence <= 100);
        assert_eq!(result.confidence, 0);
        // Unknown values are permissively ignored, not rejected.
        assert_eq!(result.warmth, 0);
        assert_eq!(result.brightness, 0);
    }

    #[test]
    fn test_zero_warmth_fallback_never_warm_autumn() {
        // blue veins -2w, gold jewelry +2w, ivory white +1w, burn -1w-1b,
        // low contrast -2b: nets to warmth 0, brightness -3.
        let answers = QuizAnswers {
            veins: "blue".into(),
            jewelry: "gold".into(),
            white_shade: "ivory".into(),
            sun_reaction: "burn".into(),
            contrast: "low".into(),
            ..Default::default()
        };
        let result = score_quiz(&answers);
        assert_eq!(result.warmth, 0);
        assert_eq!(result.brightness, -3);
        // The tie-break picks along the brightness axis and can only return
        // CoolWinter or CoolSummer: WarmAutumn is unreachable from a tie.
        assert_eq!(result.season, ColorSeason::CoolSummer);
    }

    #[test]
    fn test_equal_axes_tie_goes_to_brightness_branch() {
        // warmth 0, brightness 0 -> brightness branch, non-positive -> CoolSummer
        let result = score_quiz(&QuizAnswers::default());
        assert_eq!(result.season, ColorSeason::CoolSummer);
    }

    #[test]
    fn test_warm_muted_still_reachable_by_quadrant() {
        let answers = QuizAnswers {
            veins: "green".into(),
            jewelry: "gold".into(),
            contrast: "low".into(),
            color_family: "warm_rich".into(),
            ..Default::default()
        };
        let result = score_quiz(&answers);
        assert!(result.warmth > 0 && result.brightness < 0);
        assert_eq!(result.season, ColorSeason::WarmAutumn);
    }

    #[test]
    fn test_question_catalog_matches_answer_fields() {
        let ids: Vec<&str> = QUIZ_QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            vec![
                "veins",
                "jewelry",
                "white_shade",
                "sun_reaction",
                "hair",
                "eyes",
                "contrast",
                "color_family"
            ]
        );
        for q in QUIZ_QUESTIONS.iter() {
            assert!(q.options.len() >= 3);
        }
    }
}
