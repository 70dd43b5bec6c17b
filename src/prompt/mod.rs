// src/prompt/mod.rs
//! Builders for the text blocks handed to the external reasoning service:
//! the gap-analysis request, the personal-color context injected into stylist
//! prompts, and the learned-preference summary.

use crate::closet::ClosetSnapshot;
use crate::preferences::PreferenceStats;
use crate::profile::ColorProfile;
use serde::{Deserialize, Serialize};

/// How the user splits their time, in percent. Feeds the lifestyle-vs-closet
/// mismatch diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleMix {
    pub work: u8,
    pub casual: u8,
    pub athletic: u8,
    pub social: u8,
}

impl Default for LifestyleMix {
    fn default() -> Self {
        Self {
            work: 40,
            casual: 40,
            athletic: 10,
            social: 10,
        }
    }
}

/// The minimal profile slice the gap analysis needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GapAnalysisProfile {
    pub gender: Option<String>,
    pub lifestyle: Option<LifestyleMix>,
}

/// Build the wardrobe gap-analysis request around a closet snapshot.
pub fn build_gap_analysis_prompt(snapshot: &ClosetSnapshot, profile: &GapAnalysisProfile) -> String {
    let lifestyle = profile.lifestyle.clone().unwrap_or_default();

    format!(
        r#"
Analyze this wardrobe for "Gaps" based on the user's profile and the Wardrobe Architecture knowledge.

USER PROFILE:
- Gender: {gender}
- Lifestyle: {lifestyle}

CLOSET SNAPSHOT:
- Total Items: {total}
- Categories: {categories}
- Colors: {colors}
- Occasions: {occasions}

TASK:
Perform a 4-point diagnostic:
1. **Basics & Essentials Gap**: Identify if they lack "connectors" (neutrals, plain tees, etc) for their gender.
2. **Lifestyle & Occasion Gap**: Compare their lifestyle % against their occasion density. (e.g. if they work 70% but have 10% work clothes).
3. **Color Theory Gap**: Identify "Color Islands" or lack of neutral anchors.
4. **The "Power Unlock" Piece**: Recommend ONE specific item that would mathematically unlock the most new combinations.

Format the output as a JSON object:
{{
  "basicsGap": {{ "status": "good|warning|critical", "message": "...", "missingItems": [] }},
  "lifestyleGap": {{ "status": "good|warning|critical", "message": "...", "mismatchScore": 0 }},
  "colorGap": {{ "status": "good|warning|critical", "message": "..." }},
  "powerUnlock": {{ "item": "...", "reason": "...", "unlockCount": 0 }}
}}
"#,
        gender = profile.gender.as_deref().unwrap_or("Not specified"),
        lifestyle = serde_json::to_string(&lifestyle).unwrap_or_default(),
        total = snapshot.total_items,
        categories = serde_json::to_string(&snapshot.category_counts).unwrap_or_default(),
        colors = serde_json::to_string(&snapshot.color_distribution).unwrap_or_default(),
        occasions = serde_json::to_string(&snapshot.occasion_density).unwrap_or_default(),
    )
}

/// The personal-color context block injected into stylist prompts when a
/// finalized profile exists.
pub fn build_color_context(profile: &ColorProfile) -> String {
    let undertone = profile
        .vision
        .as_ref()
        .map(|v| format!("{:?}", v.skin_undertone).to_lowercase())
        .unwrap_or_else(|| "unknown".to_string());
    let contrast = profile
        .vision
        .as_ref()
        .map(|v| format!("{:?}", v.contrast_level).to_lowercase())
        .unwrap_or_else(|| "medium".to_string());

    format!(
        r#"
## USER'S PERSONAL COLOR ANALYSIS (PCA)
Season: {season}
Skin Undertone: {undertone}
Contrast Level: {contrast}

BEST COLORS (prioritize these in outfit suggestions):
{best}

COLORS TO AVOID:
{avoid}

**IMPORTANT**: When suggesting outfits, ALWAYS prioritize items that match the user's best colors.
Explain how the colors complement their {undertone} undertones and {contrast} contrast.
If suggesting items in their "avoid" colors, warn them gently and suggest alternatives.
"#,
        season = profile.recommended_season.display_name(),
        best = profile.best_colors.join(", "),
        avoid = profile.avoid_colors.join(", "),
    )
}

/// Summarize the signed preference counters for recommendation prompts:
/// positive entries bias toward reuse, negative toward avoidance.
pub fn build_preference_context(stats: &PreferenceStats) -> String {
    let favored: Vec<&str> = sorted_keys(&stats.color_stats, true);
    let avoided: Vec<&str> = sorted_keys(&stats.color_stats, false);
    let combos: Vec<&str> = sorted_keys(&stats.combo_stats, true);

    if favored.is_empty() && avoided.is_empty() && combos.is_empty() {
        return String::new();
    }

    format!(
        r#"
## LEARNED PREFERENCES (from outfit ratings)
Colors the user likes: {favored}
Colors the user dislikes: {avoided}
Category combinations that worked: {combos}
Favor the liked colors and combinations; avoid re-suggesting disliked ones.
"#,
        favored = join_or_none(&favored),
        avoided = join_or_none(&avoided),
        combos = join_or_none(&combos),
    )
}

/// Top five positive (or negative) keys, strongest signal first.
fn sorted_keys(stats: &std::collections::HashMap<String, i64>, positive: bool) -> Vec<&str> {
    let mut entries: Vec<(&str, i64)> = stats
        .iter()
        .filter(|&(_, &v)| if positive { v > 0 } else { v < 0 })
        .map(|(k, &v)| (k.as_str(), v))
        .collect();
    entries.sort_by_key(|&(k, v)| (if positive { -v } else { v }, k));
    entries.into_iter().take(5).map(|(k, _)| k).collect()
}

fn join_or_none(keys: &[&str]) -> String {
    if keys.is_empty() {
        "none yet".to_string()
    } else {
        keys.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closet::{ClothingItem, build_snapshot};

    #[test]
    fn test_gap_prompt_includes_snapshot() {
        let items = vec![ClothingItem::new("shirt", vec!["#FFFFFF".to_string()])];
        let snapshot = build_snapshot(&items);
        let prompt = build_gap_analysis_prompt(&snapshot, &GapAnalysisProfile::default());
        assert!(prompt.contains("Total Items: 1"));
        assert!(prompt.contains("Not specified"));
        assert!(prompt.contains("Power Unlock"));
    }

    #[test]
    fn test_preference_context_empty_when_no_signal() {
        assert_eq!(build_preference_context(&PreferenceStats::default()), "");
    }

    #[test]
    fn test_preference_context_splits_signs() {
        let mut stats = PreferenceStats::default();
        stats.color_stats.insert("#ffffff".to_string(), 3);
        stats.color_stats.insert("#ff8c00".to_string(), -2);
        stats.combo_stats.insert("pants+shirt".to_string(), 2);

        let context = build_preference_context(&stats);
        assert!(context.contains("likes: #ffffff"));
        assert!(context.contains("dislikes: #ff8c00"));
        assert!(context.contains("pants+shirt"));
    }
}
