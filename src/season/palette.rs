// src/season/palette.rs
//! The static season → palette table. Built once at startup, never mutated.

use super::ColorSeason;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Recommended colors and styling guidance for one season.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonPalette {
    /// Twelve colors that flatter this season most.
    pub best: Vec<&'static str>,
    /// Neutral anchors to build outfits around.
    pub neutrals: Vec<&'static str>,
    /// Colors that fight this season's undertone.
    pub avoid: Vec<&'static str>,
    pub tips: Vec<&'static str>,
    pub styling_advice: &'static str,
}

/// Look up the palette for a season.
pub fn palette(season: ColorSeason) -> &'static SeasonPalette {
    &PALETTES[&season]
}

static PALETTES: Lazy<HashMap<ColorSeason, SeasonPalette>> = Lazy::new(|| {
    let mut table = HashMap::new();

    table.insert(
        ColorSeason::WarmSpring,
        SeasonPalette {
            best: vec![
                "#FFB347", // peach
                "#FF6B6B", // coral
                "#FFA07A", // salmon
                "#FFD700", // gold
                "#98D8C8", // aqua
                "#87CEEB", // warm blue
                "#DDA0DD", // warm lavender
                "#F4A460", // camel
                "#CD853F", // tan
                "#D2691E", // warm brown
                "#FF69B4", // warm pink
                "#32CD32", // bright green
            ],
            neutrals: vec![
                "#FFFAF0", // ivory
                "#F5DEB3", // wheat
                "#DEB887", // camel
                "#D2B48C", // tan
                "#BC8F8F", // rosy brown
                "#8B7355", // warm brown
            ],
            avoid: vec![
                "#000000", // black
                "#FFFFFF", // pure white
                "#4B0082", // indigo
                "#483D8B", // cool purple
            ],
            tips: vec![
                "Your best neutrals are cream, camel, and warm brown - not black and white",
                "You shine in warm, bright colors - don't be afraid of coral and peach!",
                "Gold jewelry is your secret weapon",
                "If wearing cool colors, balance with warm accessories",
            ],
            styling_advice: "You have warm undertones with bright, clear coloring. Your natural warmth radiates like spring sunshine! Focus on colors that are clear and warm.",
        },
    );

    table.insert(
        ColorSeason::CoolSummer,
        SeasonPalette {
            best: vec![
                "#B0C4DE", // light blue
                "#D8BFD8", // lavender
                "#DDA0DD", // plum
                "#FFB6C1", // soft pink
                "#FFC0CB", // dusty rose
                "#E6E6FA", // lavender
                "#778899", // slate
                "#708090", // slate gray
                "#4682B4", // soft blue
                "#87CEEB", // sky blue
                "#98D8C8", // soft teal
                "#C5B4E3", // soft purple
            ],
            neutrals: vec![
                "#F5F5F5", // soft white
                "#DCDCDC", // soft gray
                "#C0C0C0", // silver
                "#A9A9A9", // dark gray
                "#2F4F4F", // charcoal
            ],
            avoid: vec![
                "#FF4500", // orange-red
                "#FF8C00", // orange
                "#FFD700", // gold
                "#8B4513", // warm brown
            ],
            tips: vec![
                "Your secret weapon is soft, muted colors - not bright or bold",
                "Gray is your best neutral, not black or brown",
                "You look ethereal in soft pastels and dusty colors",
                "Silver jewelry enhances your cool coloring",
            ],
            styling_advice: "You have cool undertones with soft, muted coloring. Your gentle elegance is like a summer breeze.",
        },
    );

    table.insert(
        ColorSeason::WarmAutumn,
        SeasonPalette {
            best: vec![
                "#8B4513", // saddle brown
                "#A0522D", // sienna
                "#CD853F", // peru
                "#D2691E", // chocolate
                "#B8860B", // goldenrod
                "#DAA520", // mustard
                "#6B8E23", // olive
                "#556B2F", // dark olive
                "#8FBC8F", // sage
                "#BC8F8F", // rosy brown
                "#CD5C5C", // rust
                "#FF6347", // rust orange
            ],
            neutrals: vec![
                "#FFF8DC", // cream
                "#FAEBD7", // antique white
                "#F5DEB3", // wheat
                "#DEB887", // camel
                "#D2B48C", // tan
                "#8B7355", // coffee
            ],
            avoid: vec![
                "#000000", // black
                "#FFFFFF", // white
                "#FF1493", // hot pink
                "#00FFFF", // cyan
            ],
            tips: vec![
                "You're the queen of earthy, rich colors - embrace rust and olive!",
                "Brown is your black - it's more harmonious with your warmth",
                "Gold jewelry makes you glow",
                "You can wear all the warm autumnal colors others can't",
            ],
            styling_advice: "You have warm undertones with rich, earthy coloring. Your depth and warmth evoke autumn leaves.",
        },
    );

    table.insert(
        ColorSeason::CoolWinter,
        SeasonPalette {
            best: vec![
                "#000000", // black
                "#FFFFFF", // white
                "#000080", // navy
                "#4169E1", // royal blue
                "#0000FF", // true blue
                "#8B008B", // magenta
                "#9400D3", // violet
                "#FF1493", // deep pink
                "#DC143C", // crimson
                "#008B8B", // teal
                "#2E8B57", // emerald
                "#4B0082", // indigo
            ],
            neutrals: vec![
                "#FFFFFF", // white
                "#000000", // black
                "#2F4F4F", // slate
                "#708090", // gray
                "#000080", // navy
            ],
            avoid: vec![
                "#FF8C00", // orange
                "#FFD700", // gold
                "#F0E68C", // khaki
                "#D2B48C", // tan
            ],
            tips: vec![
                "You're one of the few who can wear true black and pure white!",
                "Bold, clear colors are your friends - don't shy away from brightness",
                "Silver jewelry enhances your cool, dramatic coloring",
                "High contrast is your signature - embrace it",
            ],
            styling_advice: "You have cool undertones with bright, high-contrast coloring. Your striking clarity is like winter snow.",
        },
    );

    table
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_hex;

    #[test]
    fn test_every_season_present() {
        for season in ColorSeason::all() {
            // panics on a missing key
            let _ = palette(season);
        }
    }

    #[test]
    fn test_palette_shape() {
        for season in ColorSeason::all() {
            let p = palette(season);
            assert_eq!(p.best.len(), 12, "{} best colors", season);
            assert!((5..=6).contains(&p.neutrals.len()), "{} neutrals", season);
            assert_eq!(p.avoid.len(), 4, "{} avoid colors", season);
            assert!(!p.tips.is_empty());
        }
    }

    #[test]
    fn test_every_color_is_valid_hex() {
        for season in ColorSeason::all() {
            let p = palette(season);
            for color in p.best.iter().chain(p.neutrals.iter()).chain(p.avoid.iter()) {
                assert!(parse_hex(color).is_some(), "bad hex {} in {}", color, season);
            }
        }
    }
}
