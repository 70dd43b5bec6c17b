// src/color/mod.rs
//! Hex color parsing and the loose perceptual palette matcher.

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Distance under which two colors count as a match. Tuned empirically for a
/// "loose" match in plain RGB space; this is not a perceptual color space, so
/// the threshold over-matches in greens and under-matches in blues. Good
/// enough for closet filtering.
pub const MATCH_THRESHOLD: f64 = 60.0;

/// Parse a `#RRGGBB` (or `RRGGBB`) string. Anything else returns `None`.
pub fn parse_hex(color: &str) -> Option<Rgb> {
    let hex = color.trim().strip_prefix('#').unwrap_or(color.trim());
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Euclidean distance between two colors in RGB space.
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// True if any item color sits strictly within [`MATCH_THRESHOLD`] of any
/// palette color. Unparseable entries on either side are skipped and never
/// match. O(n·m) over two small lists; empty input on either side is false.
pub fn palette_match<A: AsRef<str>, B: AsRef<str>>(item_colors: &[A], palette_colors: &[B]) -> bool {
    for item_color in item_colors {
        let Some(item_rgb) = parse_hex(item_color.as_ref()) else {
            continue;
        };
        for palette_color in palette_colors {
            let Some(palette_rgb) = parse_hex(palette_color.as_ref()) else {
                continue;
            };
            if distance(item_rgb, palette_rgb) < MATCH_THRESHOLD {
                return true;
            }
        }
    }
    false
}
