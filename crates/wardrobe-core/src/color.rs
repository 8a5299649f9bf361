//! Color conversion: CSS names and hex strings to CIELAB (D65).
//!
//! Garments store a precomputed Lab triple; conversion happens once at
//! entry time, never inside the scoring loop.

use crate::errors::ColorError;
use crate::types::LabColor;

/// Common CSS color names. Lookup is case-insensitive.
const CSS_NAMES: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("silver", "#c0c0c0"),
    ("dimgray", "#696969"),
    ("darkgray", "#a9a9a9"),
    ("lightgray", "#d3d3d3"),
    ("gainsboro", "#dcdcdc"),
    ("red", "#ff0000"),
    ("darkred", "#8b0000"),
    ("crimson", "#dc143c"),
    ("maroon", "#800000"),
    ("salmon", "#fa8072"),
    ("orange", "#ffa500"),
    ("coral", "#ff7f50"),
    ("gold", "#ffd700"),
    ("yellow", "#ffff00"),
    ("khaki", "#f0e68c"),
    ("beige", "#f5f5dc"),
    ("ivory", "#fffff0"),
    ("cream", "#fffdd0"),
    ("tan", "#d2b48c"),
    ("brown", "#a52a2a"),
    ("chocolate", "#d2691e"),
    ("sienna", "#a0522d"),
    ("olive", "#808000"),
    ("green", "#008000"),
    ("darkgreen", "#006400"),
    ("forestgreen", "#228b22"),
    ("lime", "#00ff00"),
    ("teal", "#008080"),
    ("cyan", "#00ffff"),
    ("turquoise", "#40e0d0"),
    ("blue", "#0000ff"),
    ("navy", "#000080"),
    ("royalblue", "#4169e1"),
    ("steelblue", "#4682b4"),
    ("skyblue", "#87ceeb"),
    ("lightblue", "#add8e6"),
    ("denim", "#1560bd"),
    ("indigo", "#4b0082"),
    ("purple", "#800080"),
    ("violet", "#ee82ee"),
    ("lavender", "#e6e6fa"),
    ("magenta", "#ff00ff"),
    ("pink", "#ffc0cb"),
    ("hotpink", "#ff69b4"),
    ("burgundy", "#800020"),
    ("charcoal", "#36454f"),
];

/// Resolve a CSS color name to its hex string.
pub fn name_to_hex(name: &str) -> Result<&'static str, ColorError> {
    let lowered = name.trim().to_ascii_lowercase();
    CSS_NAMES
        .iter()
        .find(|(n, _)| *n == lowered)
        .map(|(_, hex)| *hex)
        .ok_or_else(|| ColorError::UnknownName {
            name: name.to_string(),
        })
}

/// Parse a `#rrggbb` (or `rrggbb`) hex string into sRGB bytes.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex {
            value: hex.to_string(),
        });
    }
    let parse = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHex {
            value: hex.to_string(),
        })
    };
    Ok((
        parse(&digits[0..2])?,
        parse(&digits[2..4])?,
        parse(&digits[4..6])?,
    ))
}

/// Convert sRGB bytes to CIELAB under the D65 reference white.
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> LabColor {
    let rl = srgb_to_linear(r as f64 / 255.0);
    let gl = srgb_to_linear(g as f64 / 255.0);
    let bl = srgb_to_linear(b as f64 / 255.0);

    let x = 0.412_456_4 * rl + 0.357_576_1 * gl + 0.180_437_5 * bl;
    let y = 0.212_672_9 * rl + 0.715_152_2 * gl + 0.072_175_0 * bl;
    let z = 0.019_333_9 * rl + 0.119_192_0 * gl + 0.950_304_1 * bl;

    // D65 reference white
    let fx = lab_f(x / 0.950_47);
    let fy = lab_f(y / 1.0);
    let fz = lab_f(z / 1.088_83);

    LabColor {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Accept either a CSS name or a hex string; returns the normalized hex
/// plus the Lab triple stored on the garment.
pub fn parse_color(input: &str) -> Result<(String, LabColor), ColorError> {
    let hex = if input.trim().starts_with('#') {
        input.trim().to_ascii_lowercase()
    } else {
        match name_to_hex(input) {
            Ok(hex) => hex.to_string(),
            // Fall through: a bare 6-digit hex without '#'
            Err(err) => match hex_to_rgb(input) {
                Ok(_) => format!("#{}", input.trim().to_ascii_lowercase()),
                Err(_) => return Err(err),
            },
        }
    };
    let (r, g, b) = hex_to_rgb(&hex)?;
    Ok((hex, rgb_to_lab(r, g, b)))
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_rgb("#ff8000").unwrap(), (255, 128, 0));
        assert_eq!(hex_to_rgb("FF8000").unwrap(), (255, 128, 0));
        assert!(hex_to_rgb("#ff80").is_err());
        assert!(hex_to_rgb("#gg8000").is_err());
    }

    #[test]
    fn test_white_is_bright_and_neutral() {
        let lab = rgb_to_lab(255, 255, 255);
        assert!((lab.l - 100.0).abs() < 0.1);
        assert!(lab.chroma() < 0.1);
    }

    #[test]
    fn test_black_is_dark_and_neutral() {
        let lab = rgb_to_lab(0, 0, 0);
        assert!(lab.l.abs() < 0.1);
        assert!(lab.chroma() < 0.1);
    }

    #[test]
    fn test_pure_red_reference_values() {
        // CIELAB for sRGB red under D65: approx (53.24, 80.09, 67.20)
        let lab = rgb_to_lab(255, 0, 0);
        assert!((lab.l - 53.24).abs() < 0.5);
        assert!((lab.a - 80.09).abs() < 0.5);
        assert!((lab.b - 67.20).abs() < 0.5);
    }

    #[test]
    fn test_gray_has_low_chroma() {
        let lab = rgb_to_lab(128, 128, 128);
        assert!(lab.chroma() < 0.1);
    }

    #[test]
    fn test_name_lookup_case_insensitive() {
        assert_eq!(name_to_hex("Navy").unwrap(), "#000080");
        assert!(name_to_hex("sparkle").is_err());
    }

    #[test]
    fn test_parse_color_name_and_hex_agree() {
        let (hex_a, lab_a) = parse_color("navy").unwrap();
        let (hex_b, lab_b) = parse_color("#000080").unwrap();
        assert_eq!(hex_a, hex_b);
        assert!(lab_a.distance(&lab_b) < 1e-12);
    }

    #[test]
    fn test_parse_color_bare_hex() {
        let (hex, _) = parse_color("a52a2a").unwrap();
        assert_eq!(hex, "#a52a2a");
    }
}
