//! # Preset Palettes
//!
//! A curated set of color schemes. Every preset keeps a strong luminance
//! contrast between foreground and background so symbols stay scannable.

use serde::Serialize;

use super::Color;

/// A named color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetPalette {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub logo_background: Color,
}

impl PresetPalette {
    const fn new(name: &'static str, background: Color, foreground: Color) -> Self {
        Self {
            name,
            background,
            foreground,
            logo_background: background,
        }
    }
}

/// All registered palettes.
static PALETTES: &[PresetPalette] = &[
    PresetPalette::new("classic", Color::WHITE, Color::BLACK),
    PresetPalette::new("midnight", Color::rgb(0xf5, 0xf7, 0xff), Color::rgb(0x1a, 0x23, 0x7e)),
    PresetPalette::new("ocean", Color::rgb(0xe0, 0xf7, 0xfa), Color::rgb(0x00, 0x4d, 0x61)),
    PresetPalette::new("forest", Color::rgb(0xf1, 0xf8, 0xe9), Color::rgb(0x1b, 0x5e, 0x20)),
    PresetPalette::new("sunset", Color::rgb(0xff, 0xf3, 0xe0), Color::rgb(0xbf, 0x36, 0x0c)),
    PresetPalette::new("grape", Color::rgb(0xf3, 0xe5, 0xf5), Color::rgb(0x4a, 0x14, 0x8c)),
    PresetPalette::new("mono", Color::rgb(0xee, 0xee, 0xee), Color::rgb(0x21, 0x21, 0x21)),
];

/// Get all registered palettes.
pub fn all() -> &'static [PresetPalette] {
    PALETTES
}

/// Look up a palette by name (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static PresetPalette> {
    PALETTES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// List all palette names.
pub fn list_names() -> Vec<&'static str> {
    PALETTES.iter().map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// WCAG relative luminance.
    fn luminance(c: Color) -> f32 {
        let channel = |v: u8| {
            let v = v as f32 / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * channel(c.r) + 0.7152 * channel(c.g) + 0.0722 * channel(c.b)
    }

    #[test]
    fn test_registry_has_classic() {
        let classic = by_name("Classic").unwrap();
        assert_eq!(classic.background, Color::WHITE);
        assert_eq!(classic.foreground, Color::BLACK);
    }

    #[test]
    fn test_unknown_palette() {
        assert!(by_name("neon").is_none());
    }

    #[test]
    fn test_names_unique() {
        let mut names = list_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_palettes_have_contrast() {
        for palette in all() {
            let bg = luminance(palette.background);
            let fg = luminance(palette.foreground);
            let ratio = (bg + 0.05) / (fg + 0.05);
            assert!(ratio > 4.5, "{} contrast too low: {}", palette.name, ratio);
        }
    }
}
