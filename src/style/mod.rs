//! # Style Values
//!
//! Colors, shape tags and the per-render [`StyleSpec`].
//!
//! ## Example
//!
//! ```
//! use barcraft::style::{Color, Shape, StyleSpec};
//!
//! let style = StyleSpec::new(512)
//!     .module_shape(Shape::Circle)
//!     .finder_shape(Shape::RoundedSquare)
//!     .foreground(Color::rgb(0x1a, 0x23, 0x7e));
//! ```

pub mod palette;

pub use palette::PresetPalette;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("Invalid color: {}", s))
        };

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid color: {}", s));
        }

        match hex.len() {
            3 => {
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                Self::from_hex(&expanded)
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(format!("Invalid color: {}", s)),
        }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

/// Outline family for modules and finder patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    #[default]
    Square,
    RoundedSquare,
    Circle,
    Diamond,
    Hexagon,
    Star,
    Heart,
    Leaf,
    Clover,
    Raindrop,
}

impl Shape {
    pub const ALL: [Shape; 10] = [
        Shape::Square,
        Shape::RoundedSquare,
        Shape::Circle,
        Shape::Diamond,
        Shape::Hexagon,
        Shape::Star,
        Shape::Heart,
        Shape::Leaf,
        Shape::Clover,
        Shape::Raindrop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::RoundedSquare => "rounded_square",
            Shape::Circle => "circle",
            Shape::Diamond => "diamond",
            Shape::Hexagon => "hexagon",
            Shape::Star => "star",
            Shape::Heart => "heart",
            Shape::Leaf => "leaf",
            Shape::Clover => "clover",
            Shape::Raindrop => "raindrop",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "rounded" | "roundedsquare" => return Ok(Shape::RoundedSquare),
            "dot" => return Ok(Shape::Circle),
            _ => {}
        }
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown shape '{}'. Expected one of: {}",
                    s,
                    Shape::ALL.map(Shape::name).join(", ")
                )
            })
    }
}

/// Visual style for one render call.
///
/// Pure value; nothing here outlives the render.
#[derive(Debug, Clone)]
pub struct StyleSpec {
    pub background: Color,
    pub foreground: Color,
    pub module_shape: Shape,
    pub finder_shape: Shape,
    pub logo: Option<RgbaImage>,
    pub logo_background: Color,
    /// Recolor every logo pixel to this color, keeping its alpha.
    pub logo_tint: Option<Color>,
    /// Side of the square output in pixels.
    pub size: u32,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self::new(512)
    }
}

impl StyleSpec {
    /// Black square modules on white, no logo.
    pub fn new(size: u32) -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            module_shape: Shape::Square,
            finder_shape: Shape::Square,
            logo: None,
            logo_background: Color::WHITE,
            logo_tint: None,
            size,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn module_shape(mut self, shape: Shape) -> Self {
        self.module_shape = shape;
        self
    }

    pub fn finder_shape(mut self, shape: Shape) -> Self {
        self.finder_shape = shape;
        self
    }

    pub fn logo(mut self, logo: RgbaImage) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn logo_background(mut self, color: Color) -> Self {
        self.logo_background = color;
        self
    }

    pub fn logo_tint(mut self, color: Color) -> Self {
        self.logo_tint = Some(color);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Apply a preset's background, foreground and logo background.
    pub fn with_palette(mut self, palette: &PresetPalette) -> Self {
        self.background = palette.background;
        self.foreground = palette.foreground;
        self.logo_background = palette.logo_background;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_roundtrip() {
        let color = Color::from_hex("#1A237E").unwrap();
        assert_eq!(color, Color::rgb(0x1a, 0x23, 0x7e));
        assert_eq!(color.to_string(), "#1a237e");
    }

    #[test]
    fn test_color_short_and_alpha() {
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        let c = Color::from_hex("#00000080").unwrap();
        assert_eq!(c.a, 0x80);
        assert_eq!(c.to_string(), "#00000080");
    }

    #[test]
    fn test_color_invalid() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#ééé").is_err());
        assert!(Color::from_hex("#+f+f+f").is_err());
        assert!(Color::from_hex("+ff").is_err());
    }

    #[test]
    fn test_color_serde() {
        let c: Color = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(c, Color::rgb(255, 0, 0));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ff0000\"");
    }

    #[test]
    fn test_shape_names_roundtrip() {
        for shape in Shape::ALL {
            assert_eq!(shape.name().parse::<Shape>(), Ok(shape));
        }
        assert_eq!("rounded-square".parse::<Shape>(), Ok(Shape::RoundedSquare));
        assert!("triangle".parse::<Shape>().is_err());
    }

    #[test]
    fn test_shape_serde_matches_name() {
        for shape in Shape::ALL {
            let json = serde_json::to_string(&shape).unwrap();
            assert_eq!(json, format!("\"{}\"", shape.name()));
        }
    }

    #[test]
    fn test_style_builder() {
        let style = StyleSpec::new(300)
            .module_shape(Shape::Star)
            .finder_shape(Shape::Circle)
            .logo_tint(Color::BLACK);
        assert_eq!(style.size, 300);
        assert_eq!(style.module_shape, Shape::Star);
        assert_eq!(style.finder_shape, Shape::Circle);
        assert_eq!(style.logo_tint, Some(Color::BLACK));
        assert!(style.logo.is_none());
    }
}
