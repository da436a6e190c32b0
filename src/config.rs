//! # Output Configuration
//!
//! Output dimension presets and the defaults a render falls back on.
//!
//! ```
//! use barcraft::config::OutputSize;
//!
//! assert_eq!(OutputSize::parse("640x320").unwrap(), OutputSize::new(640, 320));
//! assert_eq!(OutputSize::parse("300").unwrap(), OutputSize::new(300, 300));
//! assert_eq!(OutputSize::parse("linear").unwrap(), OutputSize::LINEAR);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::linear::raster::{QUIET_ZONE_BARS, VERTICAL_MARGIN};
use crate::matrix::ErrorCorrection;
use crate::render::styled::QUIET_ZONE_MODULES;
use crate::symbology::Symbology;

/// Largest accepted side, in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Output raster dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl OutputSize {
    pub const SQUARE_SMALL: Self = Self::new(256, 256);
    pub const SQUARE: Self = Self::new(512, 512);
    pub const SQUARE_LARGE: Self = Self::new(1024, 1024);
    pub const LINEAR: Self = Self::new(600, 300);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Named presets as `(name, size)`.
    pub fn presets() -> [(&'static str, Self); 4] {
        [
            ("small", Self::SQUARE_SMALL),
            ("square", Self::SQUARE),
            ("large", Self::SQUARE_LARGE),
            ("linear", Self::LINEAR),
        ]
    }

    /// Default size for a symbology: square for 2D, wide for 1D.
    pub fn default_for(symbology: Symbology) -> Self {
        if symbology.is_2d() {
            Self::SQUARE
        } else {
            Self::LINEAR
        }
    }

    /// Parse a size.
    ///
    /// Formats:
    /// - `"WIDTHxHEIGHT"` (e.g. `"600x300"`)
    /// - `"SIDE"` → square (e.g. `"512"`)
    /// - a preset name: `small`, `square`, `large`, `linear`
    pub fn parse(s: &str) -> Result<Self, String> {
        let lower = s.trim().to_lowercase();

        if let Some((_, size)) = Self::presets().into_iter().find(|(name, _)| *name == lower) {
            return Ok(size);
        }

        let size = if let Some((w, h)) = lower.split_once('x') {
            let width: u32 = w.parse().map_err(|_| format!("Invalid width: {}", w))?;
            let height: u32 = h.parse().map_err(|_| format!("Invalid height: {}", h))?;
            Self::new(width, height)
        } else {
            let side: u32 = lower.parse().map_err(|_| {
                format!(
                    "Unknown size '{}'. Use WIDTHxHEIGHT, a single side, or one of: small, square, large, linear",
                    s
                )
            })?;
            Self::new(side, side)
        };

        size.validate()
    }

    /// Reject zero or oversized dimensions.
    pub fn validate(self) -> Result<Self, String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("Size must be non-zero, got {}", self));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(format!(
                "Size {} exceeds the {}px limit",
                self, MAX_DIMENSION
            ));
        }
        Ok(self)
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for OutputSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Fallbacks applied when a render request leaves a setting open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderDefaults {
    pub error_correction: ErrorCorrection,
    /// Applied to QR whenever a logo covers the center.
    pub logo_error_correction: ErrorCorrection,
    pub quiet_zone_modules: usize,
    pub linear_quiet_zone_bars: usize,
    pub linear_vertical_margin: u32,
}

impl RenderDefaults {
    pub const STANDARD: Self = Self {
        error_correction: ErrorCorrection::Medium,
        logo_error_correction: ErrorCorrection::High,
        quiet_zone_modules: QUIET_ZONE_MODULES,
        linear_quiet_zone_bars: QUIET_ZONE_BARS,
        linear_vertical_margin: VERTICAL_MARGIN,
    };
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}
