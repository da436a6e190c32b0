//! # Render Pipeline
//!
//! One entry point from a render request to a raster:
//!
//! ```text
//! EAN-13 / EAN-8 / UPC-A / Code 128
//!     content → linear::encode → render_bars                     → raster
//!
//! QR
//!     content → QrGenerator → extract_matrix → styled::render    → raster
//!
//! Aztec / PDF417
//!     content → generator   → extract_matrix → render_plain      → raster
//! ```
//!
//! Requests share nothing, so batches render in parallel.

use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::config::{OutputSize, RenderDefaults};
use crate::error::EncodeError;
use crate::linear;
use crate::matrix::{ErrorCorrection, extract_matrix, generator_for};
use crate::render;
use crate::style::StyleSpec;
use crate::symbology::Symbology;

/// A single render request.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub content: String,
    pub symbology: Symbology,
    /// `None` renders black on white with square modules.
    pub style: Option<StyleSpec>,
    pub output_width: u32,
    pub output_height: u32,
    /// `None` picks [`RenderDefaults`]; ignored by linear symbologies.
    pub error_correction: Option<ErrorCorrection>,
}

impl RenderRequest {
    /// Request at the symbology's default output size.
    pub fn new(content: impl Into<String>, symbology: Symbology) -> Self {
        let size = OutputSize::default_for(symbology);
        Self {
            content: content.into(),
            symbology,
            style: None,
            output_width: size.width,
            output_height: size.height,
            error_correction: None,
        }
    }

    pub fn style(mut self, style: StyleSpec) -> Self {
        self.style = Some(style);
        self
    }

    pub fn size(mut self, size: OutputSize) -> Self {
        self.output_width = size.width;
        self.output_height = size.height;
        self
    }

    pub fn error_correction(mut self, ec: ErrorCorrection) -> Self {
        self.error_correction = Some(ec);
        self
    }

    /// Error correction actually handed to the generator.
    ///
    /// An explicit level wins. Otherwise QR with a logo gets the logo level,
    /// everything else the default.
    pub fn effective_error_correction(&self) -> ErrorCorrection {
        let defaults = RenderDefaults::STANDARD;
        self.error_correction.unwrap_or_else(|| {
            let has_logo = self.style.as_ref().is_some_and(|s| s.logo.is_some());
            if self.symbology == Symbology::Qr && has_logo {
                defaults.logo_error_correction
            } else {
                defaults.error_correction
            }
        })
    }
}

/// Render one request.
pub fn render(request: &RenderRequest) -> Result<RgbaImage, EncodeError> {
    let symbology = request.symbology;
    if symbology.required_digit_length().is_none() && request.content.is_empty() {
        return Err(EncodeError::EmptyContent);
    }

    let style = request.style.clone().unwrap_or_default();

    if !symbology.is_2d() {
        let bars = linear::encode(&request.content, symbology)?;
        return linear::render_bars(
            &bars,
            request.output_width,
            request.output_height,
            style.background,
            style.foreground,
        );
    }

    let generator = generator_for(symbology).ok_or_else(|| EncodeError::Generator {
        symbology,
        reason: "no generator available".to_string(),
    })?;
    let ec = request.effective_error_correction();
    let bitmap = generator.generate(&request.content, ec)?;
    let matrix = extract_matrix(&bitmap)?;

    debug!(
        %symbology,
        ec = %ec,
        modules = matrix.size(),
        width = request.output_width,
        height = request.output_height,
        "rendering 2D symbol"
    );

    match symbology {
        Symbology::Qr => {
            let side = request.output_width.min(request.output_height);
            render::render(&matrix, &style.size(side))
        }
        _ => {
            if style.logo.is_some() {
                debug!(%symbology, "logo skipped for symbology without finder patterns");
            }
            render::render_plain(&matrix, &style, request.output_width, request.output_height)
        }
    }
}

/// Render independent requests in parallel, preserving order.
pub fn render_batch(requests: &[RenderRequest]) -> Vec<Result<RgbaImage, EncodeError>> {
    requests.par_iter().map(render).collect()
}
