//! Render API handlers.
//!
//! Both endpoints run the pipeline on the blocking pool and answer with PNG
//! bytes. Anything wrong with the request itself is a 400.

use axum::{
    Json,
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::OutputSize;
use crate::matrix::ErrorCorrection;
use crate::pipeline::{self, RenderRequest};
use crate::render::{load_logo, to_png};
use crate::style::{Color, Shape, StyleSpec, palette};
use crate::symbology::Symbology;

use super::super::state::AppState;

/// JSON body accepted by the render endpoints.
///
/// Only `content` and `symbology` are required. Explicit colors override
/// the palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderBody {
    pub content: String,
    pub symbology: Symbology,
    /// `"WxH"`, a single side, or a preset name
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub palette: Option<String>,
    #[serde(default)]
    pub background: Option<Color>,
    #[serde(default)]
    pub foreground: Option<Color>,
    #[serde(default)]
    pub module_shape: Option<Shape>,
    #[serde(default)]
    pub finder_shape: Option<Shape>,
    #[serde(default)]
    pub logo_background: Option<Color>,
    #[serde(default)]
    pub logo_tint: Option<Color>,
    #[serde(default)]
    pub error_correction: Option<ErrorCorrection>,
}

impl RenderBody {
    pub fn new(content: impl Into<String>, symbology: Symbology) -> Self {
        Self {
            content: content.into(),
            symbology,
            size: None,
            width: None,
            height: None,
            palette: None,
            background: None,
            foreground: None,
            module_shape: None,
            finder_shape: None,
            logo_background: None,
            logo_tint: None,
            error_correction: None,
        }
    }

    /// Output size: `size` wins, then `width`/`height`, then the symbology default.
    pub fn output_size(&self) -> Result<OutputSize, String> {
        if let Some(size) = &self.size {
            return OutputSize::parse(size);
        }
        let base = OutputSize::default_for(self.symbology);
        OutputSize::new(
            self.width.unwrap_or(base.width),
            self.height.unwrap_or(base.height),
        )
        .validate()
    }

    /// Resolve into a pipeline request.
    pub fn into_request(self, logo: Option<RgbaImage>) -> Result<RenderRequest, String> {
        let size = self.output_size()?;
        let mut style = StyleSpec::new(size.width.min(size.height));

        if let Some(name) = &self.palette {
            let preset = palette::by_name(name).ok_or_else(|| {
                format!(
                    "Unknown palette '{}'. Available: {}",
                    name,
                    palette::list_names().join(", ")
                )
            })?;
            style = style.with_palette(preset);
        }
        if let Some(color) = self.background {
            style = style.background(color);
        }
        if let Some(color) = self.foreground {
            style = style.foreground(color);
        }
        if let Some(shape) = self.module_shape {
            style = style.module_shape(shape);
        }
        if let Some(shape) = self.finder_shape {
            style = style.finder_shape(shape);
        }
        if let Some(color) = self.logo_background {
            style = style.logo_background(color);
        }
        if let Some(color) = self.logo_tint {
            style = style.logo_tint(color);
        }
        if let Some(logo) = logo {
            style = style.logo(logo);
        }

        let mut request = RenderRequest::new(self.content, self.symbology)
            .size(size)
            .style(style);
        request.error_correction = self.error_correction;
        Ok(request)
    }
}

fn bad_request(message: String) -> (StatusCode, String) {
    warn!(error = %message, "render request rejected");
    (StatusCode::BAD_REQUEST, message)
}

/// Decode, render and encode on the blocking pool.
async fn render_png(
    body: RenderBody,
    logo_bytes: Option<Vec<u8>>,
) -> Result<Vec<u8>, (StatusCode, String)> {
    tokio::task::spawn_blocking(move || {
        let logo = logo_bytes
            .map(|bytes| load_logo(&bytes))
            .transpose()
            .map_err(|e| bad_request(e.to_string()))?;

        let symbology = body.symbology;
        let request = body.into_request(logo).map_err(bad_request)?;
        let img = pipeline::render(&request).map_err(|e| bad_request(e.to_string()))?;
        debug!(%symbology, width = img.width(), height = img.height(), "rendered");

        to_png(&img).map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("PNG encode failed: {}", e),
            )
        })
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Render task failed: {}", e),
        )
    })?
}

/// POST /api/render - Render a JSON request as PNG.
pub async fn render(
    Json(body): Json<RenderBody>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let png_bytes = render_png(body, None).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes))
}

/// POST /api/render/logo - Render with an uploaded logo.
///
/// Multipart fields: `request` (JSON [`RenderBody`]) and `logo` (image file).
pub async fn render_with_logo(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut body: Option<RenderBody> = None;
    let mut logo: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "request" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read request: {}", e)))?;
                body = Some(
                    serde_json::from_str(&text)
                        .map_err(|e| bad_request(format!("Invalid request JSON: {}", e)))?,
                );
            }
            "logo" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read logo: {}", e)))?;
                if bytes.len() > state.config.max_logo_bytes {
                    warn!(size = bytes.len(), limit = state.config.max_logo_bytes, "logo too large");
                    return Err((
                        StatusCode::PAYLOAD_TOO_LARGE,
                        format!(
                            "Logo is {} bytes, limit is {}",
                            bytes.len(),
                            state.config.max_logo_bytes
                        ),
                    ));
                }
                logo = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let body = body.ok_or((StatusCode::BAD_REQUEST, "No request field found".to_string()))?;
    let logo = logo.ok_or((StatusCode::BAD_REQUEST, "No logo field found".to_string()))?;

    let png_bytes = render_png(body, Some(logo)).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_defaults() {
        let body: RenderBody =
            serde_json::from_str(r#"{"content":"hi","symbology":"qr"}"#).unwrap();
        let request = body.into_request(None).unwrap();
        assert_eq!((request.output_width, request.output_height), (512, 512));
        assert!(request.error_correction.is_none());
    }

    #[test]
    fn test_body_palette_then_override() {
        let mut body = RenderBody::new("hi", Symbology::Qr);
        body.palette = Some("midnight".to_string());
        body.foreground = Some(Color::rgb(1, 2, 3));
        let style = body.into_request(None).unwrap().style.unwrap();
        let midnight = palette::by_name("midnight").unwrap();
        assert_eq!(style.background, midnight.background);
        assert_eq!(style.foreground, Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_body_size_precedence() {
        let mut body = RenderBody::new("123456789012", Symbology::Ean13);
        body.width = Some(800);
        assert_eq!(body.output_size(), Ok(OutputSize::new(800, 300)));
        body.size = Some("small".to_string());
        assert_eq!(body.output_size(), Ok(OutputSize::SQUARE_SMALL));
    }

    #[test]
    fn test_body_unknown_palette() {
        let mut body = RenderBody::new("hi", Symbology::Qr);
        body.palette = Some("neon".to_string());
        assert!(body.into_request(None).unwrap_err().contains("neon"));
    }

    #[test]
    fn test_body_shapes_from_json() {
        let body: RenderBody = serde_json::from_str(
            r##"{"content":"hi","symbology":"QR Code","module_shape":"heart","finder_shape":"rounded_square","foreground":"#112233"}"##,
        )
        .unwrap();
        let style = body.into_request(None).unwrap().style.unwrap();
        assert_eq!(style.module_shape, Shape::Heart);
        assert_eq!(style.finder_shape, Shape::RoundedSquare);
        assert_eq!(style.foreground, Color::rgb(0x11, 0x22, 0x33));
    }
}
