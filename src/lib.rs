//! # Barcraft - Barcode and Styled QR Rendering Library
//!
//! Barcraft turns text payloads into barcode and 2D symbol rasters. It provides:
//!
//! - **Check digits**: weighted modulo-10 arithmetic for EAN-13, EAN-8 and UPC-A
//! - **Linear encoding**: EAN/UPC bar tables and guard assembly, Code 128
//! - **Matrix extraction**: recovers the module grid from QR, Aztec and PDF417 bitmaps
//! - **Styled rendering**: custom module and finder shapes, palettes and a center logo
//!
//! ## Quick Start
//!
//! ```
//! use barcraft::{
//!     config::OutputSize,
//!     pipeline::{self, RenderRequest},
//!     render::to_png,
//!     style::{Shape, StyleSpec},
//!     Symbology,
//! };
//!
//! // Styled QR code
//! let style = StyleSpec::new(512)
//!     .module_shape(Shape::Circle)
//!     .finder_shape(Shape::RoundedSquare);
//! let request = RenderRequest::new("https://example.com", Symbology::Qr).style(style);
//! let img = pipeline::render(&request)?;
//! let png = to_png(&img)?;
//!
//! // EAN-13, check digit computed
//! let request = RenderRequest::new("690123456789", Symbology::Ean13).size(OutputSize::LINEAR);
//! let img = pipeline::render(&request)?;
//! assert_eq!(img.dimensions(), (600, 300));
//! # let _ = png;
//! # Ok::<(), barcraft::BarcraftError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbology`] | Symbology metadata and content validation |
//! | [`checksum`] | Check digit computation and verification |
//! | [`linear`] | 1D bar strings and their rasterization |
//! | [`matrix`] | 2D generators and module matrix extraction |
//! | [`style`] | Colors, shapes, palettes and [`StyleSpec`](style::StyleSpec) |
//! | [`render`] | Shape outlines, anti-aliased fill, logo compositing, PNG export |
//! | [`pipeline`] | Render requests from content to raster |
//! | [`config`] | Output size presets and render defaults |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod checksum;
pub mod config;
pub mod error;
pub mod linear;
pub mod matrix;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod style;
pub mod symbology;

// Re-exports for convenience
pub use error::{BarcraftError, EncodeError};
pub use matrix::{ModuleMatrix, extract_matrix};
pub use pipeline::{RenderRequest, render_batch};
pub use style::StyleSpec;
pub use symbology::Symbology;
