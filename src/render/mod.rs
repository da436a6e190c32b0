//! # Rendering Module
//!
//! Turns module matrices into styled RGBA rasters.
//!
//! ## Modules
//!
//! - [`geometry`]: points, rects and closed outlines
//! - [`shape`]: one outline per [`Shape`](crate::style::Shape)
//! - [`fill`]: anti-aliased scanline fill with source-over blending
//! - [`styled`]: finder-aware QR renderer
//! - [`logo`]: centered logo slot compositing
//! - [`plain`]: square-module renderer for Aztec and PDF417
//! - [`png`]: PNG export and logo decoding
//!
//! ## Usage Example
//!
//! ```
//! use barcraft::matrix::{extract_matrix, generator_for, ErrorCorrection};
//! use barcraft::render;
//! use barcraft::style::{Shape, StyleSpec};
//! use barcraft::Symbology;
//!
//! let generator = generator_for(Symbology::Qr).unwrap();
//! let bitmap = generator.generate("https://example.com", ErrorCorrection::Medium).unwrap();
//! let matrix = extract_matrix(&bitmap).unwrap();
//!
//! let style = StyleSpec::new(256).module_shape(Shape::Circle);
//! let img = render::render(&matrix, &style).unwrap();
//! assert_eq!(img.dimensions(), (256, 256));
//! ```

pub mod fill;
pub mod geometry;
pub mod logo;
pub mod plain;
pub mod png;
pub mod shape;
pub mod styled;

pub use plain::render_plain;
pub use png::{load_logo, to_png};
pub use shape::shape_outline;
pub use styled::{is_finder_cell, render};
