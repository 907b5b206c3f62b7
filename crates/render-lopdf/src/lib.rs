//! Page canvas backed by `lopdf`.
//!
//! This crate provides the [`LopdfCanvas`] implementation of the
//! `pdfkit_render_core::Canvas` capability: standard-font text with built-in
//! metrics, image XObjects decoded with the `image` crate, and Flate-compressed
//! page content streams.

mod canvas;
mod images;
pub mod metrics;
mod page;

pub use canvas::LopdfCanvas;
pub use metrics::FontMetrics;
