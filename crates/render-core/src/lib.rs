//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the fundamental traits and types used by canvas backends:
//! - `Canvas` trait for abstracting the page drawing primitives
//! - Error types for rendering operations
//! - Shared utility functions for text encoding

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::Canvas;
pub use types::{ImageRef, MaskMode};
