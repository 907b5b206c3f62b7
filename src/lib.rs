//! Flowing PDF document writer.
//!
//! A [`DocumentWriter`] places numbered section headings, word-wrapped
//! paragraphs and images top to bottom over pages of any [`Canvas`],
//! inserting page breaks and `Page n` footers as it goes. [`LopdfCanvas`] is
//! the bundled PDF backend; [`render_document`] drives the whole pipeline
//! from a JSON [`DocumentSpec`].

pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod wrap;
pub mod writer;

pub use config::WriterConfig;
pub use document::{Block, DocumentSpec, render_document, write_blocks};
pub use error::DocumentError;
pub use layout::LayoutState;
pub use wrap::wrap_words;
pub use writer::{DocumentWriter, FinishedDocument};

pub use pdfkit_render_core::{Canvas, ImageRef, MaskMode, RenderError};
pub use pdfkit_render_lopdf::{FontMetrics, LopdfCanvas};
pub use pdfkit_style::{FontFamily, FontRole, PageSize, TextAlign};
pub use pdfkit_types::{Point, Size};
