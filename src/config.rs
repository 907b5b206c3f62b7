//! Writer configuration, loadable from JSON.

use crate::error::DocumentError;
use pdfkit_style::{FontFamily, PageSize};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page geometry and typography for a [`DocumentWriter`](crate::DocumentWriter).
///
/// Margins are fractions of the page size: `x_margin = 0.1` puts the left and
/// right margins at 10% of the page width each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriterConfig {
    pub page_size: PageSize,
    pub x_margin: f32,
    pub y_margin: f32,
    pub font_size: f32,
    /// Line height as a multiple of `font_size`.
    pub line_height_factor: f32,
    /// Temporary font size multiplier for section headings.
    pub section_scale: f32,
    /// Edge length in points of the square header image.
    pub header_image_size: f32,
    pub font_family: FontFamily,
    pub title: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            x_margin: 0.1,
            y_margin: 0.1,
            font_size: 12.0,
            line_height_factor: 1.5,
            section_scale: 1.2,
            header_image_size: 150.0,
            font_family: FontFamily::Times,
            title: "Document".to_string(),
        }
    }
}

impl WriterConfig {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let config: WriterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        log::debug!("Loading writer config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Rejects geometry that leaves no room for content.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let (width, height) = self.page_size.dimensions_pt();
        if !(width > 0.0 && height > 0.0) {
            return Err(DocumentError::Config(format!(
                "Page dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        for (name, margin) in [("xMargin", self.x_margin), ("yMargin", self.y_margin)] {
            if !(0.0..0.5).contains(&margin) {
                return Err(DocumentError::Config(format!(
                    "{} must be a fraction in [0, 0.5), got {}",
                    name, margin
                )));
            }
        }
        if !(self.font_size > 0.0) {
            return Err(DocumentError::Config(format!(
                "fontSize must be positive, got {}",
                self.font_size
            )));
        }
        if !(self.line_height_factor > 0.0 && self.section_scale > 0.0) {
            return Err(DocumentError::Config(
                "lineHeightFactor and sectionScale must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
