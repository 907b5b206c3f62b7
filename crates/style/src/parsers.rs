//! Name parsing for the style enums accepted in configuration files.

use crate::dimension::PageSize;
use crate::font::FontFamily;
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Unknown page size: {0}")]
    UnknownPageSize(String),

    #[error("Unknown font family: {0}")]
    UnknownFontFamily(String),
}

/// Parse a page size name (e.g., "A4", "Letter", "Legal").
pub fn parse_page_size(input: &str) -> Result<PageSize, StyleParseError> {
    match input.trim().to_lowercase().as_str() {
        "a4" => Ok(PageSize::A4),
        "letter" => Ok(PageSize::Letter),
        "legal" => Ok(PageSize::Legal),
        _ => Err(StyleParseError::UnknownPageSize(input.to_string())),
    }
}

/// Parse a standard font family name. Common aliases of each family are accepted.
pub fn parse_font_family(input: &str) -> Result<FontFamily, StyleParseError> {
    match input.trim().to_lowercase().as_str() {
        "times" | "times-roman" | "serif" => Ok(FontFamily::Times),
        "helvetica" | "arial" | "sans-serif" => Ok(FontFamily::Helvetica),
        "courier" | "monospace" => Ok(FontFamily::Courier),
        _ => Err(StyleParseError::UnknownFontFamily(input.to_string())),
    }
}
