use crate::error::RenderError;
use crate::types::{ImageRef, MaskMode};
use pdfkit_style::FontRole;

/// A page canvas: the drawing primitives a document writer needs from a PDF backend.
///
/// Coordinates are PDF user space points with the origin at the bottom-left
/// corner of the page. Text is positioned by its baseline.
pub trait Canvas {
    /// Selects the face bound to `role` at `size` points for subsequent text.
    fn set_font(&mut self, role: FontRole, size: f32) -> Result<(), RenderError>;

    /// Width of `text` in points, measured with the current font and size.
    fn string_width(&self, text: &str) -> f32;

    fn draw_string(&mut self, x: f32, y: f32, text: &str) -> Result<(), RenderError>;

    /// Decodes raw image bytes (PNG, JPEG, ...) into a drawable handle.
    fn load_image(&mut self, data: &[u8]) -> Result<ImageRef, RenderError>;

    /// Draws `image` scaled to `width` x `height` with its bottom-left corner at `(x, y)`.
    fn draw_image(
        &mut self,
        image: &ImageRef,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        mask: MaskMode,
    ) -> Result<(), RenderError>;

    /// Finishes the current page and starts a new, empty one.
    fn show_page(&mut self) -> Result<(), RenderError>;

    /// Finalizes the document stream. No drawing is valid afterwards.
    fn save(&mut self) -> Result<(), RenderError>;

    /// Moves the finalized byte stream out of the canvas, leaving its buffer empty.
    fn take_bytes(&mut self) -> Vec<u8>;
}
