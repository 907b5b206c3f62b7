/// A handle to an image decoded and stored by a canvas.
///
/// Only meaningful to the canvas that produced it via `Canvas::load_image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef {
    pub id: usize,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// How transparency is handled when an image is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskMode {
    /// Draw the colour data only; alpha is ignored.
    None,
    /// Use the image's own alpha channel as a soft mask, if it has one.
    #[default]
    Auto,
}
