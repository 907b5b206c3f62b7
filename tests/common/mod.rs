#![allow(dead_code)]

pub mod pdf_assertions;

use image::{ImageFormat, Rgba, RgbaImage};
use lopdf::Document as LopdfDocument;
use pdfkit::{Canvas, FontRole, ImageRef, MaskMode, RenderError, WriterConfig};
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn page_strings(&self, page_num: u32) -> Vec<String> {
        pdf_assertions::page_strings(&self.doc, page_num)
    }

    pub fn page_string_bytes(&self, page_num: u32) -> Vec<Vec<u8>> {
        pdf_assertions::page_string_bytes(&self.doc, page_num)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// A drawing call captured by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetFont(FontRole, f32),
    DrawString {
        x: f32,
        y: f32,
        text: String,
    },
    DrawImage {
        id: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        mask: MaskMode,
    },
    ShowPage,
    Save,
}

/// Canvas that records every call. Every character is half the font size wide.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Call>,
    font: Option<(FontRole, f32)>,
    images: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strings(&self) -> Vec<(f32, f32, String)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::DrawString { x, y, text } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.strings().into_iter().map(|(_, _, text)| text).collect()
    }

    pub fn show_pages(&self) -> usize {
        self.calls.iter().filter(|call| **call == Call::ShowPage).count()
    }

    /// Index of the first call matching `pred`.
    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.iter().position(pred)
    }

    pub fn current_font(&self) -> Option<(FontRole, f32)> {
        self.font
    }
}

impl Canvas for RecordingCanvas {
    fn set_font(&mut self, role: FontRole, size: f32) -> Result<(), RenderError> {
        self.font = Some((role, size));
        self.calls.push(Call::SetFont(role, size));
        Ok(())
    }

    fn string_width(&self, text: &str) -> f32 {
        let size = self.font.map(|(_, size)| size).unwrap_or(12.0);
        text.chars().count() as f32 * size * 0.5
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) -> Result<(), RenderError> {
        self.calls.push(Call::DrawString {
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn load_image(&mut self, data: &[u8]) -> Result<ImageRef, RenderError> {
        if data.is_empty() {
            return Err(RenderError::ImageDecode("empty image data".into()));
        }
        let id = self.images;
        self.images += 1;
        Ok(ImageRef {
            id,
            pixel_width: 1,
            pixel_height: 1,
        })
    }

    fn draw_image(
        &mut self,
        image: &ImageRef,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        mask: MaskMode,
    ) -> Result<(), RenderError> {
        self.calls.push(Call::DrawImage {
            id: image.id,
            x,
            y,
            width,
            height,
            mask,
        });
        Ok(())
    }

    fn show_page(&mut self) -> Result<(), RenderError> {
        self.calls.push(Call::ShowPage);
        Ok(())
    }

    fn save(&mut self) -> Result<(), RenderError> {
        self.calls.push(Call::Save);
        Ok(())
    }

    fn take_bytes(&mut self) -> Vec<u8> {
        b"%PDF-recorded".to_vec()
    }
}

pub fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// Default Letter configuration: margins 61.2 x 79.2, 12pt text on 18pt lines.
pub fn letter_config() -> WriterConfig {
    WriterConfig::default()
}

/// A PNG of `width` x `height` pixels, translucent when `alpha < 255`.
pub fn png_bytes(width: u32, height: u32, alpha: u8) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, alpha]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encoding a PNG in memory");
    out.into_inner()
}

/// `n` space separated copies of `word`.
pub fn words(word: &str, n: usize) -> String {
    vec![word; n].join(" ")
}
