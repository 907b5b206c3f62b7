//! Content stream builder for a single page.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use pdfkit_render_core::utils::to_win_ansi;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
}

/// Accumulates the drawing operations of the page currently being written.
pub(crate) struct PageContext {
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.operations.is_empty()
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn set_font(&mut self, font_name: &str, font_size: f32) {
        if self.state.font_name != font_name || self.state.font_size != font_size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(font_name.as_bytes().to_vec()), font_size.into()],
            ));
            self.state.font_name = font_name.to_string();
            self.state.font_size = font_size;
        }
    }

    /// Writes `text` with its baseline starting at `(x, y)`.
    pub fn draw_text(&mut self, font_name: &str, font_size: f32, x: f32, y: f32, text: &str) {
        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(font_name, font_size);
        self.content
            .operations
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }

    /// Paints the named image XObject into the `width` x `height` box at `(x, y)`.
    pub fn draw_image(&mut self, xobject_name: &str, x: f32, y: f32, width: f32, height: f32) {
        self.content.operations.push(Operation::new("q", vec![]));
        self.content.operations.push(Operation::new(
            "cm",
            vec![
                width.into(),
                0.0f32.into(),
                0.0f32.into(),
                height.into(),
                x.into(),
                y.into(),
            ],
        ));
        self.content.operations.push(Operation::new(
            "Do",
            vec![Object::Name(xobject_name.as_bytes().to_vec())],
        ));
        self.content.operations.push(Operation::new("Q", vec![]));
    }
}
