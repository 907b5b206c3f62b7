//! Page geometry, cursor and heading counters of a document being written.

use crate::config::WriterConfig;
use pdfkit_types::{Point, Size};

/// Mutable layout state owned by a [`DocumentWriter`](crate::DocumentWriter).
///
/// All positions are PDF points with the origin at the bottom-left of the
/// page. The cursor starts at the top-left corner of the content area and
/// moves down as content is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    page: Size,
    margins: Size,
    content: Size,
    center_x: f32,
    origin: Point,
    cursor: Point,
    font_size: f32,
    line_height: f32,
    page_number: u32,
    section: u32,
    subsection: u32,
}

impl LayoutState {
    pub fn new(config: &WriterConfig) -> Self {
        let page = config.page_size.size();
        let margins = page.scale(config.x_margin, config.y_margin);
        let content = Size::new(
            page.width - 2.0 * margins.width,
            page.height - 2.0 * margins.height,
        );
        let origin = Point::new(margins.width, page.height - margins.height);

        Self {
            page,
            margins,
            content,
            center_x: margins.width + content.width / 2.0,
            origin,
            cursor: origin,
            font_size: config.font_size,
            line_height: config.font_size * config.line_height_factor,
            page_number: 0,
            section: 0,
            subsection: 0,
        }
    }

    pub fn page_size(&self) -> Size {
        self.page
    }

    /// Left/right margin width and top/bottom margin height, in points.
    pub fn margins(&self) -> Size {
        self.margins
    }

    /// Maximum content width and height inside the margins.
    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    /// Top-left point of the content area, where every page starts.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Number of pages completed so far.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn section(&self) -> u32 {
        self.section
    }

    pub fn subsection(&self) -> u32 {
        self.subsection
    }

    /// Whether placing something `height` tall at the cursor would cross the bottom margin.
    pub(crate) fn overflows(&self, height: f32) -> bool {
        self.cursor.y - height < self.margins.height
    }

    /// Baseline of the page footer, inside the bottom margin band.
    pub(crate) fn footer_y(&self) -> f32 {
        self.margins.height - 2.0 * self.line_height
    }

    pub(crate) fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub(crate) fn set_x(&mut self, x: f32) {
        self.cursor.x = x;
    }

    pub(crate) fn carriage_return(&mut self) {
        self.cursor.x = self.origin.x;
    }

    pub(crate) fn advance(&mut self, dy: f32) {
        self.cursor.y -= dy;
    }

    pub(crate) fn reset_cursor(&mut self) {
        self.cursor = self.origin;
    }

    pub(crate) fn next_page_number(&mut self) -> u32 {
        self.page_number += 1;
        self.page_number
    }

    pub(crate) fn next_section(&mut self) -> u32 {
        self.section += 1;
        self.subsection = 0;
        self.section
    }

    pub(crate) fn next_subsection(&mut self) -> (u32, u32) {
        self.subsection += 1;
        (self.section, self.subsection)
    }
}
