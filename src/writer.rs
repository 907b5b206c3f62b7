//! The flowing document writer.

use crate::config::WriterConfig;
use crate::layout::LayoutState;
use crate::wrap::wrap_words;
use pdfkit_render_core::{Canvas, ImageRef, MaskMode, RenderError};
use pdfkit_style::{FontRole, TextAlign};
use pdfkit_types::Point;

/// Headings move to a new page unless this many lines still fit.
const HEADING_KEEP_LINES: f32 = 5.0;

/// Lays out headings, wrapped paragraphs and images top to bottom over pages
/// of a [`Canvas`], inserting page breaks and numbered page footers.
///
/// The writer is consumed by [`save`](Self::save), which returns the
/// [`FinishedDocument`] holding the output.
pub struct DocumentWriter<C: Canvas> {
    canvas: C,
    layout: LayoutState,
    section_scale: f32,
    header_image_size: f32,
    header_image: Option<ImageRef>,
}

impl<C: Canvas> DocumentWriter<C> {
    /// Creates a writer over `canvas` and selects the regular font.
    pub fn new(canvas: C, config: &WriterConfig) -> Result<Self, RenderError> {
        let mut writer = Self {
            canvas,
            layout: LayoutState::new(config),
            section_scale: config.section_scale,
            header_image_size: config.header_image_size,
            header_image: None,
        };
        writer.regular_font()?;
        Ok(writer)
    }

    /// Decodes `data` and uses it as the image drawn by [`header`](Self::header).
    pub fn with_header_image(mut self, data: &[u8]) -> Result<Self, RenderError> {
        self.header_image = Some(self.canvas.load_image(data)?);
        Ok(self)
    }

    /// Decodes raw image bytes into a handle for [`add_image`](Self::add_image).
    pub fn load_image(&mut self, data: &[u8]) -> Result<ImageRef, RenderError> {
        self.canvas.load_image(data)
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn cursor(&self) -> Point {
        self.layout.cursor()
    }

    /// Pages completed so far. The page in progress is not counted.
    pub fn page_count(&self) -> u32 {
        self.layout.page_number()
    }

    pub fn section_count(&self) -> u32 {
        self.layout.section()
    }

    pub fn subsection_count(&self) -> u32 {
        self.layout.subsection()
    }

    pub fn font_size(&self) -> f32 {
        self.layout.font_size()
    }

    pub fn line_height(&self) -> f32 {
        self.layout.line_height()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Draws the header image, if one was supplied, followed by a line break.
    pub fn header(&mut self) -> Result<(), RenderError> {
        if let Some(image) = self.header_image {
            let size = self.header_image_size;
            self.add_image(&image, size, size)?;
            self.line_break();
        }
        Ok(())
    }

    /// Numbers the current page and draws `Page {n}` centred in the bottom margin.
    fn footer(&mut self) -> Result<(), RenderError> {
        self.italic_font()?;
        let page = self.layout.next_page_number();
        let text = format!("Page {}", page);
        let width = self.canvas.string_width(&text);
        self.canvas
            .draw_string(self.layout.center_x() - width / 2.0, self.layout.footer_y(), &text)
    }

    pub fn set_font(&mut self, role: FontRole) -> Result<(), RenderError> {
        self.canvas.set_font(role, self.layout.font_size())
    }

    pub fn regular_font(&mut self) -> Result<(), RenderError> {
        self.set_font(FontRole::Regular)
    }

    pub fn italic_font(&mut self) -> Result<(), RenderError> {
        self.set_font(FontRole::Italic)
    }

    pub fn bold_font(&mut self) -> Result<(), RenderError> {
        self.set_font(FontRole::Bold)
    }

    fn keep_heading_with_content(&mut self) -> Result<(), RenderError> {
        if self
            .layout
            .overflows(HEADING_KEEP_LINES * self.layout.line_height())
        {
            self.page_break()?;
        }
        Ok(())
    }

    /// Starts a numbered section, drawn bold at an enlarged size.
    pub fn section(&mut self, name: &str) -> Result<(), RenderError> {
        self.keep_heading_with_content()?;
        let number = self.layout.next_section();
        log::debug!("Section {}: {}", number, name.trim());

        let base_size = self.layout.font_size();
        self.layout.set_font_size(base_size * self.section_scale);
        self.bold_font()?;
        let cursor = self.layout.cursor();
        let drawn = self
            .canvas
            .draw_string(cursor.x, cursor.y, &format!("{}  {}", number, name.trim()));
        self.layout.set_font_size(base_size);
        drawn?;

        self.line_break();
        self.line_break();
        self.regular_font()
    }

    /// Starts a subsection of the current section, numbered `{section}.{subsection}`.
    pub fn subsection(&mut self, name: &str) -> Result<(), RenderError> {
        self.keep_heading_with_content()?;
        let (section, subsection) = self.layout.next_subsection();
        log::debug!("Subsection {}.{}: {}", section, subsection, name.trim());

        self.bold_font()?;
        let cursor = self.layout.cursor();
        self.canvas.draw_string(
            cursor.x,
            cursor.y,
            &format!("{}.{}  {}", section, subsection, name.trim()),
        )?;

        self.line_break();
        self.line_break();
        self.regular_font()
    }

    /// Word-wraps `text` to the content width and draws it line by line,
    /// breaking the page whenever the next line would not fit.
    pub fn draw_text(&mut self, text: &str, align: TextAlign) -> Result<(), RenderError> {
        let max_width = self.layout.content_size().width;
        let lines = wrap_words(text, max_width, |s| self.canvas.string_width(s));

        for line in &lines {
            if self.layout.overflows(self.layout.line_height()) {
                self.page_break()?;
            }
            self.layout.carriage_return();
            if align == TextAlign::Center {
                let width = self.canvas.string_width(line);
                self.layout.set_x(self.layout.center_x() - width / 2.0);
            }
            let cursor = self.layout.cursor();
            log::trace!("Line at ({:.1}, {:.1}): {}", cursor.x, cursor.y, line);
            self.canvas.draw_string(cursor.x, cursor.y, line)?;
            self.layout.advance(self.layout.line_height());
        }
        Ok(())
    }

    /// Draws `image` scaled to `width` x `height` below the cursor, on a new
    /// page if it does not fit on this one.
    pub fn add_image(
        &mut self,
        image: &ImageRef,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError> {
        if self.layout.overflows(height) {
            self.page_break()?;
        }
        let cursor = self.layout.cursor();
        self.canvas
            .draw_image(image, cursor.x, cursor.y - height, width, height, MaskMode::Auto)?;
        self.layout.advance(height);
        Ok(())
    }

    /// Moves the cursor to the start of the next line. Never breaks the page.
    pub fn line_break(&mut self) {
        self.layout.carriage_return();
        self.layout.advance(self.layout.line_height());
    }

    /// Finishes the current page with its footer and continues at the top of a new one.
    pub fn page_break(&mut self) -> Result<(), RenderError> {
        self.footer()?;
        self.canvas.show_page()?;
        log::debug!("Page break after page {}", self.layout.page_number());
        self.layout.reset_cursor();
        self.regular_font()
    }

    /// Draws the footer of the last page and finalizes the canvas.
    pub fn save(mut self) -> Result<FinishedDocument<C>, RenderError> {
        self.footer()?;
        self.canvas.save()?;
        log::info!(
            "Document finished: {} pages, {} sections",
            self.layout.page_number(),
            self.layout.section()
        );
        Ok(FinishedDocument {
            canvas: self.canvas,
            pages: self.layout.page_number(),
            sections: self.layout.section(),
        })
    }
}

/// A saved document. Only the output can be read from it.
pub struct FinishedDocument<C: Canvas> {
    canvas: C,
    pages: u32,
    sections: u32,
}

impl<C: Canvas> FinishedDocument<C> {
    pub fn page_count(&self) -> u32 {
        self.pages
    }

    pub fn section_count(&self) -> u32 {
        self.sections
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Returns the document bytes, releasing the canvas buffer.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.canvas.take_bytes()
    }
}
