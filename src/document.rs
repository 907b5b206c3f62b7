//! JSON document descriptions rendered through a [`DocumentWriter`].
//!
//! ```json
//! {
//!   "config": { "pageSize": "A4" },
//!   "headerImage": "logo.png",
//!   "blocks": [
//!     { "type": "header" },
//!     { "type": "section", "name": "Introduction" },
//!     { "type": "text", "content": "Hello world", "align": "center" },
//!     { "type": "image", "path": "chart.png", "width": 200, "height": 120 },
//!     { "type": "pageBreak" }
//!   ]
//! }
//! ```

use crate::config::WriterConfig;
use crate::error::DocumentError;
use crate::writer::DocumentWriter;
use pdfkit_render_core::{Canvas, ImageRef};
use pdfkit_render_lopdf::LopdfCanvas;
use pdfkit_style::TextAlign;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSpec {
    #[serde(default)]
    pub config: Option<WriterConfig>,
    #[serde(default)]
    pub header_image: Option<PathBuf>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Header,
    Section {
        name: String,
    },
    Subsection {
        name: String,
    },
    Text {
        content: String,
        #[serde(default)]
        align: TextAlign,
    },
    Image {
        path: PathBuf,
        width: f32,
        height: f32,
    },
    LineBreak,
    PageBreak,
}

impl DocumentSpec {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let spec: DocumentSpec = serde_json::from_str(json)?;
        if let Some(config) = &spec.config {
            config.validate()?;
        }
        Ok(spec)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }
}

fn read_image(base_dir: &Path, path: &Path) -> Result<Vec<u8>, DocumentError> {
    let full = base_dir.join(path);
    std::fs::read(&full).map_err(|source| DocumentError::Image { path: full, source })
}

/// Plays `blocks` onto `writer` in order. Image paths are resolved against
/// `base_dir`; each file is decoded once even if it is placed several times.
pub fn write_blocks<C: Canvas>(
    writer: &mut DocumentWriter<C>,
    blocks: &[Block],
    base_dir: &Path,
) -> Result<(), DocumentError> {
    let mut images: HashMap<&Path, ImageRef> = HashMap::new();

    for block in blocks {
        match block {
            Block::Header => writer.header()?,
            Block::Section { name } => writer.section(name)?,
            Block::Subsection { name } => writer.subsection(name)?,
            Block::Text { content, align } => writer.draw_text(content, *align)?,
            Block::Image {
                path,
                width,
                height,
            } => {
                let image = match images.get(path.as_path()) {
                    Some(image) => *image,
                    None => {
                        let data = read_image(base_dir, path)?;
                        let image = writer.load_image(&data)?;
                        images.insert(path.as_path(), image);
                        image
                    }
                };
                writer.add_image(&image, *width, *height)?;
            }
            Block::LineBreak => writer.line_break(),
            Block::PageBreak => writer.page_break()?,
        }
    }
    Ok(())
}

/// Renders `spec` to PDF bytes with the lopdf canvas.
///
/// `config` overrides the configuration embedded in `spec`.
pub fn render_document(
    spec: &DocumentSpec,
    config: Option<&WriterConfig>,
    base_dir: &Path,
) -> Result<Vec<u8>, DocumentError> {
    let config = config
        .or(spec.config.as_ref())
        .cloned()
        .unwrap_or_default();
    config.validate()?;

    let canvas = LopdfCanvas::new(config.page_size.size(), config.font_family)
        .with_title(config.title.clone());
    let mut writer = DocumentWriter::new(canvas, &config)?;
    if let Some(header) = &spec.header_image {
        let data = read_image(base_dir, header)?;
        writer = writer.with_header_image(&data)?;
    }

    write_blocks(&mut writer, &spec.blocks, base_dir)?;

    let finished = writer.save()?;
    log::info!(
        "Rendered {} blocks onto {} pages",
        spec.blocks.len(),
        finished.page_count()
    );
    Ok(finished.into_bytes())
}
