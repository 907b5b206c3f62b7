use crate::images::{EncodedImage, encode_image, flate_compress};
use crate::metrics::FontMetrics;
use crate::page::PageContext;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use pdfkit_render_core::utils::to_win_ansi;
use pdfkit_render_core::{Canvas, ImageRef, MaskMode, RenderError};
use pdfkit_style::{FontFamily, FontRole};
use pdfkit_types::Size;

const PRODUCER: &str = concat!("pdfkit ", env!("CARGO_PKG_VERSION"));

/// An image XObject stored in the document, with its optional soft mask.
struct StoredImage {
    encoded: EncodedImage,
    masked_id: ObjectId,
    /// Copy of the colour stream without `SMask`, created on first unmasked use.
    unmasked_id: Option<ObjectId>,
}

/// A [`Canvas`] that builds an in-memory `lopdf` document.
///
/// Text uses the standard PDF fonts of one [`FontFamily`], so nothing is
/// embedded. Every page shares one resources dictionary holding the three
/// role fonts and all loaded images.
pub struct LopdfCanvas {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page_size: Size,
    family: FontFamily,
    title: String,
    font: FontRole,
    font_size: f32,
    page: PageContext,
    images: Vec<StoredImage>,
    output: Vec<u8>,
    saved: bool,
}

impl LopdfCanvas {
    pub fn new(page_size: Size, family: FontFamily) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            page_size,
            family,
            title: "Document".to_string(),
            font: FontRole::Regular,
            font_size: 12.0,
            page: PageContext::new(),
            images: Vec::new(),
            output: Vec::new(),
            saved: false,
        }
    }

    /// Sets the `/Title` written to the document information dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn font_family(&self) -> FontFamily {
        self.family
    }

    /// Number of pages flushed so far.
    pub fn pages_written(&self) -> usize {
        self.page_ids.len()
    }

    fn font_resource_name(role: FontRole) -> &'static str {
        match role {
            FontRole::Regular => "F1",
            FontRole::Italic => "F2",
            FontRole::Bold => "F3",
        }
    }

    fn image_resource_name(id: usize, masked: bool) -> String {
        if masked {
            format!("Im{}", id)
        } else {
            format!("Im{}N", id)
        }
    }

    fn ensure_open(&self) -> Result<(), RenderError> {
        if self.saved {
            return Err(RenderError::Other("Canvas has already been saved".into()));
        }
        Ok(())
    }

    /// Compresses the current page's content and appends the page object.
    fn flush_page(&mut self) -> Result<(), RenderError> {
        let page = std::mem::replace(&mut self.page, PageContext::new());
        let content = page.finish();
        let compressed = flate_compress(&content.encode()?)?;
        let content_stream = Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed);
        let content_id = self.document.add_object(content_stream);

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.0f32.into(),
                0.0f32.into(),
                self.page_size.width.into(),
                self.page_size.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::debug!("Flushed page {}", self.page_ids.len());
        Ok(())
    }

    fn resources_dictionary(&self) -> Dictionary {
        let mut fonts = Dictionary::new();
        for role in FontRole::ALL {
            let font = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => self.family.base_font(role),
                "Encoding" => "WinAnsiEncoding",
            };
            fonts.set(Self::font_resource_name(role), Object::Dictionary(font));
        }

        let mut xobjects = Dictionary::new();
        for (id, image) in self.images.iter().enumerate() {
            xobjects.set(Self::image_resource_name(id, true), image.masked_id);
            if let Some(unmasked_id) = image.unmasked_id {
                xobjects.set(Self::image_resource_name(id, false), unmasked_id);
            }
        }

        let mut resources = dictionary! { "Font" => fonts };
        if !self.images.is_empty() {
            resources.set("XObject", xobjects);
        }
        resources
    }

    fn info_dictionary(&self) -> Dictionary {
        let created = chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string();
        dictionary! {
            "Title" => Object::String(to_win_ansi(&self.title), StringFormat::Literal),
            "Producer" => Object::String(PRODUCER.as_bytes().to_vec(), StringFormat::Literal),
            "CreationDate" => Object::String(created.into_bytes(), StringFormat::Literal),
        }
    }
}

impl Canvas for LopdfCanvas {
    fn set_font(&mut self, role: FontRole, size: f32) -> Result<(), RenderError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(RenderError::Font(format!("Invalid font size: {}", size)));
        }
        self.font = role;
        self.font_size = size;
        Ok(())
    }

    fn string_width(&self, text: &str) -> f32 {
        FontMetrics::for_face(self.family, self.font).string_width(text, self.font_size)
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.page.draw_text(
            Self::font_resource_name(self.font),
            self.font_size,
            x,
            y,
            text,
        );
        Ok(())
    }

    fn load_image(&mut self, data: &[u8]) -> Result<ImageRef, RenderError> {
        self.ensure_open()?;
        let encoded = encode_image(data)?;
        let smask_id = encoded
            .alpha_stream()
            .map(|alpha| self.document.add_object(alpha));
        let masked_id = self.document.add_object(encoded.image_stream(smask_id));

        let image = ImageRef {
            id: self.images.len(),
            pixel_width: encoded.width,
            pixel_height: encoded.height,
        };
        self.images.push(StoredImage {
            encoded,
            masked_id,
            unmasked_id: None,
        });
        Ok(image)
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
        self.ensure_open()?;
        let stored = self
            .images
            .get_mut(image.id)
            .ok_or(RenderError::UnknownImage(image.id))?;

        let masked = mask == MaskMode::Auto || !stored.encoded.has_alpha();
        if !masked && stored.unmasked_id.is_none() {
            let stream = stored.encoded.image_stream(None);
            stored.unmasked_id = Some(self.document.add_object(stream));
        }

        let name = Self::image_resource_name(image.id, masked);
        self.page.draw_image(&name, x, y, width, height);
        Ok(())
    }

    fn show_page(&mut self) -> Result<(), RenderError> {
        self.ensure_open()?;
        self.flush_page()
    }

    fn save(&mut self) -> Result<(), RenderError> {
        self.ensure_open()?;
        if !self.page.is_empty() || self.page_ids.is_empty() {
            self.flush_page()?;
        }

        let resources = self.resources_dictionary();
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);
        let info_id = self.document.add_object(self.info_dictionary());
        self.document.trailer.set("Info", info_id);

        self.document.save_to(&mut self.output)?;
        self.saved = true;
        log::info!(
            "Saved PDF: {} pages, {} images, {} bytes",
            self.page_ids.len(),
            self.images.len(),
            self.output.len()
        );
        Ok(())
    }

    fn take_bytes(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }
}
