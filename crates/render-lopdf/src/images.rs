//! Decoding raw image bytes into PDF image XObject data.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{DynamicImage, ImageFormat};
use lopdf::{Object, Stream, dictionary};
use pdfkit_render_core::RenderError;
use std::io::Write;

/// Image samples ready to be stored as an XObject.
pub(crate) struct EncodedImage {
    pub width: u32,
    pub height: u32,
    color_space: &'static str,
    filter: &'static str,
    data: Vec<u8>,
    /// Flate-compressed 8-bit alpha samples, present only if some pixel is not opaque.
    alpha: Option<Vec<u8>>,
}

impl EncodedImage {
    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// The colour stream. `smask` is attached as a soft mask when given.
    pub fn image_stream(&self, smask: Option<lopdf::ObjectId>) -> Stream {
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => self.color_space,
            "BitsPerComponent" => 8,
            "Filter" => self.filter,
        };
        if let Some(smask_id) = smask {
            dict.set("SMask", Object::Reference(smask_id));
        }
        Stream::new(dict, self.data.clone())
    }

    pub fn alpha_stream(&self) -> Option<Stream> {
        self.alpha.as_ref().map(|alpha| {
            let dict = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => self.width as i64,
                "Height" => self.height as i64,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            };
            Stream::new(dict, alpha.clone())
        })
    }
}

/// Decodes `data` with the `image` crate.
///
/// 8-bit grey or colour JPEG files are embedded unchanged with `DCTDecode`.
/// Everything else, CMYK JPEG included, is expanded to 8-bit RGB and Flate
/// compressed, with the alpha channel split into a separate soft mask.
pub(crate) fn encode_image(data: &[u8]) -> Result<EncodedImage, RenderError> {
    let format = image::guess_format(data).ok();
    let decoded =
        image::load_from_memory(data).map_err(|e| RenderError::ImageDecode(e.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());
    log::debug!("Decoded {:?} image, {}x{} px", format, width, height);

    let dct_color_space = match format {
        Some(ImageFormat::Jpeg) => jpeg_frame(data).and_then(|frame| frame.color_space()),
        _ => None,
    };
    if let Some(color_space) = dct_color_space {
        return Ok(EncodedImage {
            width,
            height,
            color_space,
            filter: "DCTDecode",
            data: data.to_vec(),
            alpha: None,
        });
    }

    let (rgb, alpha) = split_alpha(&decoded);
    let alpha = match alpha {
        Some(samples) => Some(flate_compress(&samples)?),
        None => None,
    };
    Ok(EncodedImage {
        width,
        height,
        color_space: "DeviceRGB",
        filter: "FlateDecode",
        data: flate_compress(&rgb)?,
        alpha,
    })
}

/// Sample precision and component count from a JPEG start-of-frame header.
#[derive(Debug, Clone, Copy, PartialEq)]
struct JpegFrame {
    precision: u8,
    components: u8,
}

impl JpegFrame {
    /// The colour space the DCT data can be embedded with, if any.
    fn color_space(self) -> Option<&'static str> {
        match (self.precision, self.components) {
            (8, 1) => Some("DeviceGray"),
            (8, 3) => Some("DeviceRGB"),
            _ => None,
        }
    }
}

/// Walks the JPEG marker segments up to the first SOFn header.
fn jpeg_frame(data: &[u8]) -> Option<JpegFrame> {
    if !data.starts_with(&[0xFF, 0xD8]) {
        return None;
    }
    let mut pos = 2;
    loop {
        if *data.get(pos)? != 0xFF {
            return None;
        }
        let marker = *data.get(pos + 1)?;
        match marker {
            // fill byte
            0xFF => {
                pos += 1;
                continue;
            }
            0x01 | 0xD0..=0xD7 => {
                pos += 2;
                continue;
            }
            // start of scan before any frame header
            0xD9 | 0xDA => return None,
            _ => {}
        }
        let length = u16::from_be_bytes([*data.get(pos + 2)?, *data.get(pos + 3)?]) as usize;
        if matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC) {
            return Some(JpegFrame {
                precision: *data.get(pos + 4)?,
                components: *data.get(pos + 9)?,
            });
        }
        pos += 2 + length;
    }
}

fn split_alpha(decoded: &DynamicImage) -> (Vec<u8>, Option<Vec<u8>>) {
    let rgba = decoded.to_rgba8();
    let pixels = (rgba.width() * rgba.height()) as usize;
    let mut rgb = Vec::with_capacity(pixels * 3);
    let mut alpha = Vec::with_capacity(pixels);
    let mut translucent = false;
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        translucent |= a != u8::MAX;
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }
    (rgb, translucent.then_some(alpha))
}

pub(crate) fn flate_compress(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
