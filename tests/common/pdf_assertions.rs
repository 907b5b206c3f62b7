use lopdf::Document as LopdfDocument;
use lopdf::content::Content;
use std::collections::HashSet;

/// Raw WinAnsi bytes shown with `Tj` on a page (1-based), in drawing order.
pub fn page_string_bytes(doc: &LopdfDocument, page_num: u32) -> Vec<Vec<u8>> {
    let Some(page_id) = doc.get_pages().get(&page_num).copied() else {
        return Vec::new();
    };
    let Ok(bytes) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&bytes) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(|raw| raw.to_vec())
        .collect()
}

/// Strings shown with `Tj` on a page (1-based), in drawing order.
pub fn page_strings(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    page_string_bytes(doc, page_num)
        .into_iter()
        .map(|raw| raw.iter().map(|&b| b as char).collect())
        .collect()
}

/// Extract all text content from a PDF document, one line per string
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page_num in 1..=doc.get_pages().len() as u32 {
        for s in page_strings(doc, page_num) {
            text.push_str(&s);
            text.push('\n');
        }
    }
    text
}

/// Operators used in the content stream of a page
pub fn page_operators(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    let Some(page_id) = doc.get_pages().get(&page_num).copied() else {
        return Vec::new();
    };
    doc.get_page_content(page_id)
        .ok()
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations.into_iter().map(|op| op.operator).collect())
        .unwrap_or_default()
}

/// BaseFont names of every font object in the file
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = HashSet::new();
    for object in doc.objects.values() {
        let Ok(dict) = object.as_dict() else { continue };
        if dict.get(b"Type").and_then(|t| t.as_name()).ok() != Some(b"Font".as_slice()) {
            continue;
        }
        if let Ok(base_font) = dict.get(b"BaseFont").and_then(|b| b.as_name()) {
            fonts.insert(String::from_utf8_lossy(base_font).to_string());
        }
    }
    fonts.into_iter().collect()
}

/// Image XObject streams, as (width, height, has SMask)
pub fn image_xobjects(doc: &LopdfDocument) -> Vec<(i64, i64, bool)> {
    doc.objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream.dict.get(b"Subtype").and_then(|s| s.as_name()).ok() == Some(b"Image".as_slice())
        })
        .filter(|stream| {
            // soft masks are DeviceGray images themselves
            stream.dict.get(b"ColorSpace").and_then(|c| c.as_name()).ok()
                != Some(b"DeviceGray".as_slice())
        })
        .map(|stream| {
            let width = stream.dict.get(b"Width").and_then(|w| w.as_i64()).unwrap_or(0);
            let height = stream.dict.get(b"Height").and_then(|h| h.as_i64()).unwrap_or(0);
            (width, height, stream.dict.has(b"SMask"))
        })
        .collect()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = doc.get_pages().get(&page_num).copied()?;
    let page_dict = doc.get_dictionary(page_id).ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

/// Title string of the document information dictionary
pub fn document_title(doc: &LopdfDocument) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    let title = info.get(b"Title").ok()?.as_str().ok()?;
    Some(String::from_utf8_lossy(title).to_string())
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}
