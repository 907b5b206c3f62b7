mod common;

use common::pdf_assertions::{document_title, get_page_dimensions, image_xobjects, page_operators};
use common::{GeneratedPdf, TestResult, png_bytes, words};
use lopdf::content::Content;
use pdfkit::{
    DocumentWriter, FontFamily, FontMetrics, FontRole, LopdfCanvas, PageSize, TextAlign,
    WriterConfig,
};

fn lopdf_writer(config: &WriterConfig) -> DocumentWriter<LopdfCanvas> {
    let _ = env_logger::builder().is_test(true).try_init();
    let canvas = LopdfCanvas::new(config.page_size.size(), config.font_family)
        .with_title(config.title.clone());
    DocumentWriter::new(canvas, config).expect("lopdf writer")
}

fn finish(writer: DocumentWriter<LopdfCanvas>) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = writer.save()?.into_bytes();
    GeneratedPdf::from_bytes(bytes)
}

#[test]
fn test_empty_document_has_one_numbered_page() -> TestResult {
    let pdf = finish(lopdf_writer(&WriterConfig::default()))?;
    assert!(pdf.bytes.starts_with(b"%PDF-"));
    assert_pdf_page_count!(pdf, 1);
    assert_eq!(pdf.page_strings(1), vec!["Page 1"]);
    Ok(())
}

#[test]
fn test_headings_and_text_are_written() -> TestResult {
    let mut writer = lopdf_writer(&WriterConfig::default());
    writer.section("Introduction")?;
    writer.subsection("Scope")?;
    writer.draw_text("Plain body text.", TextAlign::Left)?;
    writer.draw_text("Centred line", TextAlign::Center)?;
    let pdf = finish(writer)?;

    assert_eq!(
        pdf.page_strings(1),
        vec!["1  Introduction", "1.1  Scope", "Plain body text.", "Centred line", "Page 1"]
    );
    assert_pdf_contains_text!(pdf, "Plain body text.");
    Ok(())
}

#[test]
fn test_all_three_faces_are_declared() -> TestResult {
    let pdf = finish(lopdf_writer(&WriterConfig::default()))?;
    assert_pdf_has_font!(pdf, "Times-Roman");
    assert_pdf_has_font!(pdf, "Times-Italic");
    assert_pdf_has_font!(pdf, "Times-Bold");

    let config = WriterConfig {
        font_family: FontFamily::Helvetica,
        ..WriterConfig::default()
    };
    let pdf = finish(lopdf_writer(&config))?;
    assert_pdf_has_font!(pdf, "Helvetica-Oblique");
    assert_pdf_has_font!(pdf, "Helvetica-Bold");
    Ok(())
}

#[test]
fn test_page_breaks_produce_pages() -> TestResult {
    let mut writer = lopdf_writer(&WriterConfig::default());
    for page in 1..=4 {
        writer.draw_text(&format!("Content of page {}", page), TextAlign::Left)?;
        if page < 4 {
            writer.page_break()?;
        }
    }
    let pdf = finish(writer)?;

    assert_pdf_page_count!(pdf, 4);
    for page in 1..=4u32 {
        let strings = pdf.page_strings(page);
        assert_eq!(strings.first().cloned(), Some(format!("Content of page {}", page)));
        assert_eq!(strings.last().cloned(), Some(format!("Page {}", page)));
    }
    Ok(())
}

#[test]
fn test_long_text_flows_over_pages() -> TestResult {
    let mut writer = lopdf_writer(&WriterConfig::default());
    writer.draw_text(&words("overflowing", 2000), TextAlign::Left)?;
    let finished = writer.save()?;
    let pages = finished.page_count() as usize;
    let pdf = GeneratedPdf::from_bytes(finished.into_bytes())?;

    assert!(pages > 1);
    assert_pdf_page_count!(pdf, pages);
    for page in 1..pages as u32 {
        // full pages hold 35 lines plus the footer
        assert_eq!(pdf.page_strings(page).len(), 36);
    }
    Ok(())
}

#[test]
fn test_typographic_text_is_written_as_winansi() -> TestResult {
    let mut writer = lopdf_writer(&WriterConfig::default());
    writer.draw_text("caf\u{e9} \u{2014} \u{201C}x\u{201D} \u{3b1}", TextAlign::Left)?;
    let pdf = finish(writer)?;

    let strings = pdf.page_string_bytes(1);
    assert_eq!(strings[0], b"caf\xE9 \x97 \x93x\x94 ?".to_vec());
    Ok(())
}

#[test]
fn test_wrapped_latin1_lines_fit_the_content_width() -> TestResult {
    let config = WriterConfig::default();
    let mut writer = lopdf_writer(&config);
    let max_width = writer.layout().content_size().width;
    let text = words("\u{c6}sthetic \u{c6}\u{c6}\u{c6}r\u{f8} \u{a9}\u{d7}\u{e9}t\u{e9}", 60);
    writer.draw_text(&text, TextAlign::Left)?;
    writer.draw_text("\u{c6}\u{c6}\u{c6} \u{2014} \u{c6}\u{c6}\u{c6}", TextAlign::Center)?;
    let pdf = finish(writer)?;

    let metrics = FontMetrics::for_face(FontFamily::Times, FontRole::Regular);
    let width = |raw: &[u8]| {
        raw.iter().map(|&b| metrics.code_width(b) as f32).sum::<f32>() * config.font_size / 1000.0
    };

    let strings = pdf.page_string_bytes(1);
    // wrapped lines, the centred line and the footer
    assert!(strings.len() > 3);
    let (body, rest) = strings.split_at(strings.len() - 2);
    for line in body {
        assert!(line.contains(&b' '));
        assert!(width(line) < max_width, "{:.1} >= {:.1}", width(line), max_width);
    }

    // the centred line is placed from its real width
    let centred = &rest[0];
    assert_eq!(centred, &b"\xC6\xC6\xC6 \x97 \xC6\xC6\xC6".to_vec());
    let ops = pdf_td_x_positions(&pdf, 1);
    let expected_x = 306.0 - width(centred) / 2.0;
    assert!(
        (ops[body.len()] - expected_x).abs() < 0.01,
        "centred at {} instead of {}",
        ops[body.len()],
        expected_x
    );
    Ok(())
}

/// x operands of every `Td` on a page, one per drawn string.
fn pdf_td_x_positions(pdf: &GeneratedPdf, page_num: u32) -> Vec<f32> {
    let page_id = pdf.doc.get_pages()[&page_num];
    let bytes = pdf.doc.get_page_content(page_id).expect("page content");
    Content::decode(&bytes)
        .expect("decodable content")
        .operations
        .iter()
        .filter(|op| op.operator == "Td")
        .filter_map(|op| op.operands.first()?.as_float().ok())
        .collect()
}

#[test]
fn test_translucent_image_gets_a_soft_mask() -> TestResult {
    let mut writer = lopdf_writer(&WriterConfig::default());
    let image = writer.load_image(&png_bytes(8, 4, 128))?;
    writer.add_image(&image, 80.0, 40.0)?;
    let pdf = finish(writer)?;

    assert_eq!(image_xobjects(&pdf.doc), vec![(8, 4, true)]);
    let ops = page_operators(&pdf.doc, 1);
    assert!(ops.windows(4).any(|w| w == ["q", "cm", "Do", "Q"]));
    Ok(())
}

#[test]
fn test_opaque_image_has_no_mask() -> TestResult {
    let mut writer = lopdf_writer(&WriterConfig::default());
    let image = writer.load_image(&png_bytes(3, 3, 255))?;
    writer.add_image(&image, 30.0, 30.0)?;
    writer.add_image(&image, 60.0, 60.0)?;
    let pdf = finish(writer)?;

    assert_eq!(image_xobjects(&pdf.doc), vec![(3, 3, false)]);
    assert_eq!(page_operators(&pdf.doc, 1).iter().filter(|op| *op == "Do").count(), 2);
    Ok(())
}

#[test]
fn test_page_size_and_title_are_recorded() -> TestResult {
    let config = WriterConfig {
        page_size: PageSize::A4,
        title: "Quarterly Report".into(),
        ..WriterConfig::default()
    };
    let mut writer = lopdf_writer(&config);
    writer.page_break()?;
    let pdf = finish(writer)?;

    for page in 1..=2 {
        let (width, height) = get_page_dimensions(&pdf.doc, page).expect("MediaBox");
        assert!((width - 595.28).abs() < 0.01);
        assert!((height - 841.89).abs() < 0.01);
    }
    assert_eq!(document_title(&pdf.doc).as_deref(), Some("Quarterly Report"));
    Ok(())
}

#[test]
fn test_undecodable_image_is_an_error() {
    let mut writer = lopdf_writer(&WriterConfig::default());
    assert!(writer.load_image(b"definitely not an image").is_err());
}
