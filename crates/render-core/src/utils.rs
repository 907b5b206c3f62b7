/// Unicode code points of the WinAnsi glyphs at `0x80..=0x9F`. The five
/// codes WinAnsi leaves undefined are absent.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80),
    ('\u{201A}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201E}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017E}', 0x9E),
    ('\u{0178}', 0x9F),
];

/// The WinAnsiEncoding code of `c`, or `None` if the encoding has no glyph
/// for it. Control characters have no glyph.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(unicode, _)| *unicode == c)
            .map(|(_, byte)| *byte),
    }
}

/// Encodes text for a WinAnsi (single byte) font. Characters without a
/// WinAnsi glyph are replaced with `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut lossy = false;
    let encoded = s
        .chars()
        .map(|c| {
            win_ansi_byte(c).unwrap_or_else(|| {
                lossy = true;
                b'?'
            })
        })
        .collect();
    if lossy {
        log::warn!("Text contains characters outside WinAnsi, replaced with '?': {}", s);
    }
    encoded
}
