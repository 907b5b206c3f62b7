use crate::parsers::parse_font_family;
use serde::{Deserialize, Deserializer, Serialize, de};

/// The logical font faces a document uses. Each role is bound to a concrete
/// face of the configured [`FontFamily`] by the canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontRole {
    #[default]
    Regular,
    Italic,
    Bold,
}

impl FontRole {
    pub const ALL: [FontRole; 3] = [FontRole::Regular, FontRole::Italic, FontRole::Bold];
}

/// One of the standard PDF font families, available in every viewer without embedding.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Times,
    Helvetica,
    Courier,
}

impl FontFamily {
    /// PostScript name of the base font used for `role`.
    pub fn base_font(&self, role: FontRole) -> &'static str {
        match (self, role) {
            (FontFamily::Times, FontRole::Regular) => "Times-Roman",
            (FontFamily::Times, FontRole::Italic) => "Times-Italic",
            (FontFamily::Times, FontRole::Bold) => "Times-Bold",
            (FontFamily::Helvetica, FontRole::Regular) => "Helvetica",
            (FontFamily::Helvetica, FontRole::Italic) => "Helvetica-Oblique",
            (FontFamily::Helvetica, FontRole::Bold) => "Helvetica-Bold",
            (FontFamily::Courier, FontRole::Regular) => "Courier",
            (FontFamily::Courier, FontRole::Italic) => "Courier-Oblique",
            (FontFamily::Courier, FontRole::Bold) => "Courier-Bold",
        }
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        parse_font_family(&name).map_err(de::Error::custom)
    }
}
