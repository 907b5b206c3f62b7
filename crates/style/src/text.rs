use serde::{Deserialize, Deserializer, Serialize};

/// Horizontal placement of a wrapped line.
///
/// Only left and centred placement exist. Unrecognised names, `"right"`
/// included, fall back to [`TextAlign::Left`] rather than failing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

impl TextAlign {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "center" | "centre" => TextAlign::Center,
            _ => TextAlign::Left,
        }
    }
}

impl From<&str> for TextAlign {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl<'de> Deserialize<'de> for TextAlign {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
