pub mod dimension;
pub mod font;
pub mod parsers;
pub mod text;

pub use dimension::PageSize;
pub use font::{FontFamily, FontRole};
pub use parsers::StyleParseError;
pub use text::TextAlign;
