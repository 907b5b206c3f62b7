pub mod geometry;

pub use geometry::{Point, Size};
