mod color;

pub use color::{srgb_to_linear, Rgb};
