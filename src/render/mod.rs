mod pixels;
mod text;

pub use pixels::{Pixel, PixelBuffer};
pub use text::TextRenderer;
