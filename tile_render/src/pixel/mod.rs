mod argb_pixel;
mod pixel_buffer;

pub use argb_pixel::*;
pub use pixel_buffer::*;
