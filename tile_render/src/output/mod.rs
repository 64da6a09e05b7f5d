mod tga_image;
#[cfg(feature="render_png")] mod png_image;

pub use tga_image::*;
#[cfg(feature="render_png")] pub use png_image::*;
