mod renderer;
mod circle_renderer;
mod tile_compositor;
mod render_stats;
mod tile_pipeline;
mod serial_render;

pub use renderer::*;
pub use circle_renderer::*;
pub use tile_compositor::*;
pub use render_stats::*;
pub use tile_pipeline::*;
pub use serial_render::*;
