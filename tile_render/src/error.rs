///
/// Errors that can occur while setting up the tile renderer or writing its output
///
/// Rendering itself can't fail: every error here is detected either when the pipeline is constructed
/// or when the finished canvas is written out.
///
#[derive(Debug, thiserror::Error)]
pub enum TileRenderError {
    #[error("At least one worker is required to build a tile grid")]
    NoWorkers,

    #[error("The canvas must be at least one pixel across")]
    EmptyCanvas,

    #[error("A canvas of {canvas_size} pixels is too small to split into a {grid_side}x{grid_side} grid of tiles")]
    TileTooSmall { canvas_size: usize, grid_side: usize },

    #[error("A canvas of {canvas_size} pixels is too large to address with 32-bit coordinates")]
    CanvasTooLarge { canvas_size: usize },

    #[error("Expected a {expected}x{expected} canvas, but was given one that is {width}x{height}")]
    CanvasSizeMismatch { expected: usize, width: usize, height: usize },

    #[error("Could not use the value '{value}' for the environment variable {name}")]
    InvalidEnvironment { name: &'static str, value: String },

    #[error("An image of {width}x{height} pixels is too large for this file format")]
    ImageTooLarge { width: usize, height: usize },

    #[cfg(feature="multithreading")]
    #[error("Could not start the worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[cfg(feature="render_png")]
    #[error("Could not encode PNG data: {0}")]
    Png(#[from] png::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
