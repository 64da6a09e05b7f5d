use crate::error::*;
use crate::pixel::*;

use std::env;
use std::str::{FromStr};

/// Environment variable that overrides the canvas size
pub const CANVAS_SIZE_VAR: &str = "FLO_TILES_CANVAS_SIZE";

/// Environment variable that overrides the number of workers
pub const WORKERS_VAR: &str = "FLO_TILES_WORKERS";

///
/// Settings for a tile rendering pipeline
///
/// The canvas is always square. The number of tiles is derived from the worker count: the grid is the
/// largest square that fits in the available workers, so 4 workers produce a 2x2 grid and 5 to 8
/// workers do as well.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// The width and height of the canvas in pixels
    pub canvas_size: usize,

    /// The number of worker threads available for rendering
    pub worker_count: usize,

    /// The colour each tile is cleared to before rendering
    pub tile_background: ArgbPixel,

    /// The colour of any part of the canvas not covered by a tile
    pub canvas_background: ArgbPixel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            canvas_size:        1024,
            worker_count:       4,
            tile_background:    ArgbPixel::OPAQUE_BLACK,
            canvas_background:  ArgbPixel::TRANSPARENT,
        }
    }
}

///
/// Reads an optional numeric setting from the environment
///
fn env_setting<T: FromStr>(name: &'static str) -> Result<Option<T>, TileRenderError> {
    match env::var(name) {
        Ok(value)                           => value.trim().parse().map(Some).map_err(|_| TileRenderError::InvalidEnvironment { name, value }),
        Err(env::VarError::NotPresent)      => Ok(None),
        Err(env::VarError::NotUnicode(_))   => Err(TileRenderError::InvalidEnvironment { name, value: String::from("<not unicode>") }),
    }
}

impl RenderConfig {
    pub fn with_canvas_size(mut self, canvas_size: usize) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_tile_background(mut self, background: ArgbPixel) -> Self {
        self.tile_background = background;
        self
    }

    pub fn with_canvas_background(mut self, background: ArgbPixel) -> Self {
        self.canvas_background = background;
        self
    }

    ///
    /// Sets the worker count to the amount of parallelism the current machine supports
    ///
    pub fn with_available_workers(self) -> Self {
        let workers = std::thread::available_parallelism()
            .map(|count| count.get())
            .unwrap_or(self.worker_count);

        self.with_worker_count(workers)
    }

    ///
    /// Creates a configuration from the defaults, overridden by `FLO_TILES_CANVAS_SIZE` and `FLO_TILES_WORKERS` if they're set
    ///
    pub fn from_env() -> Result<Self, TileRenderError> {
        let mut config = RenderConfig::default();

        if let Some(canvas_size) = env_setting(CANVAS_SIZE_VAR)? {
            config.canvas_size = canvas_size;
        }

        if let Some(worker_count) = env_setting(WORKERS_VAR)? {
            config.worker_count = worker_count;
        }

        Ok(config)
    }

    ///
    /// The number of tiles along each side of the grid
    ///
    pub fn grid_side(&self) -> usize {
        let workers     = self.worker_count;
        let mut side    = (workers as f64).sqrt() as usize;

        // The float square root can round either way for large counts, and squaring can overflow near usize::MAX
        while side.checked_mul(side).map(|square| square > workers).unwrap_or(true)                 { side -= 1; }
        while (side+1).checked_mul(side+1).map(|square| square <= workers).unwrap_or(false)         { side += 1; }

        side
    }

    ///
    /// Checks that a tile grid can be built from this configuration
    ///
    pub fn validate(&self) -> Result<(), TileRenderError> {
        if self.worker_count == 0 {
            return Err(TileRenderError::NoWorkers);
        }

        if self.canvas_size == 0 {
            return Err(TileRenderError::EmptyCanvas);
        }

        // Circles are positioned with i32 coordinates and can extend a radius beyond the canvas
        if self.canvas_size > (i32::MAX / 2) as usize {
            return Err(TileRenderError::CanvasTooLarge { canvas_size: self.canvas_size });
        }

        let grid_side = self.grid_side();
        if self.canvas_size < grid_side {
            return Err(TileRenderError::TileTooSmall { canvas_size: self.canvas_size, grid_side });
        }

        Ok(())
    }
}
