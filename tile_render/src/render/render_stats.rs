use std::time::{Duration};

///
/// Measurements taken while rendering a frame with a `TilePipeline`
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderStats {
    /// The number of shapes in the scene
    pub shape_count: usize,

    /// The number of circles in each tile's work list, in tile index order
    pub work_list_sizes: Vec<usize>,

    /// The number of shapes that overlap more than one tile (only measured when trace logging is enabled)
    pub straddling_shapes: Option<usize>,

    /// Time spent building the work lists
    pub distribute_time: Duration,

    /// Time spent drawing the tiles
    pub rasterize_time: Duration,

    /// Time spent copying the tiles to the canvas
    pub composite_time: Duration,

    /// Time for the whole frame
    pub total_time: Duration,
}

impl RenderStats {
    ///
    /// The total number of circle copies made while distributing the work
    ///
    /// This is larger than the number of shapes when shapes sit across tile boundaries, and smaller when some
    /// shapes are entirely off the canvas.
    ///
    pub fn shape_copies(&self) -> usize {
        self.work_list_sizes.iter().sum()
    }

    ///
    /// The proportion of the scene assigned to each tile
    ///
    pub fn work_share(&self) -> Vec<f64> {
        if self.shape_count == 0 {
            return vec![0.0; self.work_list_sizes.len()];
        }

        self.work_list_sizes.iter()
            .map(|size| (*size as f64) / (self.shape_count as f64))
            .collect()
    }
}
